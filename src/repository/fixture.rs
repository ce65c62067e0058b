//! In-memory fixture tables and the denormalization layer over them.
//!
//! [`FixtureRepository`] is constructed from an explicit [`FixtureSet`]
//! (never a module-level singleton) and builds the [`Case`] aggregates once,
//! at construction. Detail accessors re-scan the tables on every call; at
//! fixture scale no incremental index is worth maintaining.
use std::sync::Arc;

use crate::domain::access::{PermissionGroup, Role, User, UserDetail};
use crate::domain::case::{Case, CaseOpponent, CaseRecord};
use crate::domain::client::{Client, ClientDetail, Contact, PowerOfAttorney};
use crate::domain::court::{Court, CourtDetail};
use crate::domain::document::{
    ClientDocument, DocumentDetail, DocumentMovement, MovementEntry,
};
use crate::domain::hearing::{Hearing, HearingDetail};
use crate::domain::lawyer::{Lawyer, LawyerDetail};
use crate::domain::opponent::{Opponent, OpponentDetail};
use crate::domain::options::OptionCatalog;
use crate::domain::task::Task;
use crate::domain::team::{Team, TeamDetail};
use crate::domain::types::{
    Bilingual, CaseId, ClientId, CourtId, DocumentId, HearingId, Language, LawyerId, OpponentId,
    RoleId, TeamId, UserId,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AccessReader, CaseListQuery, CaseReader, ClientReader, CourtReader, DocumentReader,
    HearingReader, LawyerReader, ListQuery, OpponentReader, OptionReader, TaskReader, TeamReader,
};

/// Flat tables standing in for the production database.
#[derive(Clone, Debug, Default)]
pub struct FixtureSet {
    pub cases: Vec<CaseRecord>,
    pub clients: Vec<Client>,
    pub contacts: Vec<Contact>,
    pub power_of_attorneys: Vec<PowerOfAttorney>,
    pub opponents: Vec<Opponent>,
    pub lawyers: Vec<Lawyer>,
    pub courts: Vec<Court>,
    pub teams: Vec<Team>,
    pub hearings: Vec<Hearing>,
    pub documents: Vec<ClientDocument>,
    pub movements: Vec<DocumentMovement>,
    pub tasks: Vec<Task>,
    pub roles: Vec<Role>,
    pub permission_groups: Vec<PermissionGroup>,
    pub users: Vec<User>,
    pub options: OptionCatalog,
}

impl FixtureSet {
    fn lawyer(&self, id: LawyerId) -> Option<&Lawyer> {
        self.lawyers.iter().find(|l| l.id == id)
    }

    /// Legacy rows reference secondary lawyers by name string in either
    /// language; the first exact match wins.
    fn lawyer_by_name(&self, name: &str) -> Option<&Lawyer> {
        self.lawyers.iter().find(|l| l.name.matches(name))
    }
}

/// Read-only repository over a fixture set, with case aggregates built once.
#[derive(Clone)]
pub struct FixtureRepository {
    set: Arc<FixtureSet>,
    cases: Arc<Vec<Case>>,
    lang: Language,
}

impl FixtureRepository {
    /// Builds the repository, resolving option labels in `lang` and dropping
    /// case rows whose client or partner does not resolve.
    pub fn new(set: FixtureSet, lang: Language) -> Self {
        let cases = set
            .cases
            .iter()
            .filter_map(|record| build_case(record, &set, lang))
            .collect();
        Self {
            set: Arc::new(set),
            cases: Arc::new(cases),
            lang,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    fn case(&self, id: CaseId) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }
}

/// Assembles one [`Case`] aggregate from a flat row, or `None` when the row
/// fails the data-quality bar (missing client or partner). The drop is
/// silent by policy; it is logged for operators only.
fn build_case(record: &CaseRecord, set: &FixtureSet, lang: Language) -> Option<Case> {
    let client = set.clients.iter().find(|c| c.id == record.client_id);
    let partner = record.partner_id.and_then(|id| set.lawyer(id));
    let (Some(client), Some(partner)) = (client, partner) else {
        log::debug!(
            "case {} dropped: client or partner reference does not resolve",
            record.id
        );
        return None;
    };

    let options = &set.options;
    let label = |id| options.label(id, lang);

    let opponents = record
        .opponent_id
        .and_then(|id| set.opponents.iter().find(|o| o.id == id))
        .map(|opponent| CaseOpponent {
            opponent: opponent.clone(),
            in_case_name: record.opponent_in_case_name.clone(),
            capacity: label(record.opponent_capacity_id),
            capacity_note: record.opponent_capacity_note.clone(),
        })
        .into_iter()
        .collect();

    let lawyer_a = record
        .lawyer_a
        .as_deref()
        .and_then(|name| set.lawyer_by_name(name))
        .cloned();
    let lawyer_b = record
        .lawyer_b
        .as_deref()
        .and_then(|name| set.lawyer_by_name(name))
        .cloned();

    let court = record
        .court_id
        .and_then(|id| set.courts.iter().find(|c| c.id == id))
        .cloned();
    let team = record
        .team_id
        .and_then(|id| set.teams.iter().find(|t| t.id == id))
        .cloned();

    let hearings = set
        .hearings
        .iter()
        .filter(|h| h.case_id == record.id)
        .cloned()
        .collect();
    let tasks = set
        .tasks
        .iter()
        .filter(|t| t.case_id == record.id)
        .cloned()
        .collect();
    let documents = set
        .documents
        .iter()
        .filter(|d| d.case_id == Some(record.id))
        .cloned()
        .collect();

    let number = record
        .name
        .ar
        .clone()
        .or_else(|| record.name.en.clone())
        .unwrap_or_default();

    Some(Case {
        id: record.id,
        number,
        name: record.name.clone(),
        description: record.description.clone(),
        legal_opinion: record.legal_opinion.clone(),

        client: client.clone(),
        client_in_case_name: record.client_in_case_name.clone(),
        client_capacity: label(record.client_capacity_id),
        client_capacity_note: record.client_capacity_note.clone(),
        opponents,
        partner: partner.clone(),
        lawyer_a,
        lawyer_b,
        team,

        court,
        destination: label(record.destination_id),
        circuit_name: label(record.circuit_name_id),
        circuit_serial: label(record.circuit_serial_id),
        circuit_shift: label(record.circuit_shift_id),
        circuit_secretary: label(record.circuit_secretary_id),
        court_floor: display_number(record.court_floor),
        court_hall: display_number(record.court_hall),

        degree: label(record.degree_id),
        status: label(record.status_id),
        importance: label(record.importance_id),
        category: label(record.category_id),
        current_status: record.current_status.clone(),
        evaluation: record.evaluation.clone(),
        start_date: record.start_date,
        end_date: record.end_date,

        client_type: label(record.client_type_id),
        allocated_budget: record.allocated_budget.clone(),
        asked_amount: record.asked_amount,
        judged_amount: record.judged_amount,
        financial_provision: record.financial_provision.clone(),
        fee_letter: record.fee_letter,
        contract_id: record.contract_id,
        engagement_letter_no: record.engagement_letter_no.clone(),

        hearings,
        tasks,
        documents,

        shelf: record.shelf.clone(),
        branch: record.branch.clone(),
        notes_1: record.notes_1.clone(),
        notes_2: record.notes_2.clone(),
        selected: record.selected,
    })
}

fn display_number(value: Option<i32>) -> String {
    value.map_or_else(
        || crate::domain::options::UNRESOLVED_LABEL.to_string(),
        |v| v.to_string(),
    )
}

fn matches_search(haystacks: &[Option<&str>], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .flatten()
        .any(|h| h.to_lowercase().contains(&needle))
}

fn bilingual_matches(name: &Bilingual, needle: &str) -> bool {
    matches_search(&[name.ar.as_deref(), name.en.as_deref()], needle)
}

impl CaseReader for FixtureRepository {
    fn get_case_by_id(&self, id: CaseId) -> RepositoryResult<Option<Case>> {
        Ok(self.case(id).cloned())
    }

    fn list_cases(&self, query: CaseListQuery) -> RepositoryResult<Vec<Case>> {
        let cases = self
            .cases
            .iter()
            .filter(|c| {
                if let Some(term) = &query.search {
                    let hit = bilingual_matches(&c.name, term)
                        || c.number.to_lowercase().contains(&term.to_lowercase())
                        || bilingual_matches(&c.client.name, term);
                    if !hit {
                        return false;
                    }
                }
                let record = self.set.cases.iter().find(|r| r.id == c.id);
                if let Some(status_id) = query.status_id
                    && record.is_none_or(|r| r.status_id != Some(status_id))
                {
                    return false;
                }
                if let Some(importance_id) = query.importance_id
                    && record.is_none_or(|r| r.importance_id != Some(importance_id))
                {
                    return false;
                }
                true
            })
            .cloned()
            .collect();
        Ok(cases)
    }
}

impl ClientReader for FixtureRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<ClientDetail>> {
        let Some(client) = self.set.clients.iter().find(|c| c.id == id) else {
            return Ok(None);
        };
        Ok(Some(ClientDetail {
            client: client.clone(),
            contacts: self
                .set
                .contacts
                .iter()
                .filter(|c| c.client_id == id)
                .cloned()
                .collect(),
            documents: self
                .set
                .documents
                .iter()
                .filter(|d| d.client_id == id)
                .cloned()
                .collect(),
            power_of_attorneys: self
                .set
                .power_of_attorneys
                .iter()
                .filter(|p| p.client_id == id)
                .cloned()
                .collect(),
            cases: self
                .cases
                .iter()
                .filter(|c| c.client.id == id)
                .cloned()
                .collect(),
        }))
    }

    fn list_clients(&self, query: ListQuery) -> RepositoryResult<Vec<Client>> {
        Ok(self
            .set
            .clients
            .iter()
            .filter(|c| match &query.search {
                Some(term) => {
                    bilingual_matches(&c.name, term)
                        || matches_search(&[c.code.as_deref(), Some(&c.print_name)], term)
                }
                None => true,
            })
            .cloned()
            .collect())
    }
}

impl OpponentReader for FixtureRepository {
    fn get_opponent_by_id(&self, id: OpponentId) -> RepositoryResult<Option<OpponentDetail>> {
        let Some(opponent) = self.set.opponents.iter().find(|o| o.id == id) else {
            return Ok(None);
        };
        Ok(Some(OpponentDetail {
            opponent: opponent.clone(),
            cases: self
                .cases
                .iter()
                .filter(|c| c.opponents.iter().any(|o| o.opponent.id == id))
                .cloned()
                .collect(),
        }))
    }

    fn list_opponents(&self, query: ListQuery) -> RepositoryResult<Vec<Opponent>> {
        Ok(self
            .set
            .opponents
            .iter()
            .filter(|o| !query.active_only || o.is_active)
            .filter(|o| match &query.search {
                Some(term) => {
                    bilingual_matches(&o.name, term)
                        || matches_search(&[o.normalized_name.as_deref()], term)
                }
                None => true,
            })
            .cloned()
            .collect())
    }
}

impl LawyerReader for FixtureRepository {
    fn get_lawyer_by_id(&self, id: LawyerId) -> RepositoryResult<Option<LawyerDetail>> {
        let Some(lawyer) = self.set.lawyer(id) else {
            return Ok(None);
        };
        Ok(Some(LawyerDetail {
            lawyer: lawyer.clone(),
            cases: self
                .cases
                .iter()
                .filter(|c| {
                    c.partner.id == id
                        || c.lawyer_a.as_ref().is_some_and(|l| l.id == id)
                        || c.lawyer_b.as_ref().is_some_and(|l| l.id == id)
                })
                .cloned()
                .collect(),
        }))
    }

    fn list_lawyers(&self, query: ListQuery) -> RepositoryResult<Vec<Lawyer>> {
        Ok(self
            .set
            .lawyers
            .iter()
            .filter(|l| match &query.search {
                Some(term) => bilingual_matches(&l.name, term),
                None => true,
            })
            .cloned()
            .collect())
    }
}

impl CourtReader for FixtureRepository {
    fn get_court_by_id(&self, id: CourtId) -> RepositoryResult<Option<CourtDetail>> {
        let Some(court) = self.set.courts.iter().find(|c| c.id == id) else {
            return Ok(None);
        };
        Ok(Some(CourtDetail {
            court: court.clone(),
            cases: self
                .cases
                .iter()
                .filter(|c| c.court.as_ref().is_some_and(|ct| ct.id == id))
                .cloned()
                .collect(),
        }))
    }

    fn list_courts(&self, query: ListQuery) -> RepositoryResult<Vec<Court>> {
        Ok(self
            .set
            .courts
            .iter()
            .filter(|c| !query.active_only || c.is_active)
            .filter(|c| match &query.search {
                Some(term) => bilingual_matches(&c.name, term),
                None => true,
            })
            .cloned()
            .collect())
    }
}

impl HearingReader for FixtureRepository {
    fn get_hearing_by_id(&self, id: HearingId) -> RepositoryResult<Option<HearingDetail>> {
        let Some(hearing) = self.set.hearings.iter().find(|h| h.id == id) else {
            return Ok(None);
        };
        Ok(Some(HearingDetail {
            hearing: hearing.clone(),
            case: self.case(hearing.case_id).cloned(),
            lawyer: hearing.lawyer_id.and_then(|id| self.set.lawyer(id)).cloned(),
        }))
    }

    fn list_hearings(&self) -> RepositoryResult<Vec<Hearing>> {
        Ok(self.set.hearings.clone())
    }
}

impl DocumentReader for FixtureRepository {
    fn get_document_by_id(&self, id: DocumentId) -> RepositoryResult<Option<DocumentDetail>> {
        let Some(document) = self.set.documents.iter().find(|d| d.id == id) else {
            return Ok(None);
        };

        let mut movements: Vec<MovementEntry> = self
            .set
            .movements
            .iter()
            .filter(|m| m.document_id == id)
            .map(|movement| MovementEntry {
                movement: movement.clone(),
                lawyer: self.set.lawyer(movement.lawyer_id).cloned(),
            })
            .collect();
        // Most recent custody transfer first.
        movements.sort_by(|a, b| b.movement.date.cmp(&a.movement.date));

        Ok(Some(DocumentDetail {
            document: document.clone(),
            client: self
                .set
                .clients
                .iter()
                .find(|c| c.id == document.client_id)
                .cloned(),
            case: document.case_id.and_then(|id| self.case(id)).cloned(),
            movements,
        }))
    }

    fn list_documents(&self, query: ListQuery) -> RepositoryResult<Vec<ClientDocument>> {
        Ok(self
            .set
            .documents
            .iter()
            .filter(|d| match &query.search {
                Some(term) => matches_search(
                    &[
                        d.name.as_deref(),
                        d.doc_type.as_deref(),
                        d.case_number.as_deref(),
                    ],
                    term,
                ),
                None => true,
            })
            .cloned()
            .collect())
    }
}

impl TaskReader for FixtureRepository {
    fn list_tasks(&self) -> RepositoryResult<Vec<Task>> {
        Ok(self.set.tasks.clone())
    }

    fn list_tasks_for_case(&self, case_id: CaseId) -> RepositoryResult<Vec<Task>> {
        Ok(self
            .set
            .tasks
            .iter()
            .filter(|t| t.case_id == case_id)
            .cloned()
            .collect())
    }
}

impl TeamReader for FixtureRepository {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<TeamDetail>> {
        let Some(team) = self.set.teams.iter().find(|t| t.id == id) else {
            return Ok(None);
        };
        Ok(Some(TeamDetail {
            team: team.clone(),
            members: self
                .set
                .lawyers
                .iter()
                .filter(|l| team.lawyer_ids.contains(&l.id))
                .cloned()
                .collect(),
        }))
    }

    fn list_teams(&self) -> RepositoryResult<Vec<Team>> {
        Ok(self.set.teams.clone())
    }
}

impl AccessReader for FixtureRepository {
    fn get_role_by_id(&self, id: RoleId) -> RepositoryResult<Option<Role>> {
        Ok(self.set.roles.iter().find(|r| r.id == id).cloned())
    }

    fn list_roles(&self) -> RepositoryResult<Vec<Role>> {
        Ok(self.set.roles.clone())
    }

    fn permission_groups(&self) -> RepositoryResult<Vec<PermissionGroup>> {
        Ok(self.set.permission_groups.clone())
    }

    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<UserDetail>> {
        let Some(user) = self.set.users.iter().find(|u| u.id == id) else {
            return Ok(None);
        };
        Ok(Some(UserDetail {
            role: self
                .set
                .roles
                .iter()
                .find(|r| r.id == user.role_id)
                .cloned(),
            user: user.clone(),
        }))
    }

    fn list_users(&self) -> RepositoryResult<Vec<UserDetail>> {
        Ok(self
            .set
            .users
            .iter()
            .map(|user| UserDetail {
                role: self
                    .set
                    .roles
                    .iter()
                    .find(|r| r.id == user.role_id)
                    .cloned(),
                user: user.clone(),
            })
            .collect())
    }
}

impl OptionReader for FixtureRepository {
    fn option_catalog(&self) -> RepositoryResult<OptionCatalog> {
        Ok(self.set.options.clone())
    }
}
