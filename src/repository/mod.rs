//! Read-side traits over the in-memory fixture tables.
//!
//! The console is read-only at the data layer: every "save" surface logs
//! intent in the service layer instead of writing, so the traits here are
//! readers only. The fixture implementation lives in [`fixture`], the seed
//! dataset in [`seed`], and a mockall-backed mock in [`mock`].
use crate::domain::access::{PermissionGroup, Role, UserDetail};
use crate::domain::case::Case;
use crate::domain::client::{Client, ClientDetail};
use crate::domain::court::{Court, CourtDetail};
use crate::domain::document::{ClientDocument, DocumentDetail};
use crate::domain::hearing::{Hearing, HearingDetail};
use crate::domain::lawyer::{Lawyer, LawyerDetail};
use crate::domain::opponent::{Opponent, OpponentDetail};
use crate::domain::options::OptionCatalog;
use crate::domain::task::Task;
use crate::domain::team::{Team, TeamDetail};
use crate::domain::types::{
    CaseId, ClientId, CourtId, DocumentId, HearingId, LawyerId, OpponentId, OptionValueId, RoleId,
    TeamId, UserId,
};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod fixture;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod seed;

/// Filters applied by the case list and dashboard screens.
#[derive(Debug, Clone, Default)]
pub struct CaseListQuery {
    /// Case-insensitive substring matched against number and both names.
    pub search: Option<String>,
    pub status_id: Option<OptionValueId>,
    pub importance_id: Option<OptionValueId>,
}

impl CaseListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status_id: OptionValueId) -> Self {
        self.status_id = Some(status_id);
        self
    }

    pub fn importance(mut self, importance_id: OptionValueId) -> Self {
        self.importance_id = Some(importance_id);
        self
    }
}

/// Filters applied by flat entity list screens.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    /// When set, restrict to active records (opponents, courts, users).
    pub active_only: bool,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }
}

pub trait CaseReader {
    fn get_case_by_id(&self, id: CaseId) -> RepositoryResult<Option<Case>>;
    fn list_cases(&self, query: CaseListQuery) -> RepositoryResult<Vec<Case>>;
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<ClientDetail>>;
    fn list_clients(&self, query: ListQuery) -> RepositoryResult<Vec<Client>>;
}

pub trait OpponentReader {
    fn get_opponent_by_id(&self, id: OpponentId) -> RepositoryResult<Option<OpponentDetail>>;
    fn list_opponents(&self, query: ListQuery) -> RepositoryResult<Vec<Opponent>>;
}

pub trait LawyerReader {
    fn get_lawyer_by_id(&self, id: LawyerId) -> RepositoryResult<Option<LawyerDetail>>;
    fn list_lawyers(&self, query: ListQuery) -> RepositoryResult<Vec<Lawyer>>;
}

pub trait CourtReader {
    fn get_court_by_id(&self, id: CourtId) -> RepositoryResult<Option<CourtDetail>>;
    fn list_courts(&self, query: ListQuery) -> RepositoryResult<Vec<Court>>;
}

pub trait HearingReader {
    fn get_hearing_by_id(&self, id: HearingId) -> RepositoryResult<Option<HearingDetail>>;
    fn list_hearings(&self) -> RepositoryResult<Vec<Hearing>>;
}

pub trait DocumentReader {
    fn get_document_by_id(&self, id: DocumentId) -> RepositoryResult<Option<DocumentDetail>>;
    fn list_documents(&self, query: ListQuery) -> RepositoryResult<Vec<ClientDocument>>;
}

pub trait TaskReader {
    fn list_tasks(&self) -> RepositoryResult<Vec<Task>>;
    fn list_tasks_for_case(&self, case_id: CaseId) -> RepositoryResult<Vec<Task>>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<TeamDetail>>;
    fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
}

/// Roles, permission groups, and user accounts.
pub trait AccessReader {
    fn get_role_by_id(&self, id: RoleId) -> RepositoryResult<Option<Role>>;
    fn list_roles(&self) -> RepositoryResult<Vec<Role>>;
    fn permission_groups(&self) -> RepositoryResult<Vec<PermissionGroup>>;
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<UserDetail>>;
    fn list_users(&self) -> RepositoryResult<Vec<UserDetail>>;
}

pub trait OptionReader {
    fn option_catalog(&self) -> RepositoryResult<OptionCatalog>;
}
