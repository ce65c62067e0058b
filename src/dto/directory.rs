//! View models for the opponent, lawyer, and court directories and their
//! detail screens. These three share the same shape: a searchable list plus
//! a detail page listing the entity's related cases.
use serde::Serialize;

use crate::domain::court::{Court, CourtDetail};
use crate::domain::lawyer::{Lawyer, LawyerDetail};
use crate::domain::opponent::{Opponent, OpponentDetail};
use crate::domain::types::{CourtId, Language, LawyerId, OpponentId};

use crate::dto::dashboard::CaseSummary;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OpponentRow {
    pub id: OpponentId,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpponentsPage {
    pub opponents: Vec<OpponentRow>,
    pub search_query: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpponentPage {
    pub opponent: Opponent,
    pub name: String,
    pub cases: Vec<CaseSummary>,
}

impl OpponentPage {
    pub fn new(detail: OpponentDetail, lang: Language) -> Self {
        let name = detail.opponent.name.display(lang).to_string();
        let cases = detail
            .cases
            .iter()
            .map(|c| CaseSummary::new(c, lang))
            .collect();
        Self {
            opponent: detail.opponent,
            name,
            cases,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LawyerRow {
    pub id: LawyerId,
    pub name: String,
    /// Resolved title label, `"N/A"` when the title id is unresolvable.
    pub title: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LawyersPage {
    pub lawyers: Vec<LawyerRow>,
    pub search_query: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LawyerPage {
    pub lawyer: Lawyer,
    pub name: String,
    pub title: String,
    pub cases: Vec<CaseSummary>,
}

impl LawyerPage {
    pub fn new(detail: LawyerDetail, title: String, lang: Language) -> Self {
        let name = detail.lawyer.name.display(lang).to_string();
        let cases = detail
            .cases
            .iter()
            .map(|c| CaseSummary::new(c, lang))
            .collect();
        Self {
            lawyer: detail.lawyer,
            name,
            title,
            cases,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourtRow {
    pub id: CourtId,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourtsPage {
    pub courts: Vec<CourtRow>,
    pub search_query: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourtPage {
    pub court: Court,
    pub name: String,
    pub cases: Vec<CaseSummary>,
}

impl CourtPage {
    pub fn new(detail: CourtDetail, lang: Language) -> Self {
        let name = detail.court.name.display(lang).to_string();
        let cases = detail
            .cases
            .iter()
            .map(|c| CaseSummary::new(c, lang))
            .collect();
        Self {
            court: detail.court,
            name,
            cases,
        }
    }
}
