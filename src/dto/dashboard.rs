//! View models for the dashboard screen.
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::case::Case;
use crate::domain::types::{CaseId, Language};

/// One case row of the dashboard table, fully resolved for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CaseSummary {
    pub id: CaseId,
    pub number: String,
    pub name: String,
    pub client_name: String,
    pub partner_name: String,
    pub status: String,
    pub importance: String,
    pub category: String,
    pub next_hearing_date: Option<NaiveDate>,
}

impl CaseSummary {
    pub fn new(case: &Case, lang: Language) -> Self {
        let next_hearing_date = case
            .hearings
            .iter()
            .filter_map(|h| h.next_hearing_date)
            .max();
        Self {
            id: case.id,
            number: case.number.clone(),
            name: case.name.display(lang).to_string(),
            client_name: case.client.name.display(lang).to_string(),
            partner_name: case.partner.name.display(lang).to_string(),
            status: case.status.clone(),
            importance: case.importance.clone(),
            category: case.category.clone(),
            next_hearing_date,
        }
    }
}

/// Headline counters shown above the case table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_cases: usize,
    pub open_tasks: usize,
    pub upcoming_hearings: usize,
}

/// Data required to render the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPage {
    pub cases: Vec<CaseSummary>,
    pub stats: DashboardStats,
    /// Search string echoed back to the view when present.
    pub search_query: Option<String>,
}
