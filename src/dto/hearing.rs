//! View models for the hearings roll and hearing detail screens.
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::case::Case;
use crate::domain::hearing::{Hearing, HearingDetail};
use crate::domain::types::{CaseId, HearingId, Language};

/// One row of the hearings roll, sorted by session date.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HearingRow {
    pub id: HearingId,
    pub case_id: CaseId,
    pub case_number: String,
    pub date: Option<NaiveDate>,
    pub procedure: Option<String>,
    pub court: Option<String>,
    pub decision: Option<String>,
    pub next_hearing_date: Option<NaiveDate>,
}

/// Data required to render the hearings roll.
#[derive(Debug, Clone, Serialize)]
pub struct HearingsPage {
    pub hearings: Vec<HearingRow>,
}

impl HearingsPage {
    /// Builds the roll from the flat hearing list, newest session first.
    pub fn new(mut hearings: Vec<Hearing>, cases: &[Case]) -> Self {
        hearings.sort_by(|a, b| b.date.cmp(&a.date));
        let case_number = |id: CaseId| {
            cases
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.number.clone())
                .unwrap_or_default()
        };
        let rows = hearings
            .into_iter()
            .map(|h| HearingRow {
                case_number: case_number(h.case_id),
                id: h.id,
                case_id: h.case_id,
                date: h.date,
                procedure: h.procedure,
                court: h.court,
                decision: h.decision,
                next_hearing_date: h.next_hearing_date,
            })
            .collect();
        Self { hearings: rows }
    }
}

/// Data required to render the hearing detail screen.
#[derive(Debug, Clone, Serialize)]
pub struct HearingPage {
    pub hearing: Hearing,
    pub case_number: Option<String>,
    pub case_name: Option<String>,
    pub lawyer_name: Option<String>,
}

impl HearingPage {
    pub fn new(detail: HearingDetail, lang: Language) -> Self {
        let case_number = detail.case.as_ref().map(|c| c.number.clone());
        let case_name = detail
            .case
            .as_ref()
            .map(|c| c.name.display(lang).to_string());
        let lawyer_name = detail
            .lawyer
            .as_ref()
            .map(|l| l.name.display(lang).to_string());
        Self {
            hearing: detail.hearing,
            case_number,
            case_name,
            lawyer_name,
        }
    }
}

/// Choices offered by the new-hearing form.
#[derive(Debug, Clone, Serialize)]
pub struct HearingFormPage {
    /// `(case id, case number)` pairs for the case selector.
    pub cases: Vec<(CaseId, String)>,
}
