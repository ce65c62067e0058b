use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CaseId, HearingId, LawyerId};

/// Flat hearing row linked to a case and, optionally, an attending lawyer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hearing {
    pub id: HearingId,
    pub case_id: CaseId,
    pub lawyer_id: Option<LawyerId>,
    pub date: Option<NaiveDate>,
    pub procedure: Option<String>,
    pub court: Option<String>,
    pub circuit: Option<String>,
    pub decision: Option<String>,
    pub short_decision: Option<String>,
    pub next_hearing_date: Option<NaiveDate>,
    pub report: bool,
    pub notify_client: bool,
    pub attendee: Option<String>,
    pub evaluation: Option<String>,
    pub notes: Option<String>,
}

/// Hearing enriched with its resolved case and attending lawyer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HearingDetail {
    pub hearing: Hearing,
    pub case: Option<crate::domain::case::Case>,
    pub lawyer: Option<crate::domain::lawyer::Lawyer>,
}

/// Payload for scheduling a hearing from a validated form.
#[derive(Clone, Debug, Deserialize)]
pub struct NewHearing {
    pub case_id: CaseId,
    pub lawyer_id: Option<LawyerId>,
    pub date: NaiveDate,
    pub procedure: Option<String>,
    pub notes: Option<String>,
    pub notify_client: bool,
}
