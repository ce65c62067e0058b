use serde::{Deserialize, Serialize};

use crate::domain::types::{Bilingual, LawyerId, OptionValueId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: LawyerId,
    pub name: Bilingual,
    /// Title resolved through the `lawyer.title` option set.
    pub title_id: Option<OptionValueId>,
    pub email: Option<String>,
    pub attendance_track: bool,
}

/// Lawyer enriched with the cases they work on (as partner or secondary).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LawyerDetail {
    pub lawyer: Lawyer,
    pub cases: Vec<crate::domain::case::Case>,
}

/// Payload for creating a lawyer from a validated form. Never persisted;
/// save services log the intent and return.
#[derive(Clone, Debug, Deserialize)]
pub struct NewLawyer {
    pub name: Bilingual,
    pub title_id: Option<OptionValueId>,
    pub email: Option<String>,
    pub attendance_track: bool,
}
