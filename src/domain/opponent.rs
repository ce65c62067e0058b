use serde::{Deserialize, Serialize};

use crate::domain::types::{Bilingual, OpponentId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub id: OpponentId,
    pub name: Bilingual,
    /// Lower-cased form used for duplicate detection in the source system.
    pub normalized_name: Option<String>,
    pub is_active: bool,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// Opponent enriched with the cases it appears on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpponentDetail {
    pub opponent: Opponent,
    pub cases: Vec<crate::domain::case::Case>,
}

/// Payload for creating an opponent from a validated form.
#[derive(Clone, Debug, Deserialize)]
pub struct NewOpponent {
    pub name: Bilingual,
    pub is_active: bool,
    pub description: Option<String>,
    pub notes: Option<String>,
}
