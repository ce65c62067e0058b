use serde::{Deserialize, Serialize};

use crate::domain::lawyer::Lawyer;
use crate::domain::types::{Bilingual, LawyerId, TeamId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: Bilingual,
    pub description: Bilingual,
    pub lawyer_ids: Vec<LawyerId>,
}

/// Team enriched with its resolved member lawyers for the detail screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamDetail {
    pub team: Team,
    pub members: Vec<Lawyer>,
}

/// Payload produced by the team form; covers both create ([`TeamId`] absent)
/// and update.
#[derive(Clone, Debug, Deserialize)]
pub struct TeamPayload {
    pub id: Option<TeamId>,
    pub name: Bilingual,
    pub description: Bilingual,
    pub lawyer_ids: Vec<LawyerId>,
}
