use serde::{Deserialize, Serialize};

use crate::domain::types::{Bilingual, CourtId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: Bilingual,
    pub is_active: bool,
}

/// Court enriched with the cases heard before it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourtDetail {
    pub court: Court,
    pub cases: Vec<crate::domain::case::Case>,
}

/// Payload for creating a court from a validated form.
#[derive(Clone, Debug, Deserialize)]
pub struct NewCourt {
    pub name: Bilingual,
    pub is_active: bool,
}
