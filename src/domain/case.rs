//! Case (matter) records and the denormalized aggregate the console renders.
//!
//! [`CaseRecord`] mirrors the flat `cases` table: foreign keys, coded option
//! references, and legacy free-text columns. [`Case`] is the nested view
//! model assembled by the repository at load time; option references arrive
//! already resolved to display labels.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::court::Court;
use crate::domain::document::ClientDocument;
use crate::domain::hearing::Hearing;
use crate::domain::lawyer::Lawyer;
use crate::domain::opponent::Opponent;
use crate::domain::task::Task;
use crate::domain::team::Team;
use crate::domain::types::{
    Bilingual, CaseId, ClientId, CourtId, LawyerId, OpponentId, OptionValueId, TeamId,
};

/// Flat case row as stored in the fixture table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    pub client_id: ClientId,
    /// Partner responsible for the matter. Rows without a resolvable partner
    /// are dropped during aggregation.
    pub partner_id: Option<LawyerId>,
    /// Secondary lawyers referenced by legacy name strings, not ids.
    pub lawyer_a: Option<String>,
    pub lawyer_b: Option<String>,
    pub opponent_id: Option<OpponentId>,
    pub court_id: Option<CourtId>,
    pub team_id: Option<TeamId>,
    /// The Arabic matter name doubles as the court case number.
    pub name: Bilingual,
    pub description: Option<String>,
    pub status_id: Option<OptionValueId>,
    pub category_id: Option<OptionValueId>,
    pub importance_id: Option<OptionValueId>,
    pub degree_id: Option<OptionValueId>,
    pub destination_id: Option<OptionValueId>,
    pub circuit_name_id: Option<OptionValueId>,
    pub circuit_serial_id: Option<OptionValueId>,
    pub circuit_shift_id: Option<OptionValueId>,
    pub circuit_secretary_id: Option<OptionValueId>,
    pub court_floor: Option<i32>,
    pub court_hall: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub asked_amount: Option<i64>,
    pub judged_amount: Option<i64>,
    pub allocated_budget: Option<String>,
    pub financial_provision: Option<String>,
    pub fee_letter: Option<i64>,
    pub contract_id: Option<i32>,
    pub engagement_letter_no: Option<String>,
    pub legal_opinion: Option<String>,
    pub current_status: Option<String>,
    pub evaluation: Option<String>,
    pub client_in_case_name: Option<String>,
    pub client_capacity_id: Option<OptionValueId>,
    pub client_capacity_note: Option<String>,
    pub opponent_in_case_name: Option<String>,
    pub opponent_capacity_id: Option<OptionValueId>,
    pub opponent_capacity_note: Option<String>,
    pub client_type_id: Option<OptionValueId>,
    pub shelf: Option<String>,
    pub branch: Option<String>,
    pub notes_1: Option<String>,
    pub notes_2: Option<String>,
    pub selected: bool,
}

/// An opponent as it appears on a specific case, with its in-case capacity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseOpponent {
    pub opponent: Opponent,
    pub in_case_name: Option<String>,
    /// Resolved capacity label, `"N/A"` when the capacity id is unresolvable.
    pub capacity: String,
    pub capacity_note: Option<String>,
}

/// The denormalized case aggregate used throughout the console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    /// Court case number (the Arabic matter name in the source data).
    pub number: String,
    pub name: Bilingual,
    pub description: Option<String>,
    pub legal_opinion: Option<String>,

    // Parties
    pub client: Client,
    pub client_in_case_name: Option<String>,
    pub client_capacity: String,
    pub client_capacity_note: Option<String>,
    pub opponents: Vec<CaseOpponent>,
    pub partner: Lawyer,
    pub lawyer_a: Option<Lawyer>,
    pub lawyer_b: Option<Lawyer>,
    pub team: Option<Team>,

    // Court and circuit
    pub court: Option<Court>,
    pub destination: String,
    pub circuit_name: String,
    pub circuit_serial: String,
    pub circuit_shift: String,
    pub circuit_secretary: String,
    pub court_floor: String,
    pub court_hall: String,

    // Status and progress
    pub degree: String,
    pub status: String,
    pub importance: String,
    pub category: String,
    pub current_status: Option<String>,
    pub evaluation: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    // Financials
    pub client_type: String,
    pub allocated_budget: Option<String>,
    pub asked_amount: Option<i64>,
    pub judged_amount: Option<i64>,
    pub financial_provision: Option<String>,
    pub fee_letter: Option<i64>,
    pub contract_id: Option<i32>,
    pub engagement_letter_no: Option<String>,

    // Derived collections
    pub hearings: Vec<Hearing>,
    pub tasks: Vec<Task>,
    pub documents: Vec<ClientDocument>,

    // Meta
    pub shelf: Option<String>,
    pub branch: Option<String>,
    pub notes_1: Option<String>,
    pub notes_2: Option<String>,
    pub selected: bool,
}

/// Payload for opening a case from a validated form.
#[derive(Clone, Debug, Deserialize)]
pub struct NewCase {
    pub name: Bilingual,
    pub description: Option<String>,
    pub client_id: ClientId,
    pub opponent_id: Option<OpponentId>,
    pub partner_id: LawyerId,
    pub court_id: Option<CourtId>,
    pub start_date: NaiveDate,
}
