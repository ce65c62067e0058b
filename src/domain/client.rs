use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Bilingual, ClientId, LawyerId, OptionValueId};

/// Flat client row as stored in the fixture table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub code: Option<String>,
    pub name: Bilingual,
    /// Name used on printed filings; always present in the source data.
    pub print_name: String,
    pub status: Option<String>,
    pub status_id: Option<OptionValueId>,
    pub cash_or_probono_id: Option<OptionValueId>,
    pub engaged_from: Option<NaiveDate>,
    pub engaged_until: Option<NaiveDate>,
    pub contact_lawyer_id: Option<LawyerId>,
    pub power_of_attorney_location_id: Option<OptionValueId>,
    pub documents_location_id: Option<OptionValueId>,
}

/// Contact person attached to a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub client_id: ClientId,
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub business_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub email: Option<String>,
}

/// Power-of-attorney record for a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerOfAttorney {
    pub id: i32,
    pub client_id: ClientId,
    pub principal_name: String,
    pub principal_capacity: Option<String>,
    pub year: Option<i32>,
    pub capacity: Option<String>,
    pub authorized_lawyers: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub inventory: bool,
    pub issuing_authority: Option<String>,
    pub poa_number: Option<i32>,
    pub serial: Option<String>,
    pub notes: Option<String>,
}

/// Client enriched with its related collections for the detail screen.
/// Recomputed on every lookup; the repository keeps no per-client index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientDetail {
    pub client: Client,
    pub contacts: Vec<Contact>,
    pub documents: Vec<crate::domain::document::ClientDocument>,
    pub power_of_attorneys: Vec<PowerOfAttorney>,
    pub cases: Vec<crate::domain::case::Case>,
}

/// Payload for creating a client from a validated form.
#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: Bilingual,
    pub print_name: String,
    pub code: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub engaged_from: Option<NaiveDate>,
}
