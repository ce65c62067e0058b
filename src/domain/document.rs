use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CaseId, ClientId, DocumentId, LawyerId, MovementId, TypeConstraintError};

/// Where the physical/digital copy of a document lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Physical,
    Digital,
    Both,
}

impl std::str::FromStr for StorageKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physical" => Ok(StorageKind::Physical),
            "digital" => Ok(StorageKind::Digital),
            "both" => Ok(StorageKind::Both),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown storage kind: {other}"
            ))),
        }
    }
}

/// Custody state recorded on each movement of a physical document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementStatus {
    CheckedOut,
    CheckedIn,
    Archived,
    Transferred,
}

/// Flat document row from the client-documents fixture table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientDocument {
    pub id: DocumentId,
    pub client_id: ClientId,
    pub case_id: Option<CaseId>,
    pub name: Option<String>,
    pub doc_type: Option<String>,
    pub storage: StorageKind,
    pub mfiles_uploaded: bool,
    pub responsible_lawyer: Option<String>,
    pub movement_card: bool,
    pub description: Option<String>,
    pub deposit_date: NaiveDate,
    pub document_date: Option<NaiveDate>,
    pub case_number: Option<String>,
    pub pages_count: Option<String>,
    pub notes: Option<String>,
}

/// One custody transfer of a document between locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentMovement {
    pub id: MovementId,
    pub document_id: DocumentId,
    pub date: NaiveDate,
    pub from_location: String,
    pub to_location: String,
    pub status: MovementStatus,
    pub notes: Option<String>,
    pub lawyer_id: LawyerId,
}

/// One movement with its lawyer resolved, for the document detail screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementEntry {
    pub movement: DocumentMovement,
    pub lawyer: Option<crate::domain::lawyer::Lawyer>,
}

/// Document enriched with its client, case, and movement history.
/// Movements are sorted strictly by date descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetail {
    pub document: ClientDocument,
    pub client: Option<crate::domain::client::Client>,
    pub case: Option<crate::domain::case::Case>,
    pub movements: Vec<MovementEntry>,
}

/// Payload for registering a document from a validated form. Covers both the
/// upload screen and the edit screen (id present on edit).
#[derive(Clone, Debug, Deserialize)]
pub struct DocumentPayload {
    pub id: Option<DocumentId>,
    pub client_id: ClientId,
    pub case_id: Option<CaseId>,
    pub name: String,
    pub doc_type: Option<String>,
    pub storage: StorageKind,
    pub deposit_date: NaiveDate,
    pub description: Option<String>,
}

/// Payload for recording a document movement from a validated form.
#[derive(Clone, Debug, Deserialize)]
pub struct NewMovement {
    pub document_id: DocumentId,
    pub date: NaiveDate,
    pub from_location: String,
    pub to_location: String,
    pub status: MovementStatus,
    pub lawyer_id: LawyerId,
    pub notes: Option<String>,
}
