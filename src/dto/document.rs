//! View models for the document register, detail, and form screens.
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::document::{ClientDocument, DocumentDetail, MovementStatus, StorageKind};
use crate::domain::types::{CaseId, ClientId, DocumentId, Language, MovementId};

/// One row of the document register.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DocumentRow {
    pub id: DocumentId,
    pub name: Option<String>,
    pub doc_type: Option<String>,
    pub storage: StorageKind,
    pub movement_card: bool,
    pub deposit_date: NaiveDate,
    pub case_number: Option<String>,
    pub responsible_lawyer: Option<String>,
}

impl From<ClientDocument> for DocumentRow {
    fn from(doc: ClientDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            doc_type: doc.doc_type,
            storage: doc.storage,
            movement_card: doc.movement_card,
            deposit_date: doc.deposit_date,
            case_number: doc.case_number,
            responsible_lawyer: doc.responsible_lawyer,
        }
    }
}

/// Data required to render the document register.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentsPage {
    pub documents: Vec<DocumentRow>,
    pub search_query: Option<String>,
}

/// One custody movement on the document card, newest first.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MovementRow {
    pub id: MovementId,
    pub date: NaiveDate,
    pub from_location: String,
    pub to_location: String,
    pub status: MovementStatus,
    pub lawyer_name: String,
    pub notes: Option<String>,
}

/// Data required to render the document detail screen.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPage {
    pub document: ClientDocument,
    pub client_name: Option<String>,
    pub case_number: Option<String>,
    pub movements: Vec<MovementRow>,
}

impl DocumentPage {
    pub fn new(detail: DocumentDetail, lang: Language) -> Self {
        let client_name = detail
            .client
            .as_ref()
            .map(|c| c.name.display(lang).to_string());
        let case_number = detail.case.as_ref().map(|c| c.number.clone());
        let movements = detail
            .movements
            .into_iter()
            .map(|entry| MovementRow {
                id: entry.movement.id,
                date: entry.movement.date,
                from_location: entry.movement.from_location,
                to_location: entry.movement.to_location,
                status: entry.movement.status,
                lawyer_name: entry
                    .lawyer
                    .map(|l| l.name.display(lang).to_string())
                    .unwrap_or_default(),
                notes: entry.movement.notes,
            })
            .collect();
        Self {
            document: detail.document,
            client_name,
            case_number,
            movements,
        }
    }
}

/// Choices offered by the new-document form.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFormPage {
    /// Clients the document can be filed under.
    pub clients: Vec<(ClientId, String)>,
    /// `(case id, case number)` pairs for the optional case link.
    pub cases: Vec<(CaseId, String)>,
}

impl DocumentFormPage {
    pub fn new(clients: &[Client], cases: &[crate::domain::case::Case], lang: Language) -> Self {
        Self {
            clients: clients
                .iter()
                .map(|c| (c.id, c.name.display(lang).to_string()))
                .collect(),
            cases: cases.iter().map(|c| (c.id, c.number.clone())).collect(),
        }
    }
}
