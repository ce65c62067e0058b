//! Document and custody movement save forms.
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::document::{DocumentPayload, MovementStatus, NewMovement, StorageKind};
use crate::domain::types::{CaseId, ClientId, DocumentId, LawyerId, NoteText};
use crate::forms::FormError;

/// Form data for filing or updating a document.
#[derive(Debug, Deserialize, Validate)]
pub struct DocumentForm {
    /// Present when editing an existing document.
    pub id: Option<i32>,
    pub client_id: i32,
    pub case_id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    pub doc_type: Option<String>,
    pub storage: StorageKind,
    pub deposit_date: NaiveDate,
    pub description: Option<String>,
}

impl TryFrom<&DocumentForm> for DocumentPayload {
    type Error = FormError;

    fn try_from(form: &DocumentForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let description = form
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(NoteText::new)
            .transpose()?
            .map(NoteText::into_inner);
        Ok(DocumentPayload {
            id: form.id.map(DocumentId::new).transpose()?,
            client_id: ClientId::new(form.client_id)?,
            case_id: form.case_id.map(CaseId::new).transpose()?,
            name: form.name.trim().to_string(),
            doc_type: form
                .doc_type
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .map(str::to_string),
            storage: form.storage,
            deposit_date: form.deposit_date,
            description,
        })
    }
}

/// Form data for logging a custody movement.
#[derive(Debug, Deserialize, Validate)]
pub struct MovementForm {
    pub document_id: i32,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub from_location: String,
    #[validate(length(min = 1))]
    pub to_location: String,
    pub status: MovementStatus,
    pub lawyer_id: i32,
    pub notes: Option<String>,
}

impl TryFrom<&MovementForm> for NewMovement {
    type Error = FormError;

    fn try_from(form: &MovementForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let notes = form
            .notes
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .map(NoteText::new)
            .transpose()?
            .map(NoteText::into_inner);
        Ok(NewMovement {
            document_id: DocumentId::new(form.document_id)?,
            date: form.date,
            from_location: form.from_location.trim().to_string(),
            to_location: form.to_location.trim().to_string(),
            status: form.status,
            lawyer_id: LawyerId::new(form.lawyer_id)?,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_requires_both_locations() {
        let form = MovementForm {
            document_id: 3,
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            from_location: "".to_string(),
            to_location: "Archive Room".to_string(),
            status: MovementStatus::Archived,
            lawyer_id: 6,
            notes: None,
        };
        assert!(NewMovement::try_from(&form).is_err());
    }

    #[test]
    fn document_edit_keeps_its_id() {
        let form = DocumentForm {
            id: Some(3),
            client_id: 133,
            case_id: Some(573),
            name: "EGX Committee Decision Transcript".to_string(),
            doc_type: Some("Official Record".to_string()),
            storage: StorageKind::Physical,
            deposit_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            description: None,
        };
        let payload = DocumentPayload::try_from(&form).unwrap();
        assert_eq!(payload.id.map(DocumentId::get), Some(3));
    }
}
