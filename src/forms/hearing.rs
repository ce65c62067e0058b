//! Hearing save form.
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::hearing::NewHearing;
use crate::domain::types::{CaseId, LawyerId, NoteText};
use crate::forms::FormError;

/// Form data for scheduling a hearing.
#[derive(Debug, Deserialize, Validate)]
pub struct HearingForm {
    pub case_id: i32,
    pub lawyer_id: Option<i32>,
    pub date: NaiveDate,
    pub procedure: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub notify_client: bool,
}

impl TryFrom<&HearingForm> for NewHearing {
    type Error = FormError;

    fn try_from(form: &HearingForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let notes = form
            .notes
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .map(NoteText::new)
            .transpose()?
            .map(NoteText::into_inner);
        Ok(NewHearing {
            case_id: CaseId::new(form.case_id)?,
            lawyer_id: form.lawyer_id.map(LawyerId::new).transpose()?,
            date: form.date,
            procedure: form
                .procedure
                .as_deref()
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string),
            notes,
            notify_client: form.notify_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_a_typed_payload() {
        let form = HearingForm {
            case_id: 1116,
            lawyer_id: Some(3),
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            procedure: Some("Review".to_string()),
            notes: Some("bring the expert report".to_string()),
            notify_client: true,
        };
        let payload = NewHearing::try_from(&form).unwrap();
        assert_eq!(payload.case_id.get(), 1116);
        assert!(payload.notify_client);
    }

    #[test]
    fn rejects_non_positive_case_ids() {
        let form = HearingForm {
            case_id: -5,
            lawyer_id: None,
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            procedure: None,
            notes: None,
            notify_client: false,
        };
        assert!(NewHearing::try_from(&form).is_err());
    }
}
