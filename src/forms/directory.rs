//! Opponent, lawyer, and court save forms.
use serde::Deserialize;
use validator::Validate;

use crate::domain::court::NewCourt;
use crate::domain::lawyer::NewLawyer;
use crate::domain::opponent::NewOpponent;
use crate::domain::types::{NoteText, OptionValueId};
use crate::forms::{FormError, require_bilingual};

/// Form data for registering a new opponent.
#[derive(Debug, Deserialize, Validate)]
pub struct OpponentForm {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub description: Option<String>,
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

impl TryFrom<&OpponentForm> for NewOpponent {
    type Error = FormError;

    fn try_from(form: &OpponentForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let sanitize = |value: Option<&str>| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(NoteText::new)
                .transpose()
                .map(|v| v.map(NoteText::into_inner))
        };
        Ok(NewOpponent {
            name: require_bilingual(form.name_ar.as_deref(), form.name_en.as_deref())?,
            is_active: form.is_active,
            description: sanitize(form.description.as_deref())?,
            notes: sanitize(form.notes.as_deref())?,
        })
    }
}

/// Form data for registering a new lawyer.
#[derive(Debug, Deserialize, Validate)]
pub struct LawyerForm {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub title_id: Option<i32>,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default = "default_active")]
    pub attendance_track: bool,
}

impl TryFrom<&LawyerForm> for NewLawyer {
    type Error = FormError;

    fn try_from(form: &LawyerForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewLawyer {
            name: require_bilingual(form.name_ar.as_deref(), form.name_en.as_deref())?,
            title_id: form.title_id.map(OptionValueId::new).transpose()?,
            email: form.email.clone(),
            attendance_track: form.attendance_track,
        })
    }
}

/// Form data for registering a new court.
#[derive(Debug, Deserialize, Validate)]
pub struct CourtForm {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl TryFrom<&CourtForm> for NewCourt {
    type Error = FormError;

    fn try_from(form: &CourtForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewCourt {
            name: require_bilingual(form.name_ar.as_deref(), form.name_en.as_deref())?,
            is_active: form.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_notes_are_sanitized() {
        let form = OpponentForm {
            name_ar: Some("الخصم".to_string()),
            name_en: None,
            is_active: true,
            description: None,
            notes: Some("<img src=x onerror=alert(1)>repeat litigant".to_string()),
        };
        let payload = NewOpponent::try_from(&form).unwrap();
        assert!(!payload.notes.unwrap().contains("onerror"));
    }

    #[test]
    fn court_requires_a_name() {
        let form = CourtForm {
            name_ar: None,
            name_en: None,
            is_active: true,
        };
        assert!(NewCourt::try_from(&form).is_err());
    }

    #[test]
    fn lawyer_title_id_must_be_positive() {
        let form = LawyerForm {
            name_ar: None,
            name_en: Some("Jane Smith".to_string()),
            title_id: Some(-1),
            email: None,
            attendance_track: true,
        };
        assert!(NewLawyer::try_from(&form).is_err());
    }
}
