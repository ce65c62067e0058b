//! Case and task save forms.
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::case::NewCase;
use crate::domain::task::{NewTask, TaskPriority, TaskStatus};
use crate::domain::types::{CaseId, ClientId, CourtId, LawyerId, NoteText, OpponentId};
use crate::forms::{FormError, require_bilingual};

/// Form data for opening a new case.
#[derive(Debug, Deserialize, Validate)]
pub struct CaseForm {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub client_id: i32,
    pub opponent_id: Option<i32>,
    pub partner_id: i32,
    pub court_id: Option<i32>,
    pub start_date: NaiveDate,
}

impl TryFrom<&CaseForm> for NewCase {
    type Error = FormError;

    fn try_from(form: &CaseForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let description = form
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(NoteText::new)
            .transpose()?
            .map(NoteText::into_inner);
        Ok(NewCase {
            name: require_bilingual(form.name_ar.as_deref(), form.name_en.as_deref())?,
            description,
            client_id: ClientId::new(form.client_id)?,
            opponent_id: form.opponent_id.map(OpponentId::new).transpose()?,
            partner_id: LawyerId::new(form.partner_id)?,
            court_id: form.court_id.map(CourtId::new).transpose()?,
            start_date: form.start_date,
        })
    }
}

/// Form data for creating a task on a case.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskForm {
    pub case_id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub parent_id: Option<i32>,
}

impl TryFrom<&TaskForm> for NewTask {
    type Error = FormError;

    fn try_from(form: &TaskForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let description = form
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(NoteText::new)
            .transpose()?
            .map(NoteText::into_inner);
        Ok(NewTask {
            case_id: CaseId::new(form.case_id)?,
            title: form.title.trim().to_string(),
            description,
            due_date: form.due_date,
            status: form.status,
            priority: form.priority,
            parent_id: form.parent_id.map(crate::domain::types::TaskId::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_form_requires_a_name_in_some_language() {
        let form = CaseForm {
            name_ar: None,
            name_en: Some("  ".to_string()),
            description: None,
            client_id: 3,
            opponent_id: None,
            partner_id: 5,
            court_id: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(NewCase::try_from(&form).is_err());
    }

    #[test]
    fn case_form_sanitizes_the_description() {
        let form = CaseForm {
            name_ar: Some("983 / 11ق".to_string()),
            name_en: None,
            description: Some("urgent <script>x()</script> filing".to_string()),
            client_id: 3,
            opponent_id: Some(2),
            partner_id: 5,
            court_id: Some(1),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let payload = NewCase::try_from(&form).unwrap();
        assert!(!payload.description.unwrap().contains("script"));
    }

    #[test]
    fn task_form_rejects_blank_titles_and_bad_ids() {
        let form = TaskForm {
            case_id: 0,
            title: "Review".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            parent_id: None,
        };
        assert!(NewTask::try_from(&form).is_err());
    }
}
