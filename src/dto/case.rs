//! View models for the case detail and tasks screens.
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::case::Case;
use crate::domain::document::ClientDocument;
use crate::domain::hearing::Hearing;
use crate::domain::task::{Task, TaskPriority, TaskStatus};
use crate::domain::types::{CaseId, Language, TaskId};

/// One opponent row on the case detail screen.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CaseOpponentRow {
    pub name: String,
    pub in_case_name: Option<String>,
    pub capacity: String,
    pub capacity_note: Option<String>,
}

/// Data required to render the case detail screen. The aggregate already
/// carries resolved labels and related collections; the page adds the
/// language-resolved party names.
#[derive(Debug, Clone, Serialize)]
pub struct CasePage {
    pub case: Case,
    pub client_name: String,
    pub partner_name: String,
    pub opponents: Vec<CaseOpponentRow>,
    pub team_name: Option<String>,
    pub court_name: Option<String>,
    pub hearings: Vec<Hearing>,
    pub tasks: Vec<Task>,
    pub documents: Vec<ClientDocument>,
}

impl CasePage {
    pub fn new(case: Case, tasks: Vec<Task>, lang: Language) -> Self {
        let client_name = case.client.name.display(lang).to_string();
        let partner_name = case.partner.name.display(lang).to_string();
        let opponents = case
            .opponents
            .iter()
            .map(|o| CaseOpponentRow {
                name: o.opponent.name.display(lang).to_string(),
                in_case_name: o.in_case_name.clone(),
                capacity: o.capacity.clone(),
                capacity_note: o.capacity_note.clone(),
            })
            .collect();
        let team_name = case
            .team
            .as_ref()
            .map(|t| t.name.display(lang).to_string());
        let court_name = case
            .court
            .as_ref()
            .map(|c| c.name.display(lang).to_string());
        let hearings = case.hearings.clone();
        let documents = case.documents.clone();
        Self {
            case,
            client_name,
            partner_name,
            opponents,
            team_name,
            court_name,
            hearings,
            tasks,
            documents,
        }
    }
}

/// One row of the firm-wide task board.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub case_id: CaseId,
    pub case_number: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Subtasks are indented under their parent.
    pub is_subtask: bool,
}

/// Data required to render the tasks screen.
#[derive(Debug, Clone, Serialize)]
pub struct TasksPage {
    pub tasks: Vec<TaskRow>,
    pub overdue: usize,
}

impl TasksPage {
    /// Builds the board from the flat task list, resolving case numbers
    /// through the loaded aggregates.
    pub fn new(tasks: Vec<Task>, cases: &[Case], today: NaiveDate) -> Self {
        let case_number = |id: CaseId| {
            cases
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.number.clone())
                .unwrap_or_default()
        };
        let overdue = tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Completed && t.due_date < today)
            .count();
        let rows = tasks
            .into_iter()
            .map(|t| TaskRow {
                case_number: case_number(t.case_id),
                is_subtask: t.parent_id.is_some(),
                id: t.id,
                case_id: t.case_id,
                title: t.title,
                due_date: t.due_date,
                status: t.status,
                priority: t.priority,
            })
            .collect();
        Self {
            tasks: rows,
            overdue,
        }
    }
}
