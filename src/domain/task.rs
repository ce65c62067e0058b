use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CaseId, TaskId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Workstream item attached to a case; sub-tasks reference a parent task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub case_id: CaseId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub parent_id: Option<TaskId>,
}

/// Payload for creating a task from a validated form.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTask {
    pub case_id: CaseId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub parent_id: Option<TaskId>,
}
