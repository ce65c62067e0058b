//! Case and task services.
use chrono::NaiveDate;

use crate::domain::case::{Case, NewCase};
use crate::domain::task::{NewTask, Task};
use crate::dto::case::{CasePage, TasksPage};
use crate::dto::dashboard::{CaseSummary, DashboardPage, DashboardStats};
use crate::domain::types::{CaseId, Language};
use crate::repository::{CaseListQuery, CaseReader, TaskReader};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a case aggregate by its identifier.
pub fn get_case_by_id<R>(repo: &R, case_id: CaseId) -> ServiceResult<Option<Case>>
where
    R: CaseReader + ?Sized,
{
    repo.get_case_by_id(case_id).map_err(ServiceError::from)
}

/// Returns the filtered case list.
pub fn list_cases<R>(repo: &R, query: CaseListQuery) -> ServiceResult<Vec<Case>>
where
    R: CaseReader + ?Sized,
{
    repo.list_cases(query).map_err(ServiceError::from)
}

/// Builds the dashboard: the filtered case table plus headline counters.
pub fn dashboard_page<R>(
    repo: &R,
    query: CaseListQuery,
    today: NaiveDate,
    lang: Language,
) -> ServiceResult<DashboardPage>
where
    R: CaseReader + TaskReader + ?Sized,
{
    let search_query = query.search.clone();
    let cases = repo.list_cases(query)?;
    let open_tasks = repo
        .list_tasks()?
        .iter()
        .filter(|t| t.status != crate::domain::task::TaskStatus::Completed)
        .count();
    let upcoming_hearings = cases
        .iter()
        .flat_map(|c| &c.hearings)
        .filter(|h| h.next_hearing_date.is_some_and(|d| d >= today))
        .count();
    let stats = DashboardStats {
        total_cases: cases.len(),
        open_tasks,
        upcoming_hearings,
    };
    let rows = cases.iter().map(|c| CaseSummary::new(c, lang)).collect();
    Ok(DashboardPage {
        cases: rows,
        stats,
        search_query,
    })
}

/// Builds the case detail page, including the case's task list.
pub fn case_page<R>(repo: &R, case_id: CaseId, lang: Language) -> ServiceResult<Option<CasePage>>
where
    R: CaseReader + TaskReader + ?Sized,
{
    let Some(case) = repo.get_case_by_id(case_id)? else {
        return Ok(None);
    };
    let tasks = repo.list_tasks_for_case(case_id)?;
    Ok(Some(CasePage::new(case, tasks, lang)))
}

/// Returns all tasks across cases.
pub fn list_tasks<R>(repo: &R) -> ServiceResult<Vec<Task>>
where
    R: TaskReader + ?Sized,
{
    repo.list_tasks().map_err(ServiceError::from)
}

/// Builds the firm-wide task board.
pub fn tasks_page<R>(repo: &R, today: NaiveDate) -> ServiceResult<TasksPage>
where
    R: CaseReader + TaskReader + ?Sized,
{
    let tasks = repo.list_tasks()?;
    let cases = repo.list_cases(CaseListQuery::new())?;
    Ok(TasksPage::new(tasks, &cases, today))
}

/// Records a request to open a new case.
///
/// The console runs against a read-only fixture snapshot, so save surfaces
/// acknowledge the validated payload without mutating the dataset.
pub fn save_case(payload: &NewCase, lang: Language) -> ServiceResult<()> {
    log::info!(
        "save requested: case {:?} for client {} (partner {})",
        payload.name.resolve(lang).unwrap_or_default(),
        payload.client_id,
        payload.partner_id
    );
    Ok(())
}

/// Records a request to create a task.
pub fn save_task(payload: &NewTask) -> ServiceResult<()> {
    log::info!(
        "save requested: task {:?} on case {} due {}",
        payload.title,
        payload.case_id,
        payload.due_date
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixture::FixtureRepository;
    use crate::repository::seed::seed;

    fn repo() -> FixtureRepository {
        FixtureRepository::new(seed(), Language::En)
    }

    #[test]
    fn dashboard_counts_open_tasks() {
        let repo = repo();
        let today = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let page = dashboard_page(&repo, CaseListQuery::new(), today, Language::En).unwrap();
        assert_eq!(page.stats.total_cases, 3);
        // Seed has 10 tasks, 2 of them completed.
        assert_eq!(page.stats.open_tasks, 8);
    }

    #[test]
    fn case_page_includes_subtasks() {
        let repo = repo();
        let case_id = CaseId::new(29).unwrap();
        let page = case_page(&repo, case_id, Language::En).unwrap().unwrap();
        assert!(page.tasks.iter().any(|t| t.parent_id.is_some()));
        assert_eq!(page.case.number, "123 / 2023");
    }

    #[test]
    fn unknown_case_yields_none() {
        let repo = repo();
        let page = case_page(&repo, CaseId::new(9999).unwrap(), Language::En).unwrap();
        assert!(page.is_none());
    }
}
