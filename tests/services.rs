use mockall::predicate::eq;
use qadaya::domain::types::{CaseId, ClientId, Language};
use qadaya::repository::errors::RepositoryError;
use qadaya::repository::mock::MockRepository;
use qadaya::repository::ListQuery;
use qadaya::services::{ServiceError, case, client};

#[test]
fn get_case_delegates_to_the_reader() {
    let mut repo = MockRepository::new();
    let case_id = CaseId::new(1116).unwrap();
    repo.expect_get_case_by_id()
        .with(eq(case_id))
        .times(1)
        .returning(|_| Ok(None));

    let result = case::get_case_by_id(&repo, case_id).unwrap();
    assert!(result.is_none());
}

#[test]
fn repository_errors_surface_as_service_errors() {
    let mut repo = MockRepository::new();
    repo.expect_get_client_by_id()
        .returning(|_| Err(RepositoryError::Unexpected("table gone".into())));

    let err = client::get_client_by_id(&repo, ClientId::new(1).unwrap()).unwrap_err();
    assert!(matches!(err, ServiceError::Repository(_)));
}

#[test]
fn clients_page_echoes_the_search_query() {
    let mut repo = MockRepository::new();
    repo.expect_list_clients()
        .withf(|query: &ListQuery| query.search.as_deref() == Some("toyota"))
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let page = client::clients_page(
        &repo,
        ListQuery::new().search("toyota"),
        Language::En,
    )
    .unwrap();
    assert!(page.clients.is_empty());
    assert_eq!(page.search_query.as_deref(), Some("toyota"));
}

#[test]
fn case_page_skips_tasks_for_missing_cases() {
    let mut repo = MockRepository::new();
    repo.expect_get_case_by_id().returning(|_| Ok(None));
    // list_tasks_for_case must not be called when the case is gone.
    repo.expect_list_tasks_for_case().times(0);

    let page = case::case_page(&repo, CaseId::new(1).unwrap(), Language::En).unwrap();
    assert!(page.is_none());
}
