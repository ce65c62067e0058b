use qadaya::domain::options::UNRESOLVED_LABEL;
use qadaya::domain::types::{CaseId, ClientId, Language, LawyerId, OptionValueId};
use qadaya::repository::fixture::FixtureRepository;
use qadaya::repository::seed::seed;
use qadaya::repository::{
    CaseListQuery, CaseReader, ClientReader, DocumentReader, HearingReader, ListQuery,
    OpponentReader, OptionReader, TaskReader,
};

#[test]
fn aggregation_builds_all_seed_cases() {
    let repo = FixtureRepository::new(seed(), Language::En);
    let cases = repo.list_cases(CaseListQuery::new()).unwrap();
    assert_eq!(cases.len(), 3);
    let toyota = cases.iter().find(|c| c.id.get() == 1116).unwrap();
    assert_eq!(toyota.number, "983 / 11ق");
    assert_eq!(toyota.client.name.en.as_deref(), Some("Toyota Egypt"));
    assert_eq!(toyota.status, "Active");
    assert_eq!(toyota.hearings.len(), 2);
    assert_eq!(toyota.tasks.len(), 4);
    assert_eq!(toyota.documents.len(), 2);
}

#[test]
fn rows_with_unresolvable_client_are_dropped() {
    let mut set = seed();
    let mut orphan = set.cases[0].clone();
    orphan.id = CaseId::new(777).unwrap();
    orphan.client_id = ClientId::new(999).unwrap();
    set.cases.push(orphan);

    let repo = FixtureRepository::new(set, Language::En);
    let cases = repo.list_cases(CaseListQuery::new()).unwrap();
    assert_eq!(cases.len(), 3);
    assert!(repo.get_case_by_id(CaseId::new(777).unwrap()).unwrap().is_none());
}

#[test]
fn rows_with_unresolvable_partner_are_dropped() {
    let mut set = seed();
    let mut orphan = set.cases[0].clone();
    orphan.id = CaseId::new(778).unwrap();
    orphan.partner_id = Some(LawyerId::new(400).unwrap());
    set.cases.push(orphan);

    let repo = FixtureRepository::new(set, Language::En);
    assert!(repo.get_case_by_id(CaseId::new(778).unwrap()).unwrap().is_none());
}

#[test]
fn rows_without_a_partner_are_dropped() {
    let mut set = seed();
    let mut orphan = set.cases[0].clone();
    orphan.id = CaseId::new(779).unwrap();
    orphan.partner_id = None;
    set.cases.push(orphan);

    let repo = FixtureRepository::new(set, Language::En);
    assert!(repo.get_case_by_id(CaseId::new(779).unwrap()).unwrap().is_none());
}

#[test]
fn unresolvable_option_references_fail_open() {
    let mut set = seed();
    let mut record = set.cases[0].clone();
    record.id = CaseId::new(780).unwrap();
    record.status_id = Some(OptionValueId::new(9999).unwrap());
    record.importance_id = None;
    set.cases.push(record);

    let repo = FixtureRepository::new(set, Language::En);
    let case = repo
        .get_case_by_id(CaseId::new(780).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(case.status, UNRESOLVED_LABEL);
    assert_eq!(case.importance, UNRESOLVED_LABEL);
}

#[test]
fn labels_resolve_in_the_repository_language() {
    let repo = FixtureRepository::new(seed(), Language::Ar);
    let case = repo
        .get_case_by_id(CaseId::new(1116).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(case.status, "سارية");
    assert_eq!(case.importance, "هامة");
}

#[test]
fn secondary_lawyers_resolve_by_name_in_either_language() {
    let repo = FixtureRepository::new(seed(), Language::En);
    let case = repo
        .get_case_by_id(CaseId::new(1116).unwrap())
        .unwrap()
        .unwrap();
    // "Ehab Hamdy" is stored as a legacy English name string on the row.
    assert_eq!(
        case.lawyer_a.as_ref().map(|l| l.id.get()),
        Some(3),
        "expected the name string to resolve to the lawyer record"
    );
    assert!(case.lawyer_b.is_none());
}

#[test]
fn case_search_matches_number_and_names() {
    let repo = FixtureRepository::new(seed(), Language::En);
    let by_number = repo
        .list_cases(CaseListQuery::new().search("983"))
        .unwrap();
    assert_eq!(by_number.len(), 1);
    let by_client = repo
        .list_cases(CaseListQuery::new().search("toyota"))
        .unwrap();
    assert_eq!(by_client.len(), 1);
    assert_eq!(by_number[0].id, by_client[0].id);
}

#[test]
fn case_filters_combine_with_search() {
    let repo = FixtureRepository::new(seed(), Language::En);
    // Status id 1 is "Active" in the seed; cases 1116 and 29 carry it.
    let active = repo
        .list_cases(CaseListQuery::new().status(OptionValueId::new(1).unwrap()))
        .unwrap();
    assert_eq!(active.len(), 2);
    let active_toyota = repo
        .list_cases(
            CaseListQuery::new()
                .search("toyota")
                .status(OptionValueId::new(1).unwrap()),
        )
        .unwrap();
    assert_eq!(active_toyota.len(), 1);
}

#[test]
fn movement_history_is_sorted_date_descending() {
    let repo = FixtureRepository::new(seed(), Language::En);
    let detail = repo
        .get_document_by_id(qadaya::domain::types::DocumentId::new(3).unwrap())
        .unwrap()
        .unwrap();
    let dates: Vec<_> = detail.movements.iter().map(|m| m.movement.date).collect();
    let mut expected = dates.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, expected);
    assert!(detail.movements.iter().all(|m| m
        .lawyer
        .as_ref()
        .is_some_and(|l| l.id.get() == 6)));
}

#[test]
fn client_detail_rescans_related_tables() {
    let repo = FixtureRepository::new(seed(), Language::En);
    let detail = repo
        .get_client_by_id(ClientId::new(2).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(detail.cases.len(), 1);
    assert_eq!(detail.documents.len(), 2);
    assert!(detail.contacts.is_empty());
}

#[test]
fn hearings_and_tasks_cover_the_seed() {
    let repo = FixtureRepository::new(seed(), Language::En);
    assert_eq!(repo.list_hearings().unwrap().len(), 5);
    assert_eq!(repo.list_tasks().unwrap().len(), 10);
    assert_eq!(
        repo.list_tasks_for_case(CaseId::new(29).unwrap()).unwrap().len(),
        4
    );
}

#[test]
fn opponent_search_uses_normalized_names() {
    let repo = FixtureRepository::new(seed(), Language::En);
    let hits = repo
        .list_opponents(ListQuery::new().search("egx"))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name.en.as_deref(), Some("EGX Committee"));
}

#[test]
fn option_catalog_is_shared_across_screens() {
    let repo = FixtureRepository::new(seed(), Language::En);
    let catalog = repo.option_catalog().unwrap();
    assert!(catalog.set_by_key("case.status").is_some());
    assert_eq!(
        catalog.label(Some(OptionValueId::new(10).unwrap()), Language::En),
        "Plaintiff"
    );
}
