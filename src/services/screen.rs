//! Resolves the current navigation entry into renderable screen content.
//!
//! When a detail entry references an id that no longer resolves, the stack
//! is reset to that screen's owning root and `Ok(None)` is returned; the
//! caller resolves again from the recovered state instead of rendering a
//! broken page.
use chrono::NaiveDate;

use crate::domain::types::Language;
use crate::dto::Screen;
use crate::dto::settings::SettingsPage;
use crate::navigation::{Navigator, ViewState};
use crate::repository::{
    AccessReader, CaseListQuery, CaseReader, ClientReader, CourtReader, DocumentReader,
    HearingReader, LawyerReader, ListQuery, OpponentReader, OptionReader, TaskReader, TeamReader,
};
use crate::services::{ServiceResult, admin, case, client, directory, document, hearing};

/// Everything the resolver needs to read. Implemented for free by any type
/// carrying all the reader traits.
pub trait ScreenReader:
    CaseReader
    + ClientReader
    + OpponentReader
    + LawyerReader
    + CourtReader
    + HearingReader
    + DocumentReader
    + TaskReader
    + TeamReader
    + AccessReader
    + OptionReader
{
}

impl<T> ScreenReader for T where
    T: CaseReader
        + ClientReader
        + OpponentReader
        + LawyerReader
        + CourtReader
        + HearingReader
        + DocumentReader
        + TaskReader
        + TeamReader
        + AccessReader
        + OptionReader
{
}

/// Builds the screen for the navigator's current entry.
///
/// Returns `Ok(None)` after resetting the stack when the entry could not be
/// resolved; the recovered entry is a root and resolves on the next call.
pub fn resolve<R>(
    nav: &mut Navigator,
    repo: &R,
    lang: Language,
    today: NaiveDate,
) -> ServiceResult<Option<Screen>>
where
    R: ScreenReader + ?Sized,
{
    let state = nav.current();
    let screen = match state {
        ViewState::Dashboard => Some(Screen::Dashboard(case::dashboard_page(
            repo,
            CaseListQuery::new(),
            today,
            lang,
        )?)),
        ViewState::Case { case_id } => case::case_page(repo, case_id, lang)?
            .map(|page| Screen::Case(Box::new(page))),
        ViewState::Client { client_id } => client::client_page(repo, client_id, lang)?
            .map(|page| Screen::Client(Box::new(page))),
        ViewState::Clients => Some(Screen::Clients(client::clients_page(
            repo,
            ListQuery::new(),
            lang,
        )?)),
        ViewState::Opponent { opponent_id } => {
            directory::opponent_page(repo, opponent_id, lang)?.map(Screen::Opponent)
        }
        ViewState::Opponents => Some(Screen::Opponents(directory::opponents_page(
            repo,
            ListQuery::new(),
            lang,
        )?)),
        ViewState::Lawyer { lawyer_id } => {
            directory::lawyer_page(repo, lawyer_id, lang)?.map(Screen::Lawyer)
        }
        ViewState::Lawyers => Some(Screen::Lawyers(directory::lawyers_page(
            repo,
            ListQuery::new(),
            lang,
        )?)),
        ViewState::Court { court_id } => {
            directory::court_page(repo, court_id, lang)?.map(Screen::Court)
        }
        ViewState::Courts => Some(Screen::Courts(directory::courts_page(
            repo,
            ListQuery::new(),
            lang,
        )?)),
        ViewState::Hearing { hearing_id } => hearing::hearing_page(repo, hearing_id, lang)?
            .map(|page| Screen::Hearing(Box::new(page))),
        ViewState::Hearings => Some(Screen::Hearings(hearing::hearings_page(repo)?)),
        ViewState::CreateHearing => {
            Some(Screen::CreateHearing(hearing::hearing_form_page(repo)?))
        }
        ViewState::Document { document_id } | ViewState::EditDocument { document_id } => {
            document::document_page(repo, document_id, lang)?
                .map(|page| Screen::Document(Box::new(page)))
        }
        ViewState::Documents => Some(Screen::Documents(document::documents_page(
            repo,
            ListQuery::new(),
        )?)),
        ViewState::DocumentForm => {
            Some(Screen::DocumentForm(document::document_form_page(repo, lang)?))
        }
        ViewState::Tasks => Some(Screen::Tasks(case::tasks_page(repo, today)?)),
        ViewState::Reports => {
            let cases = case::list_cases(repo, CaseListQuery::new())?;
            Some(Screen::Reports(crate::dto::reports::ReportsPage::new(
                &cases,
            )))
        }
        ViewState::Settings => Some(Screen::Settings(SettingsPage::new(
            &repo.option_catalog()?,
            lang,
        ))),
        ViewState::Role { role_id } => admin::role_page(repo, role_id, lang)?.map(Screen::Role),
        ViewState::Roles => Some(Screen::Roles(admin::roles_page(repo, lang)?)),
        ViewState::Team { team_id } => admin::team_page(repo, team_id, lang)?.map(Screen::Team),
        ViewState::Teams => Some(Screen::Teams(admin::teams_page(repo, lang)?)),
        ViewState::User { user_id } => admin::user_page(repo, user_id, lang)?.map(Screen::User),
        ViewState::Users => Some(Screen::Users(admin::users_page(repo, lang)?)),
    };

    match screen {
        Some(screen) => Ok(Some(screen)),
        None => {
            let kind = state.kind();
            log::warn!("view {kind:?} references a missing record, resetting to its root");
            nav.navigate_root(kind);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CaseId, DocumentId};
    use crate::navigation::View;
    use crate::repository::fixture::FixtureRepository;
    use crate::repository::seed::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    #[test]
    fn dashboard_resolves_immediately() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let mut nav = Navigator::new();
        let screen = resolve(&mut nav, &repo, Language::En, today()).unwrap();
        assert!(matches!(screen, Some(Screen::Dashboard(_))));
    }

    #[test]
    fn missing_case_resets_to_dashboard() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let mut nav = Navigator::new();
        nav.navigate_to(ViewState::Case {
            case_id: CaseId::new(4242).unwrap(),
        });
        let screen = resolve(&mut nav, &repo, Language::En, today()).unwrap();
        assert!(screen.is_none());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), ViewState::Dashboard);
        // Recovered state resolves on the next call.
        let screen = resolve(&mut nav, &repo, Language::En, today()).unwrap();
        assert!(matches!(screen, Some(Screen::Dashboard(_))));
    }

    #[test]
    fn missing_document_resets_to_register() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let mut nav = Navigator::new();
        nav.navigate_to(ViewState::Documents);
        nav.navigate_to(ViewState::Document {
            document_id: DocumentId::new(999).unwrap(),
        });
        let screen = resolve(&mut nav, &repo, Language::En, today()).unwrap();
        assert!(screen.is_none());
        assert_eq!(nav.current().kind(), View::Documents);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn every_root_view_resolves() {
        let repo = FixtureRepository::new(seed(), Language::En);
        for state in [
            ViewState::Clients,
            ViewState::Opponents,
            ViewState::Lawyers,
            ViewState::Courts,
            ViewState::Tasks,
            ViewState::Reports,
            ViewState::Settings,
            ViewState::Hearings,
            ViewState::Documents,
            ViewState::CreateHearing,
            ViewState::DocumentForm,
            ViewState::Roles,
            ViewState::Teams,
            ViewState::Users,
        ] {
            let mut nav = Navigator::new();
            nav.navigate_to(state);
            let screen = resolve(&mut nav, &repo, Language::En, today()).unwrap();
            assert!(screen.is_some(), "{state:?} failed to resolve");
        }
    }
}
