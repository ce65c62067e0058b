//! Opponent, lawyer, and court services.
use crate::domain::court::NewCourt;
use crate::domain::lawyer::NewLawyer;
use crate::domain::opponent::NewOpponent;
use crate::domain::types::{CourtId, Language, LawyerId, OpponentId};
use crate::dto::directory::{
    CourtPage, CourtRow, CourtsPage, LawyerPage, LawyerRow, LawyersPage, OpponentPage,
    OpponentRow, OpponentsPage,
};
use crate::repository::{CourtReader, LawyerReader, ListQuery, OpponentReader, OptionReader};
use crate::services::ServiceResult;

/// Builds the opponent directory page.
pub fn opponents_page<R>(repo: &R, query: ListQuery, lang: Language) -> ServiceResult<OpponentsPage>
where
    R: OpponentReader + ?Sized,
{
    let search_query = query.search.clone();
    let opponents = repo.list_opponents(query)?;
    Ok(OpponentsPage {
        opponents: opponents
            .iter()
            .map(|o| OpponentRow {
                id: o.id,
                name: o.name.display(lang).to_string(),
                is_active: o.is_active,
            })
            .collect(),
        search_query,
    })
}

/// Builds the opponent detail page.
pub fn opponent_page<R>(
    repo: &R,
    opponent_id: OpponentId,
    lang: Language,
) -> ServiceResult<Option<OpponentPage>>
where
    R: OpponentReader + ?Sized,
{
    Ok(repo
        .get_opponent_by_id(opponent_id)?
        .map(|detail| OpponentPage::new(detail, lang)))
}

/// Builds the lawyer directory page with resolved title labels.
pub fn lawyers_page<R>(repo: &R, query: ListQuery, lang: Language) -> ServiceResult<LawyersPage>
where
    R: LawyerReader + OptionReader + ?Sized,
{
    let search_query = query.search.clone();
    let catalog = repo.option_catalog()?;
    let lawyers = repo.list_lawyers(query)?;
    Ok(LawyersPage {
        lawyers: lawyers
            .iter()
            .map(|l| LawyerRow {
                id: l.id,
                name: l.name.display(lang).to_string(),
                title: catalog.label(l.title_id, lang),
                email: l.email.clone(),
            })
            .collect(),
        search_query,
    })
}

/// Builds the lawyer detail page.
pub fn lawyer_page<R>(
    repo: &R,
    lawyer_id: LawyerId,
    lang: Language,
) -> ServiceResult<Option<LawyerPage>>
where
    R: LawyerReader + OptionReader + ?Sized,
{
    let Some(detail) = repo.get_lawyer_by_id(lawyer_id)? else {
        return Ok(None);
    };
    let title = repo.option_catalog()?.label(detail.lawyer.title_id, lang);
    Ok(Some(LawyerPage::new(detail, title, lang)))
}

/// Builds the court directory page.
pub fn courts_page<R>(repo: &R, query: ListQuery, lang: Language) -> ServiceResult<CourtsPage>
where
    R: CourtReader + ?Sized,
{
    let search_query = query.search.clone();
    let courts = repo.list_courts(query)?;
    Ok(CourtsPage {
        courts: courts
            .iter()
            .map(|c| CourtRow {
                id: c.id,
                name: c.name.display(lang).to_string(),
                is_active: c.is_active,
            })
            .collect(),
        search_query,
    })
}

/// Builds the court detail page.
pub fn court_page<R>(
    repo: &R,
    court_id: CourtId,
    lang: Language,
) -> ServiceResult<Option<CourtPage>>
where
    R: CourtReader + ?Sized,
{
    Ok(repo
        .get_court_by_id(court_id)?
        .map(|detail| CourtPage::new(detail, lang)))
}

/// Records a request to register a new opponent.
pub fn save_opponent(payload: &NewOpponent, lang: Language) -> ServiceResult<()> {
    log::info!(
        "save requested: opponent {:?} (active: {})",
        payload.name.resolve(lang).unwrap_or_default(),
        payload.is_active
    );
    Ok(())
}

/// Records a request to register a new lawyer.
pub fn save_lawyer(payload: &NewLawyer, lang: Language) -> ServiceResult<()> {
    log::info!(
        "save requested: lawyer {:?} <{}>",
        payload.name.resolve(lang).unwrap_or_default(),
        payload.email.as_deref().unwrap_or("-")
    );
    Ok(())
}

/// Records a request to register a new court.
pub fn save_court(payload: &NewCourt, lang: Language) -> ServiceResult<()> {
    log::info!(
        "save requested: court {:?} (active: {})",
        payload.name.resolve(lang).unwrap_or_default(),
        payload.is_active
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixture::FixtureRepository;
    use crate::repository::seed::seed;

    #[test]
    fn lawyer_titles_resolve_through_the_catalog() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = lawyers_page(&repo, ListQuery::new(), Language::En).unwrap();
        let ehab = page
            .lawyers
            .iter()
            .find(|l| l.name == "Ehab Hamdy")
            .unwrap();
        assert_eq!(ehab.title, "Associate");
    }

    #[test]
    fn active_only_hides_inactive_opponents() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = opponents_page(&repo, ListQuery::new().active_only(), Language::En).unwrap();
        assert!(page.opponents.iter().all(|o| o.is_active));
        assert!(!page.opponents.iter().any(|o| o.name == "Memes Egypt"));
    }

    #[test]
    fn court_page_links_cases_heard_there() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = court_page(&repo, CourtId::new(1).unwrap(), Language::En)
            .unwrap()
            .unwrap();
        assert_eq!(page.name, "Cairo Economic Court");
        assert_eq!(page.cases.len(), 2);
    }
}
