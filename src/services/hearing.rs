//! Hearing roll services.
use crate::domain::hearing::{HearingDetail, NewHearing};
use crate::domain::types::{HearingId, Language};
use crate::dto::hearing::{HearingFormPage, HearingPage, HearingsPage};
use crate::repository::{CaseListQuery, CaseReader, HearingReader};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a hearing with its case and lawyer context.
pub fn get_hearing_by_id<R>(repo: &R, hearing_id: HearingId) -> ServiceResult<Option<HearingDetail>>
where
    R: HearingReader + ?Sized,
{
    repo.get_hearing_by_id(hearing_id)
        .map_err(ServiceError::from)
}

/// Builds the hearings roll, newest session first.
pub fn hearings_page<R>(repo: &R) -> ServiceResult<HearingsPage>
where
    R: HearingReader + CaseReader + ?Sized,
{
    let hearings = repo.list_hearings()?;
    let cases = repo.list_cases(CaseListQuery::new())?;
    Ok(HearingsPage::new(hearings, &cases))
}

/// Builds the hearing detail page.
pub fn hearing_page<R>(
    repo: &R,
    hearing_id: HearingId,
    lang: Language,
) -> ServiceResult<Option<HearingPage>>
where
    R: HearingReader + ?Sized,
{
    Ok(repo
        .get_hearing_by_id(hearing_id)?
        .map(|detail| HearingPage::new(detail, lang)))
}

/// Builds the new-hearing form choices.
pub fn hearing_form_page<R>(repo: &R) -> ServiceResult<HearingFormPage>
where
    R: CaseReader + ?Sized,
{
    let cases = repo.list_cases(CaseListQuery::new())?;
    Ok(HearingFormPage {
        cases: cases.iter().map(|c| (c.id, c.number.clone())).collect(),
    })
}

/// Records a request to schedule a hearing.
pub fn save_hearing(payload: &NewHearing) -> ServiceResult<()> {
    log::info!(
        "save requested: hearing on case {} at {} (notify client: {})",
        payload.case_id,
        payload.date,
        payload.notify_client
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixture::FixtureRepository;
    use crate::repository::seed::seed;

    #[test]
    fn roll_is_sorted_newest_first_with_case_numbers() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = hearings_page(&repo).unwrap();
        assert_eq!(page.hearings.len(), 5);
        for pair in page.hearings.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        assert!(page.hearings.iter().all(|h| !h.case_number.is_empty()));
    }

    #[test]
    fn hearing_page_resolves_case_and_lawyer() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = hearing_page(&repo, HearingId::new(3).unwrap(), Language::En)
            .unwrap()
            .unwrap();
        assert_eq!(page.case_number.as_deref(), Some("55 / 2024"));
        assert_eq!(page.lawyer_name.as_deref(), Some("Fatma Al-Zahraa"));
    }
}
