//! Document register and custody movement services.
use crate::domain::document::{DocumentDetail, DocumentPayload, NewMovement};
use crate::domain::types::{DocumentId, Language};
use crate::dto::document::{DocumentFormPage, DocumentPage, DocumentRow, DocumentsPage};
use crate::repository::{CaseListQuery, CaseReader, ClientReader, DocumentReader, ListQuery};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a document with its client, case, and movement history.
pub fn get_document_by_id<R>(
    repo: &R,
    document_id: DocumentId,
) -> ServiceResult<Option<DocumentDetail>>
where
    R: DocumentReader + ?Sized,
{
    repo.get_document_by_id(document_id)
        .map_err(ServiceError::from)
}

/// Builds the document register page.
pub fn documents_page<R>(repo: &R, query: ListQuery) -> ServiceResult<DocumentsPage>
where
    R: DocumentReader + ?Sized,
{
    let search_query = query.search.clone();
    let documents = repo.list_documents(query)?;
    Ok(DocumentsPage {
        documents: documents.into_iter().map(DocumentRow::from).collect(),
        search_query,
    })
}

/// Builds the document detail page. Movements arrive newest first from the
/// repository.
pub fn document_page<R>(
    repo: &R,
    document_id: DocumentId,
    lang: Language,
) -> ServiceResult<Option<DocumentPage>>
where
    R: DocumentReader + ?Sized,
{
    Ok(repo
        .get_document_by_id(document_id)?
        .map(|detail| DocumentPage::new(detail, lang)))
}

/// Builds the new-document form choices.
pub fn document_form_page<R>(repo: &R, lang: Language) -> ServiceResult<DocumentFormPage>
where
    R: ClientReader + CaseReader + ?Sized,
{
    let clients = repo.list_clients(ListQuery::new())?;
    let cases = repo.list_cases(CaseListQuery::new())?;
    Ok(DocumentFormPage::new(&clients, &cases, lang))
}

/// Records a request to file or update a document.
pub fn save_document(payload: &DocumentPayload) -> ServiceResult<()> {
    match payload.id {
        Some(id) => log::info!("save requested: update document {id} ({:?})", payload.name),
        None => log::info!(
            "save requested: new document {:?} for client {}",
            payload.name,
            payload.client_id
        ),
    }
    Ok(())
}

/// Records a request to log a custody movement.
pub fn save_movement(payload: &NewMovement) -> ServiceResult<()> {
    log::info!(
        "save requested: movement on document {} ({} -> {}, {:?})",
        payload.document_id,
        payload.from_location,
        payload.to_location,
        payload.status
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::MovementStatus;
    use crate::repository::fixture::FixtureRepository;
    use crate::repository::seed::seed;

    #[test]
    fn movement_history_is_newest_first() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = document_page(&repo, DocumentId::new(3).unwrap(), Language::En)
            .unwrap()
            .unwrap();
        assert_eq!(page.movements.len(), 4);
        let dates: Vec<_> = page.movements.iter().map(|m| m.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(page.movements[0].status, MovementStatus::Archived);
        assert_eq!(page.movements[0].lawyer_name, "Fatma Al-Zahraa");
    }

    #[test]
    fn documents_without_movements_have_empty_history() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = document_page(&repo, DocumentId::new(1).unwrap(), Language::En)
            .unwrap()
            .unwrap();
        assert!(page.movements.is_empty());
    }
}
