//! Client services.
use crate::domain::client::{Client, ClientDetail, NewClient};
use crate::domain::types::{ClientId, Language};
use crate::dto::client::{ClientPage, ClientRow, ClientsPage};
use crate::repository::{ClientReader, ListQuery};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a client with its related collections.
pub fn get_client_by_id<R>(repo: &R, client_id: ClientId) -> ServiceResult<Option<ClientDetail>>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(client_id).map_err(ServiceError::from)
}

/// Returns the filtered client directory.
pub fn list_clients<R>(repo: &R, query: ListQuery) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.list_clients(query).map_err(ServiceError::from)
}

/// Builds the client directory page.
pub fn clients_page<R>(repo: &R, query: ListQuery, lang: Language) -> ServiceResult<ClientsPage>
where
    R: ClientReader + ?Sized,
{
    let search_query = query.search.clone();
    let clients = repo.list_clients(query)?;
    Ok(ClientsPage {
        clients: clients.iter().map(|c| ClientRow::new(c, lang)).collect(),
        search_query,
    })
}

/// Builds the client detail page.
pub fn client_page<R>(
    repo: &R,
    client_id: ClientId,
    lang: Language,
) -> ServiceResult<Option<ClientPage>>
where
    R: ClientReader + ?Sized,
{
    Ok(repo
        .get_client_by_id(client_id)?
        .map(|detail| ClientPage::new(detail, lang)))
}

/// Records a request to register a new client.
pub fn save_client(payload: &NewClient, lang: Language) -> ServiceResult<()> {
    log::info!(
        "save requested: client {:?} (print name {:?})",
        payload.name.resolve(lang).unwrap_or_default(),
        payload.print_name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixture::FixtureRepository;
    use crate::repository::seed::seed;

    #[test]
    fn client_page_collects_related_records() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = client_page(&repo, ClientId::new(3).unwrap(), Language::En)
            .unwrap()
            .unwrap();
        assert_eq!(page.name, "Toyota Egypt");
        assert_eq!(page.cases.len(), 1);
        assert_eq!(page.contacts.len(), 1);
        assert_eq!(page.power_of_attorneys.len(), 1);
        // Two documents filed under Toyota in the seed.
        assert_eq!(page.documents.len(), 2);
    }

    #[test]
    fn search_filters_directory() {
        let repo = FixtureRepository::new(seed(), Language::En);
        let page = clients_page(&repo, ListQuery::new().search("toyota"), Language::En).unwrap();
        assert_eq!(page.clients.len(), 1);
        assert_eq!(page.search_query.as_deref(), Some("toyota"));
    }
}
