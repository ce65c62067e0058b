//! View models for the client list and detail screens.
use serde::Serialize;

use crate::domain::client::{Client, ClientDetail, Contact, PowerOfAttorney};
use crate::domain::document::ClientDocument;
use crate::domain::types::{ClientId, Language};

use crate::dto::dashboard::CaseSummary;

/// One row of the client directory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClientRow {
    pub id: ClientId,
    pub code: Option<String>,
    pub name: String,
    pub print_name: String,
    pub status: Option<String>,
}

impl ClientRow {
    pub fn new(client: &Client, lang: Language) -> Self {
        Self {
            id: client.id,
            code: client.code.clone(),
            name: client.name.display(lang).to_string(),
            print_name: client.print_name.clone(),
            status: client.status.clone(),
        }
    }
}

/// Data required to render the client directory.
#[derive(Debug, Clone, Serialize)]
pub struct ClientsPage {
    pub clients: Vec<ClientRow>,
    pub search_query: Option<String>,
}

/// Data required to render the client detail screen.
#[derive(Debug, Clone, Serialize)]
pub struct ClientPage {
    pub client: Client,
    pub name: String,
    pub contacts: Vec<Contact>,
    pub power_of_attorneys: Vec<PowerOfAttorney>,
    pub documents: Vec<ClientDocument>,
    pub cases: Vec<CaseSummary>,
}

impl ClientPage {
    pub fn new(detail: ClientDetail, lang: Language) -> Self {
        let name = detail.client.name.display(lang).to_string();
        let cases = detail
            .cases
            .iter()
            .map(|c| CaseSummary::new(c, lang))
            .collect();
        Self {
            client: detail.client,
            name,
            contacts: detail.contacts,
            power_of_attorneys: detail.power_of_attorneys,
            documents: detail.documents,
            cases,
        }
    }
}
