//! View models for the settings screen.
use serde::Serialize;

use crate::domain::options::OptionCatalog;
use crate::domain::types::{Direction, Language, OptionSetId};

/// One configurable option set with its value count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionSetRow {
    pub id: OptionSetId,
    pub key: String,
    pub name: String,
    pub value_count: usize,
}

/// Data required to render the settings screen.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsPage {
    pub language: Language,
    pub direction: Direction,
    pub option_sets: Vec<OptionSetRow>,
}

impl SettingsPage {
    pub fn new(catalog: &OptionCatalog, lang: Language) -> Self {
        let option_sets = catalog
            .sets()
            .iter()
            .map(|set| OptionSetRow {
                id: set.id,
                key: set.key.clone(),
                name: set.name.display(lang).to_string(),
                value_count: catalog.values_in_set(set.id).len(),
            })
            .collect();
        Self {
            language: lang,
            direction: lang.direction(),
            option_sets,
        }
    }
}
