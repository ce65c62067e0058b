//! Coded-enumeration lookup tables and the single label-resolution policy.
//!
//! Many case fields are stored as references into `option_values`. Every
//! call site resolves them through [`OptionCatalog::label`] so the fallback
//! chain is defined in exactly one place:
//! label in the active language → label in the other language → raw code →
//! the [`UNRESOLVED_LABEL`] sentinel.
use serde::{Deserialize, Serialize};

use crate::domain::types::{Bilingual, Language, OptionSetId, OptionValueId};

/// Sentinel returned when an option id cannot be resolved to any text.
pub const UNRESOLVED_LABEL: &str = "N/A";

/// A named family of coded values (case status, importance, capacity, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub id: OptionSetId,
    /// Stable dotted key, e.g. `case.status` or `capacity.type`.
    pub key: String,
    pub name: Bilingual,
    pub description: Bilingual,
}

/// One coded value inside an option set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    pub id: OptionValueId,
    pub set_id: OptionSetId,
    pub code: String,
    pub label: Bilingual,
}

/// Read-only view over the option tables with the centralized fallback chain.
#[derive(Clone, Debug, Default)]
pub struct OptionCatalog {
    sets: Vec<OptionSet>,
    values: Vec<OptionValue>,
}

impl OptionCatalog {
    pub fn new(sets: Vec<OptionSet>, values: Vec<OptionValue>) -> Self {
        Self { sets, values }
    }

    /// All option sets, in table order.
    pub fn sets(&self) -> &[OptionSet] {
        &self.sets
    }

    pub fn set_by_key(&self, key: &str) -> Option<&OptionSet> {
        self.sets.iter().find(|s| s.key == key)
    }

    pub fn value(&self, id: OptionValueId) -> Option<&OptionValue> {
        self.values.iter().find(|v| v.id == id)
    }

    /// Values belonging to one set, in table order.
    pub fn values_in_set(&self, set_id: OptionSetId) -> Vec<&OptionValue> {
        self.values.iter().filter(|v| v.set_id == set_id).collect()
    }

    /// Resolves a display label for an optional option-value reference.
    ///
    /// Unknown ids and ids with neither label nor code fail open to
    /// [`UNRESOLVED_LABEL`]. Falling back to the raw code is a known
    /// vocabulary gap in the source data and is logged so divergence between
    /// codes and the translation tables stays visible.
    pub fn label(&self, id: Option<OptionValueId>, lang: Language) -> String {
        let Some(id) = id else {
            return UNRESOLVED_LABEL.to_string();
        };
        let Some(value) = self.value(id) else {
            return UNRESOLVED_LABEL.to_string();
        };
        if let Some(text) = value.label.resolve(lang) {
            return text.to_string();
        }
        if !value.code.trim().is_empty() {
            log::debug!(
                "option value {id} in set {} has no label, falling back to code {:?}",
                value.set_id,
                value.code
            );
            return value.code.clone();
        }
        UNRESOLVED_LABEL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> OptionCatalog {
        OptionCatalog::new(
            vec![OptionSet {
                id: OptionSetId::new(15).unwrap(),
                key: "case.status".into(),
                name: Bilingual::both("حالة القضية", "Case Status"),
                description: Bilingual::default(),
            }],
            vec![
                OptionValue {
                    id: OptionValueId::new(1).unwrap(),
                    set_id: OptionSetId::new(15).unwrap(),
                    code: "active".into(),
                    label: Bilingual::both("سارية", "Active"),
                },
                OptionValue {
                    id: OptionValueId::new(2).unwrap(),
                    set_id: OptionSetId::new(15).unwrap(),
                    code: "pending".into(),
                    label: Bilingual::default(),
                },
                OptionValue {
                    id: OptionValueId::new(3).unwrap(),
                    set_id: OptionSetId::new(15).unwrap(),
                    code: "".into(),
                    label: Bilingual::default(),
                },
            ],
        )
    }

    #[test]
    fn label_prefers_active_language() {
        let catalog = catalog();
        let id = Some(OptionValueId::new(1).unwrap());
        assert_eq!(catalog.label(id, Language::Ar), "سارية");
        assert_eq!(catalog.label(id, Language::En), "Active");
    }

    #[test]
    fn label_falls_back_to_code_then_sentinel() {
        let catalog = catalog();
        assert_eq!(
            catalog.label(Some(OptionValueId::new(2).unwrap()), Language::En),
            "pending"
        );
        assert_eq!(
            catalog.label(Some(OptionValueId::new(3).unwrap()), Language::En),
            UNRESOLVED_LABEL
        );
    }

    #[test]
    fn label_handles_missing_references() {
        let catalog = catalog();
        assert_eq!(catalog.label(None, Language::En), UNRESOLVED_LABEL);
        assert_eq!(
            catalog.label(Some(OptionValueId::new(99).unwrap()), Language::En),
            UNRESOLVED_LABEL
        );
    }
}
