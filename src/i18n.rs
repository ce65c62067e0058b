//! Locale dictionaries and dot-path message lookup.
//!
//! Each language has a JSON file (`en.json`, `ar.json`) of nested objects.
//! Lookup keys use dot paths (`nav.dashboard`); a missing key returns the
//! key itself so untranslated screens stay readable instead of panicking.
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::types::{Direction, Language};

/// Loaded dictionary for one language plus the directory it came from.
#[derive(Debug, Clone)]
pub struct Translator {
    locales_dir: PathBuf,
    language: Language,
    messages: Value,
}

impl Translator {
    /// Loads the dictionary for `language` from `locales_dir`.
    ///
    /// A missing or malformed file is logged and yields an empty dictionary,
    /// in which case every lookup echoes its key.
    pub fn new(locales_dir: impl Into<PathBuf>, language: Language) -> Self {
        let locales_dir = locales_dir.into();
        let messages = load_messages(&locales_dir, language).unwrap_or_else(|err| {
            log::error!(
                "failed to load {} locale from {}: {err}",
                language,
                locales_dir.display()
            );
            Value::Object(serde_json::Map::new())
        });
        Self {
            locales_dir,
            language,
            messages,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Switches to another language, reloading its dictionary. When the new
    /// dictionary cannot be loaded the current one is kept and the language
    /// stays unchanged.
    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        match load_messages(&self.locales_dir, language) {
            Ok(messages) => {
                self.language = language;
                self.messages = messages;
            }
            Err(err) => {
                log::error!(
                    "failed to load {} locale, keeping {}: {err}",
                    language,
                    self.language
                );
            }
        }
    }

    /// Resolves a dot-path key (`nav.dashboard`) to its message. Missing
    /// keys and non-string leaves echo the key back verbatim.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        let mut node = &self.messages;
        for part in key.split('.') {
            match node.get(part) {
                Some(child) => node = child,
                None => return key,
            }
        }
        node.as_str().unwrap_or(key)
    }
}

fn load_messages(locales_dir: &Path, language: Language) -> std::io::Result<Value> {
    let path = locales_dir.join(format!("{}.json", language.code()));
    let raw = std::fs::read_to_string(&path)?;
    serde_json::from_str(&raw).map_err(std::io::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn locales() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("en.json"),
            r#"{"nav": {"dashboard": "Dashboard"}, "common": {"save": "Save"}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("ar.json"),
            r#"{"nav": {"dashboard": "لوحة التحكم"}}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn resolves_dot_paths() {
        let dir = locales();
        let translator = Translator::new(dir.path(), Language::En);
        assert_eq!(translator.t("nav.dashboard"), "Dashboard");
        assert_eq!(translator.t("common.save"), "Save");
    }

    #[test]
    fn missing_keys_echo_back() {
        let dir = locales();
        let translator = Translator::new(dir.path(), Language::En);
        assert_eq!(translator.t("nav.unknown"), "nav.unknown");
        // A non-leaf node is not a message either.
        assert_eq!(translator.t("nav"), "nav");
    }

    #[test]
    fn switching_language_flips_direction() {
        let dir = locales();
        let mut translator = Translator::new(dir.path(), Language::En);
        assert_eq!(translator.direction(), Direction::Ltr);
        translator.set_language(Language::Ar);
        assert_eq!(translator.direction(), Direction::Rtl);
        assert_eq!(translator.t("nav.dashboard"), "لوحة التحكم");
    }

    #[test]
    fn failed_reload_keeps_current_dictionary() {
        let dir = locales();
        let mut translator = Translator::new(dir.path(), Language::En);
        fs::remove_file(dir.path().join("ar.json")).unwrap();
        translator.set_language(Language::Ar);
        assert_eq!(translator.language(), Language::En);
        assert_eq!(translator.t("nav.dashboard"), "Dashboard");
    }

    #[test]
    fn missing_file_yields_echoing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let translator = Translator::new(dir.path(), Language::En);
        assert_eq!(translator.t("nav.dashboard"), "nav.dashboard");
    }
}
