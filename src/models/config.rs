//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the console session.
pub struct AppConfig {
    /// Session language code, `en` or `ar`.
    pub language: String,
    /// Directory holding the `en.json` / `ar.json` dictionaries.
    pub locales_dir: String,
    /// Gemini API key; assistant runs offline drafts when absent.
    pub gemini_api_key: Option<String>,
    /// Override for the Gemini endpoint.
    pub gemini_base_url: Option<String>,
    /// Override for the Gemini model name.
    pub gemini_model: Option<String>,
    /// Simulated thinking delay of the offline drafts, in milliseconds.
    pub assistant_mock_delay_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_overrides_deserialize() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "language: ar\n\
                 locales_dir: locales\n\
                 gemini_base_url: http://localhost:9090\n\
                 gemini_model: gemini-pro\n\
                 assistant_mock_delay_ms: 10\n",
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap();
        let app: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(app.gemini_base_url.as_deref(), Some("http://localhost:9090"));
        assert_eq!(app.gemini_model.as_deref(), Some("gemini-pro"));
        assert_eq!(app.assistant_mock_delay_ms, Some(10));
    }

    #[test]
    fn assistant_overrides_default_to_none() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "language: en\nlocales_dir: locales\n",
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap();
        let app: AppConfig = settings.try_deserialize().unwrap();
        assert!(app.gemini_api_key.is_none());
        assert!(app.gemini_base_url.is_none());
        assert!(app.assistant_mock_delay_ms.is_none());
    }
}
