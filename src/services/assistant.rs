//! AI assistant: case summaries and document analysis.
//!
//! Backed by the Gemini `generateContent` API when a key is configured;
//! remote failures surface as [`AssistantError`] so the caller can show a
//! localized message. Without a key the assistant produces deterministic
//! offline drafts after a simulated thinking delay, so the surrounding
//! screens behave the same during demos.
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::domain::case::Case;
use crate::domain::types::Language;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const MOCK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("assistant returned a malformed response: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Structured result of a document analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub summary: String,
    pub entities: AnalysisEntities,
    pub potential_arguments: Vec<String>,
}

/// Named entities extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisEntities {
    pub people: Vec<String>,
    pub dates: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the summarization and analysis calls.
#[derive(Debug, Clone)]
pub struct Assistant {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    mock_delay: Duration,
}

impl Assistant {
    /// Creates an assistant. `api_key = None` pins it to the offline drafts.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            mock_delay: MOCK_DELAY,
        }
    }

    /// Overrides the API endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the simulated thinking delay of the offline drafts.
    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    pub fn is_offline(&self) -> bool {
        self.api_key.is_none()
    }

    /// Produces a short narrative summary of a case.
    ///
    /// With a key configured a remote failure is returned to the caller;
    /// only the keyless configuration uses the offline draft.
    pub async fn case_summary(&self, case: &Case, lang: Language) -> Result<String, AssistantError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tokio::time::sleep(self.mock_delay).await;
            return Ok(mock_case_summary(case, lang));
        };
        let prompt = summary_prompt(case, lang);
        self.generate(api_key, &prompt, None).await
    }

    /// Extracts a structured analysis from raw document text.
    pub async fn analyze_document(
        &self,
        text: &str,
        lang: Language,
    ) -> Result<DocumentAnalysis, AssistantError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tokio::time::sleep(self.mock_delay).await;
            return Ok(mock_document_analysis(lang));
        };
        let prompt = analysis_prompt(text, lang);
        let raw = self.generate(api_key, &prompt, Some(analysis_schema())).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, AssistantError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        if let Some(schema) = response_schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }
        log::debug!("requesting completion from {url}");
        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let payload: GenerateContentResponse = response.json().await?;
        let text: String = payload
            .candidates
            .first()
            .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(AssistantError::MalformedResponse(
                "response contained no text".to_string(),
            ));
        }
        Ok(text)
    }
}

fn summary_prompt(case: &Case, lang: Language) -> String {
    let language = match lang {
        Language::Ar => "Arabic",
        Language::En => "English",
    };
    format!(
        "Summarize the following legal case in {language} for a partner briefing. \
         Case number: {}. Client: {}. Status: {}. Description: {}",
        case.number,
        case.client.name.display(lang),
        case.status,
        case.description.as_deref().unwrap_or("-"),
    )
}

fn analysis_prompt(text: &str, lang: Language) -> String {
    let language = match lang {
        Language::Ar => "Arabic",
        Language::En => "English",
    };
    format!(
        "Analyze the following legal document and answer in {language}. \
         Extract a summary, the named entities, and potential arguments.\n\
         Document text:\n{text}"
    )
}

fn analysis_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "entities": {
                "type": "OBJECT",
                "properties": {
                    "people": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "dates": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "locations": { "type": "ARRAY", "items": { "type": "STRING" } },
                },
                "required": ["people", "dates", "locations"],
            },
            "potential_arguments": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": ["summary", "entities", "potential_arguments"],
    })
}

fn mock_case_summary(case: &Case, lang: Language) -> String {
    match lang {
        Language::Ar => format!(
            "ملخص القضية رقم {}: يمثل المكتب العميل {} ضد الخصوم المسجلين. \
             الحالة الحالية: {}. عدد الجلسات المسجلة: {}.",
            case.number,
            case.client.name.display(lang),
            case.status,
            case.hearings.len(),
        ),
        Language::En => format!(
            "Summary of case {}: the firm represents {} against the recorded opponents. \
             Current status: {}. Hearings on record: {}.",
            case.number,
            case.client.name.display(lang),
            case.status,
            case.hearings.len(),
        ),
    }
}

fn mock_document_analysis(lang: Language) -> DocumentAnalysis {
    match lang {
        Language::Ar => DocumentAnalysis {
            summary: "يبدو أن هذا المستند مذكرة قانونية تتعلق بنزاع قائم. \
                      يوصى بمراجعة كاملة قبل الجلسة القادمة."
                .to_string(),
            entities: AnalysisEntities {
                people: vec!["جون دو".to_string(), "جين سميث".to_string()],
                dates: vec!["2024-07-15".to_string()],
                locations: vec!["محكمة القاهرة الاقتصادية".to_string()],
            },
            potential_arguments: vec![
                "التحقق من سلسلة الحيازة قبل الاستناد إلى هذا المستند.".to_string(),
                "مطابقة رقم القضية المشار إليه مع القيد الرسمي.".to_string(),
            ],
        },
        Language::En => DocumentAnalysis {
            summary: "The document appears to be a legal memorandum relating to an \
                      ongoing dispute. A full review is recommended before the next session."
                .to_string(),
            entities: AnalysisEntities {
                people: vec!["John Doe".to_string(), "Jane Smith".to_string()],
                dates: vec!["2024-07-15".to_string()],
                locations: vec!["Cairo Economic Court".to_string()],
            },
            potential_arguments: vec![
                "Verify the chain of custody before relying on this exhibit.".to_string(),
                "Cross-reference the referenced case number with the registered filings.".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CaseId, Language};
    use crate::repository::CaseReader;
    use crate::repository::fixture::FixtureRepository;
    use crate::repository::seed::seed;

    fn offline() -> Assistant {
        Assistant::new(None).with_mock_delay(Duration::from_millis(1))
    }

    fn sample_case() -> Case {
        let repo = FixtureRepository::new(seed(), Language::En);
        repo.get_case_by_id(CaseId::new(1116).unwrap())
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn offline_summary_mentions_the_case_number() {
        let case = sample_case();
        let summary = offline().case_summary(&case, Language::En).await.unwrap();
        assert!(summary.contains(&case.number));
        let summary_ar = offline().case_summary(&case, Language::Ar).await.unwrap();
        assert!(summary_ar.contains(&case.number));
    }

    #[tokio::test]
    async fn offline_analysis_is_localized() {
        let analysis = offline()
            .analyze_document("memorandum text", Language::En)
            .await
            .unwrap();
        assert!(analysis.summary.contains("memorandum"));
        assert!(!analysis.potential_arguments.is_empty());

        let analysis_ar = offline()
            .analyze_document("memorandum text", Language::Ar)
            .await
            .unwrap();
        assert!(analysis_ar.summary.contains("مذكرة"));
        assert_ne!(analysis.summary, analysis_ar.summary);
    }

    #[tokio::test]
    async fn remote_summary_failure_surfaces_as_an_error() {
        // Port 1 refuses connections; a configured key must not fall back.
        let assistant = Assistant::new(Some("test-key".to_string()))
            .with_base_url("http://127.0.0.1:1");
        let case = sample_case();
        let result = assistant.case_summary(&case, Language::En).await;
        assert!(matches!(result, Err(AssistantError::Http(_))));
    }

    #[tokio::test]
    async fn remote_analysis_failure_surfaces_as_an_error() {
        let assistant = Assistant::new(Some("test-key".to_string()))
            .with_base_url("http://127.0.0.1:1");
        let result = assistant.analyze_document("exhibit text", Language::En).await;
        assert!(matches!(result, Err(AssistantError::Http(_))));
    }

    #[test]
    fn blank_api_keys_disable_the_remote_path() {
        assert!(Assistant::new(Some("   ".to_string())).is_offline());
        assert!(!Assistant::new(Some("key".to_string())).is_offline());
    }
}
