//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: None,
            target_lang: target_lang.into(),
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }
}

/// Translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub detected_source_language: String,
}

/// A language supported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language code, e.g. `es`
    pub code: String,
    /// Name localized into the requested display language
    pub display_name: String,
}

/// Top-level `data` wrapper of every response body
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslationsData {
    pub translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslationEntry {
    pub translated_text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

impl TranslationEntry {
    /// Convert into a result, unescaping HTML entities the service may emit
    pub fn into_result(self, pinned_source: Option<&str>) -> TranslationResult {
        let detected_source_language = pinned_source
            .map(str::to_string)
            .or(self.detected_source_language)
            .unwrap_or_default();

        TranslationResult {
            translated_text: html_escape::decode_html_entities(&self.translated_text).into_owned(),
            detected_source_language,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetectionsData {
    pub detections: Vec<Vec<DetectionEntry>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetectionEntry {
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguagesData {
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageEntry {
    pub language: String,
    pub name: String,
}

impl From<LanguageEntry> for Language {
    fn from(entry: LanguageEntry) -> Self {
        Self {
            code: entry.language,
            display_name: entry.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_unescapes_entities() {
        let entry: TranslationEntry = serde_json::from_str(
            r#"{"translatedText":"Tom &amp; Jerry&#39;s &quot;show&quot;","detectedSourceLanguage":"en"}"#,
        )
        .unwrap();

        let result = entry.into_result(None);
        assert_eq!(result.translated_text, "Tom & Jerry's \"show\"");
        assert_eq!(result.detected_source_language, "en");
    }

    #[test]
    fn test_pinned_source_wins() {
        let entry: TranslationEntry =
            serde_json::from_str(r#"{"translatedText":"Hola"}"#).unwrap();

        assert_eq!(entry.into_result(Some("en")).detected_source_language, "en");
    }

    #[test]
    fn test_missing_detected_language_is_empty() {
        let entry: TranslationEntry =
            serde_json::from_str(r#"{"translatedText":"Hola"}"#).unwrap();

        assert_eq!(entry.into_result(None).detected_source_language, "");
    }

    #[test]
    fn test_detection_entry_ignores_scores() {
        let data: DetectionsData = serde_json::from_str(
            r#"{"detections":[[{"language":"fr","isReliable":false,"confidence":0.98}]]}"#,
        )
        .unwrap();

        assert_eq!(data.detections[0][0].language, "fr");
    }

    #[test]
    fn test_language_entry_requires_name() {
        let parsed: std::result::Result<LanguageEntry, _> =
            serde_json::from_str(r#"{"language":"es"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_request_builder() {
        let request = TranslationRequest::new("Hello", "es").with_source_lang("en");
        assert_eq!(request.source_lang.as_deref(), Some("en"));
        assert_eq!(request.target_lang, "es");
    }
}
