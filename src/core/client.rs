//! Async client for the translation HTTP API

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::handler::{ErrorHandler, LogErrorHandler};
use crate::core::models::{
    DetectionsData, Envelope, Language, LanguagesData, TranslationRequest, TranslationResult,
    TranslationsData,
};
use crate::core::transport::{HttpRequest, HttpTransport, Method, RequestBody, ReqwestTransport};

/// Display language used by [`TranslationClient::supported_languages`]
pub const DEFAULT_DISPLAY_LANGUAGE: &str = "en";

const DETECT_PATH: &str = "detect";
const LANGUAGES_PATH: &str = "languages";

/// Translation client.
///
/// Each operation is one stateless round trip. Failures are reported to the
/// configured [`ErrorHandler`] and returned as a [`TranslationError`].
#[derive(Clone)]
pub struct TranslationClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
    error_handler: Arc<dyn ErrorHandler>,
}

impl std::fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationClient")
            .field("api_endpoint", &self.config.api_endpoint)
            .field("identity", &self.config.identity)
            .finish_non_exhaustive()
    }
}

impl TranslationClient {
    /// Create a client backed by a reqwest transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_parts(config, Arc::new(transport)))
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client over an arbitrary transport
    pub fn with_parts(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            error_handler: Arc::new(LogErrorHandler),
        }
    }

    /// Replace the error observer
    pub fn with_error_handler(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.error_handler = Arc::new(handler);
        self
    }

    /// Replace the transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Translate a single text, letting the service detect the source language
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<TranslationResult> {
        self.translate_request(&TranslationRequest::new(text, target_lang))
            .await
    }

    /// Translate a single request, optionally with a pinned source language
    pub async fn translate_request(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let mut fields = vec![
            ("target".to_string(), request.target_lang.clone()),
            ("q".to_string(), request.text.clone()),
        ];
        if let Some(source) = &request.source_lang {
            fields.push(("source".to_string(), source.clone()));
        }

        let http_request = self
            .request(Method::POST, "")
            .body(RequestBody::Form(fields));

        let pinned = request.source_lang.as_deref();
        self.call("translate", http_request, |data: TranslationsData| {
            data.translations
                .into_iter()
                .next()
                .map(|entry| entry.into_result(pinned))
                .ok_or_else(|| TranslationError::parse("data.translations is empty"))
        })
        .await
    }

    /// Translate several texts in one request.
    ///
    /// Results keep input order. The call fails as a whole if any part of the
    /// response is malformed.
    pub async fn translate_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
        target_lang: &str,
    ) -> Result<Vec<TranslationResult>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let body = serde_json::json!({
            "target": target_lang,
            "q": texts.iter().map(|t| t.as_ref()).collect::<Vec<&str>>(),
        });

        let http_request = self.request(Method::POST, "").body(RequestBody::Json(body));

        let expected = texts.len();
        self.call("translate_batch", http_request, |data: TranslationsData| {
            if data.translations.len() != expected {
                return Err(TranslationError::parse(format!(
                    "expected {} translations, got {}",
                    expected,
                    data.translations.len()
                )));
            }

            Ok(data
                .translations
                .into_iter()
                .map(|entry| entry.into_result(None))
                .collect())
        })
        .await
    }

    /// Detect the language of a text. `translated_text` is always empty.
    pub async fn detect_language(&self, text: &str) -> Result<TranslationResult> {
        let http_request = self
            .request(Method::POST, DETECT_PATH)
            .body(RequestBody::Form(vec![("q".to_string(), text.to_string())]));

        self.call("detect_language", http_request, |data: DetectionsData| {
            let detection = data
                .detections
                .into_iter()
                .next()
                .and_then(|candidates| candidates.into_iter().next())
                .ok_or_else(|| TranslationError::parse("data.detections is empty"))?;

            Ok(TranslationResult {
                translated_text: String::new(),
                detected_source_language: detection.language,
            })
        })
        .await
    }

    /// List supported languages with names localized into `display_language`
    pub async fn list_supported_languages(&self, display_language: &str) -> Result<Vec<Language>> {
        let http_request = self
            .request(Method::GET, LANGUAGES_PATH)
            .query("target", display_language);

        self.call("list_supported_languages", http_request, |data: LanguagesData| {
            Ok(data.languages.into_iter().map(Language::from).collect())
        })
        .await
    }

    /// List supported languages with English display names
    pub async fn supported_languages(&self) -> Result<Vec<Language>> {
        self.list_supported_languages(DEFAULT_DISPLAY_LANGUAGE).await
    }

    /// Base request for a path: API key query parameter plus identity headers
    fn request(&self, method: Method, path: &str) -> HttpRequest {
        let mut request = HttpRequest::new(method, self.config.endpoint_url(path))
            .query("key", self.config.api_key.clone());

        for (name, value) in self.config.identity.headers() {
            request = request.header(name, value);
        }

        request
    }

    /// Send the request, check the status and map the `data` envelope.
    /// Every failure goes through the error handler once.
    async fn call<T, R, F>(&self, operation: &str, request: HttpRequest, extract: F) -> Result<R>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> Result<R>,
    {
        debug!("{}: {} {}", operation, request.method, request.url);

        let outcome = match self.transport.execute(request).await {
            Ok(response) if response.status == 200 => {
                serde_json::from_str::<Envelope<T>>(&response.body)
                    .map_err(|e| TranslationError::parse(e))
                    .and_then(|envelope| extract(envelope.data))
            }
            Ok(response) => Err(TranslationError::ApiError {
                status: response.status,
                body: response.body,
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = &outcome {
            self.error_handler.on_error(e);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::AppIdentity;
    use crate::core::transport::HttpResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedTransport {
        response: HttpResponse,
        seen: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl HttpTransport for FixedTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.seen.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    fn client_with(body: &str, identity: AppIdentity) -> (TranslationClient, Arc<FixedTransport>) {
        let transport = Arc::new(FixedTransport {
            response: HttpResponse::new(200, body),
            seen: Mutex::new(Vec::new()),
        });
        let config = ClientConfig::new("secret").with_identity(identity);
        (
            TranslationClient::with_parts(config, transport.clone()),
            transport,
        )
    }

    #[test]
    fn test_client_creation() {
        assert!(TranslationClient::new(ClientConfig::new("test_key")).is_ok());
    }

    #[test]
    fn test_pinned_source_is_sent() {
        let (client, transport) = client_with(
            r#"{"data":{"translations":[{"translatedText":"Hola"}]}}"#,
            AppIdentity::Unknown,
        );

        let request = TranslationRequest::new("Hello", "es").with_source_lang("en");
        let result = tokio_test::block_on(client.translate_request(&request)).unwrap();
        assert_eq!(result.detected_source_language, "en");

        let seen = transport.seen.lock().unwrap();
        match &seen[0].body {
            RequestBody::Form(fields) => {
                assert!(fields.contains(&("source".to_string(), "en".to_string())));
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_identity_headers_attached() {
        let (client, transport) = client_with(
            r#"{"data":{"languages":[]}}"#,
            AppIdentity::Android {
                package: "com.example".to_string(),
                cert: "AB:CD".to_string(),
            },
        );

        let languages = tokio_test::block_on(client.supported_languages()).unwrap();
        assert!(languages.is_empty());

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].header_value("X-Android-Package"), Some("com.example"));
        assert_eq!(seen[0].header_value("X-Android-Cert"), Some("AB:CD"));
        assert_eq!(seen[0].query_value("target"), Some(DEFAULT_DISPLAY_LANGUAGE));
    }

    #[test]
    fn test_empty_batch_skips_request() {
        let (client, transport) = client_with("{}", AppIdentity::Unknown);

        let results = tokio_test::block_on(client.translate_batch::<&str>(&[], "es")).unwrap();
        assert!(results.is_empty());
        assert!(transport.seen.lock().unwrap().is_empty());
    }
}
