//! Cloud Translator - typed async client for the Cloud Translation v2 HTTP API
//!
//! This library wraps translation, batch translation, language detection and
//! supported-language listing behind a single [`TranslationClient`].

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::ClientConfig,
    errors::{ErrorKind, Result, TranslationError},
    handler::{ErrorHandler, LogErrorHandler},
    identity::AppIdentity,
    models::{Language, TranslationRequest, TranslationResult},
    transport::{HttpRequest, HttpResponse, HttpTransport, Method, RequestBody, ReqwestTransport},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
