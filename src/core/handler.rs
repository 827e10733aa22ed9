//! Observer hook invoked with every failed operation

use tracing::debug;

use crate::core::errors::TranslationError;

/// Receives failure detail for every operation that fails.
///
/// The error is still returned to the caller; this hook is for logging and
/// metrics only.
pub trait ErrorHandler: Send + Sync {
    fn on_error(&self, error: &TranslationError);
}

impl<F> ErrorHandler for F
where
    F: Fn(&TranslationError) + Send + Sync,
{
    fn on_error(&self, error: &TranslationError) {
        self(error)
    }
}

/// Default handler: writes the failure to the debug log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorHandler;

impl ErrorHandler for LogErrorHandler {
    fn on_error(&self, error: &TranslationError) {
        debug!("Translation request failed: {}", error);
    }
}
