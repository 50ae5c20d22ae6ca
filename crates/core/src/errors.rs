use std::collections::HashMap;

use thiserror::Error;

/// Unified error type for the entire fundscope-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
///
/// The taxonomy is deliberately flat: any non-2xx or transport failure
/// collapses into `Api`/`Network` with a per-operation message, and
/// `Unauthenticated` is a control-flow signal for the caller (redirect to
/// the login route), never something to render as an error.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Auth ────────────────────────────────────────────────────────
    #[error("Authentication required")]
    Unauthenticated,

    // ── Validation ──────────────────────────────────────────────────
    /// Local validation failures, caught before any request is dispatched.
    /// Carries every violation at once so the caller can show them together.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Server-side registration rejection: field name → human-readable
    /// error strings, surfaced verbatim.
    #[error("Registration rejected: {}", format_field_errors(.0))]
    Rejected(HashMap<String, Vec<String>>),

    // ── Serialization / File ────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl CoreError {
    /// The route to navigate to instead of rendering this error, if any.
    /// `Unauthenticated` is a redirect to the login page, never a message.
    #[must_use]
    pub fn redirect(&self) -> Option<crate::models::route::Route> {
        match self {
            CoreError::Unauthenticated => Some(crate::models::route::Route::Login),
            _ => None,
        }
    }
}

fn format_field_errors(fields: &HashMap<String, Vec<String>>) -> String {
    let mut parts: Vec<String> = fields
        .iter()
        .map(|(field, msgs)| format!("{field}: {}", msgs.join(", ")))
        .collect();
    parts.sort();
    parts.join("; ")
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so a
        // token or search string never ends up in a displayed error.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
