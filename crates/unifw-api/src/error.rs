use thiserror::Error;

/// Top-level error type for the `unifw-api` crate.
///
/// Raised by transport implementations of [`DnsPolicyApi`](crate::DnsPolicyApi).
/// The wire types themselves never fail to convert; `unifw-core` maps these
/// into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Controller ──────────────────────────────────────────────────
    /// Structured error reported by the controller.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: u16,
    },

    /// The requested object does not exist on the given site.
    #[error("{resource} '{id}' not found on site '{site}'")]
    NotFound {
        resource: &'static str,
        id: String,
        site: String,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Platform ────────────────────────────────────────────────────
    /// Operation not supported on this controller platform.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Api { status: 404, .. })
    }
}
