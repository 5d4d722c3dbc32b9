// ── Core error types ──
//
// Errors surfaced by resource operations. The mappers themselves never fail;
// everything here comes from the transport or from invalid local state.
// `From<unifw_api::Error>` translates transport errors into these variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Operation not supported: {operation}")]
    Unsupported { operation: String },

    #[error("Controller request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// Controller error code, when one was reported.
        code: Option<String>,
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<unifw_api::Error> for CoreError {
    fn from(err: unifw_api::Error) -> Self {
        match err {
            unifw_api::Error::NotFound { resource, id, site } => CoreError::NotFound {
                entity_type: resource.into(),
                identifier: format!("{id} (site {site})"),
            },
            unifw_api::Error::Api { status: 404, message, .. } => CoreError::NotFound {
                entity_type: "resource".into(),
                identifier: message,
            },
            unifw_api::Error::Api {
                message,
                code,
                status,
            } => CoreError::Api {
                message,
                code,
                status: Some(status),
            },
            unifw_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            unifw_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
            unifw_api::Error::UnsupportedOperation(op) => CoreError::Unsupported {
                operation: op.to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_404_becomes_not_found() {
        let err: CoreError = unifw_api::Error::Api {
            message: "policy gone".into(),
            code: None,
            status: 404,
        }
        .into();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn api_errors_keep_code_and_status() {
        let err: CoreError = unifw_api::Error::Api {
            message: "bad request".into(),
            code: Some("api.validation".into()),
            status: 400,
        }
        .into();
        match err {
            CoreError::Api { code, status, .. } => {
                assert_eq!(code.as_deref(), Some("api.validation"));
                assert_eq!(status, Some(400));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn transport_not_found_names_the_site() {
        let err: CoreError = unifw_api::Error::NotFound {
            resource: "DNS policy",
            id: "abc".into(),
            site: "branch".into(),
        }
        .into();
        assert_eq!(err.to_string(), "DNS policy not found: abc (site branch)");
    }
}
