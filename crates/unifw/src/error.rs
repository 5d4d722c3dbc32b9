//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use unifw_config::ConfigError;
use unifw_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Drift ────────────────────────────────────────────────────────
    #[error("Round trip changed the wire payload")]
    #[diagnostic(
        code(unifw::drift),
        help("Compare the two renderings above; the differing field does not survive a read-back.")
    )]
    Drift,

    // ── Input ────────────────────────────────────────────────────────
    #[error("Could not read {}", .path.display())]
    #[diagnostic(code(unifw::input))]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {origin}")]
    #[diagnostic(code(unifw::json), help("Check the JSON contents and try again."))]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {origin}")]
    #[diagnostic(code(unifw::yaml), help("Check the YAML contents and try again."))]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unifw::validation))]
    Validation { field: String, reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(unifw::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    #[error("API error ({code}): {message}")]
    #[diagnostic(code(unifw::api_error))]
    Api { code: String, message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(unifw::profile_not_found),
        help("Available profiles: {available}\nConfig file: {path}")
    )]
    ProfileNotFound {
        name: String,
        available: String,
        path: String,
    },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(unifw::no_credentials),
        help(
            "Set api_key_env in the profile, store a key in the system keyring\n\
             (service 'unifw', entry '{profile}/api-key'), or set api_key."
        )
    )]
    NoCredentials { profile: String },

    #[error(transparent)]
    #[diagnostic(code(unifw::config))]
    Config(ConfigError),

    // ── Output ───────────────────────────────────────────────────────
    #[error("Failed to render output: {0}")]
    #[diagnostic(code(unifw::render))]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::USAGE,
            Self::ProfileNotFound { .. } | Self::NoCredentials { .. } | Self::Config(_) => {
                exit_code::CONFIG
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error mapping ────────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            other => CliError::Config(other),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                resource_type: entity_type,
                identifier,
            },
            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Api { message, code, .. } => CliError::Api {
                code: code.unwrap_or_default(),
                message,
            },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
            other @ (CoreError::Unsupported { .. }
            | CoreError::Timeout { .. }
            | CoreError::Internal(_)) => CliError::Api {
                code: "internal".into(),
                message: other.to_string(),
            },
        }
    }
}
