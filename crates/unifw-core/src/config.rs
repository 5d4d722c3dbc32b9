// ── Provider configuration ──
//
// Describes which controller the resources talk to and how. Carries
// credentials and connection tuning, but never touches disk; `unifw-config`
// builds one from a profile and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Site used when neither the resource nor the profile names one.
pub const DEFAULT_SITE: &str = "default";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs). Default for local controllers.
    #[default]
    DangerAcceptInvalid,
}

/// Connection settings for a single controller.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Controller URL (e.g., `https://192.168.1.1`).
    pub url: Url,
    /// Integration API key.
    pub api_key: SecretString,
    /// Default site for resources that don't pin one.
    pub site: String,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(url: Url, api_key: SecretString) -> Self {
        Self {
            url,
            api_key,
            site: DEFAULT_SITE.into(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn new_uses_default_site_and_timeout() {
        let config = ProviderConfig::new(
            "https://192.168.1.1".parse().unwrap(),
            SecretString::from("key".to_owned()),
        );
        assert_eq!(config.site, "default");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(config.api_key.expose_secret(), "key");
    }
}
