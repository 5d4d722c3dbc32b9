// unifw-core: Local firewall model, wire mapping, and resource orchestration.
//
// The mappers in `convert` are pure and infallible; `resource` drives them
// against a `unifw_api::DnsPolicyApi` transport.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod resource;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_SITE, ProviderConfig, TlsVerification};
pub use error::CoreError;
pub use resource::DnsPolicyResource;

pub use model::{
    Attr, DnsPolicyModel, DnsPolicyType, DomainFilter, FirewallPolicyModel, PortFilter, PortItem,
    SetFilter, TrafficFilter,
};
