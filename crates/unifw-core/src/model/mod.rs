// ── Local domain model ──
//
// Strongly-typed configuration as the state layer holds it. Every optional
// field carries an explicit `Attr` marker so that "unset" and "empty" never
// collapse into each other during conversion.

pub mod attr;
pub mod dns;
pub mod policy;
pub mod traffic;

pub use attr::Attr;
pub use dns::{DnsPolicyModel, DnsPolicyType};
pub use policy::FirewallPolicyModel;
pub use traffic::{DomainFilter, PortFilter, PortItem, SetFilter, TrafficFilter};
