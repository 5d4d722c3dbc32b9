// ── Firewall policy domain types ──

use serde::{Deserialize, Serialize};

use super::attr::Attr;
use super::traffic::TrafficFilter;

/// Firewall policy as held in local state.
///
/// `protocol_filter_type` selects how `protocol` is sent: `PRESET`,
/// `PROTOCOL_NUMBER`, or `NAMED_PROTOCOL` (alias `PROTOCOL`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallPolicyModel {
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub id: Attr<String>,
    pub name: String,
    /// One of: `ALLOW`, `BLOCK`, `REJECT`.
    pub action: String,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub enabled: Attr<bool>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub protocol_filter_type: Attr<String>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub protocol: Attr<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TrafficFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<TrafficFilter>,
}
