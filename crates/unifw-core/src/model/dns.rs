// ── DNS policy domain types ──

use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::attr::Attr;

/// DNS policy record kind. Parsing is exact: the controller only knows the
/// upper-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum DnsPolicyType {
    #[strum(serialize = "A_RECORD")]
    ARecord,
    #[strum(serialize = "AAAA_RECORD")]
    AaaaRecord,
    #[strum(serialize = "CNAME_RECORD")]
    CnameRecord,
    #[strum(serialize = "MX_RECORD")]
    MxRecord,
    #[strum(serialize = "TXT_RECORD")]
    TxtRecord,
    #[strum(serialize = "SRV_RECORD")]
    SrvRecord,
    #[strum(serialize = "FORWARD_DOMAIN")]
    ForwardDomain,
}

/// DNS policy as held in local state.
///
/// `policy_type` and `domain` are required and kept as the raw configured
/// strings; the record fields apply depending on `policy_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsPolicyModel {
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub id: Attr<String>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub site_id: Attr<String>,
    #[serde(rename = "type")]
    pub policy_type: String,
    pub domain: String,
    /// Defaults to enabled when unset.
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub enabled: Attr<bool>,

    // Forwarding
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub target: Attr<String>,

    // Records
    /// A / AAAA.
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub ip_address: Attr<String>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub cname: Attr<String>,
    /// MX or SRV, depending on `policy_type`.
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub priority: Attr<i64>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub weight: Attr<i64>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub port: Attr<i64>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub text: Attr<String>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub ttl: Attr<i64>,
}

impl DnsPolicyModel {
    /// Parsed record kind; `None` for strings the controller may know but we don't.
    pub fn kind(&self) -> Option<DnsPolicyType> {
        self.policy_type.parse().ok()
    }
}
