//! DNS policy wire type.
//!
//! Record-specific fields share one flat object. Empty strings and zero
//! numbers mean "not set" and are omitted when encoding.

use serde::{Deserialize, Serialize};

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// DNS policy -- from `GET /sites/{siteId}/dns/policies/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsPolicy {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// One of: `A_RECORD`, `AAAA_RECORD`, `CNAME_RECORD`, `MX_RECORD`,
    /// `TXT_RECORD`, `SRV_RECORD`, `FORWARD_DOMAIN`.
    #[serde(rename = "type", default)]
    pub policy_type: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub enabled: bool,

    /// Upstream server for `FORWARD_DOMAIN`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv4_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cname: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mx_priority: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub srv_priority: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub srv_weight: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub srv_port: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub txt_text: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub ttl: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_fields_are_omitted() {
        let policy = DnsPolicy {
            policy_type: "A_RECORD".into(),
            domain: "nas.lan".into(),
            enabled: true,
            ipv4_address: "10.0.0.5".into(),
            ..DnsPolicy::default()
        };
        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            json!({
                "type": "A_RECORD",
                "domain": "nas.lan",
                "enabled": true,
                "ipv4Address": "10.0.0.5"
            })
        );
    }

    #[test]
    fn decodes_srv_fields() {
        let policy: DnsPolicy = serde_json::from_value(json!({
            "id": "66f1c0ffee",
            "type": "SRV_RECORD",
            "domain": "_sip._tcp.lan",
            "enabled": true,
            "srvPriority": 10,
            "srvWeight": 5,
            "srvPort": 5060,
            "ttl": 300
        }))
        .unwrap();
        assert_eq!(policy.srv_priority, 10);
        assert_eq!(policy.srv_weight, 5);
        assert_eq!(policy.srv_port, 5060);
        assert_eq!(policy.mx_priority, 0);
        assert_eq!(policy.ttl, 300);
    }
}
