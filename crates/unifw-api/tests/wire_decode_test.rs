//! Decoding of full controller payloads.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use unifw_api::{FirewallPolicy, MacAddressFilterValue, TrafficFilter};

const POLICY_BODY: &str = r#"{
    "id": "7c1e4f0a-9f3b-4d2e-8a61-2b9d3c4e5f60",
    "name": "Block IoT to NAS",
    "action": "BLOCK",
    "enabled": true,
    "protocol": {"name": "TCP"},
    "source": {
        "type": "CUSTOM",
        "macAddressFilter": {"macAddresses": ["AA:BB:CC:00:11:22"]},
        "networkFilter": {"matchOpposite": false, "networkIds": ["net-iot"]}
    },
    "destination": {
        "type": "CUSTOM",
        "portFilter": {
            "type": "PORTS",
            "matchOpposite": false,
            "items": [
                {"type": "PORT_NUMBER_RANGE", "start": 8000, "stop": 8100},
                {"type": "PORT_NUMBER", "value": 445}
            ]
        },
        "ipAddressFilter": {
            "type": "IP_ADDRESSES",
            "matchOpposite": false,
            "items": [{"type": "IP_ADDRESS", "value": "10.0.10.5"}]
        },
        "domainFilter": {"type": "DOMAINS", "domains": ["nas.lan"]}
    }
}"#;

#[test]
fn decodes_full_policy() {
    let policy: FirewallPolicy = serde_json::from_str(POLICY_BODY).unwrap();

    assert_eq!(policy.name, "Block IoT to NAS");
    assert_eq!(
        policy
            .protocol
            .as_ref()
            .and_then(|p| p.non_empty_str("name")),
        Some("TCP")
    );

    let source = policy.source.unwrap();
    assert!(matches!(
        source.mac_address_filter,
        Some(MacAddressFilterValue::Structured(_))
    ));
    assert_eq!(source.network_filter.unwrap().network_ids, vec!["net-iot"]);

    let destination = policy.destination.unwrap();
    let ports = destination.port_filter.unwrap();
    assert_eq!(ports.items.len(), 2);
    assert_eq!(ports.items[0].start, 8000);
    assert_eq!(ports.items[0].value, 0);
    assert_eq!(destination.domain_filter.unwrap().domains, vec!["nas.lan"]);
}

#[test]
fn malformed_port_filter_is_rejected() {
    let body = r#"{"type": "CUSTOM", "portFilter": "oops"}"#;
    assert!(serde_json::from_str::<TrafficFilter>(body).is_err());
}
