// ── Local-to-wire type conversions ──
//
// Bidirectional mapping between `unifw_core::model` and the `unifw_api` wire
// types. The `*_to_wire` functions build request bodies from planned state;
// the `*_from_wire` / `apply_*` functions turn controller responses back
// into state. None of them fail.

pub mod dns;
pub mod policy;
pub mod protocol;
pub mod traffic;

pub use dns::{apply_dns_policy, dns_policy_to_wire};
pub use policy::{firewall_policy_from_wire, firewall_policy_to_wire};
pub use protocol::{
    ProtocolFilterType, protocol_filter_type_from_wire, protocol_from_wire, protocol_to_wire,
};
pub use traffic::{ip_item_type, traffic_filter_from_wire, traffic_filter_to_wire};
