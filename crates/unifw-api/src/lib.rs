// unifw-api: Wire-format types for the UniFi firewall API (DNS policies + traffic filters)

pub mod dns;
pub mod error;
pub mod firewall;
pub mod transport;

pub use dns::DnsPolicy;
pub use error::Error;
pub use firewall::{
    DomainFilter, FirewallPolicy, IpAddressFilter, IpAddressItem, MacAddressFilter,
    MacAddressFilterValue, NetworkFilter, PortFilter, PortItem, ProtocolSpec, TrafficFilter,
};
pub use transport::DnsPolicyApi;
