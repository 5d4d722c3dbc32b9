//! Firewall wire types: traffic filters, protocol specifiers, and the policy
//! envelope that carries them.
//!
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Absent sub-filters are skipped on serialization so an encoded filter never
//! carries placeholder objects. `null` lists from the controller decode as
//! empty lists.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

// ── Discriminator values ─────────────────────────────────────────────

/// Item type for a single IP address entry.
pub const IP_ADDRESS: &str = "IP_ADDRESS";
/// Item type for a CIDR subnet entry.
pub const SUBNET: &str = "SUBNET";
/// Local type reported for structured MAC address filters.
pub const MAC_ADDRESSES: &str = "MAC_ADDRESSES";
/// Local type reported for network filters.
pub const NETWORK: &str = "NETWORK";
/// Wire type sent for domain filters.
pub const DOMAINS: &str = "DOMAINS";

// ── Helpers ──────────────────────────────────────────────────────────

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &i32) -> bool {
    *n == 0
}

// ── Traffic filter ───────────────────────────────────────────────────

/// Source or destination traffic filter of a firewall policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficFilter {
    /// Discriminator, e.g. `ALL`, `CUSTOM`.
    #[serde(rename = "type", default)]
    pub filter_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_filter: Option<PortFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_filter: Option<IpAddressFilter>,
    /// Polymorphic: bare MAC string or a MAC address set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address_filter: Option<MacAddressFilterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_filter: Option<NetworkFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_filter: Option<DomainFilter>,
}

/// Port filter with single-port and range items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortFilter {
    #[serde(rename = "type", default)]
    pub filter_type: String,
    #[serde(default)]
    pub match_opposite: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<PortItem>,
}

/// One port filter entry.
///
/// `0` means "absent" for `value`, `start` and `stop`, and zero fields are
/// omitted when encoding. A genuine port 0 cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortItem {
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub value: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub start: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub stop: i32,
}

/// IP address / subnet filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddressFilter {
    #[serde(rename = "type", default)]
    pub filter_type: String,
    #[serde(default)]
    pub match_opposite: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<IpAddressItem>,
}

/// One IP filter entry, typed [`IP_ADDRESS`] or [`SUBNET`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddressItem {
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub value: String,
}

/// Structured MAC address set. Carries no type or match-opposite flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacAddressFilter {
    pub mac_addresses: Vec<String>,
}

// Objects only. A derived impl would also accept `[["aa:bb"]]` as a
// sequence of fields.
impl<'de> Deserialize<'de> for MacAddressFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let list = map
            .remove("macAddresses")
            .ok_or_else(|| <D::Error as de::Error>::missing_field("macAddresses"))?;
        let mac_addresses =
            serde_json::from_value(list).map_err(<D::Error as de::Error>::custom)?;
        Ok(Self { mac_addresses })
    }
}

/// The `macAddressFilter` field as the controller returns it.
///
/// Variants are tried top to bottom when decoding. `Raw` catches objects the
/// structured decoder rejects (e.g. mixed-type lists); `Unrecognized` keeps
/// decoding from failing on any other JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MacAddressFilterValue {
    Address(String),
    Structured(MacAddressFilter),
    Raw(Map<String, Value>),
    Unrecognized(Value),
}

/// Network filter over network IDs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFilter {
    #[serde(default)]
    pub match_opposite: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub network_ids: Vec<String>,
}

/// Domain filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainFilter {
    #[serde(rename = "type", default)]
    pub filter_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domains: Vec<String>,
}

// ── Protocol specifier ───────────────────────────────────────────────

/// Protocol specifier: an object with one of `name`, `preset`, `number` or
/// `value` set. `number` may arrive as a JSON string or a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolSpec(Map<String, Value>);

impl ProtocolSpec {
    pub const NAME: &'static str = "name";
    pub const PRESET: &'static str = "preset";
    pub const NUMBER: &'static str = "number";
    pub const VALUE: &'static str = "value";

    fn single(key: &str, value: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(key.to_owned(), Value::String(value.into()));
        Self(map)
    }

    /// `{"name": ...}`
    pub fn name(value: impl Into<String>) -> Self {
        Self::single(Self::NAME, value)
    }

    /// `{"preset": ...}`
    pub fn preset(value: impl Into<String>) -> Self {
        Self::single(Self::PRESET, value)
    }

    /// `{"number": "..."}` -- string form, as sent on write.
    pub fn number(value: impl Into<String>) -> Self {
        Self::single(Self::NUMBER, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Non-empty string stored under `key`.
    pub fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

impl From<Map<String, Value>> for ProtocolSpec {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ── Policy envelope ──────────────────────────────────────────────────

/// Firewall policy body as exchanged with the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// One of: `ALLOW`, `BLOCK`, `REJECT`.
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ProtocolSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TrafficFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<TrafficFilter>,
}
