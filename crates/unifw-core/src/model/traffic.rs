// ── Traffic filter domain types ──

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::attr::Attr;

/// Source or destination filter of a firewall rule, as held in local state.
///
/// Any subset of the sub-filters may be set. `None` means "not configured",
/// which is different from a configured filter with no items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficFilter {
    /// Discriminator, e.g. `ALL`, `CUSTOM`.
    #[serde(rename = "type")]
    pub filter_type: String,

    /// Legacy single-MAC form.
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub mac_address: Attr<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_filter: Option<PortFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_filter: Option<SetFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address_filter: Option<SetFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_filter: Option<SetFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_filter: Option<DomainFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortFilter {
    #[serde(rename = "type", default, skip_serializing_if = "Attr::is_null")]
    pub filter_type: Attr<String>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub match_opposite: Attr<bool>,
    #[serde(default)]
    pub items: Vec<PortItem>,
}

/// A single port (`value`) or a range (`start`..=`stop`), selected by `item_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortItem {
    #[serde(rename = "type", default, skip_serializing_if = "Attr::is_null")]
    pub item_type: Attr<String>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub value: Attr<i32>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub start: Attr<i32>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub stop: Attr<i32>,
}

#[cfg(test)]
impl PortItem {
    /// Single port entry.
    pub fn port(item_type: &str, value: i32) -> Self {
        Self {
            item_type: Attr::Value(item_type.to_owned()),
            value: Attr::Value(value),
            ..Self::default()
        }
    }

    /// Inclusive port range entry.
    pub fn range(item_type: &str, start: i32, stop: i32) -> Self {
        Self {
            item_type: Attr::Value(item_type.to_owned()),
            start: Attr::Value(start),
            stop: Attr::Value(stop),
            ..Self::default()
        }
    }
}

/// Set-valued filter shared by the IP, MAC and network sub-filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFilter {
    #[serde(rename = "type", default, skip_serializing_if = "Attr::is_null")]
    pub filter_type: Attr<String>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub match_opposite: Attr<bool>,
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub items: Attr<BTreeSet<String>>,
}

impl SetFilter {
    #[cfg(test)]
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: Attr::Value(items.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Items in set order; unset or unknown items yield an empty list.
    pub fn item_list(&self) -> Vec<String> {
        set_items(&self.items)
    }
}

/// Domain filter. Has no local type; the wire type is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFilter {
    #[serde(default, skip_serializing_if = "Attr::is_null")]
    pub items: Attr<BTreeSet<String>>,
}

impl DomainFilter {
    pub fn item_list(&self) -> Vec<String> {
        set_items(&self.items)
    }
}

fn set_items(items: &Attr<BTreeSet<String>>) -> Vec<String> {
    items
        .value()
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default()
}
