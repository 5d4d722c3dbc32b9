// ── Traffic filter conversion ──
//
// Local `TrafficFilter` <-> wire `unifw_api::TrafficFilter`.
//
// Round trips must not produce drift: port items are put into a canonical
// order on both write and read, IP item types are derived on every write instead of being
// stored, and the fixed `type` strings of the MAC, network and domain
// sub-filters are filled in by the conversion itself. Nothing here fails;
// unexpected wire shapes degrade to "absent".

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::debug;

use unifw_api::firewall::{self as wire, MacAddressFilterValue};

use crate::model::{Attr, DomainFilter, PortFilter, PortItem, SetFilter, TrafficFilter};

// ── Local → wire ───────────────────────────────────────────────────

/// Convert a local filter for sending. `None` stays `None`.
pub fn traffic_filter_to_wire(local: Option<&TrafficFilter>) -> Option<wire::TrafficFilter> {
    local.map(TrafficFilter::to_wire)
}

impl TrafficFilter {
    pub fn to_wire(&self) -> wire::TrafficFilter {
        // Scalar and structured MAC share one wire field; the set wins.
        let mut mac_address_filter = self
            .mac_address
            .value()
            .cloned()
            .map(MacAddressFilterValue::Address);
        if let Some(set) = &self.mac_address_filter {
            if mac_address_filter.is_some() {
                debug!("structured MAC filter shadows scalar mac_address");
            }
            mac_address_filter = Some(MacAddressFilterValue::Structured(wire::MacAddressFilter {
                mac_addresses: set.item_list(),
            }));
        }

        wire::TrafficFilter {
            filter_type: self.filter_type.clone(),
            port_filter: self.port_filter.as_ref().map(port_filter_to_wire),
            ip_address_filter: self.ip_address_filter.as_ref().map(ip_filter_to_wire),
            mac_address_filter,
            network_filter: self.network_filter.as_ref().map(network_filter_to_wire),
            domain_filter: self.domain_filter.as_ref().map(domain_filter_to_wire),
        }
    }
}

fn port_filter_to_wire(filter: &PortFilter) -> wire::PortFilter {
    let mut items: Vec<wire::PortItem> = filter
        .items
        .iter()
        .map(|item| wire::PortItem {
            item_type: item.item_type.value_or_default(),
            value: item.value.value_or_default(),
            start: item.start.value_or_default(),
            stop: item.stop.value_or_default(),
        })
        .collect();

    // Same order a read produces, so a read-back never reorders the payload.
    items.sort_by(compare_wire_port_items);

    wire::PortFilter {
        filter_type: filter.filter_type.value_or_default(),
        match_opposite: filter.match_opposite.value_or_default(),
        items,
    }
}

/// Wire item type for an IP filter entry: CIDR notation is a subnet.
pub fn ip_item_type(value: &str) -> &'static str {
    if value.contains('/') {
        wire::SUBNET
    } else {
        wire::IP_ADDRESS
    }
}

fn ip_filter_to_wire(filter: &SetFilter) -> wire::IpAddressFilter {
    wire::IpAddressFilter {
        filter_type: filter.filter_type.value_or_default(),
        match_opposite: filter.match_opposite.value_or_default(),
        items: filter
            .item_list()
            .into_iter()
            .map(|value| wire::IpAddressItem {
                item_type: ip_item_type(&value).to_owned(),
                value,
            })
            .collect(),
    }
}

fn network_filter_to_wire(filter: &SetFilter) -> wire::NetworkFilter {
    wire::NetworkFilter {
        match_opposite: filter.match_opposite.value_or_default(),
        network_ids: filter.item_list(),
    }
}

fn domain_filter_to_wire(filter: &DomainFilter) -> wire::DomainFilter {
    // Only domain-list filters are supported by this mapping.
    wire::DomainFilter {
        filter_type: wire::DOMAINS.to_owned(),
        domains: filter.item_list(),
    }
}

// ── Wire → local ───────────────────────────────────────────────────

/// Convert a filter read from the controller. `None` stays `None`.
pub fn traffic_filter_from_wire(remote: Option<&wire::TrafficFilter>) -> Option<TrafficFilter> {
    remote.map(TrafficFilter::from_wire)
}

impl TrafficFilter {
    pub fn from_wire(remote: &wire::TrafficFilter) -> Self {
        let mut local = TrafficFilter {
            filter_type: remote.filter_type.clone(),
            ..TrafficFilter::default()
        };

        match &remote.mac_address_filter {
            Some(MacAddressFilterValue::Address(mac)) => {
                local.mac_address = Attr::Value(mac.clone());
            }
            Some(MacAddressFilterValue::Structured(set)) => {
                local.mac_address_filter =
                    Some(mac_set_filter(set.mac_addresses.iter().cloned().collect()));
            }
            Some(MacAddressFilterValue::Raw(map)) => {
                local.mac_address_filter = raw_mac_addresses(map).map(mac_set_filter);
            }
            Some(MacAddressFilterValue::Unrecognized(other)) => {
                debug!(value = %other, "ignoring unrecognized macAddressFilter shape");
            }
            None => {}
        }

        local.port_filter = remote.port_filter.as_ref().map(port_filter_from_wire);

        local.ip_address_filter = remote.ip_address_filter.as_ref().map(|f| SetFilter {
            filter_type: Attr::Value(f.filter_type.clone()),
            match_opposite: Attr::Value(f.match_opposite),
            items: Attr::Value(f.items.iter().map(|item| item.value.clone()).collect()),
        });

        local.network_filter = remote.network_filter.as_ref().map(|f| SetFilter {
            filter_type: Attr::Value(wire::NETWORK.to_owned()),
            match_opposite: Attr::Value(f.match_opposite),
            items: Attr::Value(f.network_ids.iter().cloned().collect()),
        });

        local.domain_filter = remote.domain_filter.as_ref().map(|f| DomainFilter {
            items: Attr::Value(f.domains.iter().cloned().collect()),
        });

        local
    }
}

fn mac_set_filter(items: BTreeSet<String>) -> SetFilter {
    SetFilter {
        filter_type: Attr::Value(wire::MAC_ADDRESSES.to_owned()),
        match_opposite: Attr::Value(false),
        items: Attr::Value(items),
    }
}

/// MAC list from an untyped object. Non-string entries are skipped.
fn raw_mac_addresses(map: &Map<String, Value>) -> Option<BTreeSet<String>> {
    let list = map.get("macAddresses")?.as_array()?;
    debug!(entries = list.len(), "decoding macAddressFilter from untyped map");
    Some(
        list.iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
    )
}

/// Zero means "not set" on the wire.
fn non_zero(n: i32) -> Attr<i32> {
    if n == 0 { Attr::Null } else { Attr::Value(n) }
}

fn port_filter_from_wire(filter: &wire::PortFilter) -> PortFilter {
    let mut items: Vec<PortItem> = filter
        .items
        .iter()
        .map(|item| PortItem {
            item_type: Attr::Value(item.item_type.clone()),
            value: non_zero(item.value),
            start: non_zero(item.start),
            stop: non_zero(item.stop),
        })
        .collect();

    // The controller does not keep item order stable between reads.
    items.sort_by(compare_port_items);

    PortFilter {
        filter_type: Attr::Value(filter.filter_type.clone()),
        match_opposite: Attr::Value(filter.match_opposite),
        items,
    }
}

/// Canonical port item order: `(value, start, stop)` ascending with unset as
/// zero, then item type, so the order is total.
pub fn compare_port_items(a: &PortItem, b: &PortItem) -> Ordering {
    let key = |item: &PortItem| {
        (
            item.value.value_or_default(),
            item.start.value_or_default(),
            item.stop.value_or_default(),
        )
    };
    key(a)
        .cmp(&key(b))
        .then_with(|| a.item_type.value().cmp(&b.item_type.value()))
}

fn compare_wire_port_items(a: &wire::PortItem, b: &wire::PortItem) -> Ordering {
    (a.value, a.start, a.stop, &a.item_type).cmp(&(b.value, b.start, b.stop, &b.item_type))
}
