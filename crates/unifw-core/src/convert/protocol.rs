// ── Protocol specifier conversion ──
//
// Local state holds a `(filter_type, protocol)` pair of plain strings. The
// wire side is an object keyed by `name`, `preset` or `number`. Names and
// presets are upper-cased on write; every string read back is lower-cased.

use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use unifw_api::ProtocolSpec;

/// How a protocol string is addressed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ProtocolFilterType {
    Preset,
    ProtocolNumber,
    #[strum(to_string = "NAMED_PROTOCOL", serialize = "PROTOCOL")]
    NamedProtocol,
}

impl ProtocolFilterType {
    /// Case-insensitive parse. Anything unrecognized is a named protocol.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::NamedProtocol)
    }
}

/// Keys checked on read, in priority order. `name` beats `preset` beats
/// `number` beats `value`; persisted state depends on this order.
const PROBE_ORDER: [&str; 4] = [
    ProtocolSpec::NAME,
    ProtocolSpec::PRESET,
    ProtocolSpec::NUMBER,
    ProtocolSpec::VALUE,
];

/// Build the wire protocol object. An empty protocol is "not set" and yields
/// `None`, never `{"name": ""}`.
pub fn protocol_to_wire(filter_type: &str, protocol: &str) -> Option<ProtocolSpec> {
    if protocol.is_empty() {
        return None;
    }

    let spec = match ProtocolFilterType::parse_lenient(filter_type) {
        ProtocolFilterType::Preset => ProtocolSpec::preset(protocol.to_uppercase()),
        ProtocolFilterType::ProtocolNumber => ProtocolSpec::number(protocol),
        // The controller requires upper-case names like "TCP" and "UDP".
        ProtocolFilterType::NamedProtocol => ProtocolSpec::name(protocol.to_uppercase()),
    };
    Some(spec)
}

/// Read the protocol string back from the wire, lower-cased.
///
/// Falls back to a numeric `number` (formatted without decimals), then to `""`.
pub fn protocol_from_wire(spec: Option<&ProtocolSpec>) -> String {
    let Some(spec) = spec else {
        return String::new();
    };

    if let Some(raw) = PROBE_ORDER.iter().find_map(|key| spec.non_empty_str(key)) {
        return raw.to_lowercase();
    }

    spec.get(ProtocolSpec::NUMBER)
        .and_then(format_protocol_number)
        .unwrap_or_default()
}

/// Infer which filter type produced a wire object, using the read priority order.
pub fn protocol_filter_type_from_wire(spec: &ProtocolSpec) -> Option<ProtocolFilterType> {
    if spec.non_empty_str(ProtocolSpec::NAME).is_some() {
        return Some(ProtocolFilterType::NamedProtocol);
    }
    if spec.non_empty_str(ProtocolSpec::PRESET).is_some() {
        return Some(ProtocolFilterType::Preset);
    }
    let numbered = match spec.get(ProtocolSpec::NUMBER) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(_)) => true,
        _ => false,
    };
    if numbered {
        return Some(ProtocolFilterType::ProtocolNumber);
    }
    spec.non_empty_str(ProtocolSpec::VALUE)
        .map(|_| ProtocolFilterType::NamedProtocol)
}

fn format_protocol_number(value: &Value) -> Option<String> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    n.as_f64().map(|f| format!("{f:.0}"))
}
