// ── Firewall policy conversion ──
//
// Composes the protocol and traffic filter mappers into the full policy body.

use unifw_api::FirewallPolicy;

use super::protocol::{protocol_filter_type_from_wire, protocol_from_wire, protocol_to_wire};
use super::traffic::{traffic_filter_from_wire, traffic_filter_to_wire};
use crate::model::{Attr, FirewallPolicyModel};

pub fn firewall_policy_to_wire(plan: &FirewallPolicyModel) -> FirewallPolicy {
    let protocol = match (plan.protocol_filter_type.value(), plan.protocol.value()) {
        (filter_type, Some(protocol)) => {
            protocol_to_wire(filter_type.map_or("", String::as_str), protocol)
        }
        (_, None) => None,
    };

    FirewallPolicy {
        id: plan.id.value().cloned(),
        name: plan.name.clone(),
        action: plan.action.clone(),
        enabled: plan.enabled.value().copied().unwrap_or(true),
        protocol,
        source: traffic_filter_to_wire(plan.source.as_ref()),
        destination: traffic_filter_to_wire(plan.destination.as_ref()),
    }
}

/// Build local state from a policy read back from the controller.
///
/// A filter type already held in `prior` wins over the one inferred from the
/// wire key, since `PROTOCOL` and `NAMED_PROTOCOL` both read back as `name`.
pub fn firewall_policy_from_wire(
    remote: &FirewallPolicy,
    prior: Option<&FirewallPolicyModel>,
) -> FirewallPolicyModel {
    let protocol = protocol_from_wire(remote.protocol.as_ref());

    let inferred = remote
        .protocol
        .as_ref()
        .and_then(protocol_filter_type_from_wire)
        .map(|t| t.as_ref().to_owned());
    let protocol_filter_type = match prior.map(|p| &p.protocol_filter_type) {
        Some(Attr::Value(known)) => Attr::Value(known.clone()),
        _ => inferred.into(),
    };

    FirewallPolicyModel {
        id: remote.id.clone().into(),
        name: remote.name.clone(),
        action: remote.action.clone(),
        enabled: Attr::Value(remote.enabled),
        protocol_filter_type,
        protocol: if protocol.is_empty() {
            Attr::Null
        } else {
            Attr::Value(protocol)
        },
        source: traffic_filter_from_wire(remote.source.as_ref()),
        destination: traffic_filter_from_wire(remote.destination.as_ref()),
    }
}
