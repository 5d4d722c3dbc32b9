// ── DNS policy conversion ──
//
// Record fields are flat on both sides. The only polymorphic field is
// `priority`, which the controller stores under `mxPriority` or
// `srvPriority` depending on the record type.

use unifw_api::DnsPolicy;

use crate::model::{Attr, DnsPolicyModel, DnsPolicyType};

/// Build the request body for create/update. Only set fields are copied.
pub fn dns_policy_to_wire(plan: &DnsPolicyModel) -> DnsPolicy {
    let mut policy = DnsPolicy {
        id: plan.id.value().cloned().unwrap_or_default(),
        policy_type: plan.policy_type.clone(),
        domain: plan.domain.clone(),
        enabled: plan.enabled.value().copied().unwrap_or(true),
        target: plan.target.value_or_default(),
        ipv4_address: plan.ip_address.value_or_default(),
        cname: plan.cname.value_or_default(),
        srv_weight: plan.weight.value_or_default(),
        srv_port: plan.port.value_or_default(),
        txt_text: plan.text.value_or_default(),
        ttl: plan.ttl.value_or_default(),
        ..DnsPolicy::default()
    };

    if let Some(&priority) = plan.priority.value() {
        match plan.kind() {
            Some(DnsPolicyType::MxRecord) => policy.mx_priority = priority,
            Some(DnsPolicyType::SrvRecord) => policy.srv_priority = priority,
            _ => {}
        }
    }

    policy
}

/// Merge a policy read from the controller into local state.
///
/// Type, domain and enabled are always taken from the controller. Optional
/// fields are only overwritten when the controller reports a value, so an
/// empty or zero wire field keeps whatever state already held.
pub fn apply_dns_policy(state: &mut DnsPolicyModel, remote: &DnsPolicy) {
    if !remote.id.is_empty() {
        state.id = Attr::Value(remote.id.clone());
    }
    state.policy_type.clone_from(&remote.policy_type);
    state.domain.clone_from(&remote.domain);
    state.enabled = Attr::Value(remote.enabled);

    overlay_str(&mut state.target, &remote.target);
    overlay_str(&mut state.ip_address, &remote.ipv4_address);
    overlay_str(&mut state.cname, &remote.cname);
    overlay_str(&mut state.text, &remote.txt_text);

    let priority = match state.kind() {
        Some(DnsPolicyType::MxRecord) => remote.mx_priority,
        Some(DnsPolicyType::SrvRecord) => remote.srv_priority,
        _ => 0,
    };
    overlay_num(&mut state.priority, priority);
    overlay_num(&mut state.weight, remote.srv_weight);
    overlay_num(&mut state.port, remote.srv_port);
    overlay_num(&mut state.ttl, remote.ttl);
}

fn overlay_str(field: &mut Attr<String>, remote: &str) {
    if !remote.is_empty() {
        *field = Attr::Value(remote.to_owned());
    }
}

fn overlay_num(field: &mut Attr<i64>, remote: i64) {
    if remote != 0 {
        *field = Attr::Value(remote);
    }
}
