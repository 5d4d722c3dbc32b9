// ── DNS policy resource ──
//
// Create/read/update/delete orchestration for DNS policies. Every transport
// call names its site explicitly: the site pinned on the model if known,
// else the provider's default. The resource holds no mutable state, so
// concurrent operations against different sites share one client freely.

use tracing::{debug, info, warn};

use unifw_api::DnsPolicyApi;

use crate::config::ProviderConfig;
use crate::convert::{apply_dns_policy, dns_policy_to_wire};
use crate::error::CoreError;
use crate::model::{Attr, DnsPolicyModel};

pub struct DnsPolicyResource<C> {
    client: C,
    default_site: String,
}

impl<C: DnsPolicyApi + Sync> DnsPolicyResource<C> {
    pub fn new(client: C, config: &ProviderConfig) -> Self {
        Self {
            client,
            default_site: config.site.clone(),
        }
    }

    /// Site a model's operations are sent to.
    pub fn site_for<'a>(&'a self, model: &'a DnsPolicyModel) -> &'a str {
        model
            .site_id
            .value()
            .map_or(self.default_site.as_str(), String::as_str)
    }

    /// Create the policy and return the resulting state, with the assigned
    /// ID and the site actually used recorded.
    pub async fn create(&self, plan: &DnsPolicyModel) -> Result<DnsPolicyModel, CoreError> {
        let site = self.site_for(plan);
        let mut body = dns_policy_to_wire(plan);
        body.id.clear();

        debug!(site, domain = %plan.domain, kind = %plan.policy_type, "creating DNS policy");
        let created = self.client.create_dns_policy(site, &body).await?;
        if created.id.is_empty() {
            return Err(CoreError::Internal(
                "controller returned a DNS policy without an ID".into(),
            ));
        }
        info!(site, id = %created.id, "created DNS policy");

        let mut state = plan.clone();
        state.id = Attr::Value(created.id);
        state.site_id = Attr::Value(site.to_owned());
        state.enabled = Attr::Value(body.enabled);
        Ok(state)
    }

    /// Refresh state from the controller.
    ///
    /// Returns `None` when the policy no longer exists, so the caller can
    /// drop it from state.
    pub async fn read(&self, state: &DnsPolicyModel) -> Result<Option<DnsPolicyModel>, CoreError> {
        let id = require_id(state)?;
        let site = self.site_for(state);

        debug!(site, id, "reading DNS policy");
        let remote = match self.client.get_dns_policy(site, id).await {
            Ok(remote) => remote,
            Err(e) if e.is_not_found() => {
                warn!(site, id, "DNS policy no longer exists");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut refreshed = state.clone();
        apply_dns_policy(&mut refreshed, &remote);
        Ok(Some(refreshed))
    }

    pub async fn update(&self, plan: &DnsPolicyModel) -> Result<DnsPolicyModel, CoreError> {
        let id = require_id(plan)?;
        let site = self.site_for(plan);
        let body = dns_policy_to_wire(plan);

        debug!(site, id, "updating DNS policy");
        self.client.update_dns_policy(site, id, &body).await?;
        info!(site, id, "updated DNS policy");

        let mut state = plan.clone();
        state.site_id = Attr::Value(site.to_owned());
        state.enabled = Attr::Value(body.enabled);
        Ok(state)
    }

    /// Delete the policy. A policy that is already gone counts as deleted.
    pub async fn delete(&self, state: &DnsPolicyModel) -> Result<(), CoreError> {
        let id = require_id(state)?;
        let site = self.site_for(state);

        debug!(site, id, "deleting DNS policy");
        match self.client.delete_dns_policy(site, id).await {
            Ok(()) => {
                info!(site, id, "deleted DNS policy");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!(site, id, "DNS policy already deleted");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Adopt an existing policy by ID. `site` falls back to the default site.
    pub async fn import(&self, id: &str, site: Option<&str>) -> Result<DnsPolicyModel, CoreError> {
        let seed = DnsPolicyModel {
            id: Attr::Value(id.to_owned()),
            site_id: Attr::Value(site.unwrap_or(self.default_site.as_str()).to_owned()),
            ..DnsPolicyModel::default()
        };
        self.read(&seed).await?.ok_or_else(|| CoreError::NotFound {
            entity_type: "DNS policy".into(),
            identifier: id.to_owned(),
        })
    }
}

fn require_id(model: &DnsPolicyModel) -> Result<&str, CoreError> {
    match &model.id {
        Attr::Value(id) if !id.is_empty() => Ok(id),
        _ => Err(CoreError::Validation {
            message: "DNS policy has no known ID".into(),
        }),
    }
}
