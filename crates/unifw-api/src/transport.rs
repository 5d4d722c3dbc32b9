// Transport seam for DNS policy CRUD.
//
// The HTTP client lives outside this workspace. Every call names its target
// site explicitly; implementations must not keep a mutable "current site".

use std::future::Future;

use crate::dns::DnsPolicy;
use crate::error::Error;

/// DNS policy operations against one controller.
pub trait DnsPolicyApi {
    /// `POST /sites/{site}/dns/policies` -- returns the created policy with its ID.
    fn create_dns_policy(
        &self,
        site: &str,
        policy: &DnsPolicy,
    ) -> impl Future<Output = Result<DnsPolicy, Error>> + Send;

    /// `GET /sites/{site}/dns/policies/{id}`
    fn get_dns_policy(
        &self,
        site: &str,
        id: &str,
    ) -> impl Future<Output = Result<DnsPolicy, Error>> + Send;

    /// `PUT /sites/{site}/dns/policies/{id}`
    fn update_dns_policy(
        &self,
        site: &str,
        id: &str,
        policy: &DnsPolicy,
    ) -> impl Future<Output = Result<DnsPolicy, Error>> + Send;

    /// `DELETE /sites/{site}/dns/policies/{id}`
    fn delete_dns_policy(
        &self,
        site: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}
