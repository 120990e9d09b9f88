//! The seam between the reconciler and the remote store.

use xpl_client::{ClientError, XploadClient};
use xpl_core::entities::{Domain, DomainList, Payload, Tag};

/// List and create operations the reconciler needs from a store.
///
/// Lists return records in the store's order; the reconciler's last-match
/// rule depends on it. Implemented for [`XploadClient`]; tests substitute an
/// in-memory store.
#[allow(async_fn_in_trait)]
pub trait CalibrationStore {
    async fn list_tags(&self) -> Result<Vec<Tag>, ClientError>;
    async fn list_domains(&self) -> Result<Vec<Domain>, ClientError>;
    async fn list_domain_lists(&self) -> Result<Vec<DomainList>, ClientError>;
    async fn list_payloads(&self) -> Result<Vec<Payload>, ClientError>;

    /// Create a tag along with its type and status classifiers.
    async fn create_tag(&self, name: &str) -> Result<i64, ClientError>;
    async fn create_domain(&self, name: &str) -> Result<i64, ClientError>;
    async fn create_domain_list(&self, tag_id: i64, domain_id: i64) -> Result<i64, ClientError>;
    async fn create_payload(
        &self,
        url: &str,
        domain_list_id: i64,
        start: u64,
    ) -> Result<i64, ClientError>;
}

impl CalibrationStore for XploadClient {
    async fn list_tags(&self) -> Result<Vec<Tag>, ClientError> {
        Self::list_tags(self).await
    }

    async fn list_domains(&self) -> Result<Vec<Domain>, ClientError> {
        Self::list_domains(self).await
    }

    async fn list_domain_lists(&self) -> Result<Vec<DomainList>, ClientError> {
        Self::list_domain_lists(self).await
    }

    async fn list_payloads(&self) -> Result<Vec<Payload>, ClientError> {
        Self::list_payloads(self).await
    }

    async fn create_tag(&self, name: &str) -> Result<i64, ClientError> {
        Self::create_tag(self, name).await
    }

    async fn create_domain(&self, name: &str) -> Result<i64, ClientError> {
        Self::create_domain(self, name).await
    }

    async fn create_domain_list(&self, tag_id: i64, domain_id: i64) -> Result<i64, ClientError> {
        Self::create_domain_list(self, tag_id, domain_id).await
    }

    async fn create_payload(
        &self,
        url: &str,
        domain_list_id: i64,
        start: u64,
    ) -> Result<i64, ClientError> {
        Self::create_payload(self, url, domain_list_id, start).await
    }
}
