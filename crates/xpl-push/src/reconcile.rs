//! The four find-or-create stages of a push.

use xpl_client::ClientError;
use xpl_core::enums::ReadFailurePolicy;
use xpl_core::responses::{PushReport, Resolution, Stage};

use crate::error::PushError;
use crate::store::CalibrationStore;

/// Last element of `items` satisfying `pred`.
///
/// When several records share a natural key, the one listed last wins. Whether
/// "listed last" means "created last" depends on the store's ordering, which
/// is not guaranteed; the rule is applied as is.
pub fn last_match<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<&T> {
    items.iter().rev().find(|item| pred(item))
}

/// Runs pushes against a store.
pub struct Reconciler<'a, S> {
    store: &'a S,
    policy: ReadFailurePolicy,
}

impl<'a, S: CalibrationStore> Reconciler<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S, policy: ReadFailurePolicy) -> Self {
        Self { store, policy }
    }

    /// Make sure `payload_url` is registered for `tag`/`domain`, creating
    /// whatever part of the chain is missing.
    ///
    /// A payload already registered under the same domain list is left alone
    /// even when `start` differs from its interval: payload identity is
    /// `(url, domain list)` only.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Write`] as soon as a create fails, and
    /// [`PushError::Read`] when a list fails under
    /// [`ReadFailurePolicy::Abort`]. Earlier stages are not undone.
    pub async fn push(
        &self,
        tag: &str,
        domain: &str,
        payload_url: &str,
        start: u64,
    ) -> Result<PushReport, PushError> {
        let tag_res = self.resolve_tag(tag).await?;
        let domain_res = self.resolve_domain(domain).await?;
        let list_res = self.resolve_domain_list(tag_res, domain_res).await?;
        let payload_res = self
            .resolve_payload(payload_url, list_res.id, start)
            .await?;

        Ok(PushReport {
            tag: tag_res,
            domain: domain_res,
            domain_list: list_res,
            payload: payload_res,
        })
    }

    async fn resolve_tag(&self, name: &str) -> Result<Resolution, PushError> {
        let tags = self.settle(Stage::Tag, self.store.list_tags().await)?;
        if let Some(tag) = last_match(&tags, |t| t.name == name) {
            return Ok(Resolution::found(tag.id));
        }

        let id = self
            .store
            .create_tag(name)
            .await
            .map_err(|source| write_error(Stage::Tag, source))?;
        tracing::info!(tag = name, id, "tag does not exist, created");
        Ok(Resolution::created(id))
    }

    async fn resolve_domain(&self, name: &str) -> Result<Resolution, PushError> {
        let domains = self.settle(Stage::Domain, self.store.list_domains().await)?;
        if let Some(domain) = last_match(&domains, |d| d.name == name) {
            return Ok(Resolution::found(domain.id));
        }

        let id = self
            .store
            .create_domain(name)
            .await
            .map_err(|source| write_error(Stage::Domain, source))?;
        tracing::info!(domain = name, id, "domain does not exist, created");
        Ok(Resolution::created(id))
    }

    /// A binding can only be reused when both ends already existed; a freshly
    /// created tag or domain cannot be referenced by any listed binding.
    async fn resolve_domain_list(
        &self,
        tag: Resolution,
        domain: Resolution,
    ) -> Result<Resolution, PushError> {
        let lists = self.settle(Stage::DomainList, self.store.list_domain_lists().await)?;
        if !tag.is_created() && !domain.is_created() {
            if let Some(list) = last_match(&lists, |l| l.binds(tag.id, domain.id)) {
                return Ok(Resolution::found(list.id));
            }
        }

        let id = self
            .store
            .create_domain_list(tag.id, domain.id)
            .await
            .map_err(|source| write_error(Stage::DomainList, source))?;
        tracing::info!(tag_id = tag.id, domain_id = domain.id, id, "created domain list");
        Ok(Resolution::created(id))
    }

    async fn resolve_payload(
        &self,
        url: &str,
        domain_list_id: i64,
        start: u64,
    ) -> Result<Resolution, PushError> {
        let payloads = self.settle(Stage::Payload, self.store.list_payloads().await)?;
        if let Some(payload) = last_match(&payloads, |p| p.matches(url, domain_list_id)) {
            if payload.minor_iov != Some(start) {
                tracing::debug!(
                    payload = url,
                    existing = ?payload.minor_iov,
                    requested = start,
                    "payload already registered with a different interval start, keeping it"
                );
            }
            return Ok(Resolution::found(payload.id));
        }

        let id = self
            .store
            .create_payload(url, domain_list_id, start)
            .await
            .map_err(|source| write_error(Stage::Payload, source))?;
        tracing::info!(payload = url, domain_list_id, start, id, "payload does not exist, created");
        Ok(Resolution::created(id))
    }

    /// Apply the read-failure policy to a list result.
    fn settle<T>(&self, stage: Stage, result: Result<Vec<T>, ClientError>) -> Result<Vec<T>, PushError> {
        match (result, self.policy) {
            (Ok(items), _) => Ok(items),
            (Err(source), ReadFailurePolicy::Abort) => Err(PushError::Read { stage, source }),
            (Err(error), ReadFailurePolicy::TreatAsEmpty) => {
                tracing::warn!(%stage, %error, "lookup failed, treating collection as empty");
                Ok(Vec::new())
            }
        }
    }
}

fn write_error(stage: Stage, source: ClientError) -> PushError {
    PushError::Write { stage, source }
}
