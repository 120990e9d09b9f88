//! Collection reads: GET, normalize to a list, validate, decode.

use serde::de::DeserializeOwned;
use serde_json::Value;
use xpl_core::entities::{Domain, DomainList, Entry, Payload, Tag};
use xpl_core::enums::Component;

use crate::{XploadClient, error::ClientError, http::read_json};

impl XploadClient {
    /// Read every entry of `component`, or only entry `id` when given.
    ///
    /// With an id, a 404 from the service yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service returns a
    /// non-success status, the body is not JSON, or it breaks the entry
    /// contract.
    pub async fn fetch_entries(
        &self,
        component: Component,
        id: Option<i64>,
    ) -> Result<Vec<Entry>, ClientError> {
        self.fetch_as(component, id).await
    }

    /// Read the collection named `component` (`tags`, `domains`,
    /// `domain_lists`, `payloads`), or only entry `id` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidComponent`] for an unknown name, before
    /// any request is sent; otherwise as [`fetch_entries`](Self::fetch_entries).
    pub async fn fetch_collection(
        &self,
        component: &str,
        id: Option<i64>,
    ) -> Result<Vec<Entry>, ClientError> {
        let component: Component = component.parse()?;
        self.fetch_entries(component, id).await
    }

    /// Read payload intervals of `tag` that apply at `timestamp`.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_entries`](Self::fetch_entries).
    pub async fn fetch_payloads(&self, tag: &str, timestamp: u64) -> Result<Vec<Entry>, ClientError> {
        let url = format!(
            "{}/payloadiovs/?gtName={}&majorIOV=0&minorIOV={timestamp}",
            self.base_url,
            urlencoding::encode(tag)
        );
        tracing::debug!(%url, tag, timestamp, "fetching payload intervals");
        let resp = self.http.get(&url).send().await?;
        let value = read_json(&url, resp).await?;
        self.decode_list(&url, value)
    }

    /// All tags, in the order the service lists them.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_entries`](Self::fetch_entries), plus
    /// [`ClientError::Decode`] if an entry lacks a tag field.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ClientError> {
        self.fetch_as(Component::Tags, None).await
    }

    /// All domains, in the order the service lists them.
    ///
    /// # Errors
    ///
    /// See [`list_tags`](Self::list_tags).
    pub async fn list_domains(&self) -> Result<Vec<Domain>, ClientError> {
        self.fetch_as(Component::Domains, None).await
    }

    /// All domain lists, in the order the service lists them.
    ///
    /// # Errors
    ///
    /// See [`list_tags`](Self::list_tags).
    pub async fn list_domain_lists(&self) -> Result<Vec<DomainList>, ClientError> {
        self.fetch_as(Component::DomainLists, None).await
    }

    /// All payload intervals, in the order the service lists them.
    ///
    /// # Errors
    ///
    /// See [`list_tags`](Self::list_tags).
    pub async fn list_payloads(&self) -> Result<Vec<Payload>, ClientError> {
        self.fetch_as(Component::Payloads, None).await
    }

    async fn fetch_as<T: DeserializeOwned>(
        &self,
        component: Component,
        id: Option<i64>,
    ) -> Result<Vec<T>, ClientError> {
        let mut url = self.endpoint_url(component.endpoint());
        if let Some(id) = id {
            url = format!("{url}/{id}");
        }

        tracing::debug!(%url, %component, "fetching entries");
        let resp = self.http.get(&url).send().await?;
        if id.is_some() && resp.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(%url, "entry not found");
            return Ok(Vec::new());
        }

        let value = read_json(&url, resp).await?;
        self.decode_list(&url, value)
    }

    /// Normalize to a list, validate it, then decode into `T`.
    fn decode_list<T: DeserializeOwned>(&self, url: &str, value: Value) -> Result<Vec<T>, ClientError> {
        let entries = match value {
            Value::Array(_) => value,
            single => Value::Array(vec![single]),
        };

        self.schemas
            .validate_entries(&entries)
            .map_err(|source| ClientError::Validation {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_value(entries).map_err(|e| ClientError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
