//! Allow-listed writes: POST a parameter set, validate the single-entry
//! response, return the new id. No retries.

use serde_json::{Value, json};
use xpl_core::enums::WriteEndpoint;

use crate::{XploadClient, error::ClientError, http::read_json};

/// Name given to the tag type and tag status created with every new tag.
pub const DEFAULT_CLASSIFIER_NAME: &str = "test";

impl XploadClient {
    /// POST `params` to the endpoint named `endpoint` and return the new id.
    ///
    /// `endpoint` is a wire segment (`gt`) or an operation name
    /// (`tag-create`). Anything outside the allow-list is rejected before a
    /// request is built.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] for an unknown endpoint, and
    /// the same errors as [`post`](Self::post) otherwise.
    pub async fn post_entry(&self, endpoint: &str, params: &Value) -> Result<i64, ClientError> {
        let endpoint: WriteEndpoint = endpoint.parse()?;
        self.post(endpoint, params).await
    }

    /// POST `params` to `endpoint` and return the id of the created entry.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service returns a
    /// non-success status, or the body is not a single entry.
    pub async fn post(&self, endpoint: WriteEndpoint, params: &Value) -> Result<i64, ClientError> {
        let url = self.endpoint_url(endpoint.endpoint());
        tracing::debug!(%url, %endpoint, "posting entry");

        let resp = self.http.post(&url).json(params).send().await?;
        let value = read_json(&url, resp).await?;

        self.schemas
            .validate_entry(&value)
            .map_err(|source| ClientError::Validation {
                url: url.clone(),
                source,
            })?;

        let id = value
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| ClientError::Decode {
                url,
                reason: format!("id out of range in {value}"),
            })?;

        tracing::info!(%endpoint, id, "created entry");
        Ok(id)
    }

    /// Create a tag type classifier.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn create_tag_type(&self, name: &str) -> Result<i64, ClientError> {
        self.post(WriteEndpoint::TagType, &json!({ "name": name }))
            .await
    }

    /// Create a tag status classifier.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn create_tag_status(&self, name: &str) -> Result<i64, ClientError> {
        self.post(WriteEndpoint::TagStatus, &json!({ "name": name }))
            .await
    }

    /// Create a tag, together with a fresh type and status.
    ///
    /// The classifiers are created unconditionally, never looked up.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post). A failure after the classifiers were
    /// created leaves them behind.
    pub async fn create_tag(&self, name: &str) -> Result<i64, ClientError> {
        let type_id = self.create_tag_type(DEFAULT_CLASSIFIER_NAME).await?;
        let status_id = self.create_tag_status(DEFAULT_CLASSIFIER_NAME).await?;
        self.post(
            WriteEndpoint::Tag,
            &json!({ "name": name, "status": status_id, "type": type_id }),
        )
        .await
    }

    /// Create a domain.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn create_domain(&self, name: &str) -> Result<i64, ClientError> {
        self.post(WriteEndpoint::Domain, &json!({ "name": name }))
            .await
    }

    /// Bind `tag_id` to `domain_id`.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn create_domain_list(&self, tag_id: i64, domain_id: i64) -> Result<i64, ClientError> {
        self.post(
            WriteEndpoint::DomainList,
            &json!({ "global_tag": tag_id, "payload_type": domain_id }),
        )
        .await
    }

    /// Register payload `url` under `domain_list_id`, valid from `start`.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn create_payload(
        &self,
        url: &str,
        domain_list_id: i64,
        start: u64,
    ) -> Result<i64, ClientError> {
        self.post(
            WriteEndpoint::Payload,
            &json!({
                "payload_url": url,
                "payload_list": domain_list_id,
                "major_iov": 0,
                "minor_iov": start
            }),
        )
        .await
    }
}
