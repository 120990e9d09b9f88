//! Shared HTTP response helpers for the reader and writer.
//!
//! Centralizes status-code checks and JSON body decoding so the reader and
//! writer modules stay focused on request construction and validation.

use serde_json::Value;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`ClientError::Api`] with the status code and response body.
pub async fn check_response(
    url: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            url: url.to_string(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Check the status, then decode the body as JSON.
///
/// A body that is not JSON (an HTML error page, an empty reply) becomes
/// [`ClientError::Decode`].
pub async fn read_json(url: &str, resp: reqwest::Response) -> Result<Value, ClientError> {
    let body = check_response(url, resp).await?.text().await?;
    parse_json(url, &body)
}

fn parse_json(url: &str, body: &str) -> Result<Value, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(500, "boom");
        let err = check_response("http://h/gt", resp).await.unwrap_err();
        match err {
            ClientError::Api {
                status, message, ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api, got {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response("http://h/gt", resp).await.is_ok());
    }

    #[tokio::test]
    async fn read_json_decodes_body() {
        let resp = mock_response(200, r#"[{"id": 1}]"#);
        let value = read_json("http://h/gt", resp).await.unwrap();
        assert_eq!(value, serde_json::json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn read_json_rejects_html_error_page() {
        let resp = mock_response(200, "<html><body>Bad Gateway</body></html>");
        let err = read_json("http://h/gt", resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[test]
    fn parse_json_rejects_empty_body() {
        assert!(matches!(
            parse_json("http://h/gt", ""),
            Err(ClientError::Decode { .. })
        ));
    }
}
