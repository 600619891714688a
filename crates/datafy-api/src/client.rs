//! HTTP plumbing shared by all Datafy API calls
//!
//! Requests carry bearer-token authentication, a fixed user agent and a
//! fixed timeout. Non-success responses are decoded from the API's
//! `{"message": "..."}` error body.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!(
    "datafy-provider/",
    env!("CARGO_PKG_VERSION"),
    " (datafy.io)"
);

/// Authenticated client for the Datafy REST API
pub struct Client {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl Client {
    /// Create a client against the given API endpoint (no trailing slash)
    pub fn new(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "calling Datafy API");
        self.http
            .request(method, format!("{}{}", self.endpoint, path))
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(&self.token)
            .header(header::USER_AGENT, USER_AGENT)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.request(Method::GET, path).send().await?;
        decode(resp, &[StatusCode::OK]).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self.request(Method::POST, path).json(body).send().await?;
        decode(resp, &[StatusCode::CREATED, StatusCode::OK]).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self.request(Method::PUT, path).json(body).send().await?;
        decode(resp, &[StatusCode::OK]).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let resp = self.request(Method::DELETE, path).send().await?;
        if resp.status() != StatusCode::OK {
            return Err(to_error(resp).await);
        }
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(resp: Response, accept: &[StatusCode]) -> Result<T> {
    if !accept.contains(&resp.status()) {
        return Err(to_error(resp).await);
    }
    Ok(resp.json().await?)
}

/// API error body, e.g. `{"message": "account not found"}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

async fn to_error(resp: Response) -> Error {
    let status = resp.status().as_u16();
    match resp.json::<ErrorBody>().await {
        Ok(body) => Error::Api {
            status,
            message: body.message,
        },
        Err(e) => Error::Request(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn sends_bearer_token_and_user_agent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/accounts/acc-123")
                .header("authorization", "Bearer secret-token")
                .header("user-agent", USER_AGENT);
            then.status(200).json_body(json!({
                "accountId": "acc-123",
                "accountName": "my-account",
                "parentAccountId": "parent-001",
            }));
        });

        let client = Client::new("secret-token", server.base_url());
        let account = client
            .get_json::<crate::Account>("/api/v1/accounts/acc-123")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(account.account_id, "acc-123");
    }

    #[tokio::test]
    async fn decodes_api_error_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/accounts/missing");
            then.status(404).json_body(json!({"message": "account not found"}));
        });

        let client = Client::new("dummy", server.base_url());
        let err = client
            .get_json::<crate::Account>("/api/v1/accounts/missing")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "status code 404: account not found"
        );
    }

    #[tokio::test]
    async fn error_body_without_message_field() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/accounts/acc-123");
            then.status(500).json_body(json!({}));
        });

        let client = Client::new("dummy", server.base_url());
        let err = client
            .get_json::<crate::Account>("/api/v1/accounts/acc-123")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "status code 500: ");
    }
}
