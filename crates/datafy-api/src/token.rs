//! Access-token calls
//!
//! Tokens are immutable: the API exposes create, get and delete only.
//! The secret is returned once, in the create response.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

/// An access token scoped to an account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountToken {
    pub account_id: String,
    pub token_id: String,
    #[serde(default)]
    pub description: String,
    /// Only present in the create response
    #[serde(default)]
    pub secret: Option<String>,
    pub expires: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub role_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CreateAccountTokenRequest {
    pub account_id: String,
    pub description: String,
    /// Requested lifetime; sent to the API as whole minutes
    pub ttl: Duration,
    pub role_ids: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenBody<'a> {
    description: &'a str,
    expire_in_minutes: u64,
    role_ids: &'a [String],
}

impl Client {
    pub async fn create_account_token(
        &self,
        req: &CreateAccountTokenRequest,
    ) -> Result<AccountToken> {
        self.post_json(
            &format!("/api/v1/accounts/{}/tokens", req.account_id),
            &TokenBody {
                description: &req.description,
                expire_in_minutes: req.ttl.as_secs() / 60,
                role_ids: &req.role_ids,
            },
        )
        .await
    }

    pub async fn get_account_token(
        &self,
        account_id: &str,
        token_id: &str,
    ) -> Result<AccountToken> {
        self.get_json(&format!("/api/v1/accounts/{account_id}/tokens/{token_id}"))
            .await
    }

    pub async fn delete_account_token(&self, account_id: &str, token_id: &str) -> Result<()> {
        self.delete(&format!("/api/v1/accounts/{account_id}/tokens/{token_id}"))
            .await
    }
}
