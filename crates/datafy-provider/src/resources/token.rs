//! `datafy_token` resource and data source
//!
//! Tokens are immutable on the API side; every configurable attribute
//! forces replacement. The secret is returned once, by create, and must
//! be preserved from prior state afterwards.

use std::sync::Arc;

use async_trait::async_trait;
use datafy_api::{Client, CreateAccountTokenRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::duration::parse_go_duration;
use crate::error::{ProviderError, Result};
use crate::resource::{DataSource, Resource, from_value, to_value};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenModel {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ttl: Option<String>,
    #[serde(default)]
    pub role_ids: Vec<String>,
    #[serde(default)]
    pub token_id: String,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub struct TokenResource {
    client: Arc<Client>,
}

impl TokenResource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Resource for TokenResource {
    fn type_name(&self) -> &'static str {
        "datafy_token"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Create a Datafy token, which represents an access token associated with a Datafy account.",
            vec![
                Attribute::string("account_id")
                    .describe("The unique identifier of the Datafy account.")
                    .required()
                    .requires_replace(),
                Attribute::string("description")
                    .describe("A description of the token.")
                    .requires_replace(),
                Attribute::duration("ttl")
                    .describe("The expiration time of the token.")
                    .requires_replace(),
                Attribute::string_list("role_ids")
                    .describe("A list of role IDs associated with the token.")
                    .required()
                    .requires_replace(),
                Attribute::string("secret")
                    .describe("The secret value of the token.")
                    .computed()
                    .sensitive(),
                Attribute::string("token_id")
                    .describe("The unique identifier of the Datafy token.")
                    .computed(),
                Attribute::string("expires")
                    .describe("The time when the token will expire.")
                    .computed(),
                Attribute::string("created_at")
                    .describe("The time when the token was created.")
                    .computed(),
            ],
        )
    }

    async fn create(&self, plan: &Value) -> Result<Value> {
        let mut model: TokenModel = from_value(plan)?;

        let ttl = parse_go_duration(model.ttl.as_deref().unwrap_or_default())
            .map_err(|e| ProviderError::invalid("ttl", e))?;

        let token = self
            .client
            .create_account_token(&CreateAccountTokenRequest {
                account_id: model.account_id.clone(),
                description: model.description.clone(),
                ttl,
                role_ids: model.role_ids.clone(),
            })
            .await
            .map_err(|e| ProviderError::api("Could not create account token", e))?;

        model.token_id = token.token_id;
        model.secret = token.secret;
        model.expires = Some(token.expires.to_rfc3339());
        model.created_at = Some(token.created_at.to_rfc3339());
        to_value(&model)
    }

    async fn read(&self, state: &Value) -> Result<Value> {
        let mut model: TokenModel = from_value(state)?;

        let token = self
            .client
            .get_account_token(&model.account_id, &model.token_id)
            .await
            .map_err(|e| ProviderError::api("Could not read account token", e))?;

        // The secret never comes back after create; keep the stored one.
        model.description = token.description;
        model.role_ids = token.role_ids;
        model.expires = Some(token.expires.to_rfc3339());
        model.created_at = Some(token.created_at.to_rfc3339());
        to_value(&model)
    }

    async fn update(&self, state: &Value, plan: &Value) -> Result<Value> {
        // Every configurable attribute forces replacement, so update is
        // a pure state write; computed attributes carry over.
        let prior: TokenModel = from_value(state)?;
        let mut model: TokenModel = from_value(plan)?;

        if model.secret.is_none() {
            model.secret = prior.secret;
        }
        if model.token_id.is_empty() {
            model.token_id = prior.token_id;
        }
        if model.expires.is_none() {
            model.expires = prior.expires;
        }
        if model.created_at.is_none() {
            model.created_at = prior.created_at;
        }
        to_value(&model)
    }

    async fn delete(&self, state: &Value) -> Result<()> {
        let model: TokenModel = from_value(state)?;

        self.client
            .delete_account_token(&model.account_id, &model.token_id)
            .await
            .map_err(|e| ProviderError::api("Could not delete account token", e))?;
        Ok(())
    }
}

pub struct TokenDataSource {
    client: Arc<Client>,
}

impl TokenDataSource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

/// Data-source view: no ttl and no secret
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenDataModel {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub token_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub role_ids: Vec<String>,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[async_trait]
impl DataSource for TokenDataSource {
    fn type_name(&self) -> &'static str {
        "datafy_token"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Datafy token data source",
            vec![
                Attribute::string("account_id")
                    .describe("The unique identifier of the Datafy account.")
                    .required(),
                Attribute::string("token_id")
                    .describe("The unique identifier of the Datafy token.")
                    .required(),
                Attribute::string("description")
                    .describe("A description of the token.")
                    .computed(),
                Attribute::string_list("role_ids")
                    .describe("A list of role IDs associated with the token.")
                    .computed(),
                Attribute::string("expires")
                    .describe("The time when the token will expire.")
                    .computed(),
                Attribute::string("created_at")
                    .describe("The time when the token was created.")
                    .computed(),
            ],
        )
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        let mut model: TokenDataModel = from_value(config)?;

        let token = self
            .client
            .get_account_token(&model.account_id, &model.token_id)
            .await
            .map_err(|e| ProviderError::api("Could not read account token", e))?;

        model.description = token.description;
        model.role_ids = token.role_ids;
        model.expires = Some(token.expires.to_rfc3339());
        model.created_at = Some(token.created_at.to_rfc3339());
        to_value(&model)
    }
}
