//! `datafy_role_arn` resource and data source
//!
//! An account has at most one role ARN, so the adapter has no computed
//! id of its own; the account id is the address. The API upserts on
//! POST, which is why update re-creates.

use std::sync::Arc;

use async_trait::async_trait;
use datafy_api::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::resource::{DataSource, Resource, from_value, to_value};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleArnModel {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub arn: String,
}

pub struct RoleArnResource {
    client: Arc<Client>,
}

impl RoleArnResource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Resource for RoleArnResource {
    fn type_name(&self) -> &'static str {
        "datafy_role_arn"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Manages a Datafy role ARN, which represents an AWS IAM role associated with a Datafy account.",
            vec![
                Attribute::string("account_id")
                    .describe("The unique identifier of the Datafy account.")
                    .required(),
                Attribute::string("arn")
                    .describe("The Amazon Resource Name (ARN) of the IAM role.")
                    .required(),
            ],
        )
    }

    async fn create(&self, plan: &Value) -> Result<Value> {
        let model: RoleArnModel = from_value(plan)?;

        self.client
            .create_account_role_arn(&model.account_id, &model.arn)
            .await
            .map_err(|e| ProviderError::api("Could not create role arn", e))?;

        to_value(&model)
    }

    async fn read(&self, state: &Value) -> Result<Value> {
        let mut model: RoleArnModel = from_value(state)?;

        let role = self
            .client
            .get_account_role_arn(&model.account_id)
            .await
            .map_err(|e| ProviderError::api("Could not read role arn", e))?;

        model.arn = role.role_arn;
        to_value(&model)
    }

    async fn update(&self, _state: &Value, plan: &Value) -> Result<Value> {
        let model: RoleArnModel = from_value(plan)?;

        self.client
            .update_account_role_arn(&model.account_id, &model.arn)
            .await
            .map_err(|e| ProviderError::api("Could not update role arn", e))?;

        to_value(&model)
    }

    async fn delete(&self, state: &Value) -> Result<()> {
        let model: RoleArnModel = from_value(state)?;

        self.client
            .delete_account_role_arn(&model.account_id)
            .await
            .map_err(|e| ProviderError::api("Could not delete role arn", e))?;
        Ok(())
    }
}

pub struct RoleArnDataSource {
    client: Arc<Client>,
}

impl RoleArnDataSource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for RoleArnDataSource {
    fn type_name(&self) -> &'static str {
        "datafy_role_arn"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Datafy role ARN data source",
            vec![
                Attribute::string("account_id")
                    .describe("The unique identifier of the Datafy account.")
                    .required(),
                Attribute::string("arn")
                    .describe("The Amazon Resource Name (ARN) of the IAM role.")
                    .computed(),
            ],
        )
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        let mut model: RoleArnModel = from_value(config)?;

        let role = self
            .client
            .get_account_role_arn(&model.account_id)
            .await
            .map_err(|e| ProviderError::api("Could not read role arn", e))?;

        model.arn = role.role_arn;
        to_value(&model)
    }
}
