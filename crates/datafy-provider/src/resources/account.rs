//! `datafy_account` resource and data source

use std::sync::Arc;

use async_trait::async_trait;
use datafy_api::{Client, CreateAccountRequest, UpdateAccountRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::resource::{DataSource, Resource, from_value, to_value};
use crate::schema::{Attribute, Schema};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub parent_account_id: String,
}

fn account_schema(description: &'static str, id_required: bool) -> Schema {
    let id = Attribute::string("id").describe("The unique identifier of the Datafy account.");
    let name = Attribute::string("name").describe("The name of the Datafy account.");
    let (id, name) = if id_required {
        (id.required(), name.computed())
    } else {
        (id.computed(), name.required())
    };
    Schema::new(
        description,
        vec![
            name,
            id,
            Attribute::string("parent_account_id")
                .describe("The unique identifier of the parent Datafy account.")
                .computed(),
        ],
    )
}

pub struct AccountResource {
    client: Arc<Client>,
}

impl AccountResource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Resource for AccountResource {
    fn type_name(&self) -> &'static str {
        "datafy_account"
    }

    fn schema(&self) -> Schema {
        account_schema("Create a Datafy account", false)
    }

    async fn create(&self, plan: &Value) -> Result<Value> {
        let mut model: AccountModel = from_value(plan)?;

        let account = self
            .client
            .create_account(&CreateAccountRequest {
                account_name: model.name.clone(),
            })
            .await
            .map_err(|e| ProviderError::api("Could not create account", e))?;

        model.id = account.account_id;
        model.parent_account_id = account.parent_account_id;
        to_value(&model)
    }

    async fn read(&self, state: &Value) -> Result<Value> {
        let mut model: AccountModel = from_value(state)?;

        let account = self
            .client
            .get_account(&model.id)
            .await
            .map_err(|e| ProviderError::api("Could not read account", e))?;

        model.name = account.account_name;
        model.parent_account_id = account.parent_account_id;
        to_value(&model)
    }

    async fn update(&self, _state: &Value, plan: &Value) -> Result<Value> {
        let model: AccountModel = from_value(plan)?;

        self.client
            .update_account(&UpdateAccountRequest {
                account_id: model.id.clone(),
                account_name: model.name.clone(),
            })
            .await
            .map_err(|e| ProviderError::api("Could not update account", e))?;

        to_value(&model)
    }

    async fn delete(&self, state: &Value) -> Result<()> {
        let model: AccountModel = from_value(state)?;

        self.client
            .delete_account(&model.id)
            .await
            .map_err(|e| ProviderError::api("Could not delete account", e))?;
        Ok(())
    }
}

pub struct AccountDataSource {
    client: Arc<Client>,
}

impl AccountDataSource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for AccountDataSource {
    fn type_name(&self) -> &'static str {
        "datafy_account"
    }

    fn schema(&self) -> Schema {
        account_schema("Datafy account data source", true)
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        let mut model: AccountModel = from_value(config)?;

        let account = self
            .client
            .get_account(&model.id)
            .await
            .map_err(|e| ProviderError::api("Could not read account", e))?;

        model.name = account.account_name;
        model.parent_account_id = account.parent_account_id;
        to_value(&model)
    }
}
