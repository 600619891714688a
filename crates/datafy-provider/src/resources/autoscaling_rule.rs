//! `datafy_autoscaling_rule` resource and data source
//!
//! The `rule` attribute is a JSON policy document carried as a string
//! and compared semantically, so formatting differences between what
//! was configured and what the API echoes back do not show up as drift.

use std::sync::Arc;

use async_trait::async_trait;
use datafy_api::{Client, CreateAutoscalingRuleRequest, UpdateAutoscalingRuleRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::resource::{DataSource, Resource, from_value, to_value};
use crate::schema::{Attribute, Schema};

const MODES: &[&str] = &["include", "exclude"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoscalingRuleModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub rule: String,
}

fn validate_mode(mode: &str) -> Result<()> {
    if MODES.contains(&mode) {
        return Ok(());
    }
    Err(ProviderError::invalid(
        "mode",
        format!("must be one of {MODES:?}, got {mode:?}"),
    ))
}

fn parse_policy(raw: &str) -> Result<Value> {
    serde_json::from_str(raw)
        .map_err(|e| ProviderError::invalid("rule", format!("not valid JSON: {e}")))
}

/// Keep the stored policy string when the remote one is semantically equal
fn reconcile_policy(stored: &str, remote: &str) -> String {
    match (
        serde_json::from_str::<Value>(stored),
        serde_json::from_str::<Value>(remote),
    ) {
        (Ok(a), Ok(b)) if a == b => stored.to_string(),
        _ => remote.to_string(),
    }
}

fn rule_schema(description: &'static str, for_data_source: bool) -> Schema {
    if for_data_source {
        return Schema::new(
            description,
            vec![
                Attribute::string("account_id")
                    .describe("The unique identifier of the Datafy account.")
                    .required(),
                Attribute::string("rule_id")
                    .describe("The unique identifier of the Datafy Autoscaling Rule.")
                    .required(),
                Attribute::bool("active")
                    .describe("Indicates whether the autoscaling rule is active or not.")
                    .computed(),
                Attribute::string("mode")
                    .describe("The mode of the autoscaling rule.")
                    .computed(),
                Attribute::json("rule")
                    .describe("The autoscaling rule policy.")
                    .computed(),
            ],
        );
    }
    Schema::new(
        description,
        vec![
            Attribute::string("id")
                .describe("The unique identifier of the Datafy Autoscaling Rule.")
                .computed(),
            Attribute::string("account_id")
                .describe("The unique identifier of the Datafy account.")
                .required()
                .requires_replace(),
            Attribute::bool("active")
                .describe("Indicates whether the autoscaling rule is active or not.")
                .required(),
            Attribute::string("mode")
                .describe("The mode of the autoscaling rule. One of `include` or `exclude`.")
                .required(),
            Attribute::json("rule")
                .describe("The autoscaling rule policy.")
                .required(),
        ],
    )
}

pub struct AutoscalingRuleResource {
    client: Arc<Client>,
}

impl AutoscalingRuleResource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Resource for AutoscalingRuleResource {
    fn type_name(&self) -> &'static str {
        "datafy_autoscaling_rule"
    }

    fn schema(&self) -> Schema {
        rule_schema("Create a Datafy Autoscaling Rule", false)
    }

    async fn create(&self, plan: &Value) -> Result<Value> {
        let mut model: AutoscalingRuleModel = from_value(plan)?;
        validate_mode(&model.mode)?;
        parse_policy(&model.rule)?;

        let rule = self
            .client
            .create_account_autoscaling_rule(&CreateAutoscalingRuleRequest {
                account_id: model.account_id.clone(),
                active: model.active,
                mode: model.mode.clone(),
                rule: model.rule.clone(),
            })
            .await
            .map_err(|e| ProviderError::api("Could not create account autoscaling rule", e))?;

        model.id = rule.rule_id;
        model.account_id = rule.account_id;
        model.active = rule.active;
        model.mode = rule.mode;
        model.rule = reconcile_policy(&model.rule, &rule.rule);
        to_value(&model)
    }

    async fn read(&self, state: &Value) -> Result<Value> {
        let mut model: AutoscalingRuleModel = from_value(state)?;

        let rule = self
            .client
            .get_account_autoscaling_rule(&model.account_id, &model.id)
            .await
            .map_err(|e| ProviderError::api("Could not read account autoscaling rule", e))?;

        model.id = rule.rule_id;
        model.account_id = rule.account_id;
        model.active = rule.active;
        model.mode = rule.mode;
        model.rule = reconcile_policy(&model.rule, &rule.rule);
        to_value(&model)
    }

    async fn update(&self, _state: &Value, plan: &Value) -> Result<Value> {
        let model: AutoscalingRuleModel = from_value(plan)?;
        validate_mode(&model.mode)?;
        parse_policy(&model.rule)?;

        self.client
            .update_account_autoscaling_rule(&UpdateAutoscalingRuleRequest {
                account_id: model.account_id.clone(),
                rule_id: model.id.clone(),
                active: model.active,
                mode: model.mode.clone(),
                rule: model.rule.clone(),
            })
            .await
            .map_err(|e| ProviderError::api("Could not update account autoscaling rule", e))?;

        to_value(&model)
    }

    async fn delete(&self, state: &Value) -> Result<()> {
        let model: AutoscalingRuleModel = from_value(state)?;

        self.client
            .delete_account_autoscaling_rule(&model.account_id, &model.id)
            .await
            .map_err(|e| ProviderError::api("Could not delete account autoscaling rule", e))?;
        Ok(())
    }
}

/// Data-source view: the rule is addressed by `rule_id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoscalingRuleDataModel {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub rule_id: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub rule: String,
}

pub struct AutoscalingRuleDataSource {
    client: Arc<Client>,
}

impl AutoscalingRuleDataSource {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for AutoscalingRuleDataSource {
    fn type_name(&self) -> &'static str {
        "datafy_autoscaling_rule"
    }

    fn schema(&self) -> Schema {
        rule_schema("Datafy Autoscaling Rule data source", true)
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        let mut model: AutoscalingRuleDataModel = from_value(config)?;

        let rule = self
            .client
            .get_account_autoscaling_rule(&model.account_id, &model.rule_id)
            .await
            .map_err(|e| ProviderError::api("Could not read account autoscaling rule", e))?;

        model.rule_id = rule.rule_id;
        model.account_id = rule.account_id;
        model.active = rule.active;
        model.mode = rule.mode;
        model.rule = rule.rule;
        to_value(&model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const POLICY: &str = r#"{"max":10,"min":1}"#;

    fn resource(server: &MockServer) -> AutoscalingRuleResource {
        AutoscalingRuleResource::new(Arc::new(Client::new("dummy", server.base_url())))
    }

    fn api_rule() -> serde_json::Value {
        json!({
            "account_id": "acc-123",
            "rule_id": "rule-abc",
            "active": true,
            "mode": "include",
            "rule": POLICY,
        })
    }

    #[tokio::test]
    async fn create_fills_rule_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/accounts/acc-123/autoscaling/rules")
                .json_body(json!({"active": true, "mode": "include", "rule": POLICY}));
            then.status(201).json_body(api_rule());
        });

        let state = resource(&server)
            .create(&json!({
                "account_id": "acc-123",
                "active": true,
                "mode": "include",
                "rule": POLICY,
            }))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(state["id"], "rule-abc");
    }

    #[tokio::test]
    async fn create_rejects_unknown_mode() {
        let server = MockServer::start();
        let err = resource(&server)
            .create(&json!({
                "account_id": "acc-123",
                "active": true,
                "mode": "allow",
                "rule": POLICY,
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::InvalidAttribute { .. }));
        assert!(err.to_string().contains("mode"));
    }

    #[tokio::test]
    async fn create_rejects_non_json_policy() {
        let server = MockServer::start();
        let err = resource(&server)
            .create(&json!({
                "account_id": "acc-123",
                "active": true,
                "mode": "include",
                "rule": "not json",
            }))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("rule"));
    }

    #[tokio::test]
    async fn read_keeps_equivalent_policy_formatting() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/accounts/acc-123/autoscaling/rules/rule-abc");
            then.status(200).json_body(json!({
                "account_id": "acc-123",
                "rule_id": "rule-abc",
                "active": true,
                "mode": "include",
                // Same policy, different key order and spacing.
                "rule": "{\"min\": 1, \"max\": 10}",
            }));
        });

        let stored = r#"{"max":10,"min":1}"#;
        let state = resource(&server)
            .read(&json!({
                "id": "rule-abc",
                "account_id": "acc-123",
                "active": true,
                "mode": "include",
                "rule": stored,
            }))
            .await
            .unwrap();

        assert_eq!(state["rule"], stored);
    }

    #[tokio::test]
    async fn read_picks_up_changed_policy() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/accounts/acc-123/autoscaling/rules/rule-abc");
            then.status(200).json_body(json!({
                "account_id": "acc-123",
                "rule_id": "rule-abc",
                "active": true,
                "mode": "include",
                "rule": "{\"max\":20,\"min\":2}",
            }));
        });

        let state = resource(&server)
            .read(&json!({
                "id": "rule-abc",
                "account_id": "acc-123",
                "active": true,
                "mode": "include",
                "rule": POLICY,
            }))
            .await
            .unwrap();

        assert_eq!(state["rule"], "{\"max\":20,\"min\":2}");
    }

    #[tokio::test]
    async fn update_puts_plan() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/v1/accounts/acc-123/autoscaling/rules/rule-abc")
                .json_body(json!({"active": false, "mode": "exclude", "rule": POLICY}));
            then.status(200).json_body(api_rule());
        });

        let state = resource(&server)
            .update(
                &json!({
                    "id": "rule-abc",
                    "account_id": "acc-123",
                    "active": true,
                    "mode": "include",
                    "rule": POLICY,
                }),
                &json!({
                    "id": "rule-abc",
                    "account_id": "acc-123",
                    "active": false,
                    "mode": "exclude",
                    "rule": POLICY,
                }),
            )
            .await
            .unwrap();

        mock.assert();
        assert_eq!(state["active"], false);
    }

    #[tokio::test]
    async fn delete_by_ids() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/api/v1/accounts/acc-123/autoscaling/rules/rule-abc");
            then.status(200);
        });

        resource(&server)
            .delete(&json!({"id": "rule-abc", "account_id": "acc-123"}))
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn data_source_reads_rule() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/accounts/acc-123/autoscaling/rules/rule-abc");
            then.status(200).json_body(api_rule());
        });

        let ds =
            AutoscalingRuleDataSource::new(Arc::new(Client::new("dummy", server.base_url())));
        let state = ds
            .read(&json!({"account_id": "acc-123", "rule_id": "rule-abc"}))
            .await
            .unwrap();

        assert_eq!(state["rule_id"], "rule-abc");
        assert_eq!(state["mode"], "include");
        assert_eq!(state["rule"], POLICY);
        assert!(state.get("id").is_none());
    }

    #[test]
    fn data_source_schema_uses_rule_id() {
        let schema =
            AutoscalingRuleDataSource::new(Arc::new(Client::new("t", "e"))).schema();
        assert!(schema.attribute("rule_id").unwrap().required);
        assert!(schema.attribute("id").is_none());
        assert!(schema.attribute("rule").unwrap().computed);
    }
}
