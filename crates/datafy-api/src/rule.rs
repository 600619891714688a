//! Autoscaling-rule calls
//!
//! Unlike the other resources this endpoint speaks snake_case on the
//! wire. The `rule` field is a JSON policy document carried as a string.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

/// An autoscaling rule attached to an account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutoscalingRule {
    pub account_id: String,
    pub rule_id: String,
    pub active: bool,
    #[serde(default)]
    pub mode: String,
    pub rule: String,
}

#[derive(Debug, Clone)]
pub struct CreateAutoscalingRuleRequest {
    pub account_id: String,
    pub active: bool,
    pub mode: String,
    pub rule: String,
}

#[derive(Debug, Clone)]
pub struct UpdateAutoscalingRuleRequest {
    pub account_id: String,
    pub rule_id: String,
    pub active: bool,
    pub mode: String,
    pub rule: String,
}

#[derive(Serialize)]
struct RuleBody<'a> {
    active: bool,
    mode: &'a str,
    rule: &'a str,
}

impl Client {
    pub async fn create_account_autoscaling_rule(
        &self,
        req: &CreateAutoscalingRuleRequest,
    ) -> Result<AutoscalingRule> {
        self.post_json(
            &format!("/api/v1/accounts/{}/autoscaling/rules", req.account_id),
            &RuleBody {
                active: req.active,
                mode: &req.mode,
                rule: &req.rule,
            },
        )
        .await
    }

    pub async fn get_account_autoscaling_rule(
        &self,
        account_id: &str,
        rule_id: &str,
    ) -> Result<AutoscalingRule> {
        self.get_json(&format!(
            "/api/v1/accounts/{account_id}/autoscaling/rules/{rule_id}"
        ))
        .await
    }

    pub async fn update_account_autoscaling_rule(
        &self,
        req: &UpdateAutoscalingRuleRequest,
    ) -> Result<AutoscalingRule> {
        self.put_json(
            &format!(
                "/api/v1/accounts/{}/autoscaling/rules/{}",
                req.account_id, req.rule_id
            ),
            &RuleBody {
                active: req.active,
                mode: &req.mode,
                rule: &req.rule,
            },
        )
        .await
    }

    pub async fn delete_account_autoscaling_rule(
        &self,
        account_id: &str,
        rule_id: &str,
    ) -> Result<()> {
        self.delete(&format!(
            "/api/v1/accounts/{account_id}/autoscaling/rules/{rule_id}"
        ))
        .await
    }
}
