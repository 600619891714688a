//! Account CRUD calls
//!
//! Accounts are the root object of the Datafy API; tokens, role ARNs and
//! autoscaling rules all hang off an account id.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

/// A Datafy account as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: String,
    pub account_name: String,
    #[serde(default)]
    pub parent_account_id: String,
}

#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub account_name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateAccountRequest {
    pub account_id: String,
    pub account_name: String,
}

#[derive(Serialize)]
struct AccountBody<'a> {
    name: &'a str,
}

impl Client {
    pub async fn create_account(&self, req: &CreateAccountRequest) -> Result<Account> {
        self.post_json(
            "/api/v1/accounts",
            &AccountBody {
                name: &req.account_name,
            },
        )
        .await
    }

    pub async fn get_account(&self, account_id: &str) -> Result<Account> {
        self.get_json(&format!("/api/v1/accounts/{account_id}")).await
    }

    pub async fn update_account(&self, req: &UpdateAccountRequest) -> Result<Account> {
        self.put_json(
            &format!("/api/v1/accounts/{}", req.account_id),
            &AccountBody {
                name: &req.account_name,
            },
        )
        .await
    }

    pub async fn delete_account(&self, account_id: &str) -> Result<()> {
        self.delete(&format!("/api/v1/accounts/{account_id}")).await
    }
}
