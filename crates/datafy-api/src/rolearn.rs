//! Role-ARN calls
//!
//! Each account carries at most one AWS IAM role ARN, addressed by the
//! account id alone. The API upserts on POST, so update delegates to
//! create.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

/// The IAM role bound to an account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRoleArn {
    pub role_arn: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleArnBody<'a> {
    role_arn: &'a str,
}

impl Client {
    pub async fn create_account_role_arn(
        &self,
        account_id: &str,
        arn: &str,
    ) -> Result<AccountRoleArn> {
        self.post_json(
            &format!("/api/v1/accounts/{account_id}/role-arn"),
            &RoleArnBody { role_arn: arn },
        )
        .await
    }

    pub async fn get_account_role_arn(&self, account_id: &str) -> Result<AccountRoleArn> {
        self.get_json(&format!("/api/v1/accounts/{account_id}/role-arn"))
            .await
    }

    pub async fn update_account_role_arn(
        &self,
        account_id: &str,
        arn: &str,
    ) -> Result<AccountRoleArn> {
        self.create_account_role_arn(account_id, arn).await
    }

    pub async fn delete_account_role_arn(&self, account_id: &str) -> Result<()> {
        self.delete(&format!("/api/v1/accounts/{account_id}/role-arn"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const ARN: &str = "arn:aws:iam::123456789012:role/datafy";

    #[tokio::test]
    async fn create_role_arn() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/accounts/acc-123/role-arn")
                .json_body(json!({"roleArn": ARN}));
            then.status(201).json_body(json!({"roleArn": ARN}));
        });

        let client = Client::new("dummy", server.base_url());
        let role = client.create_account_role_arn("acc-123", ARN).await.unwrap();

        mock.assert();
        assert_eq!(role.role_arn, ARN);
    }

    #[tokio::test]
    async fn get_role_arn() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/accounts/acc-123/role-arn");
            then.status(200).json_body(json!({"roleArn": ARN}));
        });

        let client = Client::new("dummy", server.base_url());
        let role = client.get_account_role_arn("acc-123").await.unwrap();

        assert_eq!(role.role_arn, ARN);
    }

    #[tokio::test]
    async fn update_role_arn_posts_like_create() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/accounts/acc-123/role-arn")
                .json_body(json!({"roleArn": ARN}));
            then.status(200).json_body(json!({"roleArn": ARN}));
        });

        let client = Client::new("dummy", server.base_url());
        let role = client.update_account_role_arn("acc-123", ARN).await.unwrap();

        mock.assert();
        assert_eq!(role.role_arn, ARN);
    }

    #[tokio::test]
    async fn delete_role_arn() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/accounts/acc-123/role-arn");
            then.status(200);
        });

        let client = Client::new("dummy", server.base_url());
        client.delete_account_role_arn("acc-123").await.unwrap();

        mock.assert();
    }
}
