//! Typed client for the Datafy REST API
//!
//! This crate wraps the Datafy HTTP API (`https://api.datafy.io`) in a
//! small, typed client. Every operation is a single request/response
//! pair: serialize the request body, issue the call with bearer-token
//! authentication, and decode the JSON response or the error body.
//!
//! Covered resources:
//!
//! - **Accounts**: create, read, update, delete
//! - **Role ARNs**: the AWS IAM role bound to an account (one per account)
//! - **Tokens**: access tokens scoped to an account (immutable once created)
//! - **Autoscaling rules**: per-account scaling policies
//!
//! # Example
//!
//! ```ignore
//! use datafy_api::{Client, CreateAccountRequest};
//!
//! let client = Client::new(token, "https://api.datafy.io");
//! let account = client
//!     .create_account(&CreateAccountRequest { account_name: "prod".into() })
//!     .await?;
//! println!("created account {}", account.account_id);
//! ```

pub mod account;
pub mod client;
pub mod error;
pub mod rolearn;
pub mod rule;
pub mod token;

// Re-exports
pub use account::{Account, CreateAccountRequest, UpdateAccountRequest};
pub use client::Client;
pub use error::{Error, Result};
pub use rolearn::AccountRoleArn;
pub use rule::{
    AutoscalingRule, CreateAutoscalingRuleRequest, UpdateAutoscalingRuleRequest,
};
pub use token::{AccountToken, CreateAccountTokenRequest};
