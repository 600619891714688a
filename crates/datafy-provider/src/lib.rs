//! Datafy provider
//!
//! Maps declarative resource configuration onto the Datafy REST API.
//! The provider shell resolves its connection settings (token and
//! endpoint, from attributes or environment variables), builds a shared
//! [`datafy_api::Client`], and registers one adapter per resource type:
//!
//! - `datafy_account`
//! - `datafy_role_arn`
//! - `datafy_token`
//! - `datafy_autoscaling_rule`
//!
//! Each adapter is a flat pass-through: it deserializes plan/state
//! attributes into its own model, issues a single API call per
//! operation, and writes the response back into state. The same four
//! type names are available as read-only data sources.
//!
//! # Example
//!
//! ```ignore
//! use datafy_provider::{DatafyProvider, ProviderConfig};
//! use serde_json::json;
//!
//! let provider = DatafyProvider::configure(ProviderConfig::default())?;
//! let account = provider.resource("datafy_account")?;
//! let state = account.create(&json!({"name": "prod"})).await?;
//! ```

pub mod duration;
pub mod error;
pub mod provider;
pub mod resource;
pub mod resources;
pub mod schema;

// Re-exports
pub use error::{ProviderError, Result};
pub use provider::{DEFAULT_ENDPOINT, DatafyProvider, ProviderConfig};
pub use resource::{DataSource, Resource};
pub use schema::{Attribute, AttributeKind, Schema};
