//! Adapter traits mapping plan/state data onto the API client
//!
//! Plan and state travel as JSON objects; each adapter deserializes
//! them into its own typed model, performs a single API call, and
//! returns the refreshed state. This is the seam a host runtime drives
//! through the plan/apply lifecycle.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::Result;
use crate::schema::Schema;

/// A managed resource with full CRUD semantics
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name the resource is registered under (e.g. `datafy_account`)
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Create the remote object from the planned attributes and return
    /// the resulting state, computed attributes filled in
    async fn create(&self, plan: &Value) -> Result<Value>;

    /// Refresh state from the remote object
    async fn read(&self, state: &Value) -> Result<Value>;

    /// Apply the planned attributes to the remote object
    async fn update(&self, state: &Value, plan: &Value) -> Result<Value>;

    /// Remove the remote object
    async fn delete(&self, state: &Value) -> Result<()>;
}

/// A read-only view over a remote object
#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Resolve the configured lookup attributes into state
    async fn read(&self, config: &Value) -> Result<Value>;
}

pub(crate) fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T> {
    Ok(serde_json::from_value(value.clone())?)
}

pub(crate) fn to_value<T: Serialize>(model: &T) -> Result<Value> {
    Ok(serde_json::to_value(model)?)
}
