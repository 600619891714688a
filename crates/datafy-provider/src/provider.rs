//! Provider shell: configuration resolution and adapter registry

use std::sync::Arc;

use datafy_api::Client;
use serde::Deserialize;

use crate::error::{ProviderError, Result};
use crate::resource::{DataSource, Resource};
use crate::resources::account::{AccountDataSource, AccountResource};
use crate::resources::autoscaling_rule::{AutoscalingRuleDataSource, AutoscalingRuleResource};
use crate::resources::role_arn::{RoleArnDataSource, RoleArnResource};
use crate::resources::token::{TokenDataSource, TokenResource};

/// Endpoint used when neither the attribute nor `DATAFY_ENDPOINT` is set
pub const DEFAULT_ENDPOINT: &str = "https://api.datafy.io";

const TOKEN_ENV: &str = "DATAFY_TOKEN";
const ENDPOINT_ENV: &str = "DATAFY_ENDPOINT";

/// Provider configuration attributes
///
/// Both attributes are optional; unset values fall back to the
/// `DATAFY_TOKEN` / `DATAFY_ENDPOINT` environment variables. A token
/// must come from one of the two sources.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    pub token: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug)]
struct ResolvedConfig {
    token: String,
    endpoint: String,
}

impl ProviderConfig {
    fn resolve(self) -> Result<ResolvedConfig> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .or_else(|| env_var(TOKEN_ENV))
            .ok_or(ProviderError::MissingToken)?;

        let endpoint = self
            .endpoint
            .filter(|e| !e.is_empty())
            .or_else(|| env_var(ENDPOINT_ENV))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(ResolvedConfig { token, endpoint })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// The Datafy provider
///
/// Owns the shared API client and hands out the resource and
/// data-source adapters registered under the `datafy_` prefix.
pub struct DatafyProvider {
    client: Arc<Client>,
}

impl DatafyProvider {
    /// Provider type name, the prefix of every resource type name
    pub const TYPE_NAME: &'static str = "datafy";

    /// Resolve the configuration and build the shared API client
    pub fn configure(config: ProviderConfig) -> Result<Self> {
        let resolved = config.resolve()?;
        tracing::debug!(endpoint = %resolved.endpoint, "configuring Datafy provider");

        Ok(Self {
            client: Arc::new(Client::new(resolved.token, resolved.endpoint)),
        })
    }

    /// All managed resource adapters
    pub fn resources(&self) -> Vec<Box<dyn Resource>> {
        vec![
            Box::new(AccountResource::new(self.client.clone())),
            Box::new(RoleArnResource::new(self.client.clone())),
            Box::new(TokenResource::new(self.client.clone())),
            Box::new(AutoscalingRuleResource::new(self.client.clone())),
        ]
    }

    /// All data-source adapters
    pub fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        vec![
            Box::new(AccountDataSource::new(self.client.clone())),
            Box::new(RoleArnDataSource::new(self.client.clone())),
            Box::new(TokenDataSource::new(self.client.clone())),
            Box::new(AutoscalingRuleDataSource::new(self.client.clone())),
        ]
    }

    /// Look up a resource adapter by type name
    pub fn resource(&self, type_name: &str) -> Result<Box<dyn Resource>> {
        self.resources()
            .into_iter()
            .find(|r| r.type_name() == type_name)
            .ok_or_else(|| ProviderError::UnknownResourceType(type_name.to_string()))
    }

    /// Look up a data-source adapter by type name
    pub fn data_source(&self, type_name: &str) -> Result<Box<dyn DataSource>> {
        self.data_sources()
            .into_iter()
            .find(|d| d.type_name() == type_name)
            .ok_or_else(|| ProviderError::UnknownDataSourceType(type_name.to_string()))
    }
}
