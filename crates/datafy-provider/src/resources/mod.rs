//! Per-resource adapters
//!
//! One module per Datafy resource type, each exposing the managed
//! resource and its read-only data-source counterpart.

pub mod account;
pub mod autoscaling_rule;
pub mod role_arn;
pub mod token;
