use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::ConfigurationHealth};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    /// Re-validates the process configuration.
    fn health(&self) -> impl Future<Output = Result<ConfigurationHealth, CoreError>> + Send;
}
