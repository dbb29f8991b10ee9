use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, health::entities::CorpusHealthStatus,
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<CorpusHealthStatus, CoreError>> + Send;
}
