use std::fmt;

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// Shared context handed to every op.
#[derive(Debug, Clone)]
pub struct OpContext {
    pub client: ApiClient,
    pub config: AppConfig,
}

/// One CLI operation: parsed args in, displayable output or a typed error
/// out.
#[async_trait]
pub trait Op {
    type Error: std::error::Error + Send + Sync + 'static;
    type Output: fmt::Display;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}
