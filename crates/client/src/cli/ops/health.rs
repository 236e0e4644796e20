use std::fmt;

use clap::Args;
use owo_colors::OwoColorize;

use crate::api::health::HealthRequest;
use crate::api::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Health;

#[derive(Debug)]
pub struct HealthOutput {
    pub status: String,
}

impl fmt::Display for HealthOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "Service:".dimmed(), self.status.green())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Health {
    type Error = HealthError;
    type Output = HealthOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx.client.call(HealthRequest).await?;
        Ok(HealthOutput {
            status: response.status,
        })
    }
}
