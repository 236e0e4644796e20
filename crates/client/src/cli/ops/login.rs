use std::fmt;
use std::path::PathBuf;

use clap::Args;
use owo_colors::OwoColorize;

use common::prelude::Identity;

use crate::auth::{AuthError, FaceAuthClient, LoginOutcome};

use super::{frame_from_file, FrameLoadError};

#[derive(Args, Debug, Clone)]
pub struct Login {
    /// Path to the captured face image
    #[arg(long)]
    pub image: PathBuf,
}

#[derive(Debug)]
pub enum LoginOutput {
    Authenticated(Identity),
    Denied { detail: String },
}

impl fmt::Display for LoginOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginOutput::Authenticated(identity) => {
                write!(f, "{} as {}", "Authenticated".green().bold(), identity.bold())
            }
            LoginOutput::Denied { detail } => {
                write!(f, "{} {}", "Denied:".red().bold(), detail)
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Frame(#[from] FrameLoadError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Login {
    type Error = LoginError;
    type Output = LoginOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let frame = frame_from_file(&self.image)?;
        let auth = FaceAuthClient::new(ctx.client.clone());

        match auth.login(&frame).await? {
            LoginOutcome::Authenticated(identity) => Ok(LoginOutput::Authenticated(identity)),
            LoginOutcome::Denied { detail } => Ok(LoginOutput::Denied { detail }),
        }
    }
}
