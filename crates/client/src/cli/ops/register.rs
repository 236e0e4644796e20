use std::fmt;
use std::path::PathBuf;

use clap::Args;
use owo_colors::OwoColorize;

use common::prelude::Identity;

use crate::api::register::RegisterFailureKind;
use crate::auth::{AuthError, FaceAuthClient, RegisterOutcome};

use super::{frame_from_file, FrameLoadError};

#[derive(Args, Debug, Clone)]
pub struct Register {
    /// Display name for the new identity
    #[arg(long)]
    pub name: String,

    /// Path to the captured face image
    #[arg(long)]
    pub image: PathBuf,
}

#[derive(Debug)]
pub enum RegisterOutput {
    Registered(Identity),
    Refused {
        kind: RegisterFailureKind,
        message: String,
    },
}

impl fmt::Display for RegisterOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterOutput::Registered(identity) => {
                write!(
                    f,
                    "{} identity {}",
                    "Registered".green().bold(),
                    identity.bold()
                )
            }
            RegisterOutput::Refused { kind, message } => {
                writeln!(f, "{} {}", "Refused:".yellow().bold(), message)?;
                match kind {
                    RegisterFailureKind::FaceExists => {
                        write!(f, "This face is already registered; try `facevault login`")
                    }
                    RegisterFailureKind::UserExists => {
                        write!(f, "Pick a different name and try again")
                    }
                    _ => write!(f, "({kind:?})"),
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Frame(#[from] FrameLoadError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Register {
    type Error = RegisterError;
    type Output = RegisterOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let frame = frame_from_file(&self.image)?;
        let auth = FaceAuthClient::new(ctx.client.clone());

        match auth.register(&self.name, &frame).await? {
            RegisterOutcome::Registered(identity) => Ok(RegisterOutput::Registered(identity)),
            RegisterOutcome::Refused { kind, message } => {
                Ok(RegisterOutput::Refused { kind, message })
            }
        }
    }
}
