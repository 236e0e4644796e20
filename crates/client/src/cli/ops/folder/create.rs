use std::fmt;

use clap::Args;
use owo_colors::OwoColorize;

use common::prelude::{Identity, IdentityError};

use crate::manager::{ManagerError, VaultManager};

#[derive(Args, Debug, Clone)]
pub struct Create {
    /// Identity owning the folder
    #[arg(long)]
    pub user: String,

    /// Name of the folder to create
    pub folder: String,
}

#[derive(Debug)]
pub struct CreateOutput {
    pub folder: String,
    pub folders: Vec<String>,
}

impl fmt::Display for CreateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} folder {}",
            "Created".green().bold(),
            self.folder.bold()
        )?;
        write!(f, "  {} {}", "folders:".dimmed(), self.folders.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Create {
    type Error = CreateError;
    type Output = CreateOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let identity = Identity::new(&self.user)?;
        let mut manager = VaultManager::new(ctx.client.clone(), identity);
        manager.create_folder(&self.folder).await?;
        Ok(CreateOutput {
            folder: self.folder.trim().to_string(),
            folders: manager.folders().to_vec(),
        })
    }
}
