use std::fmt;

use clap::Args;
use owo_colors::OwoColorize;

use common::prelude::{Identity, IdentityError};

use crate::manager::{ManagerError, VaultManager};

#[derive(Args, Debug, Clone)]
pub struct Delete {
    /// Identity owning the folder
    #[arg(long)]
    pub user: String,

    /// Name of the folder to delete
    pub folder: String,
}

#[derive(Debug)]
pub struct DeleteOutput {
    pub folder: String,
    pub folders: Vec<String>,
}

impl fmt::Display for DeleteOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} folder {}",
            "Deleted".red().bold(),
            self.folder.bold()
        )?;
        if self.folders.is_empty() {
            write!(f, "  {}", "no folders remain".dimmed())
        } else {
            write!(f, "  {} {}", "folders:".dimmed(), self.folders.join(", "))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Delete {
    type Error = DeleteError;
    type Output = DeleteOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let identity = Identity::new(&self.user)?;
        let mut manager = VaultManager::new(ctx.client.clone(), identity);
        manager.delete_folder(&self.folder).await?;
        Ok(DeleteOutput {
            folder: self.folder.clone(),
            folders: manager.folders().to_vec(),
        })
    }
}
