use std::fmt;

use clap::Args;
use owo_colors::OwoColorize;

use common::prelude::{Identity, IdentityError};

use crate::manager::{ManagerError, VaultManager};

#[derive(Args, Debug, Clone)]
pub struct Rm {
    /// Identity owning the folder
    #[arg(long)]
    pub user: String,

    /// Folder containing the file
    #[arg(long)]
    pub folder: String,

    /// Name of the file to delete
    pub file: String,
}

#[derive(Debug)]
pub struct RmOutput {
    pub file: String,
    pub files: Vec<String>,
}

impl fmt::Display for RmOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", "Deleted".red().bold(), self.file.bold())?;
        if self.files.is_empty() {
            write!(f, "  {}", "folder is now empty".dimmed())
        } else {
            write!(f, "  {} {}", "files:".dimmed(), self.files.join(", "))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RmError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Rm {
    type Error = RmError;
    type Output = RmOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let identity = Identity::new(&self.user)?;
        let mut manager = VaultManager::new(ctx.client.clone(), identity);
        manager.select_folder(&self.folder).await?;
        manager.delete_file(&self.file).await?;
        Ok(RmOutput {
            file: self.file.clone(),
            files: manager.files().to_vec(),
        })
    }
}
