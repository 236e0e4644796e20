use std::fmt;
use std::path::PathBuf;

use clap::Args;
use owo_colors::OwoColorize;

use common::prelude::{Identity, IdentityError};

use crate::manager::{ManagerError, VaultManager};

#[derive(Args, Debug, Clone)]
pub struct Download {
    /// Identity owning the folder
    #[arg(long)]
    pub user: String,

    /// Folder containing the file
    #[arg(long)]
    pub folder: String,

    /// Name of the file to download
    pub file: String,

    /// Destination path (defaults to the file name in the current directory)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct DownloadOutput {
    pub file: String,
    pub dest: PathBuf,
    pub size: u64,
}

impl fmt::Display for DownloadOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} to {} ({} bytes)",
            "Saved".green().bold(),
            self.file.bold(),
            self.dest.display(),
            self.size
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Download {
    type Error = DownloadError;
    type Output = DownloadOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let identity = Identity::new(&self.user)?;
        let dest = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.file));

        let mut manager = VaultManager::new(ctx.client.clone(), identity);
        manager.select_folder(&self.folder).await?;
        let size = manager.download_file(&self.file, &dest).await?;

        Ok(DownloadOutput {
            file: self.file.clone(),
            dest,
            size,
        })
    }
}
