use std::fmt;

use clap::Args;
use owo_colors::OwoColorize;

use common::prelude::{FileKind, Identity, IdentityError};

use crate::manager::{ManagerError, VaultManager};

#[derive(Args, Debug, Clone)]
pub struct Preview {
    /// Identity owning the folder
    #[arg(long)]
    pub user: String,

    /// Folder containing the file
    #[arg(long)]
    pub folder: String,

    /// Name of the file to preview
    pub file: String,
}

#[derive(Debug)]
pub struct PreviewOutput {
    pub file: String,
    pub kind: FileKind,
    pub mime: String,
    pub size: usize,
}

impl fmt::Display for PreviewOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FileKind::Image => write!(
                f,
                "{} {} ({}, {} bytes)",
                "Previewable image:".green().bold(),
                self.file.bold(),
                self.mime,
                self.size
            ),
            FileKind::Unsupported => write!(
                f,
                "{} {} ({} bytes) has no preview",
                "Not previewable:".yellow().bold(),
                self.file.bold(),
                self.size
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Preview {
    type Error = PreviewError;
    type Output = PreviewOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let identity = Identity::new(&self.user)?;
        let mut manager = VaultManager::new(ctx.client.clone(), identity);
        manager.select_folder(&self.folder).await?;
        let artifact = manager.preview_file(&self.file).await?;

        Ok(PreviewOutput {
            file: artifact.name().to_string(),
            kind: artifact.kind(),
            mime: artifact.mime().to_string(),
            size: artifact.len(),
        })
    }
}
