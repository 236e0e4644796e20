use std::fmt;
use std::path::PathBuf;

use clap::Args;
use owo_colors::OwoColorize;

use common::prelude::{Identity, IdentityError};

use crate::manager::{ManagerError, VaultManager};

#[derive(Args, Debug, Clone)]
pub struct Upload {
    /// Identity owning the folder
    #[arg(long)]
    pub user: String,

    /// Destination folder
    #[arg(long)]
    pub folder: String,

    /// Local file to upload
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct UploadOutput {
    pub file_name: String,
    pub size: usize,
    pub files: Vec<String>,
}

impl fmt::Display for UploadOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} ({} bytes)",
            "Uploaded".green().bold(),
            self.file_name.bold(),
            self.size
        )?;
        write!(f, "  {} {}", "files:".dimmed(), self.files.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("file has no usable name: {}", .0.display())]
    BadFileName(PathBuf),
    #[error("failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, std::io::Error),
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Upload {
    type Error = UploadError;
    type Output = UploadOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let identity = Identity::new(&self.user)?;
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| UploadError::BadFileName(self.path.clone()))?
            .to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|err| UploadError::Read(self.path.clone(), err))?;
        let size = bytes.len();

        let mut manager = VaultManager::new(ctx.client.clone(), identity);
        manager.select_folder(&self.folder).await?;
        manager.upload_file(&file_name, bytes).await?;

        Ok(UploadOutput {
            file_name,
            size,
            files: manager.files().to_vec(),
        })
    }
}
