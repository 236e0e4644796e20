use std::fmt;

use clap::Args;
use comfy_table::Table;

use common::prelude::{FileKind, Identity, IdentityError};

use crate::manager::{ManagerError, VaultManager};

#[derive(Args, Debug, Clone)]
pub struct Ls {
    /// Identity owning the folder
    #[arg(long)]
    pub user: String,

    /// Folder to list
    #[arg(long)]
    pub folder: String,
}

#[derive(Debug)]
pub struct LsOutput {
    pub folder: String,
    pub files: Vec<String>,
}

impl fmt::Display for LsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.files.is_empty() {
            return write!(f, "No files in {}", self.folder);
        }

        let mut table = Table::new();
        table.set_header(vec!["NAME", "PREVIEW"]);
        for file in &self.files {
            let preview = if FileKind::from_name(file).is_previewable() {
                "image"
            } else {
                "-"
            };
            table.add_row(vec![file.clone(), preview.to_string()]);
        }
        write!(f, "{table}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LsError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Ls {
    type Error = LsError;
    type Output = LsOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let identity = Identity::new(&self.user)?;
        let mut manager = VaultManager::new(ctx.client.clone(), identity);
        manager.select_folder(&self.folder).await?;
        Ok(LsOutput {
            folder: self.folder.clone(),
            files: manager.files().to_vec(),
        })
    }
}
