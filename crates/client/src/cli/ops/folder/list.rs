use std::fmt;

use clap::Args;
use comfy_table::Table;

use common::prelude::{Identity, IdentityError};

use crate::manager::VaultManager;

#[derive(Args, Debug, Clone)]
pub struct List {
    /// Identity whose folders to list
    #[arg(long)]
    pub user: String,
}

#[derive(Debug)]
pub struct ListOutput {
    pub folders: Vec<String>,
}

impl fmt::Display for ListOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.folders.is_empty() {
            return write!(f, "No folders yet");
        }

        let mut table = Table::new();
        table.set_header(vec!["FOLDER"]);
        for folder in &self.folders {
            table.add_row(vec![folder.clone()]);
        }
        write!(f, "{table}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for List {
    type Error = ListError;
    type Output = ListOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let identity = Identity::new(&self.user)?;
        let mut manager = VaultManager::new(ctx.client.clone(), identity);
        let folders = manager.refresh_folders().await.to_vec();
        Ok(ListOutput { folders })
    }
}
