//! `facevault` command-line interface.

pub mod op;
pub mod ops;

use clap::{Parser, Subcommand};
use url::Url;

use crate::api::ApiClient;
use crate::config::AppConfig;

use op::{Op, OpContext};

#[derive(Parser, Debug)]
#[command(name = "facevault", version, about = "Face-authenticated file vault client")]
pub struct Cli {
    /// Base URL of the vault service.
    #[arg(long, global = true, env = "FACEVAULT_REMOTE")]
    pub remote: Option<Url>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new identity from a captured image
    Register(ops::Register),
    /// Log in by face
    Login(ops::Login),
    /// Run the live detection overlay against captured frames
    Detect(ops::Detect),
    /// Manage folders
    Folder {
        #[command(subcommand)]
        command: ops::folder::FolderCommand,
    },
    /// Manage files within a folder
    File {
        #[command(subcommand)]
        command: ops::file::FileCommand,
    },
    /// Check that the vault service is up
    Health(ops::Health),
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = AppConfig::load()?;
        let remote = self.remote.unwrap_or_else(|| config.remote.clone());
        let client = ApiClient::new(&remote)?;
        let ctx = OpContext { client, config };

        match self.command {
            Command::Register(op) => dispatch(&op, &ctx).await,
            Command::Login(op) => dispatch(&op, &ctx).await,
            Command::Detect(op) => dispatch(&op, &ctx).await,
            Command::Folder { command } => match command {
                ops::folder::FolderCommand::List(op) => dispatch(&op, &ctx).await,
                ops::folder::FolderCommand::Create(op) => dispatch(&op, &ctx).await,
                ops::folder::FolderCommand::Delete(op) => dispatch(&op, &ctx).await,
            },
            Command::File { command } => match command {
                ops::file::FileCommand::Ls(op) => dispatch(&op, &ctx).await,
                ops::file::FileCommand::Upload(op) => dispatch(&op, &ctx).await,
                ops::file::FileCommand::Download(op) => dispatch(&op, &ctx).await,
                ops::file::FileCommand::Rm(op) => dispatch(&op, &ctx).await,
                ops::file::FileCommand::Preview(op) => dispatch(&op, &ctx).await,
            },
            Command::Health(op) => dispatch(&op, &ctx).await,
        }
    }
}

async fn dispatch<O: Op>(op: &O, ctx: &OpContext) -> anyhow::Result<()> {
    let output = op.execute(ctx).await?;
    println!("{output}");
    Ok(())
}
