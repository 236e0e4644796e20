pub mod create;
pub mod delete;
pub mod list;

pub use create::Create;
pub use delete::Delete;
pub use list::List;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum FolderCommand {
    /// List folders for an identity
    List(List),
    /// Create a folder
    Create(Create),
    /// Delete a folder and everything in it
    Delete(Delete),
}
