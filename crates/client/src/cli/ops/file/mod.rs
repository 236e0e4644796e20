pub mod download;
pub mod ls;
pub mod preview;
pub mod rm;
pub mod upload;

pub use download::Download;
pub use ls::Ls;
pub use preview::Preview;
pub use rm::Rm;
pub use upload::Upload;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum FileCommand {
    /// List files in a folder
    Ls(Ls),
    /// Upload a local file into a folder
    Upload(Upload),
    /// Download a file to the local filesystem
    Download(Download),
    /// Delete a file
    Rm(Rm),
    /// Fetch a file and report how it would preview
    Preview(Preview),
}
