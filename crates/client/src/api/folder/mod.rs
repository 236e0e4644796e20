pub mod create;
pub mod delete;
pub mod list;

pub use create::{CreateFolderRequest, CreateFolderResponse};
pub use delete::{DeleteFolderRequest, DeleteFolderResponse};
pub use list::{ListFoldersRequest, ListFoldersResponse};
