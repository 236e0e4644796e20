pub mod delete;
pub mod list;
pub mod read;
pub mod upload;

pub use delete::{DeleteFileRequest, DeleteFileResponse};
pub use list::{ListFilesRequest, ListFilesResponse};
pub use read::ReadFileRequest;
pub use upload::{UploadFileRequest, UploadFileResponse};
