//! Per-session folder/file state machine.
//!
//! One `VaultManager` per authenticated identity. It holds a best-effort
//! mirror of the remote store (folders, the selected folder's files) plus
//! the single live preview artifact. The server is the source of truth:
//! after every successful mutation the affected listing is re-queried
//! instead of patched locally.
//!
//! Every mutating operation takes `&mut self`, so two operations on one
//! manager can never overlap; there is no stale-response race to arbitrate.

use std::path::Path;

use common::prelude::{Identity, PreviewArtifact};

use crate::api::file::{DeleteFileRequest, ListFilesRequest, ReadFileRequest, UploadFileRequest};
use crate::api::folder::{CreateFolderRequest, DeleteFolderRequest, ListFoldersRequest};
use crate::api::{ApiClient, ApiError};

#[derive(Debug)]
pub struct VaultManager {
    client: ApiClient,
    identity: Identity,
    folders: Vec<String>,
    selected: Option<String>,
    files: Vec<String>,
    preview: Option<PreviewArtifact>,
}

#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("folder name must not be empty")]
    EmptyFolderName,
    #[error("no folder selected")]
    NoFolderSelected,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to save file: {0}")]
    Io(#[from] std::io::Error),
}

impl VaultManager {
    /// Requires an authenticated identity; the `Identity` type itself
    /// guarantees the non-empty precondition.
    pub fn new(client: ApiClient, identity: Identity) -> Self {
        Self {
            client,
            identity,
            folders: Vec::new(),
            selected: None,
            files: Vec::new(),
            preview: None,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub fn selected_folder(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn preview(&self) -> Option<&PreviewArtifact> {
        self.preview.as_ref()
    }

    /// Re-query the folder list. A fresh identity legitimately has no
    /// folders, so remote failure degrades to an empty mirror instead of
    /// an error.
    pub async fn refresh_folders(&mut self) -> &[String] {
        let request = ListFoldersRequest {
            identity: self.identity.clone(),
        };
        match self.client.call(request).await {
            Ok(response) => self.folders = response.folders,
            Err(err) => {
                tracing::debug!(identity = %self.identity, %err, "folder listing failed, treating as empty");
                self.folders.clear();
            }
        }
        &self.folders
    }

    /// Create a folder, then re-list to pick up server-assigned truth.
    /// Empty names are rejected before any network call.
    pub async fn create_folder(&mut self, name: &str) -> Result<(), ManagerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ManagerError::EmptyFolderName);
        }

        let request = CreateFolderRequest {
            name: self.identity.to_string(),
            folder_name: name.to_string(),
        };
        self.client.call(request).await?;
        self.refresh_folders().await;
        Ok(())
    }

    /// Delete a folder. If it was selected, the selection, file list, and
    /// any preview into it are discarded before re-listing: the selection
    /// must never point at a folder known to be gone.
    pub async fn delete_folder(&mut self, name: &str) -> Result<(), ManagerError> {
        let request = DeleteFolderRequest {
            name: self.identity.to_string(),
            folder_name: name.to_string(),
        };
        self.client.call(request).await?;

        if self.selected.as_deref() == Some(name) {
            self.selected = None;
            self.files.clear();
            self.close_preview();
        }
        self.refresh_folders().await;
        Ok(())
    }

    /// Open a folder and load its file listing.
    ///
    /// The selection pointer moves even when the listing fails: the user is
    /// "in" the folder, just with nothing to show. The previous folder's
    /// files and preview are discarded either way.
    pub async fn select_folder(&mut self, name: &str) -> Result<(), ManagerError> {
        self.close_preview();
        self.selected = Some(name.to_string());

        let request = ListFilesRequest {
            identity: self.identity.clone(),
            folder: name.to_string(),
        };
        match self.client.call(request).await {
            Ok(response) => {
                self.files = response.files;
                Ok(())
            }
            Err(err) => {
                self.files.clear();
                Err(err.into())
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.files.clear();
        self.close_preview();
    }

    /// Upload into the selected folder, then refresh its listing.
    pub async fn upload_file(
        &mut self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ManagerError> {
        let folder = self.require_selection()?.to_string();

        let request = UploadFileRequest {
            identity: self.identity.clone(),
            folder,
            file_name: file_name.to_string(),
            bytes,
        };
        self.client.call(request).await?;
        self.refresh_files().await?;
        Ok(())
    }

    /// Delete a file from the selected folder. A preview backed by the
    /// deleted file is revoked.
    pub async fn delete_file(&mut self, file_name: &str) -> Result<(), ManagerError> {
        let folder = self.require_selection()?.to_string();

        let request = DeleteFileRequest {
            identity: self.identity.clone(),
            folder,
            file_name: file_name.to_string(),
        };
        self.client.call(request).await?;

        if self.preview.as_ref().is_some_and(|p| p.name() == file_name) {
            self.close_preview();
        }
        self.refresh_files().await?;
        Ok(())
    }

    /// Fetch a file's bytes and install them as the live preview artifact,
    /// revoking whatever was open before. Non-image names still produce an
    /// artifact; rendering the placeholder is the view's concern.
    pub async fn preview_file(&mut self, file_name: &str) -> Result<&PreviewArtifact, ManagerError> {
        let folder = self.require_selection()?.to_string();

        let request = ReadFileRequest {
            identity: self.identity.clone(),
            folder,
            file_name: file_name.to_string(),
        };
        let bytes = self.client.call_raw(request).await?;

        self.close_preview();
        Ok(self.preview.insert(PreviewArtifact::new(file_name, bytes)))
    }

    /// Fetch a file's bytes and save them locally. Nothing is retained.
    pub async fn download_file(
        &mut self,
        file_name: &str,
        dest: &Path,
    ) -> Result<u64, ManagerError> {
        let folder = self.require_selection()?.to_string();

        let request = ReadFileRequest {
            identity: self.identity.clone(),
            folder,
            file_name: file_name.to_string(),
        };
        let bytes = self.client.call_raw(request).await?;
        let len = bytes.len() as u64;

        tokio::fs::write(dest, &bytes).await?;
        tracing::info!(file = file_name, dest = %dest.display(), bytes = len, "downloaded");
        Ok(len)
    }

    /// Revoke and drop the live preview artifact, if any.
    pub fn close_preview(&mut self) {
        if let Some(prev) = self.preview.take() {
            prev.revoke();
        }
    }

    fn require_selection(&self) -> Result<&str, ManagerError> {
        self.selected.as_deref().ok_or(ManagerError::NoFolderSelected)
    }

    /// Refresh the file listing for whatever folder is selected now.
    async fn refresh_files(&mut self) -> Result<(), ManagerError> {
        let Some(folder) = self.selected.clone() else {
            // Selection cleared since the mutation; nothing to refresh.
            return Ok(());
        };
        let request = ListFilesRequest {
            identity: self.identity.clone(),
            folder,
        };
        match self.client.call(request).await {
            Ok(response) => {
                self.files = response.files;
                Ok(())
            }
            Err(err) => {
                self.files.clear();
                Err(err.into())
            }
        }
    }
}

impl Drop for VaultManager {
    fn drop(&mut self) {
        if let Some(prev) = self.preview.take() {
            prev.revoke();
        }
    }
}
