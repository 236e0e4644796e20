//! Revocable in-memory handle to fetched file bytes.
//!
//! A preview never touches disk. The artifact owning the bytes lives inside
//! one manager instance; viewing surfaces hold a [`PreviewHandle`] so they
//! can notice revocation after the artifact itself is replaced or closed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;

use crate::file_kind::FileKind;

#[derive(Debug)]
pub struct PreviewArtifact {
    name: String,
    kind: FileKind,
    mime: String,
    bytes: Bytes,
    revoked: Arc<AtomicBool>,
}

/// Cloneable observer for an artifact's revocation state.
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    revoked: Arc<AtomicBool>,
}

impl PreviewArtifact {
    pub fn new(name: &str, bytes: impl Into<Bytes>) -> Self {
        let mime = mime_guess::from_path(name)
            .first_or_octet_stream()
            .to_string();
        Self {
            name: name.to_string(),
            kind: FileKind::from_name(name),
            mime,
            bytes: bytes.into(),
            revoked: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Marks the artifact dead. Surfaces holding a [`PreviewHandle`] must
    /// stop rendering it; the owner drops the bytes right after.
    pub fn revoke(&self) {
        self.revoked.store(true, Ordering::Release);
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::Acquire)
    }

    pub fn handle(&self) -> PreviewHandle {
        PreviewHandle {
            revoked: self.revoked.clone(),
        }
    }
}

impl PreviewHandle {
    pub fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::Acquire)
    }
}
