//! Domain types shared between the facevault client library and CLI.
//!
//! Everything here is plain data: identities, per-frame detection geometry,
//! captured frames, file classification, and the revocable preview artifact.
//! Network and state-machine logic live in the `facevault-client` crate.

pub mod detection;
pub mod file_kind;
pub mod frame;
pub mod identity;
pub mod preview;

pub mod prelude {
    pub use crate::detection::{DetectMode, Detection, FaceBox, Point};
    pub use crate::file_kind::FileKind;
    pub use crate::frame::Frame;
    pub use crate::identity::{Identity, IdentityError};
    pub use crate::preview::{PreviewArtifact, PreviewHandle};
}
