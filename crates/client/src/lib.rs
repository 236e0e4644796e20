//! facevault client library.
//!
//! Talks to the remote face-auth/vault service over HTTP/JSON.
//!
//! - [`api`]: typed request/response modules behind an [`api::ApiClient`];
//! - [`auth`]: the single-exchange register/login client with discriminated
//!   outcomes;
//! - [`manager`]: the per-session folder/file state machine;
//! - [`overlay`]: the cancelable live detection overlay loop.
//!
//! The CLI binary (`facevault`) lives in this crate too, under `cli`.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod manager;
pub mod overlay;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthError, FaceAuthClient, LoginOutcome, RegisterOutcome};
pub use manager::{ManagerError, VaultManager};
pub use overlay::{Detector, FrameSource, OverlayHandle, OverlayLoop, OverlaySurface};
