//! Single-exchange face auth: register and login.
//!
//! Each call performs exactly one network exchange and resolves to a
//! discriminated outcome. Refusals are data, not errors: the caller branches
//! on them to pick user guidance. Only local validation failures and
//! transport problems surface as [`AuthError`].

use common::prelude::{Frame, Identity};

use crate::api::login::LoginRequest;
use crate::api::register::{RegisterFailureKind, RegisterRequest};
use crate::api::{ApiClient, ApiError};

#[derive(Debug, Clone)]
pub struct FaceAuthClient {
    client: ApiClient,
}

/// Outcome of a registration exchange.
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    Registered(Identity),
    /// The service refused. `FaceExists` means this face already has an
    /// account and the user should log in instead.
    Refused {
        kind: RegisterFailureKind,
        message: String,
    },
}

/// Outcome of a login exchange.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated(Identity),
    /// No match above the service's similarity threshold; `detail` is the
    /// server's own wording.
    Denied { detail: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No frame was captured; nothing is sent to the server.
    #[error("no captured frame to send")]
    EmptyFrame,
    #[error(transparent)]
    InvalidName(#[from] common::identity::IdentityError),
    #[error("auth service returned success without a username")]
    MalformedResponse,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FaceAuthClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, name: &str, frame: &Frame) -> Result<RegisterOutcome, AuthError> {
        let identity = Identity::new(name)?;
        if frame.is_empty() {
            return Err(AuthError::EmptyFrame);
        }

        let request = RegisterRequest {
            name: identity.to_string(),
            image: frame.to_base64(),
        };
        let response = self.client.call(request).await?;

        if response.success {
            tracing::info!(identity = %identity, "registered");
            return Ok(RegisterOutcome::Registered(identity));
        }

        let kind = response.kind.unwrap_or(RegisterFailureKind::Unknown);
        let message = response
            .message
            .unwrap_or_else(|| "registration refused".to_string());
        tracing::debug!(?kind, %message, "registration refused");
        Ok(RegisterOutcome::Refused { kind, message })
    }

    pub async fn login(&self, frame: &Frame) -> Result<LoginOutcome, AuthError> {
        if frame.is_empty() {
            return Err(AuthError::EmptyFrame);
        }

        let request = LoginRequest {
            image: frame.to_base64(),
        };
        let response = self.client.call(request).await?;

        if response.success {
            let username = response.username.ok_or(AuthError::MalformedResponse)?;
            let identity = Identity::new(&username).map_err(|_| AuthError::MalformedResponse)?;
            tracing::info!(identity = %identity, "authenticated");
            return Ok(LoginOutcome::Authenticated(identity));
        }

        let detail = response
            .detail
            .unwrap_or_else(|| "face not recognized".to_string());
        Ok(LoginOutcome::Denied { detail })
    }
}
