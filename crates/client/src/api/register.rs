//! Registration exchange: name + captured frame in, discriminated result out.

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use super::ApiRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Chosen display name; becomes the identity on success.
    pub name: String,
    /// Base64-encoded captured frame.
    pub image: String,
}

/// Why the service refused a registration. The caller branches on this to
/// pick user guidance; `FaceExists` in particular means "log in instead".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterFailureKind {
    FaceExists,
    UserExists,
    FaceError,
    ImageError,
    ValidationError,
    DatabaseError,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: Option<RegisterFailureKind>,
    pub message: Option<String>,
}

impl ApiRequest for RegisterRequest {
    type Response = RegisterResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/register").expect("static path");
        client.post(full_url).json(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_failure_kind() {
        let resp: RegisterResponse = serde_json::from_str(
            r#"{"success":false,"type":"face_exists","message":"Face already registered"}"#,
        )
        .unwrap();
        assert!(!resp.success);
        assert_eq!(resp.kind, Some(RegisterFailureKind::FaceExists));
    }

    #[test]
    fn test_unknown_kind_is_absorbed() {
        let resp: RegisterResponse =
            serde_json::from_str(r#"{"success":false,"type":"quota_exceeded","message":"no"}"#)
                .unwrap();
        assert_eq!(resp.kind, Some(RegisterFailureKind::Unknown));
    }

    #[test]
    fn test_success_has_no_kind() {
        let resp: RegisterResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.kind, None);
    }
}
