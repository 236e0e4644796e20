//! Advisory per-frame face detection.
//!
//! One request per overlay cycle. A `success: false` body ("no face") is a
//! normal outcome and normalizes to an empty [`Detection`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use common::prelude::{DetectMode, Detection, FaceBox, Frame, Point};

use super::{ApiClient, ApiError, ApiRequest};
use crate::overlay::Detector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Base64-encoded frame.
    pub image: String,
    pub mode: DetectMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectResponse {
    pub success: bool,
    /// Login mode: bounding box of the first detected face.
    pub face: Option<FaceBox>,
    /// Register mode: flattened landmark points.
    pub landmarks: Option<Vec<Point>>,
    pub message: Option<String>,
}

impl From<DetectResponse> for Detection {
    fn from(resp: DetectResponse) -> Self {
        if !resp.success {
            return Detection::default();
        }
        Detection {
            face: resp.face,
            landmarks: resp.landmarks.unwrap_or_default(),
        }
    }
}

impl ApiRequest for DetectRequest {
    type Response = DetectResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/detect-face").expect("static path");
        client.post(full_url).json(&self)
    }
}

#[async_trait]
impl Detector for ApiClient {
    async fn detect(&self, frame: &Frame, mode: DetectMode) -> Result<Detection, ApiError> {
        let request = DetectRequest {
            image: frame.to_base64(),
            mode,
        };
        let response: DetectResponse = self.call(request).await?;
        Ok(response.into())
    }
}
