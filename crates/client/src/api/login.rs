use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use super::ApiRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Base64-encoded captured frame.
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Present on success: the matched identity.
    pub username: Option<String>,
    /// Present on refusal: the server's reason, shown verbatim.
    pub detail: Option<String>,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/login").expect("static path");
        client.post(full_url).json(&self)
    }
}
