use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use url::Url;

use super::ApiRequest;

#[derive(Debug, Clone, Default)]
pub struct HealthRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl ApiRequest for HealthRequest {
    type Response = HealthResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/health").expect("static path");
        client.get(full_url)
    }
}
