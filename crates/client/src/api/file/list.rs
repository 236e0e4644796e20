use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use url::Url;

use common::prelude::Identity;

use crate::api::ApiRequest;

#[derive(Debug, Clone)]
pub struct ListFilesRequest {
    pub identity: Identity,
    pub folder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListFilesResponse {
    pub success: bool,
    #[serde(default)]
    pub files: Vec<String>,
}

impl ApiRequest for ListFilesRequest {
    type Response = ListFilesResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/files/{}/{}", self.identity, self.folder))
            .expect("identity and folder are non-empty");
        client.get(full_url)
    }
}
