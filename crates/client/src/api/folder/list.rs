use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use url::Url;

use common::prelude::Identity;

use crate::api::ApiRequest;

#[derive(Debug, Clone)]
pub struct ListFoldersRequest {
    pub identity: Identity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListFoldersResponse {
    pub success: bool,
    #[serde(default)]
    pub folders: Vec<String>,
}

impl ApiRequest for ListFoldersRequest {
    type Response = ListFoldersResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/folders/{}", self.identity))
            .expect("identity is non-empty");
        client.get(full_url)
    }
}
