use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use url::Url;

use common::prelude::Identity;

use crate::api::ApiRequest;

#[derive(Debug, Clone)]
pub struct DeleteFileRequest {
    pub identity: Identity,
    pub folder: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFileResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl ApiRequest for DeleteFileRequest {
    type Response = DeleteFileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!(
                "/files/{}/{}/{}",
                self.identity, self.folder, self.file_name
            ))
            .expect("path segments are non-empty");
        client.delete(full_url)
    }
}
