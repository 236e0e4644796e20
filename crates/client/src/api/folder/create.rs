use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::ApiRequest;

#[derive(Debug, Clone, Serialize)]
pub struct CreateFolderRequest {
    /// Identity owning the folder (wire field is `name`).
    pub name: String,
    pub folder_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFolderResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl ApiRequest for CreateFolderRequest {
    type Response = CreateFolderResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/folder/create").expect("static path");
        client.post(full_url).json(&self)
    }
}
