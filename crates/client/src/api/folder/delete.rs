use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::ApiRequest;

#[derive(Debug, Clone, Serialize)]
pub struct DeleteFolderRequest {
    /// Identity owning the folder (wire field is `name`).
    pub name: String,
    pub folder_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFolderResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl ApiRequest for DeleteFolderRequest {
    type Response = DeleteFolderResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/folder/delete").expect("static path");
        client.delete(full_url).json(&self)
    }
}
