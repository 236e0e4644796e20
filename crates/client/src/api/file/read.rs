//! Raw byte fetch of a stored file, used by preview and download.

use reqwest::{Client, RequestBuilder};
use url::Url;

use common::prelude::Identity;

use crate::api::ApiRequest;

#[derive(Debug, Clone)]
pub struct ReadFileRequest {
    pub identity: Identity,
    pub folder: String,
    pub file_name: String,
}

impl ApiRequest for ReadFileRequest {
    // The body is raw bytes; send this through `ApiClient::call_raw`. The
    // associated type only exists to satisfy the trait.
    type Response = serde_json::Value;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!(
                "/files/{}/{}/{}",
                self.identity, self.folder, self.file_name
            ))
            .expect("path segments are non-empty");
        client.get(full_url)
    }
}
