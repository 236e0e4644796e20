//! Multipart file upload into a folder.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use url::Url;

use common::prelude::Identity;

use crate::api::ApiRequest;

#[derive(Debug, Clone)]
pub struct UploadFileRequest {
    pub identity: Identity,
    pub folder: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadFileResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl ApiRequest for UploadFileRequest {
    type Response = UploadFileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/upload/{}/{}", self.identity, self.folder))
            .expect("identity and folder are non-empty");

        let mime = mime_guess::from_path(&self.file_name).first_or_octet_stream();
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(mime.as_ref())
            .expect("mime_guess yields valid mime strings");
        let form = Form::new().part("file", part);

        client.post(full_url).multipart(form)
    }
}
