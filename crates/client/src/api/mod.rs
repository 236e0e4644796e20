//! Typed HTTP API for the remote vault service.
//!
//! One module per endpoint; each request type knows how to build its own
//! `reqwest` request against the service base URL and names its response
//! type, so [`ApiClient::call`] stays a single generic code path.

pub mod client;
pub mod detect;
pub mod error;
pub mod file;
pub mod folder;
pub mod health;
pub mod login;
pub mod register;

pub use client::ApiClient;
pub use error::ApiError;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// A request the [`ApiClient`] knows how to send.
pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
}
