mod multipart;
mod upload;

pub use multipart::{BOUNDARY_PREFIX, FILE_FIELD_NAME, PART_CONTENT_TYPE};
pub use upload::{UploadError, UploadRequest};

use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// A fully described HTTP request that a transport can send as-is.
pub trait HttpRequest {
    type Response: DeserializeOwned;

    fn url(&self) -> &Url;

    fn method(&self) -> &Method;

    fn headers(&self) -> &HeaderMap;

    fn body(&self) -> &Bytes;

    /// Render into a `reqwest` builder without sending it.
    fn build_request(&self, client: &Client) -> RequestBuilder {
        client
            .request(self.method().clone(), self.url().clone())
            .headers(self.headers().clone())
            .body(self.body().clone())
    }
}
