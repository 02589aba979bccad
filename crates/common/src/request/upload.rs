use std::path::{Path, PathBuf};

use bytes::Bytes;
use http::header::{HeaderValue, InvalidHeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Method};
use url::Url;

use super::multipart;
use super::HttpRequest;
use crate::response::PredictionResponse;

/// Filename sent when the path has no final segment
const FALLBACK_FILE_NAME: &str = "upload";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

/// A `POST` carrying one audio file as `multipart/form-data`.
///
/// Every instance owns a boundary token generated at build time,
///  which is both in the `Content-Type` header and in each
///  delimiter line of the body.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    url: Url,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
    boundary: String,
    file_name: String,
}

impl UploadRequest {
    /// Read `file` into memory and wrap it in a multipart upload aimed at `endpoint`.
    ///
    /// The endpoint is validated before the file is touched.
    pub fn build(file: impl AsRef<Path>, endpoint: &str) -> Result<Self, UploadError> {
        let path = file.as_ref();

        let url = Url::parse(endpoint).map_err(|source| UploadError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let boundary = multipart::new_boundary();

        let data = std::fs::read(path).map_err(|source| UploadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

        let body = multipart::single_file_body(&boundary, &file_name, &data);

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::try_from(multipart::content_type(&boundary))?,
        );

        tracing::debug!(
            url = %url,
            file_name = %file_name,
            body_len = body.len(),
            "built upload request"
        );

        Ok(Self {
            url,
            method: Method::POST,
            headers,
            body,
            boundary,
            file_name,
        })
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Last path segment of the uploaded file, as placed in `Content-Disposition`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    pub fn into_parts(self) -> (Url, Method, HeaderMap, Bytes) {
        (self.url, self.method, self.headers, self.body)
    }
}

impl HttpRequest for UploadRequest {
    type Response = PredictionResponse;

    fn url(&self) -> &Url {
        &self.url
    }

    fn method(&self) -> &Method {
        &self.method
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn body(&self) -> &Bytes {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_audio(contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("take1.mp3");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_build_sets_method_url_and_header() {
        let (_dir, path) = temp_audio(b"audio");
        let request = UploadRequest::build(&path, "https://example.com/predict").unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "https://example.com/predict");
        assert_eq!(
            request.content_type().unwrap(),
            format!("multipart/form-data; boundary={}", request.boundary())
        );
        assert_eq!(request.file_name(), "take1.mp3");
    }

    #[test]
    fn test_invalid_endpoint_checked_before_file_read() {
        let err = UploadRequest::build("/definitely/not/here.mp3", "not a url").unwrap_err();
        assert!(matches!(err, UploadError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let (_dir, path) = temp_audio(b"audio");
        let err = UploadRequest::build(&path, "/predict").unwrap_err();
        assert!(matches!(
            err,
            UploadError::InvalidEndpoint {
                source: url::ParseError::RelativeUrlWithoutBase,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_keeps_io_cause() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.mp3");
        let err = UploadRequest::build(&path, "http://localhost:8000/predict").unwrap_err();

        match err {
            UploadError::FileRead { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileRead, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_a_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = UploadRequest::build(dir.path(), "http://localhost:8000/predict").unwrap_err();
        assert!(matches!(err, UploadError::FileRead { .. }));
    }

    #[test]
    fn test_into_parts() {
        let (_dir, path) = temp_audio(b"abc");
        let request = UploadRequest::build(&path, "http://localhost:8000/predict").unwrap();
        let expected_body = request.body().clone();
        let (url, method, headers, body) = request.into_parts();

        assert_eq!(url.path(), "/predict");
        assert_eq!(method, Method::POST);
        assert!(headers.contains_key(CONTENT_TYPE));
        assert_eq!(body, expected_body);
    }
}
