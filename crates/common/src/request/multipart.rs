use bytes::{BufMut, Bytes, BytesMut};
use uuid::Uuid;

/// Literal every boundary token starts with
pub const BOUNDARY_PREFIX: &str = "Boundary-";
/// Form field name the endpoint reads the upload from
pub const FILE_FIELD_NAME: &str = "file";
/// Part type sent for every upload, whatever the actual encoding.
///  Servers accept it for wav/flac/ogg too, but it is only
///  accurate for mp3.
pub const PART_CONTENT_TYPE: &str = "audio/mpeg";

const CRLF: &[u8] = b"\r\n";

/// A fresh boundary token, e.g. `Boundary-1B4E28BA-2FA1-11D2-883F-0016D3CCA427`
pub(crate) fn new_boundary() -> String {
    let token = Uuid::new_v4().hyphenated().to_string().to_uppercase();
    format!("{}{}", BOUNDARY_PREFIX, token)
}

/// `multipart/form-data; boundary=<boundary>`
pub(crate) fn content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={}", boundary)
}

/// Encode a body holding exactly one file part, terminated by the closing delimiter.
///
/// The filename goes into the `Content-Disposition` header verbatim; quotes are not escaped.
pub(crate) fn single_file_body(boundary: &str, filename: &str, data: &[u8]) -> Bytes {
    let disposition = format!(
        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
        FILE_FIELD_NAME, filename
    );
    let part_type = format!("Content-Type: {}", PART_CONTENT_TYPE);

    let mut buf = BytesMut::with_capacity(
        data.len() + disposition.len() + part_type.len() + 2 * boundary.len() + 24,
    );

    buf.put_slice(b"--");
    buf.put_slice(boundary.as_bytes());
    buf.put_slice(CRLF);
    buf.put_slice(disposition.as_bytes());
    buf.put_slice(CRLF);
    buf.put_slice(part_type.as_bytes());
    buf.put_slice(CRLF);
    buf.put_slice(CRLF);

    buf.put_slice(data);
    buf.put_slice(CRLF);

    buf.put_slice(b"--");
    buf.put_slice(boundary.as_bytes());
    buf.put_slice(b"--");
    buf.put_slice(CRLF);

    buf.freeze()
}
