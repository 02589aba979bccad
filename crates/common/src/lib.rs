/**
 * Upload request construction.
 *  - Multipart/form-data body assembly for a
 *    single audio file part
 *  - The request descriptor trait that transport
 *    clients consume
 */
pub mod request;
/**
 * Shape of the note-prediction reply.
 * Accepts both the flat `notes` list and the
 *  `instruments` grouping under one type.
 */
pub mod response;

pub mod prelude {
    pub use crate::request::{HttpRequest, UploadError, UploadRequest};
    pub use crate::response::{decode, DecodeError, Instrument, Note, PredictionResponse};
}
