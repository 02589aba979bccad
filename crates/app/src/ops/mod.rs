pub mod decode;
pub mod init;
pub mod predict;
pub mod request;
mod summary;

pub use decode::Decode;
pub use init::Init;
pub use predict::Predict;
pub use request::Request;
pub use summary::Summary;
