#[allow(clippy::module_inception)]
mod client;
mod error;

pub use client::PredictClient;
pub use error::ApiError;
