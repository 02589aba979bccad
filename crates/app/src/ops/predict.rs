use std::path::PathBuf;

use clap::Args;

use common::prelude::{UploadError, UploadRequest};

use super::Summary;
use crate::client::ApiError;
use crate::op::NoEndpoint;

#[derive(Args, Debug, Clone)]
pub struct Predict {
    /// Audio file to upload
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    NoEndpoint(#[from] NoEndpoint),
    #[error("failed to build request: {0}")]
    Upload(#[from] UploadError),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::op::Op for Predict {
    type Error = PredictError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let request = UploadRequest::build(&self.file, ctx.endpoint()?)?;
        tracing::info!(
            "Uploading {} with boundary {}",
            request.file_name(),
            request.boundary()
        );

        let response = ctx.client.call(&request).await?;
        Ok(Summary(&response).to_string())
    }
}
