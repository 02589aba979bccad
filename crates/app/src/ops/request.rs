use std::path::PathBuf;

use clap::Args;

use common::prelude::{HttpRequest, UploadError, UploadRequest};

use crate::op::NoEndpoint;

#[derive(Args, Debug, Clone)]
pub struct Request {
    /// Audio file to upload
    #[arg(long)]
    pub file: PathBuf,

    /// Write the raw multipart body to this path
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    NoEndpoint(#[from] NoEndpoint),
    #[error("failed to build request: {0}")]
    Upload(#[from] UploadError),
    #[error("failed to write body to {}: {source}", .path.display())]
    WriteBody {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait::async_trait]
impl crate::op::Op for Request {
    type Error = RequestError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let request = UploadRequest::build(&self.file, ctx.endpoint()?)?;

        let mut output = format!(
            "{} {}\n\
             Content-Type: {}\n\
             Boundary: {}\n\
             Filename: {}\n\
             Body: {} bytes",
            request.method(),
            request.url(),
            request.content_type().unwrap_or_default(),
            request.boundary(),
            request.file_name(),
            request.body().len()
        );

        if let Some(out) = &self.out {
            std::fs::write(out, request.body())
                .map_err(|source| RequestError::WriteBody {
                    path: out.clone(),
                    source,
                })?;
            tracing::info!("wrote multipart body to {}", out.display());
            output.push_str(&format!("\nWrote body to: {}", out.display()));
        }

        Ok(output)
    }
}
