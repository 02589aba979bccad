use std::path::PathBuf;

use clap::Args;

use common::prelude::{decode, DecodeError};

use super::Summary;

#[derive(Args, Debug, Clone)]
pub struct Decode {
    /// JSON response body saved from the endpoint
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeOpError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[async_trait::async_trait]
impl crate::op::Op for Decode {
    type Error = DecodeOpError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let json = std::fs::read(&self.input).map_err(|source| DecodeOpError::Read {
            path: self.input.clone(),
            source,
        })?;

        let response = decode(&json)?;
        Ok(Summary(&response).to_string())
    }
}
