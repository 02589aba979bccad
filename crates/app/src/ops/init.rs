use clap::Args;
use url::Url;

use crate::op::NoEndpoint;
use crate::state::{parse_log_level, AppConfig, AppState, StateError};

/// Store `--endpoint` as the default in a new config file
#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Log level written to the config (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub default_log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    NoEndpoint(#[from] NoEndpoint),
    #[error("invalid endpoint {0:?}: {1}")]
    InvalidEndpoint(String, url::ParseError),
    #[error("init failed: {0}")]
    StateFailed(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let endpoint = ctx.endpoint()?;
        Url::parse(endpoint).map_err(|e| InitError::InvalidEndpoint(endpoint.to_string(), e))?;
        parse_log_level(&self.default_log_level)?;

        let config = AppConfig {
            endpoint: Some(endpoint.to_string()),
            log_level: self.default_log_level.clone(),
        };

        let state = AppState::init(ctx.config_path.clone(), config)?;

        Ok(format!(
            "Initialized pitch directory at: {}\n\
             - Config: {}\n\
             - Endpoint: {}\n\
             - Log level: {}",
            state.pitch_dir.display(),
            state.config_path.display(),
            endpoint,
            state.config.log_level
        ))
    }
}
