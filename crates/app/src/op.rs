use std::error::Error;
use std::path::PathBuf;

use crate::client::{ApiError, PredictClient};
use crate::state::AppState;

/// Resolve the prediction endpoint.
///
/// Priority: explicit `--endpoint` flag > config file `endpoint`.
pub fn resolve_endpoint(explicit: Option<String>, state: &AppState) -> Option<String> {
    explicit.or_else(|| state.config.endpoint.clone())
}

#[derive(Debug, thiserror::Error)]
#[error("no endpoint configured; pass --endpoint or run 'pitch init --endpoint <url>'")]
pub struct NoEndpoint;

#[derive(Clone)]
pub struct OpContext {
    /// HTTP client for ops that talk to the endpoint
    pub client: PredictClient,
    /// Optional custom config path (defaults to ~/.pitch)
    pub config_path: Option<PathBuf>,
    /// Endpoint from the flag or config, if either set one
    pub endpoint: Option<String>,
}

impl OpContext {
    pub fn new(
        endpoint: Option<String>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            client: PredictClient::new()?,
            config_path,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> Result<&str, NoEndpoint> {
        self.endpoint.as_deref().ok_or(NoEndpoint)
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;

    fn state_with(endpoint: Option<&str>) -> AppState {
        AppState {
            pitch_dir: PathBuf::from("/tmp/pitch"),
            config_path: PathBuf::from("/tmp/pitch/config.toml"),
            config: AppConfig {
                endpoint: endpoint.map(str::to_string),
                ..AppConfig::default()
            },
        }
    }

    #[test]
    fn test_resolve_endpoint_explicit_wins() {
        let state = state_with(Some("http://config.example/predict"));
        let result = resolve_endpoint(Some("http://flag.example/predict".to_string()), &state);
        assert_eq!(result.as_deref(), Some("http://flag.example/predict"));
    }

    #[test]
    fn test_resolve_endpoint_falls_back_to_config() {
        let state = state_with(Some("http://config.example/predict"));
        let result = resolve_endpoint(None, &state);
        assert_eq!(result.as_deref(), Some("http://config.example/predict"));
    }

    #[test]
    fn test_resolve_endpoint_none() {
        let state = state_with(None);
        assert!(resolve_endpoint(None, &state).is_none());
    }

    #[test]
    fn test_context_without_endpoint() {
        let ctx = OpContext::new(None, None).unwrap();
        assert!(ctx.endpoint().is_err());
    }
}
