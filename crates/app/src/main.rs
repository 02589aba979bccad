//! pitch - upload an audio file to a pitch-prediction endpoint
//!
//! Builds the multipart request with `common`, sends it, and
//!  prints a summary of the notes the endpoint detected.

mod args;
mod client;
mod op;
mod ops;
mod state;

use args::Args;
use clap::{Parser, Subcommand};
use op::Op;
use ops::{Decode, Init, Predict, Request};
use state::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

command_enum! {
    (Init, Init),
    (Request, Request),
    (Decode, Decode),
    (Predict, Predict),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let state = match AppState::load(args.config_path.clone()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = match state.config.resolve_log_level(args.log_level.as_deref()) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    // Resolve endpoint: explicit flag > config endpoint
    let endpoint = op::resolve_endpoint(args.endpoint, &state);

    let ctx = match op::OpContext::new(endpoint, args.config_path) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let code = match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    // Flush buffered log lines before exiting
    drop(guard);
    std::process::exit(code);
}
