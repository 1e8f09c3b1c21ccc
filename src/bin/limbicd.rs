use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use limbic::{server, Detector};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP listener on
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let detector = Arc::new(Detector::new());
    let app = server::router(detector);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!("limbicd listening on {}", args.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
