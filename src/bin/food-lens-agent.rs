// ABOUTME: Food Lens agent binary: HTTP server and one-shot invocation
// ABOUTME: Builds the tokio runtime, loads configuration, and wires the agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Lens Agent Binary
//!
//! ```bash
//! # Serve POST /invoke, GET /health, GET /ready
//! food-lens-agent serve --http-port 8080
//!
//! # Answer one event from a file, or from stdin without --event
//! food-lens-agent invoke --event event.json
//! echo '{"prompt": "How much protein is in quinoa?"}' | food-lens-agent invoke
//! ```

use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use food_lens_agent::{
    agent::FoodAdvisorAgent,
    config::environment::AgentConfig,
    envelope::RequestEnvelope,
    handler::InvocationHandler,
    logging,
    routes::{self, Readiness},
};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "food-lens-agent")]
#[command(about = "Food Lens agent - conversational food advisor for restaurant menus")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the invocation endpoint over HTTP
    Serve {
        /// Override HTTP port
        #[arg(long)]
        http_port: Option<u16>,
    },
    /// Handle a single invocation event and print the response document
    Invoke {
        /// Event JSON file; stdin when omitted
        #[arg(long)]
        event: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(async move {
        match cli.command {
            Command::Serve { http_port } => serve(http_port).await,
            Command::Invoke { event } => invoke(event).await,
        }
    })
}

fn build_handler(config: &AgentConfig, agent: FoodAdvisorAgent) -> InvocationHandler {
    InvocationHandler::new(Arc::new(agent), RequestEnvelope::from_config(&config.timeouts))
}

async fn serve(http_port: Option<u16>) -> Result<()> {
    let mut config = AgentConfig::from_env()?;
    if let Some(port) = http_port {
        config.http_port = port;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let agent = FoodAdvisorAgent::from_config(&config)?;
    let readiness = Readiness::from(&config).with_model_server(agent.provider());
    let app = routes::router(build_handler(&config, agent), readiness);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Food Lens agent listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Food Lens agent stopped");
    Ok(())
}

async fn invoke(event_path: Option<PathBuf>) -> Result<()> {
    let config = AgentConfig::from_env()?;
    logging::init_from_env_stderr()?;

    let raw = match event_path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read event from stdin")?;
            buffer
        }
    };
    let event: Value = serde_json::from_str(&raw).context("Event is not valid JSON")?;

    let handler = build_handler(&config, FoodAdvisorAgent::from_config(&config)?);
    let response = handler.handle(&event).await;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
