//! FocusFlow CLI Application
//!
//! Command-line interface for the FocusFlow study planner.

mod args;
mod cli;
mod renderer;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use focusflow_core::{ControllerBuilder, GeminiClient};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_key,
        model,
        api_base_url,
        timeout_secs,
        command,
    } = Args::parse();

    let service = GeminiClient::builder()
        .api_key(api_key.unwrap_or_default())
        .model(model)
        .base_url(api_base_url)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("Failed to configure the AI client")?;

    let controller = ControllerBuilder::new()
        .with_database_path(database_file)
        .with_service(Arc::new(service))
        .build()
        .await
        .context("Failed to initialize FocusFlow")?;

    let cli = Cli::new(controller, TerminalRenderer::new(!no_color));

    info!("FocusFlow started");

    match command {
        Some(Onboard) => cli.onboard().await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Insights(args)) => cli.insights(args).await,
        Some(Streak) => cli.streak().await,
        None => cli.home().await,
    }
}
