// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kube::ResourceExt;
use std::io::BufReader;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hybrid_gaia::binding::{spawn_console_reader, BindingSelector, SelectionOutcome};
use hybrid_gaia::config::{Config, ConfigArgs};
use hybrid_gaia::kubernetes::ClusterClients;
use hybrid_gaia::provision::provision;
use hybrid_gaia::reclaim::reclaim;

#[derive(Parser)]
#[command(name = "hybrid-gaia")]
#[command(
    about = "Manage a gaia Description and its Deployments across Kubernetes clusters",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the Description and Deployments, then pick a ResourceBinding
    Create(ConfigArgs),

    /// Delete the Description and Deployments
    Clear(ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr, stdout belongs to the binding list
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("hybrid_gaia={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Create(args) => create(args).await,
        Commands::Clear(args) => clear(args).await,
    };

    if let Err(e) = result {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Provision both clusters and let the operator select a ResourceBinding
async fn create(args: ConfigArgs) -> Result<()> {
    let config = Config::from_args(args)?;
    let clients = ClusterClients::connect(&config)
        .await
        .context("Failed to connect to clusters")?;

    let description = provision(&clients, &config)
        .await
        .context("Failed to create resources")?;

    let (input_tx, input_rx) = mpsc::channel(1);
    spawn_console_reader(BufReader::new(std::io::stdin()), input_tx);

    let mut selector = BindingSelector::new(
        clients.global.clone(),
        &config.binding_namespace,
        &description.name_any(),
        config.poll_interval,
        std::io::stdout(),
    );

    match selector
        .run(input_rx)
        .await
        .context("ResourceBinding selection failed")?
    {
        SelectionOutcome::Selected(name) => info!("ResourceBinding {} selected", name),
        SelectionOutcome::UpdateFailed(name) => {
            warn!("ResourceBinding {} was chosen but could not be updated", name)
        }
        SelectionOutcome::InputClosed => warn!("No ResourceBinding selected"),
    }

    Ok(())
}

/// Delete everything `create` made
async fn clear(args: ConfigArgs) -> Result<()> {
    let config = Config::from_args(args)?;
    let clients = ClusterClients::connect(&config)
        .await
        .context("Failed to connect to clusters")?;

    reclaim(&clients, &config)
        .await
        .context("Failed to clear resources")?;

    info!("Cleared Description and Deployments");
    Ok(())
}
