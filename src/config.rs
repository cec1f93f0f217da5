// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{namespaces, poll};
use crate::error::{HybridGaiaError, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

/// Command line flags shared by `create` and `clear`
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the kubeconfig file for the global cluster
    #[arg(long, env = "HYBRID_GAIA_KUBECONFIG_GLOBAL")]
    pub kubeconfig_global: PathBuf,

    /// Path to the kubeconfig file for the local cluster
    #[arg(long, env = "HYBRID_GAIA_KUBECONFIG_LOCAL")]
    pub kubeconfig_local: PathBuf,

    /// YAML file holding the Description resource
    #[arg(long = "description", default_value = "ar-demo-desc.yaml")]
    pub description_file: PathBuf,

    /// Directory of Deployment manifests, one per file
    #[arg(long = "deployments", default_value = "demo-deploys")]
    pub deployments_dir: PathBuf,

    /// Where the identities of created objects are recorded for `clear`
    #[arg(long, default_value = ".hybrid-gaia-state.yaml")]
    pub state_file: PathBuf,

    /// Namespace gaia writes merged ResourceBindings to
    #[arg(long, default_value = namespaces::RB_MERGED_RESERVED)]
    pub binding_namespace: String,

    /// Seconds between two ResourceBinding listings
    #[arg(long = "poll-interval-secs", default_value_t = poll::INTERVAL_SECS)]
    pub poll_interval_secs: u64,
}

/// Configuration of a single `create` or `clear` invocation
#[derive(Debug, Clone)]
pub struct Config {
    pub kubeconfig_global: PathBuf,
    pub kubeconfig_local: PathBuf,
    pub description_file: PathBuf,
    pub deployments_dir: PathBuf,
    pub state_file: PathBuf,
    pub binding_namespace: String,
    pub poll_interval: Duration,
}

impl Config {
    /// Validate parsed flags into a configuration
    pub fn from_args(args: ConfigArgs) -> Result<Self> {
        if args.poll_interval_secs == 0 {
            return Err(HybridGaiaError::ConfigError(
                "poll interval must be at least one second".to_string(),
            ));
        }
        if args.binding_namespace.is_empty() {
            return Err(HybridGaiaError::ConfigError(
                "binding namespace must not be empty".to_string(),
            ));
        }

        Ok(Config {
            kubeconfig_global: args.kubeconfig_global,
            kubeconfig_local: args.kubeconfig_local,
            description_file: args.description_file,
            deployments_dir: args.deployments_dir,
            state_file: args.state_file,
            binding_namespace: args.binding_namespace,
            poll_interval: Duration::from_secs(args.poll_interval_secs),
        })
    }
}
