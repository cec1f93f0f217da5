// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from kubeconfig files

use crate::config::Config;
use crate::error::{HybridGaiaError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config as KConfig,
};
use std::path::Path;
use tracing::{info, instrument};

/// Handles to the two clusters a demo spans
#[derive(Clone)]
pub struct ClusterClients {
    /// Receives the Description and produces ResourceBindings
    pub global: Client,
    /// Receives the Deployments
    pub local: Client,
}

impl ClusterClients {
    /// Connect to the global and local clusters named in the configuration
    pub async fn connect(config: &Config) -> Result<Self> {
        let global = client_from_kubeconfig_file(&config.kubeconfig_global)
            .await
            .map_err(|e| {
                HybridGaiaError::KubeconfigError(format!("global cluster: {}", e))
            })?;
        let local = client_from_kubeconfig_file(&config.kubeconfig_local)
            .await
            .map_err(|e| HybridGaiaError::KubeconfigError(format!("local cluster: {}", e)))?;

        Ok(Self { global, local })
    }
}

/// Create a Kubernetes client from the current context of a kubeconfig file
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn client_from_kubeconfig_file(path: &Path) -> Result<Client> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        HybridGaiaError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    let client_config = KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| {
            HybridGaiaError::KubeconfigError(format!(
                "Failed to create config from {}: {}",
                path.display(),
                e
            ))
        })?;

    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| HybridGaiaError::KubeconfigError(format!("Failed to create client: {}", e)))
}
