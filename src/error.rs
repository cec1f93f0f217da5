// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HybridGaiaError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("{context}: {source}")]
    ApiError {
        context: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid manifest: {0}")]
    ManifestError(String),

    #[error("State file error: {0}")]
    StateError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Console I/O error: {0}")]
    ConsoleError(#[from] std::io::Error),
}

impl HybridGaiaError {
    /// Wrap a failed API call with what was being attempted, for use with `map_err`
    pub fn api(context: impl Into<String>) -> impl FnOnce(kube::Error) -> Self {
        let context = context.into();
        move |source| HybridGaiaError::ApiError { context, source }
    }
}

pub type Result<T> = std::result::Result<T, HybridGaiaError>;
