// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading Description and Deployment manifests from disk

use crate::error::{HybridGaiaError, Result};
use crate::types::Description;
use k8s_openapi::api::apps::v1::Deployment;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read and decode the Description manifest
pub async fn read_description(path: &Path) -> Result<Description> {
    read_manifest(path).await
}

/// Read and decode a single Deployment manifest
pub async fn read_deployment(path: &Path) -> Result<Deployment> {
    read_manifest(path).await
}

/// List the regular files of a manifest directory, sorted by file name
pub async fn deployment_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        HybridGaiaError::ManifestError(format!("Failed to read directory {}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        HybridGaiaError::ManifestError(format!("Failed to read directory {}: {}", dir.display(), e))
    })? {
        let file_type = entry.file_type().await.map_err(|e| {
            HybridGaiaError::ManifestError(format!(
                "Failed to stat {}: {}",
                entry.path().display(),
                e
            ))
        })?;
        if file_type.is_dir() {
            debug!("Skipping directory {}", entry.path().display());
            continue;
        }
        files.push(entry.path());
    }

    files.sort();
    Ok(files)
}

async fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = tokio::fs::read(path).await.map_err(|e| {
        HybridGaiaError::ManifestError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_yaml::from_slice(&data).map_err(|e| {
        HybridGaiaError::ManifestError(format!("Failed to decode {}: {}", path.display(), e))
    })
}
