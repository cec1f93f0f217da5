// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Record of the objects a `create` run left behind, consumed by `clear`

use crate::constants::namespaces;
use crate::error::{HybridGaiaError, Result};
use kube::{Resource, ResourceExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Namespaced identity of a created object
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ObjectId {
    pub namespace: String,
    pub name: String,
}

impl ObjectId {
    /// Identity of an object as returned by the API server
    pub fn of<K: Resource>(obj: &K) -> Self {
        Self {
            namespace: obj
                .namespace()
                .unwrap_or_else(|| namespaces::DEFAULT.to_string()),
            name: obj.name_any(),
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRecord {
    /// Description in the global cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ObjectId>,
    /// Deployments in the local cluster, in creation order
    #[serde(default)]
    pub deployments: Vec<ObjectId>,
}

impl ProvisionRecord {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.deployments.is_empty()
    }

    /// Load a record, `None` if no file exists
    pub async fn load(path: &Path) -> Result<Option<Self>> {
        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(HybridGaiaError::StateError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_yaml::from_slice(&data).map(Some).map_err(|e| {
            HybridGaiaError::StateError(format!("Failed to decode {}: {}", path.display(), e))
        })
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self).map_err(|e| {
            HybridGaiaError::StateError(format!("Failed to encode state: {}", e))
        })?;

        tokio::fs::write(path, data).await.map_err(|e| {
            HybridGaiaError::StateError(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!("Saved state to {}", path.display());
        Ok(())
    }

    /// Delete the record file; a missing file is not an error
    pub async fn remove(path: &Path) -> Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HybridGaiaError::StateError(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::apps::v1::Deployment;
    use kube::api::ObjectMeta;

    fn make_id(namespace: &str, name: &str) -> ObjectId {
        ObjectId {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_object_id_of_namespaced_object() {
        let deploy = Deployment {
            metadata: ObjectMeta {
                name: Some("frontend".to_string()),
                namespace: Some("demo".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(ObjectId::of(&deploy), make_id("demo", "frontend"));
    }

    #[test]
    fn test_object_id_defaults_namespace() {
        let deploy = Deployment {
            metadata: ObjectMeta {
                name: Some("frontend".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(ObjectId::of(&deploy).namespace, "default");
        assert_eq!(ObjectId::of(&deploy).to_string(), "default/frontend");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ProvisionRecord::load(&dir.path().join("state.yaml"))
            .await
            .unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.yaml");
        let record = ProvisionRecord {
            description: Some(make_id("gaia-reserved", "ar-demo")),
            deployments: vec![make_id("demo", "frontend"), make_id("demo", "backend")],
        };

        record.save(&path).await.unwrap();
        let loaded = ProvisionRecord::load(&path).await.unwrap().unwrap();

        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.yaml");
        std::fs::write(&path, "deployments: {not: a list}").unwrap();

        assert!(matches!(
            ProvisionRecord::load(&path).await,
            Err(HybridGaiaError::StateError(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ProvisionRecord::remove(&dir.path().join("state.yaml"))
            .await
            .is_ok());
    }

    #[test]
    fn test_is_empty() {
        assert!(ProvisionRecord::default().is_empty());
        assert!(!ProvisionRecord {
            description: None,
            deployments: vec![make_id("demo", "frontend")],
        }
        .is_empty());
    }
}
