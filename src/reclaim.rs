// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deleting what `create` provisioned

use crate::config::Config;
use crate::error::{HybridGaiaError, Result};
use crate::kubernetes::ClusterClients;
use crate::manifest::{deployment_files, read_deployment, read_description};
use crate::state::{ObjectId, ProvisionRecord};
use crate::types::Description;
use k8s_openapi::api::apps::v1::Deployment;
use kube::{api::DeleteParams, Api, Client, Resource, ResourceExt};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Delete the Description and the Deployments of a previous `create`.
///
/// Identities come from the state file. Without one they are recovered from
/// the manifests, which is only correct if the files did not change since.
pub async fn reclaim(clients: &ClusterClients, config: &Config) -> Result<()> {
    match ProvisionRecord::load(&config.state_file).await? {
        Some(mut record) => {
            delete_recorded(clients, &mut record, Some(&config.state_file)).await?;
            ProvisionRecord::remove(&config.state_file).await
        }
        None => {
            warn!(
                "No state file at {}, deriving object names from the manifests",
                config.state_file.display()
            );
            let mut record = record_from_manifests(config).await?;
            delete_recorded(clients, &mut record, None).await
        }
    }
}

/// Identities the manifests on disk would create
pub async fn record_from_manifests(config: &Config) -> Result<ProvisionRecord> {
    let description = read_description(&config.description_file).await?;
    let mut record = ProvisionRecord {
        description: Some(ObjectId {
            namespace: description.target_namespace(),
            name: description.name_any(),
        }),
        deployments: Vec::new(),
    };

    for file in deployment_files(&config.deployments_dir).await? {
        let deployment = read_deployment(&file).await?;
        record.deployments.push(ObjectId::of(&deployment));
    }

    Ok(record)
}

/// Delete every object in `record`, Description first, stopping at the first
/// failure. Deleted objects are dropped from the record, and from `state_file`
/// when one is given, so a later run picks up where this one stopped.
pub async fn delete_recorded(
    clients: &ClusterClients,
    record: &mut ProvisionRecord,
    state_file: Option<&Path>,
) -> Result<()> {
    if let Some(id) = record.description.clone() {
        delete_object::<Description>(&clients.global, &id).await?;
        record.description = None;
        persist(record, state_file).await?;
    }

    while let Some(id) = record.deployments.first().cloned() {
        delete_object::<Deployment>(&clients.local, &id).await?;
        record.deployments.remove(0);
        persist(record, state_file).await?;
    }

    Ok(())
}

#[instrument(skip(client), fields(object = %id))]
async fn delete_object<K>(client: &Client, id: &ObjectId) -> Result<()>
where
    K: Resource<Scope = k8s_openapi::NamespaceResourceScope>
        + Clone
        + std::fmt::Debug
        + serde::de::DeserializeOwned,
    <K as Resource>::DynamicType: Default,
{
    let kind = K::kind(&Default::default()).to_string();
    let api: Api<K> = Api::namespaced(client.clone(), &id.namespace);

    api.delete(&id.name, &DeleteParams::default())
        .await
        .map_err(HybridGaiaError::api(format!("Failed to delete {} {}", kind, id)))?;

    info!("Deleted {} {}", kind, id);
    Ok(())
}

async fn persist(record: &ProvisionRecord, state_file: Option<&Path>) -> Result<()> {
    match state_file {
        Some(path) => record.save(path).await,
        None => Ok(()),
    }
}
