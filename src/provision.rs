// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creating the Description in the global cluster and the Deployments in the local one

use crate::config::Config;
use crate::constants::namespaces;
use crate::error::{HybridGaiaError, Result};
use crate::kubernetes::ClusterClients;
use crate::manifest::{deployment_files, read_deployment, read_description};
use crate::state::{ObjectId, ProvisionRecord};
use crate::types::Description;
use k8s_openapi::api::apps::v1::Deployment;
use kube::{api::PostParams, Api, Client, ResourceExt};
use std::path::Path;
use tracing::{info, instrument};

/// Create the Description and every Deployment, recording each object in the
/// state file as soon as the API server accepted it.
///
/// The first failure stops the run; objects created before it stay in the
/// cluster and in the record so `clear` can remove them.
pub async fn provision(clients: &ClusterClients, config: &Config) -> Result<Description> {
    if ProvisionRecord::load(&config.state_file).await?.is_some() {
        return Err(HybridGaiaError::StateError(format!(
            "{} already exists, run `clear` before creating again",
            config.state_file.display()
        )));
    }

    let mut record = ProvisionRecord::default();

    let description = create_description(&clients.global, &config.description_file).await?;
    record.description = Some(ObjectId::of(&description));
    record.save(&config.state_file).await?;

    create_deployments(
        &clients.local,
        &config.deployments_dir,
        &mut record,
        &config.state_file,
    )
    .await?;

    info!(
        "Created Description {} and {} Deployments",
        description.name_any(),
        record.deployments.len()
    );
    Ok(description)
}

/// Decode the Description manifest and create it in the global cluster
#[instrument(skip(client))]
pub async fn create_description(client: &Client, path: &Path) -> Result<Description> {
    let description = read_description(path).await?;
    let namespace = description.target_namespace();
    let descriptions: Api<Description> = Api::namespaced(client.clone(), &namespace);

    let created = descriptions
        .create(&PostParams::default(), &description)
        .await
        .map_err(HybridGaiaError::api(format!(
            "Failed to create Description {}/{}",
            namespace,
            description.name_any()
        )))?;

    info!("Created Description {}/{}", namespace, created.name_any());
    Ok(created)
}

/// Create one Deployment per manifest file, in file name order
#[instrument(skip(client, record))]
pub async fn create_deployments(
    client: &Client,
    dir: &Path,
    record: &mut ProvisionRecord,
    state_file: &Path,
) -> Result<()> {
    for file in deployment_files(dir).await? {
        let deployment = read_deployment(&file).await?;
        let created = create_deployment(client, &deployment).await?;

        record.deployments.push(ObjectId::of(&created));
        record.save(state_file).await?;
    }

    Ok(())
}

async fn create_deployment(client: &Client, deployment: &Deployment) -> Result<Deployment> {
    let namespace = deployment
        .namespace()
        .unwrap_or_else(|| namespaces::DEFAULT.to_string());
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), &namespace);

    let created = deployments
        .create(&PostParams::default(), deployment)
        .await
        .map_err(HybridGaiaError::api(format!(
            "Failed to create Deployment {}/{}",
            namespace,
            deployment.name_any()
        )))?;

    info!("Created Deployment {}/{}", namespace, created.name_any());
    Ok(created)
}
