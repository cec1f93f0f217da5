// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::constants::namespaces;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "apps.gaia.io", version = "v1alpha1", kind = "Description")]
#[kube(namespaced)]
#[kube(status = "DescriptionStatus")]
#[serde(rename_all = "camelCase")]
pub struct DescriptionSpec {
    #[serde(rename = "appID", skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_components: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_condition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_performance: Option<Value>,
    /// Fields gaia knows about and this tool passes through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Description {
    /// Namespace the Description is created in
    pub fn target_namespace(&self) -> String {
        self.namespace()
            .unwrap_or_else(|| namespaces::DEFAULT.to_string())
    }
}
