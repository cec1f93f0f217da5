// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::constants::STATUS_SCHEDULER_SELECTED;

/// A scheduling proposal gaia derives from a Description.
///
/// Updates replace the whole object, so everything this tool does not model
/// is carried in `extra` and written back as it was read.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "apps.gaia.io", version = "v1alpha1", kind = "ResourceBinding")]
#[kube(namespaced)]
#[kube(status = "ResourceBindingStatus")]
#[serde(rename_all = "camelCase")]
pub struct ResourceBindingSpec {
    #[serde(rename = "appID", skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(rename = "parentRB", skip_serializing_if = "Option::is_none")]
    pub parent_rb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_peer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_scheduler: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
pub struct ResourceBindingStatus {
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ResourceBinding {
    /// Check if the operator already picked this binding
    pub fn is_selected(&self) -> bool {
        self.spec.status_scheduler.as_deref() == Some(STATUS_SCHEDULER_SELECTED)
    }

    /// Mark this binding as the one to schedule
    pub fn mark_selected(&mut self) {
        self.spec.status_scheduler = Some(STATUS_SCHEDULER_SELECTED.to_string());
    }
}
