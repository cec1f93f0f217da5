// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client-side views of the gaia `apps.gaia.io/v1alpha1` resources.

pub mod description;
pub mod resource_binding;

pub use description::{Description, DescriptionSpec};
pub use resource_binding::{ResourceBinding, ResourceBindingSpec};
