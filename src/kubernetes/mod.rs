// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation for the global and local clusters.

pub mod client;

pub use client::{client_from_kubeconfig_file, ClusterClients};
