// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label keys written by gaia
pub mod labels {
    /// Set on every ResourceBinding to the name of the Description it was derived from
    pub const ORIGIN_DESCRIPTION_NAME: &str = "apps.gaia.io/ori.desc.name";
}

/// Namespaces reserved by gaia
pub mod namespaces {
    /// Where the merged ResourceBindings of a Description end up
    pub const RB_MERGED_RESERVED: &str = "gaia-merged";
    /// Used for manifests that do not set a namespace
    pub const DEFAULT: &str = "default";
}

/// Value of `spec.statusScheduler` marking the binding the operator picked
pub const STATUS_SCHEDULER_SELECTED: &str = "selected";

/// Binding poll configuration
pub mod poll {
    /// Interval between two ResourceBinding listings
    pub const INTERVAL_SECS: u64 = 5;
}
