// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Interactive ResourceBinding selection.

pub mod input;
pub mod selector;

pub use input::{parse_line, spawn_console_reader, ConsoleInput};
pub use selector::{origin_selector, BindingSelector, SelectionOutcome};
