// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Periodic ResourceBinding listing and the operator's one-shot selection

use crate::binding::input::ConsoleInput;
use crate::constants::labels;
use crate::error::{HybridGaiaError, Result};
use crate::types::ResourceBinding;
use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, instrument, warn};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// How a selection run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The named binding was marked selected
    Selected(String),
    /// The operator picked the named binding but the update was rejected
    UpdateFailed(String),
    /// Console input ended before a valid choice was made
    InputClosed,
}

/// Label selector matching the ResourceBindings derived from a Description
pub fn origin_selector(description_name: &str) -> String {
    format!("{}={}", labels::ORIGIN_DESCRIPTION_NAME, description_name)
}

/// Lists the bindings of one Description on every tick and lets the operator
/// mark one of them as selected.
///
/// Only one selection is made per run: `run` returns as soon as a valid
/// choice was submitted, whatever the outcome of the update.
pub struct BindingSelector<W: Write> {
    api: Api<ResourceBinding>,
    label_selector: String,
    poll_interval: Duration,
    bindings: Vec<ResourceBinding>,
    out: W,
}

impl<W: Write> BindingSelector<W> {
    pub fn new(
        client: Client,
        namespace: &str,
        description_name: &str,
        poll_interval: Duration,
        out: W,
    ) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            label_selector: origin_selector(description_name),
            poll_interval,
            bindings: Vec::new(),
            out,
        }
    }

    /// Bindings from the latest successful listing
    pub fn bindings(&self) -> &[ResourceBinding] {
        &self.bindings
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Poll and wait for a choice until one is made or input ends
    pub async fn run(&mut self, mut input: mpsc::Receiver<ConsoleInput>) -> Result<SelectionOutcome> {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.refresh().await?,
                received = input.recv() => match received {
                    Some(ConsoleInput::Choice(choice)) => {
                        if let Some(outcome) = self.select(choice).await? {
                            return Ok(outcome);
                        }
                    }
                    Some(ConsoleInput::Malformed(line)) => {
                        writeln!(self.out, "Invalid input {:?}. Please enter a number.", line)?;
                        self.out.flush()?;
                    }
                    None => {
                        warn!("Console input closed, no ResourceBinding selected");
                        return Ok(SelectionOutcome::InputClosed);
                    }
                },
            }
        }
    }

    /// List the bindings again; a failed listing keeps the previous list on screen
    #[instrument(skip(self), fields(selector = %self.label_selector))]
    async fn refresh(&mut self) -> Result<()> {
        let lp = ListParams::default().labels(&self.label_selector);
        match self.api.list(&lp).await {
            Ok(list) => {
                debug!("Listed {} ResourceBindings", list.items.len());
                self.bindings = list.items;
                self.render()
            }
            Err(e) => {
                warn!("Failed to list ResourceBindings: {}", e);
                Ok(())
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        write!(self.out, "{}", CLEAR_SCREEN)?;
        if self.bindings.is_empty() {
            writeln!(self.out, "Waiting for ResourceBindings...")?;
        }
        for (i, rb) in self.bindings.iter().enumerate() {
            writeln!(self.out, "[{}] {}", i, rb.name_any())?;
        }
        writeln!(self.out, "Enter your choice:")?;
        self.out.flush()?;
        Ok(())
    }

    /// Act on a numeric choice; `None` means keep waiting
    async fn select(&mut self, choice: i64) -> Result<Option<SelectionOutcome>> {
        let Some(binding) = usize::try_from(choice)
            .ok()
            .and_then(|i| self.bindings.get(i))
        else {
            writeln!(
                self.out,
                "Invalid choice {}, {} ResourceBindings are listed",
                choice,
                self.bindings.len()
            )?;
            self.out.flush()?;
            return Ok(None);
        };

        let name = binding.name_any();
        let mut selected = binding.clone();
        selected.mark_selected();

        match self
            .api
            .replace(&name, &PostParams::default(), &selected)
            .await
            .map_err(HybridGaiaError::api(format!(
                "Failed to update ResourceBinding {}",
                name
            ))) {
            Ok(_) => {
                info!("Marked ResourceBinding {} as selected", name);
                writeln!(self.out, "You have selected ResourceBinding: {}", name)?;
                self.out.flush()?;
                Ok(Some(SelectionOutcome::Selected(name)))
            }
            Err(e) => {
                error!("{}", e);
                writeln!(self.out, "Could not select ResourceBinding {}: {}", name, e)?;
                self.out.flush()?;
                Ok(Some(SelectionOutcome::UpdateFailed(name)))
            }
        }
    }
}
