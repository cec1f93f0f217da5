// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Operator input read from the console on a dedicated thread

use std::io::BufRead;
use std::thread::JoinHandle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// One line typed by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// A number, not yet checked against the displayed list
    Choice(i64),
    /// Anything that is not a number
    Malformed(String),
}

/// Interpret a console line; blank lines are ignored
pub fn parse_line(line: &str) -> Option<ConsoleInput> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    Some(match line.parse::<i64>() {
        Ok(choice) => ConsoleInput::Choice(choice),
        Err(_) => ConsoleInput::Malformed(line.to_string()),
    })
}

/// Forward every line of `reader` to `tx` until EOF, a read error, or until
/// the receiving side is dropped.
///
/// Reading blocks, so it runs on its own OS thread rather than on the runtime;
/// the thread is detached and does not keep the process alive.
pub fn spawn_console_reader<R>(reader: R, tx: mpsc::Sender<ConsoleInput>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    std::thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read console input: {}", e);
                    break;
                }
            };

            let Some(input) = parse_line(&line) else {
                continue;
            };
            if tx.blocking_send(input).is_err() {
                debug!("Selection finished, console reader exiting");
                break;
            }
        }
    })
}
