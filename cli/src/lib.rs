// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of unilife: an interactive session over the
//! in-memory campus stores.

mod cli;
mod cmd_assignment;
mod cmd_day;
mod cmd_directory;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_ride;
mod cmd_session;
mod config;
mod demo;
mod event_formatter;
mod listing_formatter;
mod session;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::session::{Flow, Session, split_line};
