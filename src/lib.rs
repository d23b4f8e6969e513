#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # flowdeck
//!
//! Workflow UI helpers from the shell: deterministic pod names, namespace
//! preferences, status icons and workflow inspection.
//!
//! This library re-exports the flowdeck workspace crates and holds the CLI
//! plumbing so it can be tested without spawning the binary.

pub use flowdeck_core;
pub use flowdeck_ui;
pub use flowdeck_workflow;

pub mod cli;
pub mod commands;
pub mod config;
