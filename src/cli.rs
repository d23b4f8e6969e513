//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// flowdeck - workflow UI helpers from the shell
#[derive(Parser, Debug)]
#[command(name = "flowdeck")]
#[command(version)]
#[command(about = "Pod names, namespaces and status icons for workflow UIs")]
pub struct Cli {
    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the pod name for a workflow node
    PodName {
        /// Workflow name
        #[arg(short, long)]
        workflow: String,

        /// Node name
        #[arg(short, long)]
        node: String,

        /// Template name
        #[arg(short, long, default_value = "")]
        template: String,

        /// Node ID (accepted, does not affect the name)
        #[arg(long, default_value = "")]
        node_id: String,
    },

    /// Print the FNV hash of a node name
    Hash {
        /// Input string
        input: String,
    },

    /// Print the icon classes for a phase
    StatusIcon {
        /// Phase name (e.g. Running, Failed)
        phase: String,
    },

    /// Inspect a workflow JSON document
    Inspect {
        /// Path to the workflow JSON, or '-' for stdin
        path: PathBuf,
    },

    /// Manage namespace preferences
    Namespace {
        #[command(subcommand)]
        command: NamespaceCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum NamespaceCommands {
    /// Show managed and current namespaces
    Get,

    /// Set the current namespace
    SetCurrent {
        /// Namespace name (may be empty)
        namespace: String,
    },

    /// Clear the current namespace
    ClearCurrent,

    /// Set the managed namespace
    SetManaged {
        /// Namespace name (empty clears it)
        namespace: String,
    },

    /// Clear the managed namespace
    ClearManaged,

    /// Print the effective namespace
    Resolve {
        /// Namespace requested explicitly
        #[arg(short, long)]
        namespace: Option<String>,
    },
}
