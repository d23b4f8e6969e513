//! CLI command handlers.
//!
//! Handlers return the text to print so they can be tested without
//! capturing stdout.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use flowdeck_ui::{
    status_icon_classes, FileStore, InMemoryStore, KeyValueStore, NamespaceStore, StatusIcon,
};
use flowdeck_workflow::{
    fnv_hash, is_workflow_running, is_workflow_suspended, pod_name, pod_name_for_node, NodePhase,
    Workflow,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{Commands, NamespaceCommands};
use crate::config::FlowdeckConfig;

/// Execute a CLI command and return its output.
///
/// # Errors
///
/// Returns an error if the namespace store or an input file cannot be read
/// or written, or if a workflow document does not parse.
pub fn execute_command(command: Commands, config: &FlowdeckConfig) -> Result<String> {
    match command {
        Commands::PodName {
            workflow,
            node,
            template,
            node_id,
        } => Ok(pod_name(&workflow, &node, &template, &node_id)),

        Commands::Hash { input } => Ok(fnv_hash(&input).to_string()),

        Commands::StatusIcon { phase } => Ok(status_icon_classes(&phase)),

        Commands::Inspect { path } => cmd_inspect(&path),

        Commands::Namespace { command } => {
            let namespaces = open_namespaces(config)?;
            cmd_namespace(&namespaces, command, config)
        }
    }
}

/// Open the namespace store described by the configuration.
///
/// # Errors
///
/// Returns an error if the configured storage file exists but cannot be read.
pub fn open_namespaces(config: &FlowdeckConfig) -> Result<NamespaceStore<Box<dyn KeyValueStore>>> {
    let store: Box<dyn KeyValueStore> = match config.storage_path.as_deref() {
        Some(path) => Box::new(
            FileStore::open(path)
                .with_context(|| format!("failed to open namespace store at {}", path.display()))?,
        ),
        None => {
            info!("no storage_path configured, namespace preferences will not persist");
            Box::new(InMemoryStore::new())
        }
    };
    Ok(NamespaceStore::new(store))
}

fn cmd_namespace<S: KeyValueStore>(
    namespaces: &NamespaceStore<S>,
    command: NamespaceCommands,
    config: &FlowdeckConfig,
) -> Result<String> {
    match command {
        NamespaceCommands::Get => {
            let managed = namespaces.managed_namespace()?;
            let current = namespaces.current_namespace()?;
            Ok(format!(
                "managed: {}\ncurrent: {}",
                managed.as_deref().unwrap_or("-"),
                current.as_deref().unwrap_or("-"),
            ))
        }
        NamespaceCommands::SetCurrent { namespace } => {
            namespaces.set_current_namespace(Some(&namespace))?;
            info!(namespace = %namespace, "current namespace set");
            Ok(namespaces.current_namespace()?.unwrap_or_default())
        }
        NamespaceCommands::ClearCurrent => {
            namespaces.set_current_namespace(None)?;
            Ok(String::new())
        }
        NamespaceCommands::SetManaged { namespace } => {
            namespaces.set_managed_namespace(Some(&namespace))?;
            Ok(namespaces.managed_namespace()?.unwrap_or_default())
        }
        NamespaceCommands::ClearManaged => {
            namespaces.set_managed_namespace(None)?;
            Ok(String::new())
        }
        NamespaceCommands::Resolve { namespace } => Ok(namespaces
            .namespace_with_fallback(namespace.as_deref(), &config.default_namespace)?),
    }
}

/// Summary of a workflow printed by `inspect`.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub name: String,
    pub namespace: Option<String>,
    pub phase: Option<NodePhase>,
    pub icon: String,
    pub suspended: bool,
    pub running: bool,
    pub nodes: Vec<NodeReport>,
}

/// One node line of an [`InspectReport`].
#[derive(Debug, Serialize)]
pub struct NodeReport {
    pub id: String,
    pub name: String,
    pub phase: Option<NodePhase>,
    pub icon: String,
    pub pod: String,
}

impl InspectReport {
    /// Build the report for a workflow. Nodes are ordered by id.
    #[must_use]
    pub fn from_workflow(workflow: &Workflow) -> Self {
        let phase = workflow.status.as_ref().and_then(|s| s.phase);

        let mut nodes: Vec<NodeReport> = workflow
            .nodes()
            .map(|node| NodeReport {
                id: node.id.clone(),
                name: node.short_name().to_string(),
                phase: node.phase,
                icon: StatusIcon::for_phase(node.phase.unwrap_or_default()).to_string(),
                pod: pod_name_for_node(workflow, node),
            })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        Self {
            name: workflow.name().to_string(),
            namespace: workflow.metadata.namespace.clone(),
            phase,
            icon: StatusIcon::for_phase(phase.unwrap_or_default()).to_string(),
            suspended: is_workflow_suspended(workflow),
            running: is_workflow_running(workflow),
            nodes,
        }
    }
}

fn cmd_inspect(path: &Path) -> Result<String> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read workflow from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read workflow from {}", path.display()))?
    };

    let workflow: Workflow =
        serde_json::from_str(&content).context("workflow document is not valid JSON")?;
    let report = InspectReport::from_workflow(&workflow);
    Ok(serde_json::to_string_pretty(&report)?)
}
