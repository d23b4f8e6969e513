//! Workflow and node models as the UI receives them.
//!
//! Field names follow the camelCase JSON of the workflow API. Everything the
//! helpers do not read is left out; unknown fields are ignored on
//! deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a workflow or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NodePhase {
    Pending,
    Running,
    Succeeded,
    Skipped,
    Failed,
    Error,
    Omitted,
    /// Any phase this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl NodePhase {
    /// Parse a phase name, mapping anything unrecognised to [`NodePhase::Unknown`].
    ///
    /// Matching is exact, as the API emits capitalised phase names.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "Pending" => Self::Pending,
            "Running" => Self::Running,
            "Succeeded" => Self::Succeeded,
            "Skipped" => Self::Skipped,
            "Failed" => Self::Failed,
            "Error" => Self::Error,
            "Omitted" => Self::Omitted,
            _ => Self::Unknown,
        }
    }

    /// Check if the phase is final.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::Skipped | Self::Failed | Self::Error | Self::Omitted
        )
    }

    /// The phase name as the API spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Skipped => "Skipped",
            Self::Failed => "Failed",
            Self::Error => "Error",
            Self::Omitted => "Omitted",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for NodePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of node in the workflow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NodeType {
    Pod,
    Container,
    Steps,
    StepGroup,
    #[serde(rename = "DAG")]
    Dag,
    TaskGroup,
    Retry,
    Skipped,
    Suspend,
    #[serde(rename = "HTTP")]
    Http,
    Plugin,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Name and namespace of a workflow object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Workflow name.
    #[serde(default)]
    pub name: String,
    /// Namespace the workflow lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// The parts of a workflow spec the UI inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSpec {
    /// Set when the whole workflow was suspended by a user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspend: Option<bool>,
}

/// Observed status of a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    /// Node identifier, unique within the workflow.
    #[serde(default)]
    pub id: String,
    /// Fully-qualified node name.
    #[serde(default)]
    pub name: String,
    /// Short human-readable name.
    #[serde(default)]
    pub display_name: String,
    /// Node kind.
    #[serde(default, rename = "type")]
    pub node_type: NodeType,
    /// Current phase, absent before the controller first reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<NodePhase>,
    /// Template the node was instantiated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
}

impl NodeStatus {
    /// Create a node with the given id, name and type.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            ..Self::default()
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Set the phase.
    #[must_use]
    pub const fn with_phase(mut self, phase: NodePhase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Set the template name.
    #[must_use]
    pub fn with_template_name(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = Some(template_name.into());
        self
    }

    /// The label shown in node lists: display name, falling back to name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

/// Observed status of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatus {
    /// Overall workflow phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<NodePhase>,
    /// Nodes keyed by node id.
    #[serde(default)]
    pub nodes: HashMap<String, NodeStatus>,
}

/// A workflow as served to the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Object metadata.
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Spec, absent on partially-loaded list entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<WorkflowSpec>,
    /// Status, absent until the controller picks the workflow up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowStatus>,
}

impl Workflow {
    /// Create a workflow with the given name and an empty spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.into(),
                namespace: None,
            },
            spec: Some(WorkflowSpec::default()),
            status: None,
        }
    }

    /// Set the spec's suspend flag.
    #[must_use]
    pub fn with_suspend(mut self, suspend: bool) -> Self {
        self.spec.get_or_insert_with(WorkflowSpec::default).suspend = Some(suspend);
        self
    }

    /// Set the workflow phase.
    #[must_use]
    pub fn with_phase(mut self, phase: NodePhase) -> Self {
        self.status.get_or_insert_with(WorkflowStatus::default).phase = Some(phase);
        self
    }

    /// Add a node to the status, keyed by its id.
    #[must_use]
    pub fn with_node(mut self, node: NodeStatus) -> Self {
        self.status
            .get_or_insert_with(WorkflowStatus::default)
            .nodes
            .insert(node.id.clone(), node);
        self
    }

    /// Drop the spec, as list views sometimes deliver.
    #[must_use]
    pub fn without_spec(mut self) -> Self {
        self.spec = None;
        self
    }

    /// The workflow name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Iterate over the status nodes, if any.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeStatus> {
        self.status.iter().flat_map(|status| status.nodes.values())
    }
}
