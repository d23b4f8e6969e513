//! Predicates the UI uses to decide which workflow actions to offer.

use crate::types::{NodePhase, NodeType, Workflow};

/// Check whether a workflow is suspended.
///
/// A workflow counts as suspended when its spec carries `suspend: true`, or
/// when any of its nodes is a `Suspend` node that is still running. A
/// workflow without a spec is never suspended.
#[must_use]
pub fn is_workflow_suspended(workflow: &Workflow) -> bool {
    let Some(spec) = workflow.spec.as_ref() else {
        return false;
    };

    spec.suspend.unwrap_or(false)
        || workflow.nodes().any(|node| {
            node.node_type == NodeType::Suspend && node.phase == Some(NodePhase::Running)
        })
}

/// Check whether a workflow is running.
///
/// A workflow without a spec, or without a reported status, is not running.
#[must_use]
pub fn is_workflow_running(workflow: &Workflow) -> bool {
    workflow.spec.is_some()
        && workflow
            .status
            .as_ref()
            .is_some_and(|status| status.phase == Some(NodePhase::Running))
}
