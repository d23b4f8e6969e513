//! Deterministic pod names for workflow nodes.
//!
//! The UI needs to find the pod behind a node (for logs, for the pod view)
//! without asking the API. It recomputes the name the controller gave the
//! pod:
//!
//! ```text
//! workflow_name == node_name  ->  workflow_name
//! otherwise                   ->  truncate(workflow_name + "-" + template_name) + "-" + fnv(node_name)
//! ```
//!
//! The prefix is capped so the full name stays within the Kubernetes
//! resource name limit of 253 characters.
//!
//! # Hash compatibility
//!
//! [`fnv_hash`] accumulates with five shifted additions instead of a prime
//! multiply. Names must match the controller bit-for-bit, so the shift form
//! is reproduced exactly.

use crate::types::{NodeStatus, Workflow};

/// Maximum length of a Kubernetes resource name.
pub const MAX_K8S_RESOURCE_NAME_LENGTH: usize = 253;

/// Width reserved at the end of a pod name for the hash suffix.
pub const K8S_NAMING_HASH_LENGTH: usize = 10;

/// Longest prefix kept before `-<hash>` is appended.
pub const MAX_POD_NAME_PREFIX_LENGTH: usize =
    MAX_K8S_RESOURCE_NAME_LENGTH - K8S_NAMING_HASH_LENGTH - 1;

/// 32-bit FNV offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// Hash a node name with the shift-accumulating FNV variant.
///
/// Each UTF-8 byte is XORed into the accumulator, which is then advanced by
/// `(h << 1) + (h << 4) + (h << 7) + (h << 8) + (h << 24)`. All arithmetic
/// wraps at 32 bits.
///
/// # Examples
///
/// ```
/// use flowdeck_workflow::naming::fnv_hash;
///
/// assert_eq!(fnv_hash(""), 2_166_136_261);
/// assert_eq!(fnv_hash("a"), 3_826_002_220);
/// ```
#[inline]
#[must_use]
pub fn fnv_hash(input: &str) -> u32 {
    input.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        let hash = hash ^ u32::from(byte);
        let shifted = (hash << 1)
            .wrapping_add(hash << 4)
            .wrapping_add(hash << 7)
            .wrapping_add(hash << 8)
            .wrapping_add(hash << 24);
        hash.wrapping_add(shifted)
    })
}

/// Cut a pod name prefix down to [`MAX_POD_NAME_PREFIX_LENGTH`] characters.
///
/// Leading characters are kept; no attempt is made to cut at a `-`.
/// Length is counted in Unicode scalar values (`char`s), so a character
/// outside the Basic Multilingual Plane counts once, and a character is
/// never split.
///
/// # Examples
///
/// ```
/// use flowdeck_workflow::naming::{ensure_pod_name_prefix_length, MAX_POD_NAME_PREFIX_LENGTH};
///
/// assert_eq!(ensure_pod_name_prefix_length("wf-main"), "wf-main");
///
/// let long = "x".repeat(300);
/// assert_eq!(ensure_pod_name_prefix_length(&long).len(), MAX_POD_NAME_PREFIX_LENGTH);
/// ```
#[inline]
#[must_use]
pub fn ensure_pod_name_prefix_length(prefix: &str) -> &str {
    match prefix.char_indices().nth(MAX_POD_NAME_PREFIX_LENGTH) {
        Some((cut, _)) => prefix.get(..cut).unwrap_or(prefix),
        None => prefix,
    }
}

/// Derive the pod name for a workflow node.
///
/// The root node of a workflow runs in a pod named after the workflow
/// itself. Every other node gets `<workflow>-<template>-<fnv(node_name)>`,
/// with the `<workflow>-<template>` part truncated to fit.
///
/// `_node_id` is accepted for call-site compatibility and does not affect
/// the result.
///
/// # Examples
///
/// ```
/// use flowdeck_workflow::naming::{fnv_hash, pod_name};
///
/// assert_eq!(pod_name("wf1", "wf1", "main", "n1"), "wf1");
/// assert_eq!(
///     pod_name("wf1", "step-1", "main", "n1"),
///     format!("wf1-main-{}", fnv_hash("step-1")),
/// );
/// ```
#[must_use]
pub fn pod_name(
    workflow_name: &str,
    node_name: &str,
    template_name: &str,
    _node_id: &str,
) -> String {
    if workflow_name == node_name {
        return workflow_name.to_string();
    }

    let prefix = format!("{workflow_name}-{template_name}");
    let prefix = ensure_pod_name_prefix_length(&prefix);

    format!("{prefix}-{}", fnv_hash(node_name))
}

/// Derive the pod name for a node of the given workflow.
///
/// A node without a template name is treated as having an empty one.
#[must_use]
pub fn pod_name_for_node(workflow: &Workflow, node: &NodeStatus) -> String {
    pod_name(
        workflow.name(),
        &node.name,
        node.template_name.as_deref().unwrap_or_default(),
        &node.id,
    )
}
