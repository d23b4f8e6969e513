//! Workflow models, deterministic pod naming and state predicates.
//!
//! - **Models** ([`types`]): the slice of the workflow API the UI reads.
//! - **Pod naming** ([`naming`]): recompute the pod name behind a node.
//! - **Inspection** ([`inspect`]): suspended / running checks.
//!
//! # Example
//!
//! ```
//! use flowdeck_workflow::{pod_name_for_node, NodeStatus, NodeType, Workflow};
//!
//! let workflow = Workflow::new("hello");
//! let node = NodeStatus::new("hello-1", "hello.build", NodeType::Pod)
//!     .with_template_name("build");
//!
//! let pod = pod_name_for_node(&workflow, &node);
//! assert!(pod.starts_with("hello-build-"));
//! ```

#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod inspect;
pub mod naming;
pub mod types;

pub use inspect::{is_workflow_running, is_workflow_suspended};
pub use naming::{
    ensure_pod_name_prefix_length, fnv_hash, pod_name, pod_name_for_node,
    K8S_NAMING_HASH_LENGTH, MAX_K8S_RESOURCE_NAME_LENGTH, MAX_POD_NAME_PREFIX_LENGTH,
};
pub use types::{NodePhase, NodeStatus, NodeType, ObjectMeta, Workflow, WorkflowSpec, WorkflowStatus};
