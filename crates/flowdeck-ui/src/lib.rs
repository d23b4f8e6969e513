//! Presentation helpers for workflow UIs.
//!
//! - **Status icons** ([`status`]): phase to icon class tokens.
//! - **Namespaces** ([`namespace`]): managed/current preferences and the
//!   precedence used to pick the effective namespace.
//! - **Storage** ([`storage`]): the key-value stores namespaces live in.
//! - **JSON** ([`json`]): parsing that yields `None` instead of failing.
//! - **Streams** ([`stream`]): value / future / stream coercion.

#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod json;
pub mod namespace;
pub mod status;
pub mod storage;
pub mod stream;

pub use json::{try_json_parse, try_json_parse_as};
pub use namespace::{
    normalize_stored, resolve_namespace, resolve_namespace_or, NamespaceStore,
    CURRENT_NAMESPACE_KEY, DEFAULT_NAMESPACE, MANAGED_NAMESPACE_KEY,
};
pub use status::{status_icon_classes, StatusIcon};
pub use storage::{FileStore, InMemoryStore, KeyValueStore};
pub use stream::{to_stream, Emission};
