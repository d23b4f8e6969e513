//! Managed and current namespace preferences.
//!
//! Two slots live in a [`KeyValueStore`]:
//!
//! - **managed**: an operator-enforced namespace. When set (and non-empty)
//!   it wins over everything else.
//! - **current**: the namespace the user last picked.
//!
//! Resolution order for the effective namespace is managed, then the
//! explicit argument, then stored current, then [`DEFAULT_NAMESPACE`]. That
//! order lives in the pure [`resolve_namespace`]; [`NamespaceStore`] only
//! reads the slots and delegates.

use flowdeck_core::{OptionExt, Result};
use tokio::sync::watch;

use crate::storage::KeyValueStore;

/// Storage key of the managed namespace.
pub const MANAGED_NAMESPACE_KEY: &str = "managedNamespace";

/// Storage key of the current namespace.
pub const CURRENT_NAMESPACE_KEY: &str = "current_namespace";

/// Namespace used when nothing else is set.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Normalize a raw stored value.
///
/// Absent values and the literal strings `"null"` and `"undefined"` (left
/// behind by writers that stringified a missing value) read as absent. The
/// empty string is a real value and is kept.
#[inline]
#[must_use]
pub fn normalize_stored(raw: Option<String>) -> Option<String> {
    raw.filter(|value| value != "null" && value != "undefined")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolve the effective namespace, falling back to [`DEFAULT_NAMESPACE`].
///
/// Empty strings count as unset at every level.
///
/// ```
/// use flowdeck_ui::resolve_namespace;
///
/// assert_eq!(resolve_namespace(Some("ops"), Some("dev"), Some("qa")), "ops");
/// assert_eq!(resolve_namespace(None, Some("dev"), Some("qa")), "dev");
/// assert_eq!(resolve_namespace(Some(""), None, Some("qa")), "qa");
/// assert_eq!(resolve_namespace(None, None, None), "default");
/// ```
#[inline]
#[must_use]
pub fn resolve_namespace(
    managed: Option<&str>,
    explicit: Option<&str>,
    stored: Option<&str>,
) -> String {
    resolve_namespace_or(managed, explicit, stored, DEFAULT_NAMESPACE)
}

/// Resolve the effective namespace with a caller-chosen fallback.
#[inline]
#[must_use]
pub fn resolve_namespace_or(
    managed: Option<&str>,
    explicit: Option<&str>,
    stored: Option<&str>,
    fallback: &str,
) -> String {
    non_empty(managed)
        .or_else(|| non_empty(explicit))
        .or_else(|| non_empty(stored))
        .unwrap_or(fallback)
        .to_string()
}

/// Namespace preferences over a key-value store.
///
/// Changes to the current namespace are broadcast to subscribers as the
/// resolved current namespace (managed taking precedence).
#[derive(Debug)]
pub struct NamespaceStore<S> {
    store: S,
    changes: watch::Sender<Option<String>>,
}

impl<S: KeyValueStore> NamespaceStore<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        let (changes, _) = watch::channel(None);
        Self { store, changes }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Subscribe to current-namespace changes made through this handle.
    ///
    /// The receiver starts at `None` until the first change.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.changes.subscribe()
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        self.store.get(key).map(normalize_stored)
    }

    fn effective_managed(&self) -> Result<Option<String>> {
        Ok(self.managed_namespace()?.filter(|ns| !ns.is_empty()))
    }

    /// The managed namespace, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn managed_namespace(&self) -> Result<Option<String>> {
        self.read(MANAGED_NAMESPACE_KEY)
    }

    /// Set or clear the managed namespace.
    ///
    /// `None` and the empty string both clear it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn set_managed_namespace(&self, value: Option<&str>) -> Result<()> {
        match non_empty(value) {
            Some(ns) => {
                tracing::debug!(namespace = ns, "setting managed namespace");
                self.store.set(MANAGED_NAMESPACE_KEY, ns)
            }
            None => {
                tracing::debug!("clearing managed namespace");
                self.store.remove(MANAGED_NAMESPACE_KEY)
            }
        }
    }

    /// The current namespace: managed if set, otherwise the stored choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn current_namespace(&self) -> Result<Option<String>> {
        match self.effective_managed()? {
            Some(ns) => Ok(Some(ns)),
            None => self.read(CURRENT_NAMESPACE_KEY),
        }
    }

    /// Set or clear the stored current namespace and notify subscribers.
    ///
    /// Only `None` clears the slot; the empty string is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn set_current_namespace(&self, value: Option<&str>) -> Result<()> {
        match value {
            Some(ns) => {
                tracing::debug!(namespace = ns, "setting current namespace");
                self.store.set(CURRENT_NAMESPACE_KEY, ns)?;
            }
            None => {
                tracing::debug!("clearing current namespace");
                self.store.remove(CURRENT_NAMESPACE_KEY)?;
            }
        }

        let current = self.current_namespace()?;
        self.changes.send_replace(current);
        Ok(())
    }

    /// The managed namespace if set, otherwise `explicit` as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn namespace(&self, explicit: Option<&str>) -> Result<Option<String>> {
        Ok(self
            .effective_managed()?
            .or_else(|| explicit.map(str::to_string)))
    }

    /// The effective namespace, never absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn namespace_with_default(&self, explicit: Option<&str>) -> Result<String> {
        self.namespace_with_fallback(explicit, DEFAULT_NAMESPACE)
    }

    /// The effective namespace with a caller-chosen fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn namespace_with_fallback(
        &self,
        explicit: Option<&str>,
        fallback: &str,
    ) -> Result<String> {
        let managed = self.managed_namespace()?;
        let stored = self
            .read(CURRENT_NAMESPACE_KEY)?
            .tap_none(|| tracing::trace!("no stored current namespace"));
        Ok(resolve_namespace_or(
            managed.as_deref(),
            explicit,
            stored.as_deref(),
            fallback,
        ))
    }
}
