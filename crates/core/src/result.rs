//! Result type definition and extension traits.
//!
//! Provides combinators that turn failures into absent values with a trace
//! line, so UI-facing helpers never raise.

use std::fmt::Display;

use crate::error::Error;

/// The standard Result type for flowdeck operations.
///
/// # Examples
///
/// ```ignore
/// fn load() -> Result<FlowdeckConfig> {
///     let config = FlowdeckConfig::from_file(path)?;
///     Ok(config.with_env_overrides())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for any `Result` whose error can be displayed.
pub trait ResultExt<T> {
    /// Convert to an `Option`, tracing the error at debug level.
    ///
    /// Used where a failure is an expected outcome (malformed user input)
    /// rather than a fault.
    fn into_option_traced(self, context: &str) -> Option<T>;
}

impl<T, E: Display> ResultExt<T> for std::result::Result<T, E> {
    fn into_option_traced(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(context, error = %e, "treating failure as absent");
                None
            }
        }
    }
}

/// Extension trait for `Option` types.
pub trait OptionExt<T> {
    /// Tap into `None` without consuming the Option.
    fn tap_none<F: FnOnce()>(self, f: F) -> Self;
}

impl<T> OptionExt<T> for Option<T> {
    fn tap_none<F: FnOnce()>(self, f: F) -> Self {
        if self.is_none() {
            f();
        }
        self
    }
}
