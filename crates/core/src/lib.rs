//! Core error types and result combinators shared by every flowdeck crate.
//!
//! Errors are explicit and typed. Helpers that the UI treats as infallible
//! convert failures into `None` through [`ResultExt::into_option_traced`]
//! rather than propagating them.

#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod error;
pub mod result;

pub use error::Error;
pub use result::{OptionExt, Result, ResultExt};
