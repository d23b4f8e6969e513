//! Coerce plain values, futures and streams into a single stream shape.
//!
//! View code subscribes to one thing. Data sources hand back a value they
//! already have, a future for one they are fetching, or a stream of
//! updates; [`Emission::into_stream`] turns all three into a [`BoxStream`].
//!
//! Fallible sources use `Result` items: a future resolving to `Err` yields a
//! single `Err` item, and a stream's error items and completion pass through
//! untouched.

use std::future::Future;

use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, Stream};
use futures::{FutureExt, StreamExt};

/// A value that is ready, pending, or arriving over time.
pub enum Emission<'a, T> {
    /// Already available.
    Value(T),
    /// Resolves once.
    Deferred(BoxFuture<'a, T>),
    /// Emits any number of items.
    Stream(BoxStream<'a, T>),
}

impl<'a, T: Send + 'a> Emission<'a, T> {
    /// Wrap a future.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'a,
    {
        Self::Deferred(future.boxed())
    }

    /// Wrap a stream.
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + Send + 'a,
    {
        Self::Stream(stream.boxed())
    }

    /// Convert into a stream.
    ///
    /// A value or future yields exactly one item and then completes. A
    /// stream is returned as-is.
    pub fn into_stream(self) -> BoxStream<'a, T> {
        match self {
            Self::Value(value) => stream::once(futures::future::ready(value)).boxed(),
            Self::Deferred(future) => stream::once(future).boxed(),
            Self::Stream(stream) => stream,
        }
    }
}

impl<T> From<T> for Emission<'_, T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> std::fmt::Debug for Emission<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Value(_) => "Value",
            Self::Deferred(_) => "Deferred",
            Self::Stream(_) => "Stream",
        };
        f.debug_tuple("Emission").field(&kind).finish()
    }
}

/// Convert anything that becomes an [`Emission`] into a stream.
pub fn to_stream<'a, T: Send + 'a>(source: impl Into<Emission<'a, T>>) -> BoxStream<'a, T> {
    source.into().into_stream()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_value_emits_once() {
        let items: Vec<u32> = to_stream(7_u32).collect().await;
        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn test_deferred_emits_resolved_value_once() {
        let items: Vec<String> = Emission::deferred(async { "ready".to_string() })
            .into_stream()
            .collect()
            .await;
        assert_eq!(items, vec!["ready".to_string()]);
    }

    #[tokio::test]
    async fn test_deferred_error_is_single_item() {
        let items: Vec<Result<u32, String>> =
            Emission::deferred(async { Err::<u32, String>("boom".to_string()) })
                .into_stream()
                .collect()
                .await;
        assert_eq!(items, vec![Err("boom".to_string())]);
    }

    #[tokio::test]
    async fn test_stream_passes_through() {
        let source = stream::iter(vec![Ok(1), Err("bad"), Ok(3)]);
        let items: Vec<Result<u32, &str>> = Emission::stream(source).into_stream().collect().await;
        assert_eq!(items, vec![Ok(1), Err("bad"), Ok(3)]);
    }

    #[tokio::test]
    async fn test_empty_stream_completes_without_items() {
        let items: Vec<u32> = Emission::stream(stream::empty::<u32>())
            .into_stream()
            .collect()
            .await;
        assert!(items.is_empty());
    }

    #[test]
    fn test_debug_names_variant() {
        let emission: Emission<'_, u32> = Emission::Value(1);
        assert_eq!(format!("{emission:?}"), "Emission(\"Value\")");
    }
}
