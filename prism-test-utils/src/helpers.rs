// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use prism_core::{PrismError, StreamItem};
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Waits for the next item and returns it.
///
/// # Panics
///
/// Panics if nothing arrives within `timeout_ms` or the stream ends.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Stream ended, expected an item"),
        Err(_) => panic!("No item emitted within {timeout_ms}ms"),
    }
}

/// Waits for the next item and returns its value.
///
/// # Panics
///
/// Panics if the next item is an error, or as [`unwrap_stream`] does.
pub async fn unwrap_value<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match unwrap_stream(stream, timeout_ms).await {
        StreamItem::Value(value) => value,
        StreamItem::Error(e) => panic!("Expected a value, got error: {e}"),
    }
}

/// Waits for the next item and returns its error.
///
/// # Panics
///
/// Panics if the next item is a value, or as [`unwrap_stream`] does.
pub async fn unwrap_error<S, T>(stream: &mut S, timeout_ms: u64) -> PrismError
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    T: Debug,
{
    match unwrap_stream(stream, timeout_ms).await {
        StreamItem::Value(value) => panic!("Expected an error, got value: {value:?}"),
        StreamItem::Error(e) => e,
    }
}

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected item emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Asserts that the stream completes within `timeout_ms` without another item.
///
/// # Panics
///
/// Panics if an item arrives or the stream is still open after the timeout.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected stream to end, but it emitted an item"),
        Err(_) => panic!("Expected stream to end within {timeout_ms}ms"),
    }
}

/// Drains a finite stream into its values.
///
/// # Errors
///
/// Returns the first error the stream emits.
pub async fn collect_values<S, T>(stream: S) -> Result<Vec<T>, PrismError>
where
    S: Stream<Item = StreamItem<T>>,
{
    let items: Vec<StreamItem<T>> = stream.collect().await;
    items.into_iter().map(Result::from).collect()
}
