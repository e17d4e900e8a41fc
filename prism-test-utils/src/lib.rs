// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the prism operators.
//!
//! This crate is for development and testing only.
//!
//! # Architecture
//!
//! Operators consume their source by value, so tests push values through a
//! channel: the sender stays with the test, the receiving side becomes the
//! source stream. Once an operator drops its source the sender reports
//! `is_closed()`, which is how tests observe upstream cancellation.
//!
//! # Example
//!
//! ```rust
//! use prism_test_utils::{test_channel, helpers::unwrap_value, state::state_with_bar};
//!
//! # async fn example() {
//! let (tx, mut stream) = test_channel();
//!
//! tx.send(state_with_bar("initialized")).unwrap();
//!
//! let state = unwrap_value(&mut stream, 100).await;
//! assert_eq!(state.bar.as_deref(), Some("initialized"));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod state;

use futures::{Stream, StreamExt};
use prism_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::assert_no_element_emitted;
pub use state::State;

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// ```rust
/// use prism_test_utils::test_channel_with_errors;
/// use prism_core::{PrismError, StreamItem};
///
/// let (tx, _stream) = test_channel_with_errors::<i32>();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(PrismError::stream_error("test error"))).unwrap();
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
