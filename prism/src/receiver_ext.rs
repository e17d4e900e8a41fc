// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods for tokio `UnboundedReceiver` to create prism streams.

use futures::stream::{Map, StreamExt};
use prism_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Stream returned by [`UnboundedReceiverExt::into_prism_stream`].
pub type ReceiverStream<T> = Map<UnboundedReceiverStream<T>, fn(T) -> StreamItem<T>>;

/// Extension trait for `UnboundedReceiver` to create prism streams.
pub trait UnboundedReceiverExt<T> {
    /// Converts the receiver into a stream of `StreamItem::Value`.
    ///
    /// When an operator downstream completes early and drops the stream, the
    /// receiver is dropped with it and senders observe `is_closed()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prism::prelude::*;
    /// use tokio::sync::mpsc;
    ///
    /// #[derive(Clone)]
    /// struct Settings {
    ///     theme: String,
    /// }
    ///
    /// # async fn example() {
    /// let (tx, rx) = mpsc::unbounded_channel::<Settings>();
    ///
    /// let themes = rx.into_prism_stream().map_distinct(|settings| settings.theme);
    /// # }
    /// ```
    fn into_prism_stream(self) -> ReceiverStream<T>;
}

impl<T> UnboundedReceiverExt<T> for mpsc::UnboundedReceiver<T> {
    fn into_prism_stream(self) -> ReceiverStream<T> {
        UnboundedReceiverStream::new(self).map(StreamItem::Value as fn(T) -> StreamItem<T>)
    }
}
