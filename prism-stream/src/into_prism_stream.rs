// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Map, Stream, StreamExt};
use prism_core::StreamItem;

/// Lifts a stream of plain values into a prism stream.
///
/// Each item is wrapped in `StreamItem::Value`, so the result can feed any
/// prism operator.
///
/// # Example
///
/// ```rust
/// use prism_stream::IntoPrismStream;
/// use futures::stream;
///
/// let stream = stream::iter(vec![1, 2, 3]).into_prism_stream();
/// ```
pub trait IntoPrismStream: Stream + Sized {
    /// Wraps every item in `StreamItem::Value`.
    fn into_prism_stream(self) -> Map<Self, fn(Self::Item) -> StreamItem<Self::Item>>;
}

impl<S: Stream> IntoPrismStream for S {
    fn into_prism_stream(self) -> Map<Self, fn(Self::Item) -> StreamItem<Self::Item>> {
        self.map(StreamItem::Value as fn(Self::Item) -> StreamItem<Self::Item>)
    }
}
