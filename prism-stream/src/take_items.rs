// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The `take_items` primitive: forward the first `n` values, then complete.
//!
//! Unlike [`StreamExt::take`](futures::StreamExt::take), which stops polling
//! but keeps its source alive until it is itself dropped, `take_items` drops
//! the source in the same `poll_next` call that yields the `n`-th value. Any
//! producer observing its receiver (a closed channel, a cancelled
//! subscription) sees the cancellation right away.
//!
//! - Errors are forwarded without counting toward `n`
//! - `take_items(0)` completes on first poll without polling the source
//!
//! # Example
//!
//! ```rust
//! use prism_stream::{IntoPrismStream, TakeItemsExt};
//! use futures::{stream, StreamExt};
//!
//! # async fn example() {
//! let first_two: Vec<_> = stream::iter(1..)
//!     .into_prism_stream()
//!     .take_items(2)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(first_two, vec![1, 2]);
//! # }
//! ```

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{FusedStream, Stream};
use futures::ready;
use pin_project::pin_project;
use prism_core::StreamItem;

/// Extension trait providing the `take_items` operator for streams.
pub trait TakeItemsExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits only the first `n` values from the stream, then completes and drops the source.
    ///
    /// See the [module-level documentation](crate::take_items) for details.
    fn take_items(self, n: usize) -> TakeItems<Self>;
}

impl<S, T> TakeItemsExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn take_items(self, n: usize) -> TakeItems<Self> {
        TakeItems {
            source: Some(self),
            remaining: n,
        }
    }
}

/// Stream returned by [`TakeItemsExt::take_items`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct TakeItems<S> {
    #[pin]
    source: Option<S>,
    remaining: usize,
}

impl<S> TakeItems<S> {
    /// Number of values still allowed through.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S, T> Stream for TakeItems<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.remaining == 0 {
            this.source.set(None);
            return Poll::Ready(None);
        }

        let Some(source) = this.source.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        match ready!(source.poll_next(cx)) {
            Some(StreamItem::Value(value)) => {
                *this.remaining -= 1;
                if *this.remaining == 0 {
                    this.source.set(None);
                    debug!("take_items count reached, source dropped");
                }
                Poll::Ready(Some(StreamItem::Value(value)))
            }
            Some(StreamItem::Error(e)) => Poll::Ready(Some(StreamItem::Error(e))),
            None => {
                this.source.set(None);
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) if self.remaining > 0 => {
                let (_, upper) = source.size_hint();
                (0, upper.map(|upper| upper.min(self.remaining)))
            }
            _ => (0, Some(0)),
        }
    }
}

impl<S, T> FusedStream for TakeItems<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    fn is_terminated(&self) -> bool {
        self.source.is_none() || self.remaining == 0
    }
}
