// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{FusedStream, Stream};
use futures::ready;
use pin_project::pin_project;
use prism_core::StreamItem;

/// Extension trait providing the `distinct_until_changed` operator for streams.
///
/// This operator filters out consecutive duplicate values, emitting only when
/// the value changes from the previous emission.
///
/// # Behavior
///
/// - First value is always emitted (no previous value to compare)
/// - Subsequent values are compared to the last *emitted* value with `PartialEq`
/// - Errors are always propagated immediately and never compared
///
/// # Examples
///
/// ```rust
/// use prism_stream::{DistinctUntilChangedExt, IntoPrismStream};
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let distinct: Vec<i32> = stream::iter(vec![1, 1, 2, 2, 2, 3, 2])
///     .into_prism_stream()
///     .distinct_until_changed()
///     .map(|item| item.unwrap())
///     .collect()
///     .await;
///
/// assert_eq!(distinct, vec![1, 2, 3, 2]);
/// # }
/// ```
///
/// # Performance
///
/// - O(1) time complexity per item
/// - Stores only the last emitted value
pub trait DistinctUntilChangedExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: PartialEq + Clone,
{
    /// Emits values only when they differ from the previous emitted value.
    fn distinct_until_changed(self) -> DistinctUntilChanged<Self, T>;
}

impl<S, T> DistinctUntilChangedExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: PartialEq + Clone,
{
    fn distinct_until_changed(self) -> DistinctUntilChanged<Self, T> {
        DistinctUntilChanged {
            source: self,
            last: None,
        }
    }
}

/// Stream returned by [`DistinctUntilChangedExt::distinct_until_changed`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct DistinctUntilChanged<S, T> {
    #[pin]
    source: S,
    last: Option<T>,
}

impl<S, T> Stream for DistinctUntilChanged<S, T>
where
    S: Stream<Item = StreamItem<T>>,
    T: PartialEq + Clone,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            match ready!(this.source.as_mut().poll_next(cx)) {
                Some(StreamItem::Value(value)) => {
                    if this.last.as_ref() == Some(&value) {
                        continue;
                    }
                    *this.last = Some(value.clone());
                    return Poll::Ready(Some(StreamItem::Value(value)));
                }
                Some(StreamItem::Error(e)) => {
                    *this.last = None;
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                None => {
                    *this.last = None;
                    return Poll::Ready(None);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (usize::from(lower > 0 && self.last.is_none()), upper)
    }
}

impl<S, T> FusedStream for DistinctUntilChanged<S, T>
where
    S: FusedStream<Item = StreamItem<T>>,
    T: PartialEq + Clone,
{
    fn is_terminated(&self) -> bool {
        self.source.is_terminated()
    }
}
