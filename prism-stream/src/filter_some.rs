// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{FusedStream, Stream};
use futures::ready;
use pin_project::pin_project;
use prism_core::StreamItem;

/// Extension trait providing the `filter_some` operator for streams of `Option`.
///
/// `Some(value)` is unwrapped and forwarded, `None` produces no emission at all.
/// Absence is a normal outcome: it is never turned into an error.
///
/// ```rust
/// use prism_stream::{FilterSomeExt, IntoPrismStream};
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let present: Vec<&str> = stream::iter(vec![None, Some("bar"), None, Some("baz")])
///     .into_prism_stream()
///     .filter_some()
///     .map(|item| item.unwrap())
///     .collect()
///     .await;
///
/// assert_eq!(present, vec!["bar", "baz"]);
/// # }
/// ```
pub trait FilterSomeExt<T>: Stream<Item = StreamItem<Option<T>>> + Sized {
    /// Forwards only present values, unwrapped.
    fn filter_some(self) -> FilterSome<Self>;
}

impl<S, T> FilterSomeExt<T> for S
where
    S: Stream<Item = StreamItem<Option<T>>>,
{
    fn filter_some(self) -> FilterSome<Self> {
        FilterSome { source: self }
    }
}

/// Stream returned by [`FilterSomeExt::filter_some`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct FilterSome<S> {
    #[pin]
    source: S,
}

impl<S, T> Stream for FilterSome<S>
where
    S: Stream<Item = StreamItem<Option<T>>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            match ready!(this.source.as_mut().poll_next(cx)) {
                Some(item) => {
                    if let Some(item) = item.transpose() {
                        return Poll::Ready(Some(item));
                    }
                }
                None => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

impl<S, T> FusedStream for FilterSome<S>
where
    S: FusedStream<Item = StreamItem<Option<T>>>,
{
    fn is_terminated(&self) -> bool {
        self.source.is_terminated()
    }
}
