// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The `project` primitive: derive a value from every source value.
//!
//! `project` is the first stage of every operator in [`MappingExt`](crate::MappingExt).
//! Besides mapping, it owns the Rx error contract for the whole chain:
//!
//! - an upstream `StreamItem::Error` is forwarded unchanged
//! - a failing mapper (via [`try_project`](ProjectExt::try_project)) is reported as
//!   [`PrismError::UserError`]
//! - either way the stream completes right after the error and the source is dropped
//!
//! # Example
//!
//! ```rust
//! use prism_core::StreamItem;
//! use prism_stream::{IntoPrismStream, ProjectExt};
//! use futures::{stream, StreamExt};
//!
//! # async fn example() {
//! let lengths: Vec<_> = stream::iter(vec!["a", "abc"])
//!     .into_prism_stream()
//!     .project(str::len)
//!     .collect()
//!     .await;
//!
//! assert_eq!(lengths, vec![StreamItem::Value(1), StreamItem::Value(3)]);
//! # }
//! ```

use crate::mapper::{FnMapper, Mapper, TryFnMapper};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use prism_core::{PrismError, StreamItem};

/// Stream returned by [`ProjectExt::project`] and [`ProjectExt::try_project`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Project<S, M> {
    #[pin]
    source: Option<S>,
    mapper: M,
}

impl<S, M> Project<S, M> {
    pub(crate) fn new(source: S, mapper: M) -> Self {
        Self {
            source: Some(source),
            mapper,
        }
    }
}

impl<S, M, T> Stream for Project<S, M>
where
    S: Stream<Item = StreamItem<T>>,
    M: Mapper<T>,
{
    type Item = StreamItem<M::Output>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        let Some(source) = this.source.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        let error = match source.poll_next(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(None) => {
                this.source.set(None);
                return Poll::Ready(None);
            }
            Poll::Ready(Some(StreamItem::Value(value))) => match this.mapper.apply(value) {
                Ok(derived) => return Poll::Ready(Some(StreamItem::Value(derived))),
                Err(e) => {
                    warn!("mapper failed, terminating stream: {e}");
                    PrismError::user_error(e)
                }
            },
            Poll::Ready(Some(StreamItem::Error(e))) => {
                debug!("upstream error forwarded, terminating stream: {e}");
                e
            }
        };

        this.source.set(None);
        Poll::Ready(Some(StreamItem::Error(error)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.as_ref().map_or((0, Some(0)), |source| {
            let (_, upper) = source.size_hint();
            (0, upper)
        })
    }
}

impl<S, M, T> FusedStream for Project<S, M>
where
    S: Stream<Item = StreamItem<T>>,
    M: Mapper<T>,
{
    fn is_terminated(&self) -> bool {
        self.source.is_none()
    }
}

/// Extension trait providing the `project` primitive.
pub trait ProjectExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Maps every value with `mapper`, forwarding errors and ending after the first one.
    fn project<R, F>(self, mapper: F) -> Project<Self, FnMapper<F>>
    where
        F: FnMut(T) -> R;

    /// Maps every value with a fallible `mapper`.
    ///
    /// An `Err` from the mapper is emitted as [`PrismError::UserError`] and ends the stream.
    fn try_project<R, E, F>(self, mapper: F) -> Project<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<R, E>,
        E: std::error::Error + Send + Sync + 'static;
}

impl<S, T> ProjectExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn project<R, F>(self, mapper: F) -> Project<Self, FnMapper<F>>
    where
        F: FnMut(T) -> R,
    {
        Project::new(self, FnMapper(mapper))
    }

    fn try_project<R, E, F>(self, mapper: F) -> Project<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<R, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Project::new(self, TryFnMapper(mapper))
    }
}
