// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A source that fails part-way through.
//!
//! [`ErrorInjectingStream`] lifts a plain stream into `StreamItem`s and slips one
//! `StreamItem::Error` in before the value at a given index. Operators close
//! over their source, so this is the simplest way to exercise the terminal
//! error path of a whole pipeline from a finite, synchronous source.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{ready, Stream};
use pin_project::pin_project;
use prism_core::{PrismError, StreamItem};

/// Message carried by the injected error unless overridden.
pub const INJECTED_ERROR: &str = "Injected test error";

/// Emits `inner`'s items as values, with one error at position `at` (0-indexed).
///
/// ```rust
/// use prism_test_utils::ErrorInjectingStream;
/// use prism_core::StreamItem;
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let items: Vec<_> = ErrorInjectingStream::new(stream::iter(vec!["a", "b"]), 1)
///     .collect()
///     .await;
///
/// assert!(matches!(items[0], StreamItem::Value("a")));
/// assert!(items[1].is_error());
/// assert!(matches!(items[2], StreamItem::Value("b")));
/// # }
/// ```
#[pin_project]
pub struct ErrorInjectingStream<S> {
    #[pin]
    inner: S,
    pending: Option<(usize, String)>,
    position: usize,
}

impl<S> ErrorInjectingStream<S> {
    pub fn new(inner: S, at: usize) -> Self {
        Self::with_message(inner, at, INJECTED_ERROR)
    }

    pub fn with_message(inner: S, at: usize, message: impl Into<String>) -> Self {
        Self {
            inner,
            pending: Some((at, message.into())),
            position: 0,
        }
    }
}

impl<S: Stream> Stream for ErrorInjectingStream<S> {
    type Item = StreamItem<S::Item>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if let Some((_, message)) = this.pending.take_if(|(at, _)| *at == *this.position) {
            *this.position += 1;
            return Poll::Ready(Some(StreamItem::Error(PrismError::stream_error(message))));
        }

        let polled = ready!(this.inner.poll_next(cx));
        if polled.is_some() {
            *this.position += 1;
        }
        Poll::Ready(polled.map(StreamItem::Value))
    }
}
