// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::prism_error::PrismError;

/// A stream item that can be either a value or an error.
///
/// Errors travel in-band so operators can forward them in order with the
/// values around them. Following Rx semantics, an error terminates the
/// sequence: every prism operator completes right after forwarding one.
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    /// A successful value
    Value(T),
    /// An error that terminates the stream
    Error(PrismError),
}

impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> StreamItem<T> {
    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Maps a `StreamItem<T>` to `StreamItem<U>` by applying a function to the contained value.
    ///
    /// Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(f(v)),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Returns the contained value, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => {
                panic!("called `StreamItem::unwrap()` on an `Error` value: {e:?}")
            }
        }
    }

    /// Returns the contained error, panicking if it's a value.
    ///
    /// # Panics
    ///
    /// Panics if the item is a `Value`.
    pub fn unwrap_err(self) -> PrismError {
        match self {
            StreamItem::Value(_) => panic!("called `StreamItem::unwrap_err()` on a `Value`"),
            StreamItem::Error(e) => e,
        }
    }
}

impl<T> StreamItem<Option<T>> {
    /// Moves the option out of a value: `Value(Some(v))` becomes `Some(Value(v))`,
    /// `Value(None)` becomes `None`, errors are kept.
    pub fn transpose(self) -> Option<StreamItem<T>> {
        match self {
            StreamItem::Value(Some(v)) => Some(StreamItem::Value(v)),
            StreamItem::Value(None) => None,
            StreamItem::Error(e) => Some(StreamItem::Error(e)),
        }
    }
}

impl<T> From<Result<T, PrismError>> for StreamItem<T> {
    fn from(result: Result<T, PrismError>) -> Self {
        match result {
            Ok(v) => StreamItem::Value(v),
            Err(e) => StreamItem::Error(e),
        }
    }
}

impl<T> From<StreamItem<T>> for Result<T, PrismError> {
    fn from(item: StreamItem<T>) -> Self {
        match item {
            StreamItem::Value(v) => Ok(v),
            StreamItem::Error(e) => Err(e),
        }
    }
}
