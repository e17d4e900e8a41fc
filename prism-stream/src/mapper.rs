// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Adapters turning user closures into the derivation step of [`Project`](crate::Project).
//!
//! Infallible closures (`FnMut(T) -> R`) are wrapped in [`FnMapper`], fallible
//! ones (`FnMut(T) -> Result<R, E>`) in [`TryFnMapper`]. Both implement
//! [`Mapper`], so every operator has a single code path regardless of which
//! flavour the caller supplied.

use core::convert::Infallible;

/// A derivation applied to every value of a source stream.
pub trait Mapper<T> {
    /// The derived value.
    type Output;
    /// The failure a derivation can report.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Derives the output for one source value.
    ///
    /// # Errors
    /// Returns the mapper's own error when the derivation fails.
    fn apply(&mut self, value: T) -> Result<Self::Output, Self::Error>;
}

/// Wraps a closure that cannot fail.
#[derive(Debug, Clone)]
pub struct FnMapper<F>(pub F);

impl<T, R, F> Mapper<T> for FnMapper<F>
where
    F: FnMut(T) -> R,
{
    type Output = R;
    type Error = Infallible;

    #[inline]
    fn apply(&mut self, value: T) -> Result<R, Infallible> {
        Ok((self.0)(value))
    }
}

/// Wraps a closure returning `Result`.
#[derive(Debug, Clone)]
pub struct TryFnMapper<F>(pub F);

impl<T, R, E, F> Mapper<T> for TryFnMapper<F>
where
    F: FnMut(T) -> Result<R, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = R;
    type Error = E;

    #[inline]
    fn apply(&mut self, value: T) -> Result<R, E> {
        (self.0)(value)
    }
}
