// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{
    MapDistinct, MapOnce, MapOptional, MapOptionalDistinct, MapOptionalOnce, MapSome,
    MapSomeDistinct, MapSomeOnce,
};
use crate::mapper::{FnMapper, TryFnMapper};
use crate::{DistinctUntilChangedExt, FilterSomeExt, ProjectExt, TakeItemsExt};
use futures::Stream;
use prism_core::StreamItem;

/// Extension trait providing the projection operators.
///
/// See the [module-level documentation](crate::mapping) for the composition table.
pub trait MappingExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Maps every value and emits the result only when it differs from the
    /// previously emitted one.
    ///
    /// The first derived value always passes. The stream completes only when
    /// the source completes or errors.
    ///
    /// ```rust
    /// use prism_stream::{IntoPrismStream, MappingExt};
    /// use futures::{stream, StreamExt};
    ///
    /// # async fn example() {
    /// let parity: Vec<_> = stream::iter(vec![2, 4, 5, 7, 8])
    ///     .into_prism_stream()
    ///     .map_distinct(|n| n % 2 == 0)
    ///     .map(|item| item.unwrap())
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(parity, vec![true, false, true]);
    /// # }
    /// ```
    fn map_distinct<R, F>(self, mapper: F) -> MapDistinct<Self, FnMapper<F>, R>
    where
        F: FnMut(T) -> R,
        R: PartialEq + Clone;

    /// Fallible [`map_distinct`](Self::map_distinct).
    fn try_map_distinct<R, E, F>(self, mapper: F) -> MapDistinct<Self, TryFnMapper<F>, R>
    where
        F: FnMut(T) -> Result<R, E>,
        E: std::error::Error + Send + Sync + 'static,
        R: PartialEq + Clone;

    /// Maps the first value, emits it, then completes and drops the source.
    fn map_once<R, F>(self, mapper: F) -> MapOnce<Self, FnMapper<F>>
    where
        F: FnMut(T) -> R;

    /// Fallible [`map_once`](Self::map_once).
    fn try_map_once<R, E, F>(self, mapper: F) -> MapOnce<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<R, E>,
        E: std::error::Error + Send + Sync + 'static;

    /// Maps every value to an `Option`, emitting exactly one `Some`/`None` per source value.
    fn map_optional<R, F>(self, mapper: F) -> MapOptional<Self, FnMapper<F>>
    where
        F: FnMut(T) -> Option<R>;

    /// Fallible [`map_optional`](Self::map_optional).
    fn try_map_optional<R, E, F>(self, mapper: F) -> MapOptional<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static;

    /// [`map_optional`](Self::map_optional) followed by `distinct_until_changed`.
    ///
    /// Consecutive `None`s collapse into one emission, as do consecutive equal `Some`s.
    fn map_optional_distinct<R, F>(self, mapper: F) -> MapOptionalDistinct<Self, FnMapper<F>, R>
    where
        F: FnMut(T) -> Option<R>,
        R: PartialEq + Clone;

    /// Fallible [`map_optional_distinct`](Self::map_optional_distinct).
    fn try_map_optional_distinct<R, E, F>(
        self,
        mapper: F,
    ) -> MapOptionalDistinct<Self, TryFnMapper<F>, R>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static,
        R: PartialEq + Clone;

    /// [`map_optional`](Self::map_optional) followed by `take_items(1)`.
    ///
    /// The first result is emitted even when it is `None`.
    fn map_optional_once<R, F>(self, mapper: F) -> MapOptionalOnce<Self, FnMapper<F>>
    where
        F: FnMut(T) -> Option<R>;

    /// Fallible [`map_optional_once`](Self::map_optional_once).
    fn try_map_optional_once<R, E, F>(self, mapper: F) -> MapOptionalOnce<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static;

    /// Emits only the values for which `mapper` returns `Some`, unwrapped.
    ///
    /// A `None` produces no emission at all.
    fn map_some<R, F>(self, mapper: F) -> MapSome<Self, FnMapper<F>>
    where
        F: FnMut(T) -> Option<R>;

    /// Fallible [`map_some`](Self::map_some).
    fn try_map_some<R, E, F>(self, mapper: F) -> MapSome<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static;

    /// [`map_some`](Self::map_some) followed by `distinct_until_changed`.
    ///
    /// Only present values take part in the comparison: `Some(x), None, Some(x)`
    /// emits `x` once.
    fn map_some_distinct<R, F>(self, mapper: F) -> MapSomeDistinct<Self, FnMapper<F>, R>
    where
        F: FnMut(T) -> Option<R>,
        R: PartialEq + Clone;

    /// Fallible [`map_some_distinct`](Self::map_some_distinct).
    fn try_map_some_distinct<R, E, F>(self, mapper: F) -> MapSomeDistinct<Self, TryFnMapper<F>, R>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static,
        R: PartialEq + Clone;

    /// Emits the first present value, then completes and drops the source.
    ///
    /// Leading `None`s produce nothing and do not count as the first value.
    fn map_some_once<R, F>(self, mapper: F) -> MapSomeOnce<Self, FnMapper<F>>
    where
        F: FnMut(T) -> Option<R>;

    /// Fallible [`map_some_once`](Self::map_some_once).
    fn try_map_some_once<R, E, F>(self, mapper: F) -> MapSomeOnce<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static;
}

impl<S, T> MappingExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn map_distinct<R, F>(self, mapper: F) -> MapDistinct<Self, FnMapper<F>, R>
    where
        F: FnMut(T) -> R,
        R: PartialEq + Clone,
    {
        self.project(mapper).distinct_until_changed()
    }

    fn try_map_distinct<R, E, F>(self, mapper: F) -> MapDistinct<Self, TryFnMapper<F>, R>
    where
        F: FnMut(T) -> Result<R, E>,
        E: std::error::Error + Send + Sync + 'static,
        R: PartialEq + Clone,
    {
        self.try_project(mapper).distinct_until_changed()
    }

    fn map_once<R, F>(self, mapper: F) -> MapOnce<Self, FnMapper<F>>
    where
        F: FnMut(T) -> R,
    {
        self.project(mapper).take_items(1)
    }

    fn try_map_once<R, E, F>(self, mapper: F) -> MapOnce<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<R, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.try_project(mapper).take_items(1)
    }

    fn map_optional<R, F>(self, mapper: F) -> MapOptional<Self, FnMapper<F>>
    where
        F: FnMut(T) -> Option<R>,
    {
        self.project(mapper)
    }

    fn try_map_optional<R, E, F>(self, mapper: F) -> MapOptional<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.try_project(mapper)
    }

    fn map_optional_distinct<R, F>(self, mapper: F) -> MapOptionalDistinct<Self, FnMapper<F>, R>
    where
        F: FnMut(T) -> Option<R>,
        R: PartialEq + Clone,
    {
        self.map_optional(mapper).distinct_until_changed()
    }

    fn try_map_optional_distinct<R, E, F>(
        self,
        mapper: F,
    ) -> MapOptionalDistinct<Self, TryFnMapper<F>, R>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static,
        R: PartialEq + Clone,
    {
        self.try_map_optional(mapper).distinct_until_changed()
    }

    fn map_optional_once<R, F>(self, mapper: F) -> MapOptionalOnce<Self, FnMapper<F>>
    where
        F: FnMut(T) -> Option<R>,
    {
        self.map_optional(mapper).take_items(1)
    }

    fn try_map_optional_once<R, E, F>(self, mapper: F) -> MapOptionalOnce<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.try_map_optional(mapper).take_items(1)
    }

    fn map_some<R, F>(self, mapper: F) -> MapSome<Self, FnMapper<F>>
    where
        F: FnMut(T) -> Option<R>,
    {
        self.map_optional(mapper).filter_some()
    }

    fn try_map_some<R, E, F>(self, mapper: F) -> MapSome<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.try_map_optional(mapper).filter_some()
    }

    fn map_some_distinct<R, F>(self, mapper: F) -> MapSomeDistinct<Self, FnMapper<F>, R>
    where
        F: FnMut(T) -> Option<R>,
        R: PartialEq + Clone,
    {
        self.map_some(mapper).distinct_until_changed()
    }

    fn try_map_some_distinct<R, E, F>(self, mapper: F) -> MapSomeDistinct<Self, TryFnMapper<F>, R>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static,
        R: PartialEq + Clone,
    {
        self.try_map_some(mapper).distinct_until_changed()
    }

    fn map_some_once<R, F>(self, mapper: F) -> MapSomeOnce<Self, FnMapper<F>>
    where
        F: FnMut(T) -> Option<R>,
    {
        self.map_some(mapper).take_items(1)
    }

    fn try_map_some_once<R, E, F>(self, mapper: F) -> MapSomeOnce<Self, TryFnMapper<F>>
    where
        F: FnMut(T) -> Result<Option<R>, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.try_map_some(mapper).take_items(1)
    }
}
