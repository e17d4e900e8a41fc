// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Projection operators built from the four primitives.
//!
//! Use [`MappingExt`] to reach these operators on any stream of `StreamItem<T>`.
//!
//! | Operator | Composition |
//! |----------|-------------|
//! | [`map_distinct`](MappingExt::map_distinct) | `project` → `distinct_until_changed` |
//! | [`map_once`](MappingExt::map_once) | `project` → `take_items(1)` |
//! | [`map_optional`](MappingExt::map_optional) | `project` into `Option<R>` |
//! | [`map_optional_distinct`](MappingExt::map_optional_distinct) | `map_optional` → `distinct_until_changed` |
//! | [`map_optional_once`](MappingExt::map_optional_once) | `map_optional` → `take_items(1)` |
//! | [`map_some`](MappingExt::map_some) | `map_optional` → `filter_some` |
//! | [`map_some_distinct`](MappingExt::map_some_distinct) | `map_some` → `distinct_until_changed` |
//! | [`map_some_once`](MappingExt::map_some_once) | `map_some` → `take_items(1)` |
//!
//! Every operator has a `try_` twin taking a mapper that returns `Result`.
//!
//! # Behavior
//!
//! - Composition order is fixed: the `_distinct` and `_once` variants of
//!   `map_some` work on the present-only sequence, so a `None` in between two
//!   equal values neither resets the comparison nor counts as "first"
//! - An error (upstream or from a `try_` mapper) is forwarded once, then the
//!   stream completes and drops its source
//! - An empty source completes without emissions, no default value is synthesized
//! - `_once` variants drop their source as soon as the first value is taken
//!
//! # Example
//!
//! ```rust
//! use prism_stream::{IntoPrismStream, MappingExt};
//! use futures::{stream, StreamExt};
//!
//! #[derive(Clone)]
//! struct State {
//!     foo: &'static str,
//!     bar: Option<&'static str>,
//! }
//!
//! # async fn example() {
//! let states = vec![
//!     State { foo: "foo", bar: None },
//!     State { foo: "foo", bar: Some("initialized") },
//!     State { foo: "changed", bar: Some("initialized") },
//! ];
//!
//! let foos: Vec<_> = stream::iter(states.clone())
//!     .into_prism_stream()
//!     .map_distinct(|state| state.foo)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(foos, vec!["foo", "changed"]);
//!
//! let bars: Vec<_> = stream::iter(states)
//!     .into_prism_stream()
//!     .map_some_distinct(|state| state.bar)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! assert_eq!(bars, vec!["initialized"]);
//! # }
//! ```

mod implementation;

use crate::{DistinctUntilChanged, FilterSome, Project, TakeItems};

pub use implementation::MappingExt;

/// Stream returned by `map_distinct` and `try_map_distinct`.
pub type MapDistinct<S, M, R> = DistinctUntilChanged<Project<S, M>, R>;

/// Stream returned by `map_once` and `try_map_once`.
pub type MapOnce<S, M> = TakeItems<Project<S, M>>;

/// Stream returned by `map_optional` and `try_map_optional`.
pub type MapOptional<S, M> = Project<S, M>;

/// Stream returned by `map_optional_distinct` and `try_map_optional_distinct`.
pub type MapOptionalDistinct<S, M, R> = DistinctUntilChanged<MapOptional<S, M>, Option<R>>;

/// Stream returned by `map_optional_once` and `try_map_optional_once`.
pub type MapOptionalOnce<S, M> = TakeItems<MapOptional<S, M>>;

/// Stream returned by `map_some` and `try_map_some`.
pub type MapSome<S, M> = FilterSome<MapOptional<S, M>>;

/// Stream returned by `map_some_distinct` and `try_map_some_distinct`.
pub type MapSomeDistinct<S, M, R> = DistinctUntilChanged<MapSome<S, M>, R>;

/// Stream returned by `map_some_once` and `try_map_some_once`.
pub type MapSomeOnce<S, M> = TakeItems<MapSome<S, M>>;
