// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Projection operators for reactive streams.
//!
//! This crate adds a small operator library on top of `futures::Stream` for
//! the common case of watching one derived field of a stream of structured
//! values (a state, a settings object, a sensor record).
//!
//! # Architecture
//!
//! - Every stream carries [`StreamItem<T>`](prism_core::StreamItem): a value or a terminal error
//! - Four primitives do the work: [`project`](ProjectExt::project),
//!   [`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed),
//!   [`take_items`](TakeItemsExt::take_items) and [`filter_some`](FilterSomeExt::filter_some)
//! - [`MappingExt`] composes them into eight fixed operators
//!
//! Each operator returns a named stream type that owns its source and its
//! state (the last value for distinctness, the remaining count for take).
//! Building the same pipeline twice gives two fully independent streams;
//! dropping a pipeline drops everything upstream of it.
//!
//! ## Operator Selection Guide
//!
//! | Operator | Emits | Completes |
//! |----------|-------|-----------|
//! | [`map_distinct`](MappingExt::map_distinct) | derived value when it changed | with the source |
//! | [`map_once`](MappingExt::map_once) | first derived value | right after it |
//! | [`map_optional`](MappingExt::map_optional) | `Some`/`None` for every value | with the source |
//! | [`map_optional_distinct`](MappingExt::map_optional_distinct) | `Some`/`None` when it changed | with the source |
//! | [`map_optional_once`](MappingExt::map_optional_once) | first `Some`/`None` | right after it |
//! | [`map_some`](MappingExt::map_some) | present values only | with the source |
//! | [`map_some_distinct`](MappingExt::map_some_distinct) | present values when they changed | with the source |
//! | [`map_some_once`](MappingExt::map_some_once) | first present value | right after it |
//!
//! # Getting Started
//!
//! ```rust
//! use prism_stream::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # async fn example() {
//! let mut names = stream::iter(vec![Some("ada"), None, Some("ada"), Some("grace")])
//!     .into_prism_stream()
//!     .map_some_distinct(|name| name);
//!
//! assert_eq!(names.next().await.unwrap().unwrap(), "ada");
//! assert_eq!(names.next().await.unwrap().unwrap(), "grace");
//! assert!(names.next().await.is_none());
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod distinct_until_changed;
pub mod filter_some;
pub mod into_prism_stream;
pub mod mapper;
pub mod mapping;
pub mod prelude;
pub mod project;
pub mod take_items;

pub use distinct_until_changed::{DistinctUntilChanged, DistinctUntilChangedExt};
pub use filter_some::{FilterSome, FilterSomeExt};
pub use into_prism_stream::IntoPrismStream;
pub use mapper::{FnMapper, Mapper, TryFnMapper};
pub use mapping::{
    MapDistinct, MapOnce, MapOptional, MapOptionalDistinct, MapOptionalOnce, MapSome,
    MapSomeDistinct, MapSomeOnce, MappingExt,
};
pub use project::{Project, ProjectExt};
pub use take_items::{TakeItems, TakeItemsExt};
