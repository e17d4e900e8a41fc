// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! ```ignore
//! use prism_stream::prelude::*;
//!
//! let names = states.into_prism_stream().map_some_distinct(|s| s.name);
//! ```

pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::filter_some::FilterSomeExt;
pub use crate::into_prism_stream::IntoPrismStream;
pub use crate::mapping::MappingExt;
pub use crate::project::ProjectExt;
pub use crate::take_items::TakeItemsExt;
pub use prism_core::{PrismError, StreamItem};
