// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by every prism crate.
//!
//! - [`StreamItem`] is the item type of every stream the operators consume and
//!   produce: a value or a terminal error.
//! - [`PrismError`] is the error carried on the stream's error channel.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod prism_error;
pub mod stream_item;

pub use self::prism_error::{IntoPrismError, PrismError, Result, ResultExt};
pub use self::stream_item::StreamItem;
