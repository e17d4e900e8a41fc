// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Prism
//!
//! Projection operators for reactive streams.
//!
//! ## Overview
//!
//! A UI or a service usually watches a stream of whole states while caring
//! about a single field of it. Prism turns such a stream into a stream of that
//! field, with the three behaviors one keeps rewriting by hand: emit only on
//! change, emit only the first value, and skip values that are not there yet.
//!
//! The operators live in [`prism_stream`]; the item and error types in
//! [`prism_core`]. This crate re-exports both and adds a bridge from tokio
//! channels.
//!
//! ## Quick Start
//!
//! ```rust
//! use prism::prelude::*;
//! use futures::StreamExt;
//! use tokio::sync::mpsc;
//!
//! #[derive(Clone)]
//! struct State {
//!     foo: String,
//!     bar: Option<String>,
//! }
//!
//! # async fn example() {
//! let (tx, rx) = mpsc::unbounded_channel::<State>();
//! let mut bar = rx.into_prism_stream().map_some_once(|state| state.bar);
//!
//! tx.send(State { foo: "foo".into(), bar: None }).unwrap();
//! tx.send(State { foo: "foo".into(), bar: Some("ready".into()) }).unwrap();
//!
//! assert_eq!(bar.next().await.unwrap().unwrap(), "ready");
//! assert!(bar.next().await.is_none());
//! assert!(tx.is_closed());
//! # }
//! ```

pub mod receiver_ext;

pub use prism_core::{IntoPrismError, PrismError, Result, ResultExt, StreamItem};
pub use prism_stream::{
    DistinctUntilChangedExt, FilterSomeExt, IntoPrismStream, MappingExt, ProjectExt,
    TakeItemsExt,
};
pub use receiver_ext::{ReceiverStream, UnboundedReceiverExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::receiver_ext::UnboundedReceiverExt;
    pub use prism_stream::prelude::*;
}
