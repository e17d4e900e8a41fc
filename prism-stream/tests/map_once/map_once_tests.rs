// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, FusedStream};
use prism_stream::prelude::*;
use prism_test_utils::{
    helpers::{assert_stream_ended, collect_values, unwrap_value},
    state::{initialization_sequence, state},
    test_channel, State,
};

#[tokio::test]
async fn test_map_once_maps_to_property_and_completes_after_one_emission() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(initialization_sequence()).into_prism_stream();

    // Act
    let foos = collect_values(source.map_once(|state| state.foo)).await?;

    // Assert
    assert_eq!(foos, vec!["foo"]);

    Ok(())
}

#[tokio::test]
async fn test_map_once_completes_immediately_after_first_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut foo = stream.map_once(|state| state.foo);

    // Act
    tx.send(state().with_foo("first"))?;

    // Assert - no further source value is needed to observe completion
    assert_eq!(unwrap_value(&mut foo, 500).await, "first");
    assert!(foo.is_terminated());
    assert_stream_ended(&mut foo, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_map_once_empty_source_completes_without_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut foo = stream.map_once(|state| state.foo);

    // Act
    drop(tx);

    // Assert - no synthetic default
    assert_stream_ended(&mut foo, 500).await;

    Ok(())
}
