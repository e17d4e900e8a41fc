// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use prism_stream::prelude::*;
use prism_test_utils::{
    helpers::{assert_no_element_emitted, assert_stream_ended, collect_values, unwrap_value},
    state::{initialization_sequence, state, state_with_bar},
    test_channel, State,
};

#[tokio::test]
async fn test_map_some_filters_for_present_values() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(initialization_sequence()).into_prism_stream();

    // Act
    let bars = collect_values(source.map_some(|state| state.bar)).await?;

    // Assert
    assert_eq!(bars, vec!["initialized", "initialized"]);

    Ok(())
}

#[tokio::test]
async fn test_map_some_absent_values_produce_no_emission() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut bars = stream.map_some(|state| state.bar);

    // Act & Assert
    tx.send(state())?;
    tx.send(state().with_foo("changed"))?;
    assert_no_element_emitted(&mut bars, 100).await;

    tx.send(state_with_bar("initialized"))?;
    assert_eq!(unwrap_value(&mut bars, 500).await, "initialized");

    drop(tx);
    assert_stream_ended(&mut bars, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_map_some_all_absent_completes_empty() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![state(), state(), state()]).into_prism_stream();

    // Act
    let bars = collect_values(source.map_some(|state| state.bar)).await?;

    // Assert
    assert!(bars.is_empty());

    Ok(())
}
