// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use prism_stream::prelude::*;
use prism_test_utils::{
    helpers::{assert_no_element_emitted, assert_stream_ended, collect_values, unwrap_value},
    state::{state, state_with_bar},
    test_channel, State,
};

#[tokio::test]
async fn test_map_some_once_completes_after_first_present_value() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![
        state(),
        state_with_bar("initialized"),
        state_with_bar("initialized").with_foo("changed"),
        state_with_bar("changed"),
    ])
    .into_prism_stream();

    // Act
    let bars = collect_values(source.map_some_once(|state| state.bar)).await?;

    // Assert
    assert_eq!(bars, vec!["initialized"]);

    Ok(())
}

#[tokio::test]
async fn test_map_some_once_leading_absent_values_do_not_count() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut bar = stream.map_some_once(|state| state.bar);

    // Act & Assert
    tx.send(state())?;
    tx.send(state())?;
    assert_no_element_emitted(&mut bar, 100).await;
    assert!(!tx.is_closed());

    tx.send(state_with_bar("initialized"))?;
    assert_eq!(unwrap_value(&mut bar, 500).await, "initialized");
    assert!(tx.is_closed());
    assert_stream_ended(&mut bar, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_map_some_once_source_completes_without_present_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut bar = stream.map_some_once(|state| state.bar);

    // Act
    tx.send(state())?;
    drop(tx);

    // Assert
    assert_stream_ended(&mut bar, 500).await;

    Ok(())
}
