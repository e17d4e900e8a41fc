// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use prism_stream::prelude::*;
use prism_test_utils::{
    helpers::{assert_stream_ended, unwrap_error, unwrap_value},
    state::{state, state_with_bar},
    test_channel, test_channel_with_errors, State,
};

#[derive(Debug, thiserror::Error)]
#[error("bar is too long: {0}")]
struct BarTooLong(usize);

fn short_bar(state: State) -> Result<Option<String>, BarTooLong> {
    match state.bar {
        Some(bar) if bar.len() > 16 => Err(BarTooLong(bar.len())),
        bar => Ok(bar),
    }
}

#[tokio::test]
async fn test_map_some_upstream_error_after_absent_values() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<State>();
    let mut bars = stream.map_some(|state| state.bar);

    // Act
    tx.send(StreamItem::Value(state()))?;
    tx.send(StreamItem::Error(PrismError::stream_error("upstream")))?;
    tx.send(StreamItem::Value(state_with_bar("late")))?;

    // Assert
    let _ = unwrap_error(&mut bars, 500).await;
    assert_stream_ended(&mut bars, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_try_map_some_distinct_mapper_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut bars = stream.try_map_some_distinct(short_bar);

    // Act
    tx.send(state_with_bar("initialized"))?;
    tx.send(state())?;
    tx.send(state_with_bar("a much longer bar value"))?;

    // Assert
    assert_eq!(unwrap_value(&mut bars, 500).await, "initialized");
    let error = unwrap_error(&mut bars, 500).await;
    assert_eq!(error.to_string(), "User error: bar is too long: 23");
    assert_stream_ended(&mut bars, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_try_map_some_once_error_before_present_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut bar = stream.try_map_some_once(short_bar);

    // Act
    tx.send(state())?;
    tx.send(state_with_bar("a much longer bar value"))?;
    tx.send(state_with_bar("initialized"))?;

    // Assert
    let error = unwrap_error(&mut bar, 500).await;
    assert!(error.is_user_error());
    assert_stream_ended(&mut bar, 500).await;
    assert!(tx.is_closed());

    Ok(())
}

#[tokio::test]
async fn test_try_map_some_mapper_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut bars = stream.try_map_some(short_bar);

    // Act
    tx.send(state_with_bar("a much longer bar value"))?;

    // Assert
    let _ = unwrap_error(&mut bars, 500).await;
    assert_stream_ended(&mut bars, 500).await;

    Ok(())
}
