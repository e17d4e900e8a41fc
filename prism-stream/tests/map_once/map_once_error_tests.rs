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
#[error("bar is not initialized")]
struct BarMissing;

#[tokio::test]
async fn test_map_once_error_before_first_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<State>();
    let mut foo = stream.map_once(|state| state.foo);

    // Act
    tx.send(StreamItem::Error(PrismError::stream_error("not ready")))?;
    tx.send(StreamItem::Value(state()))?;

    // Assert - the error ends the stream, the later value is never emitted
    let _ = unwrap_error(&mut foo, 500).await;
    assert_stream_ended(&mut foo, 500).await;
    assert!(tx.is_closed());

    Ok(())
}

#[tokio::test]
async fn test_map_once_ignores_errors_after_first_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<State>();
    let mut foo = stream.map_once(|state| state.foo);

    // Act
    tx.send(StreamItem::Value(state()))?;
    tx.send(StreamItem::Error(PrismError::stream_error("too late")))?;

    // Assert
    assert_eq!(unwrap_value(&mut foo, 500).await, "foo");
    assert_stream_ended(&mut foo, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_try_map_once_mapper_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<State>();
    let mut bar = stream.try_map_once(|state: State| state.bar.ok_or(BarMissing));

    // Act
    tx.send(state())?;
    tx.send(state_with_bar("initialized"))?;

    // Assert - a failed first derivation is an error, not a skipped value
    let error = unwrap_error(&mut bar, 500).await;
    assert_eq!(error.to_string(), "User error: bar is not initialized");
    assert_stream_ended(&mut bar, 500).await;

    Ok(())
}
