// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use prism_stream::prelude::*;
use prism_test_utils::{
    helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_value},
    test_channel,
};

#[tokio::test]
async fn test_filter_some_unwraps_present_values() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Option<&'static str>>();
    let mut present = stream.filter_some();

    // Act & Assert
    tx.send(None)?;
    assert_no_element_emitted(&mut present, 100).await;

    tx.send(Some("bar"))?;
    assert_eq!(unwrap_value(&mut present, 500).await, "bar");

    tx.send(None)?;
    tx.send(None)?;
    tx.send(Some("bar"))?;
    assert_eq!(unwrap_value(&mut present, 500).await, "bar");

    drop(tx);
    assert_stream_ended(&mut present, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_filter_some_keeps_nested_options_apart() -> anyhow::Result<()> {
    // Arrange - the derived value is itself optional
    let (tx, stream) = test_channel::<Option<Option<i32>>>();
    let mut present = stream.filter_some();

    // Act
    tx.send(Some(None))?;
    tx.send(None)?;
    tx.send(Some(Some(3)))?;

    // Assert - `Some(None)` is a present value
    assert_eq!(unwrap_value(&mut present, 500).await, None);
    assert_eq!(unwrap_value(&mut present, 500).await, Some(3));

    Ok(())
}
