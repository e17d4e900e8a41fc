// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use prism_stream::prelude::*;
use prism_test_utils::{
    helpers::{assert_stream_ended, unwrap_error, unwrap_value},
    test_channel_with_errors,
};

#[tokio::test]
async fn test_take_items_does_not_count_errors() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut taken = stream.take_items(1);

    // Act
    tx.send(StreamItem::Error(PrismError::stream_error("error1")))?;
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Value(2))?;

    // Assert - error forwarded, count still spent on the first value
    let _ = unwrap_error(&mut taken, 500).await;
    assert_eq!(unwrap_value(&mut taken, 500).await, 1);
    assert_stream_ended(&mut taken, 100).await;

    Ok(())
}
