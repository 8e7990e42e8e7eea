// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use heroes_core::CancellationToken;
use heroes_stream::TakeUntilCancelledExt;
use heroes_test_utils::{helpers::unwrap_stream, test_channel};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn test_take_until_cancelled_forwards_until_cancel() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let (tx, stream) = test_channel::<String>();
    let mut taken = stream.take_until_cancelled(token.clone());

    // Act & Assert
    tx.send("bat".to_string())?;
    assert_eq!(unwrap_stream(&mut taken, 100).await.unwrap(), "bat");

    token.cancel();
    tx.send("batman".to_string())?;
    assert_eq!(taken.next().await, None);

    Ok(())
}

#[tokio::test]
async fn test_take_until_cancelled_wakes_idle_consumer() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let (_tx, stream) = test_channel::<String>();
    let mut taken = stream.take_until_cancelled(token.clone());

    // Act
    let consumer = tokio::spawn(async move { taken.next().await });
    tokio::task::yield_now().await;
    token.cancel();

    // Assert
    assert_eq!(timeout(Duration::from_secs(1), consumer).await??, None);

    Ok(())
}

#[tokio::test]
async fn test_take_until_cancelled_stays_ended() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    token.cancel();
    let (tx, stream) = test_channel::<String>();
    let mut taken = stream.take_until_cancelled(token);

    // Act
    tx.send("bat".to_string())?;

    // Assert
    assert_eq!(taken.next().await, None);
    assert_eq!(taken.next().await, None);

    Ok(())
}

#[tokio::test]
async fn test_take_until_cancelled_ends_with_source() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let (tx, stream) = test_channel::<String>();
    let mut taken = stream.take_until_cancelled(token);

    // Act
    drop(tx);

    // Assert
    assert_eq!(taken.next().await, None);

    Ok(())
}

#[tokio::test]
async fn test_take_until_cancelled_drops_source_on_cancel() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let (tx, stream) = test_channel::<String>();
    let mut taken = stream.take_until_cancelled(token.clone());

    // Act
    token.cancel();
    assert_eq!(taken.next().await, None);

    // Assert: the receiving half went away with the source
    assert!(tx.send("bat".to_string()).is_err());

    Ok(())
}
