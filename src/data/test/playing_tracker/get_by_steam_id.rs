use super::*;

/// Tests listing the snapshots of one profile.
///
/// Expected: Ok with the profile's snapshots, oldest first
#[tokio::test]
async fn returns_snapshots_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let steam_id = "76561197960287930";
    let now = Utc::now();
    factory::playing_tracker::PlayingTrackerFactory::new(db, steam_id)
        .game("440")
        .datetime(now)
        .build()
        .await?;
    factory::playing_tracker::PlayingTrackerFactory::new(db, steam_id)
        .game("570")
        .datetime(now - Duration::days(1))
        .build()
        .await?;
    factory::create_playing_tracker(db, "76561197960265729", "440", 10).await?;

    let repo = PlayingTrackerRepository::new(db);
    let snapshots = repo.get_by_steam_id(steam_id).await?;

    let games: Vec<u64> = snapshots.iter().map(|s| s.app_id).collect();
    assert_eq!(games, vec![570, 440]);

    Ok(())
}

/// Tests that a stored app id that is not numeric surfaces as an internal error.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_non_numeric_app_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_playing_tracker(db, "76561197960287930", "not-a-game", 10).await?;

    let repo = PlayingTrackerRepository::new(db);
    let result = repo.get_by_steam_id("76561197960287930").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
