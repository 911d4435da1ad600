use super::*;

/// Tests finding the latest snapshot among several for the same game.
///
/// Verifies that the most recent snapshot wins and snapshots of other games or other
/// profiles are ignored.
///
/// Expected: Ok(Some) with the newest snapshot of the game
#[tokio::test]
async fn returns_most_recent_snapshot() -> Result<(), AppError> {
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
        .datetime(now - Duration::hours(2))
        .total(100)
        .build()
        .await?;
    factory::playing_tracker::PlayingTrackerFactory::new(db, steam_id)
        .game("440")
        .datetime(now - Duration::hours(1))
        .total(120)
        .build()
        .await?;
    factory::playing_tracker::PlayingTrackerFactory::new(db, steam_id)
        .game("570")
        .datetime(now)
        .total(999)
        .build()
        .await?;
    factory::playing_tracker::PlayingTrackerFactory::new(db, "76561197960265729")
        .game("440")
        .datetime(now)
        .total(500)
        .build()
        .await?;

    let repo = PlayingTrackerRepository::new(db);
    let latest = repo.find_latest(steam_id, 440).await?;

    let latest = latest.unwrap();
    assert_eq!(latest.app_id, 440);
    assert_eq!(latest.total_minutes, 120);

    Ok(())
}

/// Tests tie-breaking between snapshots with the same timestamp.
///
/// Expected: Ok(Some) with the row inserted last
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let steam_id = "76561197960287930";
    let now = Utc::now();
    for total in [10, 20] {
        factory::playing_tracker::PlayingTrackerFactory::new(db, steam_id)
            .game("440")
            .datetime(now)
            .total(total)
            .build()
            .await?;
    }

    let repo = PlayingTrackerRepository::new(db);
    let latest = repo.find_latest(steam_id, 440).await?.unwrap();

    assert_eq!(latest.total_minutes, 20);

    Ok(())
}

/// Tests finding a snapshot for a game that was never recorded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unrecorded_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_playing_tracker(db, "76561197960287930", "440", 60).await?;

    let repo = PlayingTrackerRepository::new(db);
    let latest = repo.find_latest("76561197960287930", 570).await?;

    assert!(latest.is_none());

    Ok(())
}
