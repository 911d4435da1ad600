use super::*;

/// Tests deleting every snapshot of one profile.
///
/// Verifies that only the target profile's rows are removed.
///
/// Expected: Ok with number of deleted rows
#[tokio::test]
async fn deletes_only_target_profile_snapshots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_playing_tracker(db, "76561197960287930", "440", 10).await?;
    factory::create_playing_tracker(db, "76561197960287930", "570", 20).await?;
    factory::create_playing_tracker(db, "76561197960265729", "440", 30).await?;

    let repo = PlayingTrackerRepository::new(db);
    let deleted = repo.delete_by_steam_id("76561197960287930").await?;

    assert_eq!(deleted, 2);
    let remaining = entity::prelude::PlayingTracker::find().count(db).await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests deleting snapshots of a profile that has none.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_snapshots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayingTrackerRepository::new(db);
    let deleted = repo.delete_by_steam_id("76561197960287930").await?;

    assert_eq!(deleted, 0);

    Ok(())
}
