use super::*;

/// Tests writing a snapshot.
///
/// Verifies that every field is stored and the timestamp is taken at insert time.
///
/// Expected: Ok with snapshot persisted
#[tokio::test]
async fn creates_snapshot_stamped_now() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = PlayingTrackerRepository::new(db);
    let snapshot = repo
        .create(CreateSnapshotParam {
            steam_id: "76561197960287930".to_string(),
            app_id: 440,
            game_name: Some("Team Fortress 2".to_string()),
            delta_minutes: 30,
            total_minutes: 150,
        })
        .await?;

    assert!(snapshot.id > 0);
    assert_eq!(snapshot.app_id, 440);
    assert_eq!(snapshot.game_name.as_deref(), Some("Team Fortress 2"));
    assert_eq!(snapshot.delta_minutes, 30);
    assert_eq!(snapshot.total_minutes, 150);
    assert!(snapshot.recorded_at >= before - Duration::seconds(1));

    let count = entity::prelude::PlayingTracker::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
