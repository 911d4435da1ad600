use super::*;

/// Tests writing a hit.
///
/// Expected: Ok with every field stored and the timestamp taken at insert time
#[tokio::test]
async fn creates_hit_stamped_now() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_metrics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let hit = HitRepository::new(db)
        .create(CreateHitParam {
            steam_id: "76561197960287930".to_string(),
            purpose: "playtime".to_string(),
            ip: Some("203.0.113.7".to_string()),
        })
        .await?;

    assert!(hit.id > 0);
    assert_eq!(hit.steam_id, "76561197960287930");
    assert_eq!(hit.purpose, "playtime");
    assert_eq!(hit.ip.as_deref(), Some("203.0.113.7"));
    assert!(hit.recorded_at >= before - Duration::seconds(1));

    let count = entity::prelude::Hit::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
