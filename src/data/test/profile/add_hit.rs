use super::*;

/// Tests the first hit for an unknown profile.
///
/// Expected: Ok with profile created, one hit, tracking disabled
#[tokio::test]
async fn creates_profile_on_first_hit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_metrics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let profile = repo
        .add_hit("76561197960287930", "gaben".to_string())
        .await?;

    assert_eq!(profile.steam_id, "76561197960287930");
    assert_eq!(profile.name.as_deref(), Some("gaben"));
    assert_eq!(profile.hits, 1);
    assert!(!profile.tracking);

    Ok(())
}

/// Tests repeated hits for an existing profile.
///
/// Verifies that the counter grows by one per call and the tracking flag is kept.
///
/// Expected: Ok with hits incremented and name refreshed
#[tokio::test]
async fn increments_existing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_metrics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::profile::ProfileFactory::new(db)
        .name("old name")
        .hits(41)
        .tracking(true)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    repo.add_hit(&existing.steam64id, "old name".to_string())
        .await?;
    let profile = repo
        .add_hit(&existing.steam64id, "new name".to_string())
        .await?;

    assert_eq!(profile.hits, 43);
    assert_eq!(profile.name.as_deref(), Some("new name"));
    assert!(profile.tracking);

    let count = entity::prelude::Profile::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests a hit without a persona name.
///
/// Expected: Ok with the stored name kept on update and NULL on insert
#[tokio::test]
async fn keeps_name_when_hit_has_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_metrics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::profile::ProfileFactory::new(db)
        .name("kept")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let updated = repo.add_hit(&existing.steam64id, String::new()).await?;
    let created = repo.add_hit("76561197960287930", String::new()).await?;

    assert_eq!(updated.name.as_deref(), Some("kept"));
    assert_eq!(updated.hits, 1);
    assert_eq!(created.name, None);
    assert_eq!(created.hits, 1);

    Ok(())
}
