use super::*;

/// Tests upserting a profile that does not exist yet.
///
/// Verifies that the repository inserts a new row with the given name and tracking
/// flag and zero hits.
///
/// Expected: Ok with profile created
#[tokio::test]
async fn creates_missing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let profile = repo
        .upsert(UpsertProfileParam {
            steam_id: "76561197960287930".to_string(),
            name: "gaben".to_string(),
            tracking: true,
        })
        .await?;

    assert_eq!(profile.steam_id, "76561197960287930");
    assert_eq!(profile.name.as_deref(), Some("gaben"));
    assert_eq!(profile.hits, 0);
    assert!(profile.tracking);

    let stored = entity::prelude::Profile::find_by_id("76561197960287930".to_string())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests upserting an existing profile.
///
/// Verifies that name and tracking flag are replaced while the hit counter is kept.
///
/// Expected: Ok with name and tracking updated, hits unchanged
#[tokio::test]
async fn updates_existing_profile_and_keeps_hits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::profile::ProfileFactory::new(db)
        .name("old name")
        .hits(42)
        .tracking(true)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let profile = repo
        .upsert(UpsertProfileParam {
            steam_id: existing.steam64id.clone(),
            name: "new name".to_string(),
            tracking: false,
        })
        .await?;

    assert_eq!(profile.name.as_deref(), Some("new name"));
    assert!(!profile.tracking);
    assert_eq!(profile.hits, 42);

    let count = entity::prelude::Profile::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting with an empty persona name.
///
/// Verifies that an empty name is stored as NULL on insert and clears the name on
/// update.
///
/// Expected: Ok with name None in both cases
#[tokio::test]
async fn stores_empty_name_as_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::profile::ProfileFactory::new(db)
        .name("old name")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let created = repo
        .upsert(UpsertProfileParam {
            steam_id: "76561197960287930".to_string(),
            name: String::new(),
            tracking: true,
        })
        .await?;
    let updated = repo
        .upsert(UpsertProfileParam {
            steam_id: existing.steam64id.clone(),
            name: String::new(),
            tracking: true,
        })
        .await?;

    assert_eq!(created.name, None);
    assert_eq!(updated.name, None);
    let stored = entity::prelude::Profile::find_by_id("76561197960287930".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, None);

    Ok(())
}
