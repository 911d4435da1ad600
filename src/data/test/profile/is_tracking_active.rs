use super::*;

/// Tests the tracking check for an opted-in profile.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_tracked_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_tracked_profile(db).await?;

    let repo = ProfileRepository::new(db);
    assert!(repo.is_tracking_active(&profile.steam64id).await?);

    Ok(())
}

/// Tests the tracking check for an untracked and an unknown profile.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn returns_false_for_untracked_or_missing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db).await?;

    let repo = ProfileRepository::new(db);
    assert!(!repo.is_tracking_active(&profile.steam64id).await?);
    assert!(!repo.is_tracking_active("76561197960265727").await?);

    Ok(())
}
