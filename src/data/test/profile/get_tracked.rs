use super::*;

/// Tests retrieving tracked profiles from a mixed set.
///
/// Verifies that only profiles with tracking enabled are returned, ordered by id.
///
/// Expected: Ok with the two tracked profiles
#[tokio::test]
async fn returns_only_tracked_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tracked_profile(db).await?;
    factory::create_profile(db).await?;
    let second = factory::create_tracked_profile(db).await?;

    let repo = ProfileRepository::new(db);
    let tracked = repo.get_tracked().await?;

    let ids: Vec<_> = tracked.iter().map(|p| p.steam_id.clone()).collect();
    assert_eq!(ids, vec![first.steam64id, second.steam64id]);

    Ok(())
}

/// Tests retrieving tracked profiles when nobody opted in.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_tracked_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_profile(db).await?;

    let repo = ProfileRepository::new(db);
    let tracked = repo.get_tracked().await?;

    assert!(tracked.is_empty());

    Ok(())
}
