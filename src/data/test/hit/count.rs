use super::*;

const GABEN: &str = "76561197960287930";

/// Tests counting hits with and without a purpose filter.
///
/// Expected: all hits of the profile without a filter, only matching ones with it
#[tokio::test]
async fn counts_by_profile_and_purpose() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_metrics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_hit(db, GABEN, "widget").await?;
    factory::create_hit(db, GABEN, "widget").await?;
    factory::create_hit(db, GABEN, "playtime").await?;
    factory::create_hit(db, "76561197960287931", "widget").await?;

    let repo = HitRepository::new(db);

    assert_eq!(repo.count(GABEN, None).await?, 3);
    assert_eq!(repo.count(GABEN, Some("widget")).await?, 2);
    assert_eq!(repo.count(GABEN, Some("badge")).await?, 0);
    assert_eq!(repo.count_all().await?, 4);

    Ok(())
}

/// Tests counting for a profile without hits.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_hits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_metrics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HitRepository::new(db);

    assert_eq!(repo.count(GABEN, None).await?, 0);
    assert_eq!(repo.count_all().await?, 0);

    Ok(())
}
