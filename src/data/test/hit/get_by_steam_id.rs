use super::*;

const GABEN: &str = "76561197960287930";

/// Tests reading a profile's hits.
///
/// Verifies ordering by time and that hits of other profiles are excluded.
///
/// Expected: Ok with the profile's hits, oldest first
#[tokio::test]
async fn returns_profile_hits_in_time_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_metrics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    factory::hit::HitFactory::new(db, GABEN)
        .purpose("late")
        .datetime(now)
        .build()
        .await?;
    factory::hit::HitFactory::new(db, GABEN)
        .purpose("early")
        .datetime(now - Duration::days(2))
        .build()
        .await?;
    factory::create_hit(db, "76561197960287931", "other").await?;

    let repo = HitRepository::new(db);
    let hits = repo.get_by_steam_id(GABEN).await?;
    let all = repo.get_all().await?;

    let purposes: Vec<&str> = hits.iter().map(|h| h.purpose.as_str()).collect();
    assert_eq!(purposes, vec!["early", "late"]);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].purpose, "early");

    Ok(())
}
