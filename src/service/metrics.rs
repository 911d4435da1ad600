//! Widget hit metrics: recording requests and reading counters and daily series.

use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::{
    data::{hit::HitRepository, profile::ProfileRepository},
    error::AppError,
    model::{
        hit::{CreateHitParam, Hit, HitDay, ProfileHitDay, RecordHitParam},
        profile::Profile,
    },
};

pub struct HitMetricsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HitMetricsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a widget request for a profile.
    ///
    /// Increments the profile counter (creating the profile on its first hit) and
    /// stores the hit row in one transaction, so counter and rows never drift apart.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Profile with its updated hit count
    /// - `Err(AppError::DbErr)` - Insert or update failed; neither is applied
    pub async fn record_hit(&self, param: RecordHitParam) -> Result<Profile, AppError> {
        let txn = self.db.begin().await?;
        let profile = ProfileRepository::new(&txn)
            .add_hit(&param.steam_id, param.name)
            .await?;
        HitRepository::new(&txn)
            .create(CreateHitParam {
                steam_id: param.steam_id,
                purpose: param.purpose,
                ip: param.ip,
            })
            .await?;
        txn.commit().await?;

        debug!(steam_id = %profile.steam_id, hits = profile.hits, "Recorded widget hit");

        Ok(profile)
    }

    /// Hit counter stored on the profile.
    ///
    /// # Returns
    /// - `Ok(i64)` - Hits recorded for the profile
    /// - `Err(AppError::NotFound)` - No profile with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn profile_hits(&self, steam_id: &str) -> Result<i64, AppError> {
        ProfileRepository::new(self.db)
            .find_by_id(steam_id)
            .await?
            .map(|profile| profile.hits)
            .ok_or_else(|| AppError::NotFound(format!("Profile {steam_id} not found")))
    }

    /// Hits for a profile, optionally restricted to one purpose.
    ///
    /// An empty purpose counts every hit of the profile.
    pub async fn hits_by_purpose(&self, steam_id: &str, purpose: &str) -> Result<u64, AppError> {
        let purpose = Some(purpose).filter(|purpose| !purpose.is_empty());

        Ok(HitRepository::new(self.db).count(steam_id, purpose).await?)
    }

    /// Hits across every profile.
    pub async fn total_hits(&self) -> Result<u64, AppError> {
        Ok(HitRepository::new(self.db).count_all().await?)
    }

    /// Hits for a profile per purpose and UTC calendar day.
    ///
    /// # Returns
    /// - `Ok(Vec<ProfileHitDay>)` - Sorted by purpose, then day; days without hits
    ///   are omitted
    /// - `Err(AppError)` - Database error
    pub async fn profile_daily(&self, steam_id: &str) -> Result<Vec<ProfileHitDay>, AppError> {
        let hits = HitRepository::new(self.db).get_by_steam_id(steam_id).await?;

        Ok(count_by(&hits, |hit| (hit.purpose.clone(), hit.recorded_at.date_naive()))
            .into_iter()
            .map(|((purpose, date), count)| ProfileHitDay {
                purpose,
                date,
                count,
            })
            .collect())
    }

    /// Hits across every profile per UTC calendar day.
    ///
    /// # Returns
    /// - `Ok(Vec<HitDay>)` - Sorted by day; days without hits are omitted
    /// - `Err(AppError)` - Database error
    pub async fn global_daily(&self) -> Result<Vec<HitDay>, AppError> {
        let hits = HitRepository::new(self.db).get_all().await?;

        Ok(count_by(&hits, |hit| hit.recorded_at.date_naive())
            .into_iter()
            .map(|(date, count)| HitDay { date, count })
            .collect())
    }
}

fn count_by<K, F>(hits: &[Hit], key: F) -> BTreeMap<K, u64>
where
    K: Ord,
    F: Fn(&Hit) -> K,
{
    let mut counts = BTreeMap::new();
    for hit in hits {
        *counts.entry(key(hit)).or_default() += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    const GABEN: &str = "76561197960287930";
    const ROBIN: &str = "76561197960287931";

    fn hit_param(steam_id: &str, name: &str, purpose: &str) -> RecordHitParam {
        RecordHitParam {
            steam_id: steam_id.to_string(),
            name: name.to_string(),
            purpose: purpose.to_string(),
            ip: Some("203.0.113.7".to_string()),
        }
    }

    async fn hit_at(
        db: &DatabaseConnection,
        steam_id: &str,
        purpose: &str,
        at: (i32, u32, u32, u32),
    ) -> Result<(), AppError> {
        factory::hit::HitFactory::new(db, steam_id)
            .purpose(purpose)
            .datetime(Utc.with_ymd_and_hms(at.0, at.1, at.2, at.3, 0, 0).unwrap())
            .build()
            .await?;
        Ok(())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Tests recording hits for a new and then an existing profile.
    ///
    /// Expected: profile created with one hit, counter and rows grow together
    #[tokio::test]
    async fn record_hit_creates_profile_and_stores_row() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_metrics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = HitMetricsService::new(db);

        let first = service.record_hit(hit_param(GABEN, "gaben", "widget")).await?;
        let second = service
            .record_hit(hit_param(GABEN, "gaben", "playtime"))
            .await?;

        assert_eq!(first.hits, 1);
        assert!(!first.tracking);
        assert_eq!(second.hits, 2);
        assert_eq!(service.profile_hits(GABEN).await?, 2);
        let rows = entity::prelude::Hit::find().count(db).await?;
        assert_eq!(rows, 2);

        Ok(())
    }

    /// Tests reading the counter of a profile that was never seen.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn profile_hits_reports_unknown_profile() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_metrics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = HitMetricsService::new(db).profile_hits(GABEN).await;

        assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg.contains(GABEN)));

        Ok(())
    }

    /// Tests purpose filtering, where an empty purpose means all hits.
    ///
    /// Expected: per-purpose counts, full count for the empty purpose, global total
    #[tokio::test]
    async fn counts_hits_by_purpose() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_metrics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = HitMetricsService::new(db);
        service.record_hit(hit_param(GABEN, "gaben", "widget")).await?;
        service.record_hit(hit_param(GABEN, "gaben", "widget")).await?;
        service
            .record_hit(hit_param(GABEN, "gaben", "playtime"))
            .await?;
        service.record_hit(hit_param(ROBIN, "robin", "widget")).await?;

        assert_eq!(service.hits_by_purpose(GABEN, "widget").await?, 2);
        assert_eq!(service.hits_by_purpose(GABEN, "playtime").await?, 1);
        assert_eq!(service.hits_by_purpose(GABEN, "").await?, 3);
        assert_eq!(service.total_hits().await?, 4);

        Ok(())
    }

    /// Tests the per-profile daily series.
    ///
    /// Expected: one entry per purpose and day, other profiles excluded
    #[tokio::test]
    async fn profile_daily_groups_by_purpose_and_day() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_metrics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        hit_at(db, GABEN, "widget", (2025, 3, 1, 8)).await?;
        hit_at(db, GABEN, "widget", (2025, 3, 1, 23)).await?;
        hit_at(db, GABEN, "widget", (2025, 3, 4, 12)).await?;
        hit_at(db, GABEN, "playtime", (2025, 3, 1, 9)).await?;
        hit_at(db, ROBIN, "widget", (2025, 3, 1, 10)).await?;

        let days = HitMetricsService::new(db).profile_daily(GABEN).await?;

        assert_eq!(
            days,
            vec![
                ProfileHitDay {
                    purpose: "playtime".to_string(),
                    date: day(2025, 3, 1),
                    count: 1,
                },
                ProfileHitDay {
                    purpose: "widget".to_string(),
                    date: day(2025, 3, 1),
                    count: 2,
                },
                ProfileHitDay {
                    purpose: "widget".to_string(),
                    date: day(2025, 3, 4),
                    count: 1,
                },
            ]
        );

        Ok(())
    }

    /// Tests the global daily series.
    ///
    /// Expected: hits of every profile summed per day, sorted by day
    #[tokio::test]
    async fn global_daily_sums_all_profiles() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_metrics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        hit_at(db, ROBIN, "widget", (2025, 3, 2, 10)).await?;
        hit_at(db, GABEN, "widget", (2025, 3, 1, 8)).await?;
        hit_at(db, GABEN, "playtime", (2025, 3, 2, 9)).await?;

        let days = HitMetricsService::new(db).global_daily().await?;

        assert_eq!(
            days,
            vec![
                HitDay {
                    date: day(2025, 3, 1),
                    count: 1,
                },
                HitDay {
                    date: day(2025, 3, 2),
                    count: 2,
                },
            ]
        );

        Ok(())
    }
}
