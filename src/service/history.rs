//! Playtime history series built from recorded snapshot deltas.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    data::playing_tracker::PlayingTrackerRepository,
    error::AppError,
    model::playtime::{PlaytimeDay, PlaytimeMonth, PlaytimeSnapshot},
};

/// Minutes per bucket and game name.
type Buckets<K> = BTreeMap<K, BTreeMap<String, i64>>;

pub struct PlaytimeHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaytimeHistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Minutes played per game and calendar month.
    ///
    /// Months between the first and last tracked month without any playtime appear
    /// once with an empty game name and zero minutes.
    ///
    /// # Arguments
    /// - `steam_id` - Canonical Steam64 id
    ///
    /// # Returns
    /// - `Ok(Vec<PlaytimeMonth>)` - Sorted by month, then game name; empty without data
    /// - `Err(AppError)` - Database error
    pub async fn monthly(&self, steam_id: &str) -> Result<Vec<PlaytimeMonth>, AppError> {
        let snapshots = PlayingTrackerRepository::new(self.db)
            .get_by_steam_id(steam_id)
            .await?;

        let buckets = aggregate(&snapshots, |s| {
            (s.recorded_at.year(), s.recorded_at.month())
        });

        Ok(fill_gaps(buckets, next_month)
            .into_iter()
            .map(|((year, month), game_name, minutes)| PlaytimeMonth {
                year,
                month,
                game_name,
                minutes,
            })
            .collect())
    }

    /// Minutes played per game and UTC calendar day.
    ///
    /// Days between the first and last tracked day without any playtime appear once
    /// with an empty game name and zero minutes.
    ///
    /// # Returns
    /// - `Ok(Vec<PlaytimeDay>)` - Sorted by day, then game name; empty without data
    /// - `Err(AppError)` - Database error
    pub async fn daily(&self, steam_id: &str) -> Result<Vec<PlaytimeDay>, AppError> {
        let snapshots = PlayingTrackerRepository::new(self.db)
            .get_by_steam_id(steam_id)
            .await?;

        let buckets = aggregate(&snapshots, |s| s.recorded_at.date_naive());

        Ok(fill_gaps(buckets, |date: &NaiveDate| {
            date.checked_add_days(Days::new(1))
        })
        .into_iter()
        .map(|(date, game_name, minutes)| PlaytimeDay {
            date,
            game_name,
            minutes,
        })
        .collect())
    }
}

/// Sums positive deltas per bucket and game. Zero-delta baselines are left out.
fn aggregate<K, F>(snapshots: &[PlaytimeSnapshot], bucket: F) -> Buckets<K>
where
    K: Ord,
    F: Fn(&PlaytimeSnapshot) -> K,
{
    let mut buckets: Buckets<K> = BTreeMap::new();
    for snapshot in snapshots.iter().filter(|s| s.delta_minutes > 0) {
        let game_name = snapshot
            .game_name
            .clone()
            .unwrap_or_else(|| snapshot.app_id.to_string());

        *buckets
            .entry(bucket(snapshot))
            .or_default()
            .entry(game_name)
            .or_default() += snapshot.delta_minutes;
    }

    buckets
}

/// Flattens buckets, inserting an empty entry for every missing bucket between the
/// first and the last one.
fn fill_gaps<K, F>(mut buckets: Buckets<K>, next: F) -> Vec<(K, String, i64)>
where
    K: Ord + Clone,
    F: Fn(&K) -> Option<K>,
{
    if let (Some(first), Some(last)) = (
        buckets.keys().next().cloned(),
        buckets.keys().next_back().cloned(),
    ) {
        let mut current = next(&first);
        while let Some(key) = current.filter(|key| *key < last) {
            current = next(&key);
            buckets
                .entry(key)
                .or_insert_with(|| BTreeMap::from([(String::new(), 0)]));
        }
    }

    buckets
        .into_iter()
        .flat_map(|(key, games)| {
            games
                .into_iter()
                .map(move |(game_name, minutes)| (key.clone(), game_name, minutes))
        })
        .collect()
}

fn next_month(&(year, month): &(i32, u32)) -> Option<(i32, u32)> {
    Some(if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    })
}
