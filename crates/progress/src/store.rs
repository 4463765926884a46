//! The progress store - owns the user's record and mirrors it to storage.

use chrono::Duration;
use dyvyn_core::{
    streak, Clock, CompletionStats, DayInputs, DayNumber, GoalCategory, ProgressRecord,
};
use dyvyn_storage::{Storage, StorageError};
use tracing::{debug, info, warn};
use crate::journey::Journey;
use crate::unlock::{self, UnlockCountdown};

/// Slot the record is persisted under.
pub const DEFAULT_SNAPSHOT_KEY: &str = "dyvyn-progress";

/// Configuration for the progress store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Storage slot holding the snapshot
    pub snapshot_key: String,
    /// How long after a completion the next day opens
    pub unlock_after: Duration,
    /// Minutes credited per finalized day
    pub minutes_per_day: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            unlock_after: Duration::hours(24),
            minutes_per_day: 30,
        }
    }
}

/// How the in-memory record came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// No snapshot existed; defaults were used
    Fresh,
    /// Snapshot read back successfully
    Restored,
    /// Snapshot was malformed; defaults were used and written back
    Recovered,
    /// Storage could not be read; defaults are used in memory only and the
    /// stored snapshot is left untouched
    Unavailable,
}

/// Result of mirroring a change to storage.
///
/// A failed write never undoes the in-memory change.
#[derive(Debug)]
#[must_use]
pub enum SaveStatus {
    /// Change written
    Saved,
    /// Nothing changed, nothing written
    Unchanged,
    /// Change kept in memory but the write failed
    Failed(StorageError),
}

impl SaveStatus {
    /// Whether storage reflects the in-memory record.
    pub fn is_persisted(&self) -> bool {
        !matches!(self, SaveStatus::Failed(_))
    }
}

/// Single-user progress store.
///
/// Constructed once by the front end and passed to whatever needs it.
/// Every mutation takes `&mut self` and finishes its write before
/// returning.
pub struct ProgressStore<S: Storage> {
    storage: S,
    config: StoreConfig,
    clock: Clock,
    record: ProgressRecord,
    origin: LoadOrigin,
}

impl<S: Storage> ProgressStore<S> {
    /// Create a store over `storage` holding a default record. Call
    /// [`load`](Self::load) to restore a saved snapshot.
    pub fn new(storage: S) -> Self {
        let clock = Clock::default();
        Self {
            storage,
            config: StoreConfig::default(),
            record: ProgressRecord::new(clock.now()),
            clock,
            origin: LoadOrigin::Fresh,
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Create and load in one step with defaults.
    pub async fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load().await;
        store
    }

    /// Replace the in-memory record with the saved snapshot, or with a
    /// default record when there is none or it cannot be read.
    ///
    /// A default record is written back immediately so its join time stays
    /// stable across loads, except when the slot could not be read at all.
    pub async fn load(&mut self) -> LoadOrigin {
        let key = self.config.snapshot_key.clone();
        let origin = match self.storage.read_slot(&key).await {
            Ok(Some(json)) => match ProgressRecord::from_json(&json) {
                Ok(record) => {
                    self.record = record;
                    LoadOrigin::Restored
                }
                Err(e) => {
                    warn!("Discarding malformed snapshot in {}: {}", key, e);
                    LoadOrigin::Recovered
                }
            },
            Ok(None) => LoadOrigin::Fresh,
            Err(e) => {
                warn!("Could not read snapshot {}: {}", key, e);
                LoadOrigin::Unavailable
            }
        };

        if origin != LoadOrigin::Restored {
            self.record = ProgressRecord::new(self.clock.now());
        }
        if matches!(origin, LoadOrigin::Fresh | LoadOrigin::Recovered) {
            if let SaveStatus::Failed(e) = self.persist().await {
                debug!("Initial snapshot not written: {}", e);
            }
        }

        info!(
            "Loaded progress ({:?}): day {}, {} completed",
            origin,
            self.record.current_day,
            self.record.completed_days.len()
        );
        self.origin = origin;
        origin
    }

    /// The current record.
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// How the record was obtained by the last [`load`](Self::load).
    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    /// Active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Mutable access to the clock, e.g. to advance a fixed clock.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Start a new challenge for `name` with `goal`, replacing the record.
    pub async fn start_challenge(&mut self, name: impl Into<String>, goal: GoalCategory) -> SaveStatus {
        self.record = ProgressRecord::for_user(name, goal, self.clock.now());
        info!("Started {} challenge for {}", goal, self.record.name);
        self.persist().await
    }

    /// Store what the user entered for `day`, overwriting earlier entries
    /// for that day. No validation is done here.
    pub async fn record_day_inputs(&mut self, day: DayNumber, inputs: &DayInputs) -> SaveStatus {
        self.record.apply_inputs(day, inputs);
        debug!("Recorded inputs for day {}", day);
        self.persist().await
    }

    /// Mark `day` complete and advance progression.
    ///
    /// Finalizing a day that is already complete changes nothing.
    pub async fn finalize_day(&mut self, day: DayNumber) -> SaveStatus {
        if !self.record.completed_days.insert(day) {
            debug!("Day {} already completed", day);
            return SaveStatus::Unchanged;
        }

        let now = self.clock.now();
        self.record.streak =
            streak::calculate_streak(&self.record.completed_days, self.record.joined_at, now);
        self.record.current_day = day.next_saturating();
        self.record.last_completion_at = Some(now);
        self.record.total_time_spent =
            self.record.total_time_spent.saturating_add(self.config.minutes_per_day);

        info!("Completed day {} (streak {})", day, self.record.streak);
        self.persist().await
    }

    /// Whether `day` can be opened now.
    pub fn can_access_day(&self, day: DayNumber) -> bool {
        unlock::can_access_day(&self.record, day, self.clock.now(), self.config.unlock_after)
    }

    /// Countdown to the next unlock.
    pub fn unlock_countdown(&self) -> UnlockCountdown {
        UnlockCountdown::since(
            self.record.last_completion_at,
            self.clock.now(),
            self.config.unlock_after,
        )
    }

    /// Countdown to the next unlock as display text ("Available now", "12h 34m").
    pub fn time_until_unlock(&self) -> String {
        self.unlock_countdown().to_string()
    }

    /// Completion statistics.
    pub fn completion_stats(&self) -> CompletionStats {
        CompletionStats::from_record(&self.record)
    }

    /// Per-day overview.
    pub fn journey(&self) -> Journey {
        Journey::build(&self.record, self.clock.now(), self.config.unlock_after)
    }

    /// Throw away all progress and erase the snapshot.
    pub async fn reset(&mut self) -> SaveStatus {
        self.record = ProgressRecord::new(self.clock.now());
        info!("Progress reset");

        match self.storage.remove_slot(&self.config.snapshot_key).await {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                warn!("Could not erase snapshot {}: {}", self.config.snapshot_key, e);
                SaveStatus::Failed(e)
            }
        }
    }

    async fn persist(&mut self) -> SaveStatus {
        let json = match self.record.to_json() {
            Ok(json) => json,
            Err(e) => return SaveStatus::Failed(e.into()),
        };

        match self.storage.write_slot(&self.config.snapshot_key, &json).await {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                warn!("Progress kept in memory but not saved: {}", e);
                SaveStatus::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dyvyn_core::Time;
    use dyvyn_storage::{JsonStorage, MemoryStorage};
    use std::collections::BTreeSet;

    struct FailingStorage;
    #[async_trait::async_trait]
    impl Storage for FailingStorage {
        async fn read_slot(&self, _key: &str) -> dyvyn_storage::Result<Option<String>> { Ok(None) }
        async fn write_slot(&mut self, _key: &str, _value: &str) -> dyvyn_storage::Result<()> {
            Err(StorageError::Other("quota exceeded".to_string()))
        }
        async fn remove_slot(&mut self, _key: &str) -> dyvyn_storage::Result<()> {
            Err(StorageError::Other("read-only".to_string()))
        }
    }

    struct FlakyStorage {
        inner: MemoryStorage,
        fail_reads: bool,
    }
    #[async_trait::async_trait]
    impl Storage for FlakyStorage {
        async fn read_slot(&self, key: &str) -> dyvyn_storage::Result<Option<String>> {
            if self.fail_reads {
                return Err(StorageError::Other("permission denied".to_string()));
            }
            self.inner.read_slot(key).await
        }
        async fn write_slot(&mut self, key: &str, value: &str) -> dyvyn_storage::Result<()> {
            self.inner.write_slot(key, value).await
        }
        async fn remove_slot(&mut self, key: &str) -> dyvyn_storage::Result<()> {
            self.inner.remove_slot(key).await
        }
    }

    fn t0() -> Time {
        Utc.with_ymd_and_hms(2025, 2, 3, 8, 0, 0).unwrap()
    }

    fn day(n: i64) -> DayNumber {
        DayNumber::new(n).unwrap()
    }

    fn sample_inputs() -> DayInputs {
        DayInputs {
            reflection_text: "felt good".into(),
            micro_win: "woke up early".into(),
            habit_completed: true,
            reading_title: "Atomic Habits".into(),
            reading_summary: "x".repeat(120),
            selected_exercises: vec!["Push-ups".into()],
            custom_exercise: Some(String::new()),
        }
    }

    async fn fresh_store() -> ProgressStore<MemoryStorage> {
        let mut store = ProgressStore::new(MemoryStorage::new()).with_clock(Clock::fixed(t0()));
        store.load().await;
        store
    }

    #[tokio::test]
    async fn test_fresh_load_uses_defaults() {
        let store = fresh_store().await;
        assert_eq!(store.origin(), LoadOrigin::Fresh);
        assert_eq!(store.record().current_day, DayNumber::FIRST);
        assert_eq!(store.record().joined_at, t0());
        assert!(store.storage().contains(DEFAULT_SNAPSHOT_KEY));
        assert!(store.can_access_day(DayNumber::FIRST));
        assert_eq!(store.time_until_unlock(), "Available now");
    }

    #[tokio::test]
    async fn test_end_to_end_first_day() {
        let mut store = fresh_store().await;

        assert!(store.record_day_inputs(day(1), &sample_inputs()).await.is_persisted());
        assert!(matches!(store.finalize_day(day(1)).await, SaveStatus::Saved));

        let record = store.record();
        assert_eq!(record.completed_days.iter().copied().collect::<Vec<_>>(), vec![day(1)]);
        assert_eq!(record.current_day, day(2));
        assert_eq!(record.streak, 1);
        assert_eq!(record.reflections[&day(1)], "felt good");
        assert_eq!(record.exercise_completions[&day(1)], vec!["Push-ups"]);
        assert_eq!(record.total_time_spent, 30);
        assert_eq!(record.last_completion_at, Some(t0()));
    }

    #[tokio::test]
    async fn test_sequential_days_advance_progression() {
        let mut store = fresh_store().await;

        for k in 1..=7 {
            let _ = store.finalize_day(day(k)).await;
            let record = store.record();
            let expected: BTreeSet<DayNumber> = DayNumber::all().take(k as usize).collect();
            assert_eq!(record.completed_days, expected);
            assert_eq!(record.current_day.get() as i64, (k + 1).min(7));
            assert_eq!(record.streak, k as u32);

            let stats = store.completion_stats();
            assert!((stats.completion_rate - 100.0 * k as f64 / 7.0).abs() < 1e-9);
            assert_eq!(stats.average_time_per_day, 30.0);

            store.clock_mut().advance(Duration::days(1));
        }
        assert!(store.record().is_finished());
    }

    #[tokio::test]
    async fn test_refinalizing_is_a_no_op() {
        let mut store = fresh_store().await;
        let _ = store.finalize_day(day(1)).await;
        store.clock_mut().advance(Duration::hours(5));

        assert!(matches!(store.finalize_day(day(1)).await, SaveStatus::Unchanged));
        let record = store.record();
        assert_eq!(record.completed_days.len(), 1);
        assert_eq!(record.total_time_spent, 30);
        assert_eq!(record.last_completion_at, Some(t0()));
    }

    #[tokio::test]
    async fn test_unlock_after_interval() {
        let mut store = fresh_store().await;
        let _ = store.finalize_day(day(1)).await;

        assert!(!store.can_access_day(day(2)));
        assert_eq!(store.time_until_unlock(), "24h 0m");

        store.clock_mut().advance(Duration::hours(10) + Duration::minutes(30));
        assert!(!store.can_access_day(day(2)));
        assert_eq!(store.time_until_unlock(), "13h 30m");

        store.clock_mut().advance(Duration::hours(14));
        assert!(store.can_access_day(day(2)));
        assert!(!store.can_access_day(day(3)));
        assert!(store.unlock_countdown().is_available());
    }

    #[tokio::test]
    async fn test_custom_config() {
        let config = StoreConfig {
            snapshot_key: "profile-b".to_string(),
            unlock_after: Duration::hours(1),
            minutes_per_day: 45,
        };
        let mut store = ProgressStore::new(MemoryStorage::new())
            .with_config(config)
            .with_clock(Clock::fixed(t0()));
        store.load().await;
        let _ = store.finalize_day(day(1)).await;

        assert_eq!(store.record().total_time_spent, 45);
        store.clock_mut().advance(Duration::hours(1));
        assert!(store.can_access_day(day(2)));
        assert!(store.storage().contains("profile-b"));
        assert!(!store.storage().contains(DEFAULT_SNAPSHOT_KEY));
    }

    #[tokio::test]
    async fn test_reset_restores_defaults_and_erases_snapshot() {
        let mut store = fresh_store().await;
        let _ = store.record_day_inputs(day(1), &sample_inputs()).await;
        let _ = store.finalize_day(day(1)).await;

        assert!(matches!(store.reset().await, SaveStatus::Saved));
        let record = store.record();
        assert!(record.completed_days.is_empty());
        assert_eq!(record.current_day, DayNumber::FIRST);
        assert_eq!(record.streak, 0);
        assert!(record.reflections.is_empty());
        assert!(!store.storage().contains(DEFAULT_SNAPSHOT_KEY));
        assert!(store.can_access_day(DayNumber::FIRST));
    }

    #[tokio::test]
    async fn test_start_challenge_sets_identity() {
        let mut store = fresh_store().await;
        let _ = store.finalize_day(day(1)).await;

        assert!(store.start_challenge("Sam", GoalCategory::Fitness).await.is_persisted());
        assert_eq!(store.record().name, "Sam");
        assert_eq!(store.record().goal, GoalCategory::Fitness);
        assert!(store.record().completed_days.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_recovered() {
        let storage = MemoryStorage::with_slot(DEFAULT_SNAPSHOT_KEY, "{not json");
        let mut store = ProgressStore::new(storage).with_clock(Clock::fixed(t0()));

        assert_eq!(store.load().await, LoadOrigin::Recovered);
        assert_eq!(store.record(), &ProgressRecord::new(t0()));
    }

    #[tokio::test]
    async fn test_unreadable_storage_keeps_saved_snapshot() {
        let mut saved = ProgressStore::new(MemoryStorage::new()).with_clock(Clock::fixed(t0()));
        saved.load().await;
        let _ = saved.finalize_day(day(1)).await;
        saved.clock_mut().advance(Duration::days(1));
        let _ = saved.finalize_day(day(2)).await;
        let snapshot = saved
            .storage()
            .read_slot(DEFAULT_SNAPSHOT_KEY)
            .await
            .unwrap()
            .unwrap();

        let storage = FlakyStorage {
            inner: MemoryStorage::with_slot(DEFAULT_SNAPSHOT_KEY, snapshot.clone()),
            fail_reads: true,
        };
        let mut store = ProgressStore::new(storage).with_clock(Clock::fixed(t0()));
        assert_eq!(store.load().await, LoadOrigin::Unavailable);
        assert!(store.record().completed_days.is_empty());

        let stored = store.storage().inner.read_slot(DEFAULT_SNAPSHOT_KEY).await.unwrap();
        assert_eq!(stored.as_deref(), Some(snapshot.as_str()));

        let storage = FlakyStorage {
            inner: MemoryStorage::with_slot(DEFAULT_SNAPSHOT_KEY, snapshot),
            fail_reads: false,
        };
        let mut reopened = ProgressStore::new(storage).with_clock(Clock::fixed(t0()));
        assert_eq!(reopened.load().await, LoadOrigin::Restored);
        assert_eq!(reopened.record().completed_days.len(), 2);
    }

    #[tokio::test]
    async fn test_finalize_saturates_large_time_spent() {
        let mut record = ProgressRecord::new(t0());
        record.total_time_spent = u32::MAX - 5;
        let storage = MemoryStorage::with_slot(DEFAULT_SNAPSHOT_KEY, record.to_json().unwrap());
        let mut store = ProgressStore::new(storage).with_clock(Clock::fixed(t0()));
        assert_eq!(store.load().await, LoadOrigin::Restored);

        assert!(store.finalize_day(DayNumber::FIRST).await.is_persisted());
        assert_eq!(store.record().total_time_spent, u32::MAX);
        assert!(store.record().is_completed(DayNumber::FIRST));
    }

    #[tokio::test]
    async fn test_write_failure_keeps_mutation() {
        let mut store = ProgressStore::new(FailingStorage).with_clock(Clock::fixed(t0()));
        store.load().await;

        let status = store.finalize_day(day(1)).await;
        assert!(matches!(status, SaveStatus::Failed(StorageError::Other(_))));
        assert!(store.record().is_completed(day(1)));

        assert!(!store.reset().await.is_persisted());
        assert!(store.record().completed_days.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = JsonStorage::new(dir.path()).await.unwrap();
            let mut store = ProgressStore::new(storage).with_clock(Clock::fixed(t0()));
            store.load().await;
            let _ = store.record_day_inputs(day(1), &sample_inputs()).await;
            let _ = store.finalize_day(day(1)).await;
        }

        let storage = JsonStorage::new(dir.path()).await.unwrap();
        let mut store = ProgressStore::new(storage)
            .with_clock(Clock::fixed(t0() + Duration::days(1)));
        assert_eq!(store.load().await, LoadOrigin::Restored);

        let record = store.record();
        assert_eq!(record.joined_at, t0());
        assert_eq!(record.last_completion_at, Some(t0()));
        assert_eq!(record.reading_completions[&day(1)].title, "Atomic Habits");
        assert!(store.can_access_day(day(2)));
    }

    #[tokio::test]
    async fn test_reset_then_reload_yields_fresh_record() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        let mut store = ProgressStore::new(storage).with_clock(Clock::fixed(t0()));
        store.load().await;
        let _ = store.finalize_day(day(1)).await;
        let _ = store.reset().await;

        let storage = JsonStorage::new(dir.path()).await.unwrap();
        let mut reopened = ProgressStore::new(storage).with_clock(Clock::fixed(t0()));
        assert_eq!(reopened.load().await, LoadOrigin::Fresh);
        assert!(reopened.record().completed_days.is_empty());
    }

    #[tokio::test]
    async fn test_stats_echo_streak() {
        let mut store = fresh_store().await;
        let _ = store.record_day_inputs(day(1), &sample_inputs()).await;
        let _ = store.finalize_day(day(1)).await;

        let stats = store.completion_stats();
        assert_eq!(stats.longest_streak, store.record().streak);
        assert_eq!(stats.total_reflections, 1);
    }
}
