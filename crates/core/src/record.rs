//! Progress record - the single user's journey through the challenge.

use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};
use crate::day::DayNumber;
use crate::goal::GoalCategory;
use crate::inputs::DayInputs;
use crate::time::Time;

/// Display name used before the user picks one.
pub const DEFAULT_NAME: &str = "Alex";

/// Everything the app remembers about one user's challenge.
///
/// Serialized with camelCase field names; day-keyed maps use string keys
/// (`"1"`) and timestamps are RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Display name
    pub name: String,

    /// Content set the challenge follows
    pub goal: GoalCategory,

    /// Next day eligible to start
    pub current_day: DayNumber,

    /// Days finalized so far
    pub completed_days: BTreeSet<DayNumber>,

    /// Cached streak, recomputed on every finalize
    pub streak: u32,

    /// When the challenge was started
    pub joined_at: Time,

    /// When the most recent day was finalized
    pub last_completion_at: Option<Time>,

    /// Minutes credited so far
    pub total_time_spent: u32,

    /// Reflection text per day
    #[serde(default)]
    pub reflections: BTreeMap<DayNumber, String>,

    /// Micro-win per day
    #[serde(default)]
    pub micro_wins: BTreeMap<DayNumber, String>,

    /// Whether the day's habit was done
    #[serde(default)]
    pub habit_completions: BTreeMap<DayNumber, bool>,

    /// Reading logged per day
    #[serde(default)]
    pub reading_completions: BTreeMap<DayNumber, ReadingCompletion>,

    /// Exercises performed per day, in the order given
    #[serde(default)]
    pub exercise_completions: BTreeMap<DayNumber, Vec<String>>,
}

/// A reading logged for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingCompletion {
    /// Title of what was read
    pub title: String,
    /// User's summary
    pub summary: String,
}

impl ProgressRecord {
    /// A fresh record for the default user, joined at `joined_at`.
    pub fn new(joined_at: Time) -> Self {
        Self::for_user(DEFAULT_NAME, GoalCategory::default(), joined_at)
    }

    /// A fresh record for a named user and goal.
    pub fn for_user(name: impl Into<String>, goal: GoalCategory, joined_at: Time) -> Self {
        Self {
            name: name.into(),
            goal,
            current_day: DayNumber::FIRST,
            completed_days: BTreeSet::new(),
            streak: 0,
            joined_at,
            last_completion_at: None,
            total_time_spent: 0,
            reflections: BTreeMap::new(),
            micro_wins: BTreeMap::new(),
            habit_completions: BTreeMap::new(),
            reading_completions: BTreeMap::new(),
            exercise_completions: BTreeMap::new(),
        }
    }

    /// Whether `day` has been finalized.
    pub fn is_completed(&self, day: DayNumber) -> bool {
        self.completed_days.contains(&day)
    }

    /// Whether all seven days are done.
    pub fn is_finished(&self) -> bool {
        DayNumber::all().all(|day| self.is_completed(day))
    }

    /// Upsert one day's inputs into every per-day map.
    ///
    /// The exercise list is the selected exercises followed by the custom
    /// one, with empty entries dropped.
    pub fn apply_inputs(&mut self, day: DayNumber, inputs: &DayInputs) {
        self.reflections.insert(day, inputs.reflection_text.clone());
        self.micro_wins.insert(day, inputs.micro_win.clone());
        self.habit_completions.insert(day, inputs.habit_completed);
        self.reading_completions.insert(
            day,
            ReadingCompletion {
                title: inputs.reading_title.clone(),
                summary: inputs.reading_summary.clone(),
            },
        );
        self.exercise_completions.insert(day, inputs.exercise_list());
    }

    /// Serialize to the snapshot format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
