//! Inputs collected during a day's task flow.

use serde::{Deserialize, Serialize};

/// Minimum length of a reading summary before a day can be finished.
pub const MIN_SUMMARY_CHARS: usize = 100;

/// What the user entered while working through one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInputs {
    /// Free-text reflection
    pub reflection_text: String,
    /// One small win from the day
    pub micro_win: String,
    /// Habit task done
    pub habit_completed: bool,
    /// Title of the reading
    pub reading_title: String,
    /// Summary of the reading
    pub reading_summary: String,
    /// Exercises picked from the catalog
    pub selected_exercises: Vec<String>,
    /// Anything not in the catalog
    pub custom_exercise: Option<String>,
}

/// A rule the day flow checks before letting the user finish a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Habit must be marked done
    HabitDone,
    /// Reading needs a title
    ReadingTitle,
    /// Reading summary needs `MIN_SUMMARY_CHARS` characters
    ReadingSummary,
    /// At least one exercise
    Exercise,
    /// Reflection must not be empty
    Reflection,
    /// Micro-win must not be empty
    MicroWin,
}

impl Requirement {
    /// Human-readable description.
    pub fn describe(&self) -> &'static str {
        match self {
            Requirement::HabitDone => "mark today's habit as done",
            Requirement::ReadingTitle => "enter the title of what you read",
            Requirement::ReadingSummary => "write a reading summary of at least 100 characters",
            Requirement::Exercise => "log at least one exercise",
            Requirement::Reflection => "write a reflection",
            Requirement::MicroWin => "note one micro-win",
        }
    }
}

impl DayInputs {
    /// Selected exercises followed by the custom one, empty entries removed.
    pub fn exercise_list(&self) -> Vec<String> {
        self.selected_exercises
            .iter()
            .chain(self.custom_exercise.iter())
            .filter(|name| !name.is_empty())
            .cloned()
            .collect()
    }

    /// Rules that are not yet satisfied, in flow order.
    pub fn missing_requirements(&self) -> Vec<Requirement> {
        let mut missing = Vec::new();
        if !self.habit_completed {
            missing.push(Requirement::HabitDone);
        }
        if self.reading_title.is_empty() {
            missing.push(Requirement::ReadingTitle);
        }
        if self.reading_summary.chars().count() < MIN_SUMMARY_CHARS {
            missing.push(Requirement::ReadingSummary);
        }
        if self.exercise_list().is_empty() {
            missing.push(Requirement::Exercise);
        }
        if self.reflection_text.is_empty() {
            missing.push(Requirement::Reflection);
        }
        if self.micro_win.is_empty() {
            missing.push(Requirement::MicroWin);
        }
        missing
    }

    /// Whether every rule is satisfied.
    pub fn is_ready(&self) -> bool {
        self.missing_requirements().is_empty()
    }
}
