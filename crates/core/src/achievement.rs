//! Achievements and share text for a finished challenge.

use crate::day::DayNumber;
use crate::record::ProgressRecord;
use crate::stats::CompletionStats;

/// Characters of a reflection shown in the journey recap.
pub const EXCERPT_CHARS: usize = 120;

/// One badge on the completion screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    /// Badge title
    pub title: &'static str,
    /// What earned it
    pub description: String,
}

/// Achievements for a finished challenge; empty until all seven days are done.
pub fn achievements(record: &ProgressRecord, stats: &CompletionStats) -> Vec<Achievement> {
    if !record.is_finished() {
        return Vec::new();
    }

    vec![
        Achievement {
            title: "Challenge Completed",
            description: "Finished all 7 days of discipline training".to_string(),
        },
        Achievement {
            title: "Streak Master",
            description: format!("Maintained a {}-day streak", record.streak),
        },
        Achievement {
            title: "Habit Builder",
            description: "Completed daily habit challenges".to_string(),
        },
        Achievement {
            title: "Knowledge Seeker",
            description: "Read and reflected on growth materials".to_string(),
        },
        Achievement {
            title: "Physical Warrior",
            description: "Completed exercise challenges".to_string(),
        },
        Achievement {
            title: "Self-Reflector",
            description: format!("Wrote {} thoughtful reflections", stats.total_reflections),
        },
    ]
}

/// Text for sharing results.
pub fn share_text(record: &ProgressRecord, stats: &CompletionStats) -> String {
    format!(
        "I just completed the Dyvyn 7-Day Discipline Challenge!\n\n\
         {}% completion rate\n\
         {}-day streak\n\
         {} reflections\n\n\
         Ready to transform your discipline? Join me at Dyvyn!",
        stats.completion_rate.round(),
        record.streak,
        stats.total_reflections,
    )
}

/// Reflection for `day`, cut to `EXCERPT_CHARS` with a trailing ellipsis.
pub fn reflection_excerpt(record: &ProgressRecord, day: DayNumber) -> Option<String> {
    let text = record.reflections.get(&day)?;
    if text.chars().count() > EXCERPT_CHARS {
        let cut: String = text.chars().take(EXCERPT_CHARS).collect();
        Some(format!("{cut}..."))
    } else {
        Some(text.clone())
    }
}
