//! Goal categories - which themed content set a challenge follows.

use serde::{Deserialize, Serialize};
use crate::error::CoreError;

/// The goal a user picked when starting the challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    /// Self-control and consistency
    #[default]
    Discipline,
    /// Daily movement and healthy habits
    Fitness,
    /// Concentration and distraction removal
    Focus,
    /// Breaking instant-gratification loops
    Dopamine,
    /// Financial and career habits
    Money,
}

impl GoalCategory {
    /// Every category, in landing-page order.
    pub const ALL: [GoalCategory; 5] = [
        GoalCategory::Discipline,
        GoalCategory::Fitness,
        GoalCategory::Focus,
        GoalCategory::Dopamine,
        GoalCategory::Money,
    ];

    /// Serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Discipline => "discipline",
            GoalCategory::Fitness => "fitness",
            GoalCategory::Focus => "focus",
            GoalCategory::Dopamine => "dopamine",
            GoalCategory::Money => "money",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            GoalCategory::Discipline => "Build Discipline",
            GoalCategory::Fitness => "Fitness Focus",
            GoalCategory::Focus => "Deep Focus",
            GoalCategory::Dopamine => "Quit Dopamine",
            GoalCategory::Money => "Money & Work",
        }
    }

    /// One-line pitch.
    pub fn description(&self) -> &'static str {
        match self {
            GoalCategory::Discipline => "Master self-control and consistency in all areas of life",
            GoalCategory::Fitness => "Transform your body with daily movement and healthy habits",
            GoalCategory::Focus => "Eliminate distractions and achieve laser-sharp concentration",
            GoalCategory::Dopamine => "Break free from instant gratification and digital addiction",
            GoalCategory::Money => "Build wealth through disciplined financial and career habits",
        }
    }

    /// Badge shown when the challenge is finished, e.g. "Discipline Master".
    pub fn mastery_badge(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => format!("{}{} Master", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discipline" => Ok(GoalCategory::Discipline),
            "fitness" => Ok(GoalCategory::Fitness),
            "focus" => Ok(GoalCategory::Focus),
            "dopamine" => Ok(GoalCategory::Dopamine),
            "money" => Ok(GoalCategory::Money),
            other => Err(CoreError::UnknownGoal(other.to_string())),
        }
    }
}
