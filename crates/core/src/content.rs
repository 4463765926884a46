//! Static challenge content: day themes, goal-specific prompts, exercises.

use crate::day::DayNumber;
use crate::goal::GoalCategory;

/// Theme and plan for one day of the challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTheme {
    /// Short title
    pub title: &'static str,
    /// Opening mindset paragraph
    pub mindset: &'static str,
    /// What the day trains
    pub focus: &'static str,
    /// Dashboard blurb
    pub description: &'static str,
    /// Rough time needed
    pub estimated_time: &'static str,
    /// Dashboard task list
    pub tasks: [&'static str; 3],
}

const THEMES: [DayTheme; 7] = [
    DayTheme {
        title: "Foundation Day",
        mindset: "Today marks the beginning of your transformation. Every expert was once a beginner, and every master was once a disaster. Your only job today is to start.",
        focus: "Building the foundation of discipline through small, consistent actions",
        description: "Build your discipline foundation with core habits",
        estimated_time: "15-20 min",
        tasks: ["Morning routine setup", "Goal visualization", "First micro-win"],
    },
    DayTheme {
        title: "Momentum Builder",
        mindset: "Momentum is everything. Yesterday you planted a seed, today you water it. The compound effect of your actions is already beginning to work in your favor.",
        focus: "Strengthening your commitment and building unstoppable momentum",
        description: "Strengthen your commitment and build early momentum",
        estimated_time: "20-25 min",
        tasks: ["Habit stacking", "Resistance training", "Progress reflection"],
    },
    DayTheme {
        title: "Obstacle Mastery",
        mindset: "Obstacles don't block the path - they ARE the path. Today you'll learn that resistance is not your enemy, it's your teacher.",
        focus: "Developing resilience and learning to thrive under pressure",
        description: "Learn to overcome common challenges and setbacks",
        estimated_time: "25-30 min",
        tasks: ["Obstacle identification", "Contingency planning", "Mental rehearsal"],
    },
    DayTheme {
        title: "Deep Focus",
        mindset: "In a world of infinite distractions, your ability to focus is your superpower. Today you'll train your mind like an athlete trains their body.",
        focus: "Cultivating laser-sharp concentration and eliminating distractions",
        description: "Develop laser-sharp concentration and eliminate distractions",
        estimated_time: "30-35 min",
        tasks: ["Focus training", "Distraction audit", "Deep work session"],
    },
    DayTheme {
        title: "Social Integration",
        mindset: "You are the average of the five people you spend the most time with. Today you'll align your environment with your highest aspirations.",
        focus: "Optimizing your environment and relationships for success",
        description: "Align your environment and relationships with your goals",
        estimated_time: "25-30 min",
        tasks: ["Environment design", "Accountability setup", "Social boundaries"],
    },
    DayTheme {
        title: "Advanced Techniques",
        mindset: "Mastery is not about perfection, it's about progression. Today you'll learn the advanced strategies that separate the good from the great.",
        focus: "Implementing advanced discipline strategies and mental models",
        description: "Master advanced discipline strategies and mental models",
        estimated_time: "35-40 min",
        tasks: ["Advanced techniques", "Mental models", "System optimization"],
    },
    DayTheme {
        title: "Integration & Beyond",
        mindset: "This is not the end, it's the beginning. Today you'll integrate everything you've learned and design your path forward.",
        focus: "Synthesizing your journey and planning for continued growth",
        description: "Integrate everything and plan your continued growth",
        estimated_time: "30-35 min",
        tasks: ["Integration planning", "Long-term strategy", "Celebration ritual"],
    },
];

const DISCIPLINE_HABITS: [&str; 7] = [
    "Make your bed within 5 minutes of waking up",
    "Complete a 10-minute morning routine without checking your phone",
    "Practice saying 'no' to one unnecessary commitment today",
    "Maintain perfect posture for 30 minutes during focused work",
    "Complete all planned tasks before any leisure activities",
    "Practice delayed gratification by waiting 10 minutes before any impulse purchase",
    "Design and execute a perfect morning routine that sets your day up for success",
];

const DISCIPLINE_READINGS: [&str; 7] = [
    "Read about the compound effect of small daily habits",
    "Study the psychology of habit formation and neural pathways",
    "Learn about willpower depletion and how to manage mental energy",
    "Explore the connection between physical posture and mental discipline",
    "Understand the relationship between delayed gratification and success",
    "Read about advanced self-control techniques and mental models",
    "Study long-term habit maintenance and lifestyle design principles",
];

const FITNESS_HABITS: [&str; 7] = [
    "Complete 20 push-ups and 30-second plank",
    "Take a 15-minute walk and do 10 minutes of stretching",
    "Perform a full-body workout for 20 minutes",
    "Complete 100 bodyweight squats throughout the day",
    "Do a 25-minute HIIT workout session",
    "Complete your longest workout session yet (30+ minutes)",
    "Design and execute your ideal weekly fitness routine",
];

const FITNESS_READINGS: [&str; 7] = [
    "Learn about the immediate benefits of daily movement",
    "Study the science of progressive overload and adaptation",
    "Read about nutrition timing and workout recovery",
    "Explore the connection between exercise and mental clarity",
    "Understand high-intensity training and metabolic benefits",
    "Learn about advanced training techniques and periodization",
    "Study long-term fitness planning and lifestyle integration",
];

/// Muscle group an exercise belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseGroup {
    /// Upper body
    Upper,
    /// Lower body
    Lower,
    /// Core
    Core,
    /// Conditioning
    Conditioning,
}

impl ExerciseGroup {
    /// Every group, in display order.
    pub const ALL: [ExerciseGroup; 4] = [
        ExerciseGroup::Upper,
        ExerciseGroup::Lower,
        ExerciseGroup::Core,
        ExerciseGroup::Conditioning,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseGroup::Upper => "upper",
            ExerciseGroup::Lower => "lower",
            ExerciseGroup::Core => "core",
            ExerciseGroup::Conditioning => "conditioning",
        }
    }

    /// Exercises in this group.
    pub fn exercises(&self) -> &'static [&'static str] {
        match self {
            ExerciseGroup::Upper => &["Push-ups", "Pull-ups", "Pike push-ups", "Tricep dips", "Plank to downward dog"],
            ExerciseGroup::Lower => &["Squats", "Lunges", "Single-leg glute bridges", "Calf raises", "Wall sits"],
            ExerciseGroup::Core => &["Plank", "Mountain climbers", "Russian twists", "Dead bugs", "Bicycle crunches"],
            ExerciseGroup::Conditioning => &["Burpees", "Jumping jacks", "High knees", "Jump squats", "Bear crawls"],
        }
    }
}

/// Theme for `day`.
pub fn day_theme(day: DayNumber) -> &'static DayTheme {
    &THEMES[day.get() as usize - 1]
}

/// Goal-specific habit prompt. Only discipline and fitness carry their own prompts.
pub fn habit_for(goal: GoalCategory, day: DayNumber) -> Option<&'static str> {
    let idx = day.get() as usize - 1;
    match goal {
        GoalCategory::Discipline => Some(DISCIPLINE_HABITS[idx]),
        GoalCategory::Fitness => Some(FITNESS_HABITS[idx]),
        _ => None,
    }
}

/// Goal-specific reading prompt. Only discipline and fitness carry their own prompts.
pub fn reading_for(goal: GoalCategory, day: DayNumber) -> Option<&'static str> {
    let idx = day.get() as usize - 1;
    match goal {
        GoalCategory::Discipline => Some(DISCIPLINE_READINGS[idx]),
        GoalCategory::Fitness => Some(FITNESS_READINGS[idx]),
        _ => None,
    }
}

/// Whether `name` appears anywhere in the exercise catalog.
pub fn is_catalog_exercise(name: &str) -> bool {
    ExerciseGroup::ALL
        .iter()
        .any(|group| group.exercises().contains(&name))
}
