//! Dyvyn CLI - 7-day habit challenge from the terminal.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dyvyn_core::{achievement, content, DayInputs, DayNumber, GoalCategory, ProgressRecord};
use dyvyn_progress::{DayStatus, LoadOrigin, ProgressStore, SaveStatus};
use dyvyn_storage::JsonStorage;
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "dyvyn")]
#[command(about = "Seven days, one habit at a time", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the progress snapshot
    #[arg(short, long, default_value = ".dyvyn")]
    data_dir: std::path::PathBuf,

    /// Log progress events
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new challenge (replaces any existing progress)
    Start {
        /// Your name
        name: String,
        /// discipline, fitness, focus, dopamine or money
        #[arg(long, default_value = "discipline")]
        goal: GoalCategory,
    },
    /// Show the dashboard
    Status,
    /// Show a day's theme and tasks
    Day {
        /// Day number (1-7)
        day: DayNumber,
    },
    /// Save what you did for a day
    Record {
        /// Day number (1-7)
        day: DayNumber,
        /// Reflection on the day
        #[arg(long, default_value = "")]
        reflection: String,
        /// One small win
        #[arg(long, default_value = "")]
        micro_win: String,
        /// The day's habit is done
        #[arg(long)]
        habit_done: bool,
        /// Title of what you read
        #[arg(long, default_value = "")]
        reading_title: String,
        /// Summary of what you read
        #[arg(long, default_value = "")]
        reading_summary: String,
        /// Exercise from the catalog (repeatable)
        #[arg(long = "exercise")]
        exercises: Vec<String>,
        /// Exercise not in the catalog
        #[arg(long)]
        custom_exercise: Option<String>,
    },
    /// Mark a day complete
    Finalize {
        /// Day number (1-7)
        day: DayNumber,
        /// Skip the lock and input checks
        #[arg(long)]
        force: bool,
    },
    /// Time until the next day opens
    Unlock,
    /// Completion statistics
    Stats,
    /// Achievements and share text once all days are done
    Summary,
    /// Erase all progress
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::INFO } else { Level::WARN })
        .init();

    let storage = JsonStorage::new(&cli.data_dir).await?;
    let mut store = ProgressStore::open(storage).await;
    if store.origin() == LoadOrigin::Unavailable {
        eprintln!("warning: saved progress could not be read; showing a fresh challenge");
    }
    info!("Using data directory {}", cli.data_dir.display());

    match cli.command {
        Commands::Start { name, goal } => {
            report(store.start_challenge(name, goal).await);
            let record = store.record();
            println!("Welcome, {}! You've chosen the {} path.", record.name, goal.title());
            println!("Day 1 is open: {}", content::day_theme(DayNumber::FIRST).title);
        }
        Commands::Status => {
            let record = store.record();
            let journey = store.journey();

            println!("Welcome back, {}", record.name);
            println!(
                "{} | Day {} of 7 | {} days completed | {} day streak",
                record.goal.title(),
                record.current_day,
                record.completed_days.len(),
                record.streak,
            );
            println!("Started {}", record.joined_at.format("%Y-%m-%d"));
            println!();
            for row in &journey.days {
                let marker = match row.status {
                    DayStatus::Completed => "DONE",
                    DayStatus::Available => "OPEN",
                    DayStatus::Locked => "LOCKED",
                };
                let current = if row.is_current { " <- current" } else { "" };
                println!("  Day {} {:<22} {}{}", row.day, row.title, marker, current);
            }
            println!();
            println!(
                "Progress {:.0}% | {} days remaining | next unlock: {}",
                journey.progress_percentage,
                journey.days_remaining,
                store.time_until_unlock(),
            );
        }
        Commands::Day { day } => {
            let record = store.record();
            let theme = content::day_theme(day);

            println!("Day {}: {} ({})", day, theme.title, theme.estimated_time);
            println!();
            println!("{}", theme.mindset);
            println!("Focus: {}", theme.focus);
            if let Some(habit) = content::habit_for(record.goal, day) {
                println!("Habit: {}", habit);
            }
            if let Some(reading) = content::reading_for(record.goal, day) {
                println!("Reading: {}", reading);
            }
            println!("Exercises:");
            for group in content::ExerciseGroup::ALL {
                println!("  {:<13} {}", group.label(), group.exercises().join(", "));
            }
            println!();
            if record.is_completed(day) {
                println!("Completed.");
            } else if store.can_access_day(day) {
                println!("Open.");
            } else {
                println!("Locked. Next unlock: {}", store.time_until_unlock());
            }
        }
        Commands::Record {
            day,
            reflection,
            micro_win,
            habit_done,
            reading_title,
            reading_summary,
            exercises,
            custom_exercise,
        } => {
            if !store.can_access_day(day) {
                bail!("Day {} is locked ({})", day, store.time_until_unlock());
            }
            let inputs = DayInputs {
                reflection_text: reflection,
                micro_win,
                habit_completed: habit_done,
                reading_title,
                reading_summary,
                selected_exercises: exercises,
                custom_exercise,
            };
            for name in &inputs.selected_exercises {
                if !content::is_catalog_exercise(name) {
                    warn!("{} is not in the exercise catalog", name);
                }
            }
            let missing = inputs.missing_requirements();
            report(store.record_day_inputs(day, &inputs).await);
            println!("Saved day {}.", day);
            for requirement in missing {
                println!("  still to do: {}", requirement.describe());
            }
        }
        Commands::Finalize { day, force } => {
            if !force {
                if !store.can_access_day(day) {
                    bail!("Day {} is locked ({})", day, store.time_until_unlock());
                }
                let missing = stored_inputs(store.record(), day).missing_requirements();
                if !missing.is_empty() {
                    let list: Vec<_> = missing.iter().map(|r| r.describe()).collect();
                    bail!("Day {} is not ready: {}", day, list.join("; "));
                }
            }
            match store.finalize_day(day).await {
                SaveStatus::Unchanged => println!("Day {} was already complete.", day),
                status => {
                    report(status);
                    println!("Day {} complete! Streak: {}", day, store.record().streak);
                    if store.record().is_finished() {
                        println!("Challenge finished. Run `dyvyn summary`.");
                    }
                }
            }
        }
        Commands::Unlock => {
            println!("{}", store.time_until_unlock());
        }
        Commands::Stats => {
            let stats = store.completion_stats();
            println!("Completion rate:     {:.0}%", stats.completion_rate);
            println!("Avg minutes per day: {:.0}", stats.average_time_per_day);
            println!("Longest streak:      {}", stats.longest_streak);
            println!("Reflections:         {}", stats.total_reflections);
        }
        Commands::Summary => {
            let record = store.record();
            if !record.is_finished() {
                println!(
                    "Finish all 7 days first ({} to go).",
                    7 - record.completed_days.len()
                );
                return Ok(());
            }
            let stats = store.completion_stats();

            println!("Congratulations, {}! {}", record.name, record.goal.mastery_badge());
            println!();
            for a in achievement::achievements(record, &stats) {
                println!("  {} - {}", a.title, a.description);
            }
            println!();
            for day in &record.completed_days {
                let title = content::day_theme(*day).title;
                println!("Day {}: {}", day, title);
                if let Some(win) = record.micro_wins.get(day).filter(|w| !w.is_empty()) {
                    println!("  win: {}", win);
                }
                if let Some(excerpt) = achievement::reflection_excerpt(record, *day) {
                    println!("  {}", excerpt);
                }
            }
            println!();
            println!("{}", achievement::share_text(record, &stats));
        }
        Commands::Reset => {
            report(store.reset().await);
            println!("Progress erased.");
        }
    }

    Ok(())
}

/// Rebuild a day's inputs from what the record holds.
fn stored_inputs(record: &ProgressRecord, day: DayNumber) -> DayInputs {
    let reading = record.reading_completions.get(&day);
    DayInputs {
        reflection_text: record.reflections.get(&day).cloned().unwrap_or_default(),
        micro_win: record.micro_wins.get(&day).cloned().unwrap_or_default(),
        habit_completed: record.habit_completions.get(&day).copied().unwrap_or(false),
        reading_title: reading.map(|r| r.title.clone()).unwrap_or_default(),
        reading_summary: reading.map(|r| r.summary.clone()).unwrap_or_default(),
        selected_exercises: record.exercise_completions.get(&day).cloned().unwrap_or_default(),
        custom_exercise: None,
    }
}

fn report(status: SaveStatus) {
    if let SaveStatus::Failed(e) = status {
        eprintln!("warning: change not saved: {}", e);
    }
}
