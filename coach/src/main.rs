//! Fitness Coach command-line front end
//!
//! Usage:
//! ```bash
//! # Weekly workout plan and daily diet plan as JSON
//! fitness-coach recommend --profile profile.json --program program.json --intake today.json
//!
//! # Log a finished program day
//! fitness-coach complete-workout --program program.json --week 1 --day 3 --profile profile.json
//!
//! # Freeze today's intake into the nutrition history
//! fitness-coach log-intake --intake today.json
//!
//! # Inspect or reset stored history
//! fitness-coach history workouts
//! fitness-coach clear-history
//! ```
//!
//! JSON goes to stdout, logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use fitness_coach::config::AppConfig;
use fitness_coach::error::{AppError, AppResult};
use fitness_coach::services::coaching::{CoachingService, HistoryKind};
use fitness_coach::state::AppState;
use fitness_coach_shared::{ActiveWorkoutProgram, TodayIntake, UserProfile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "fitness-coach",
    about = "Rule-based workout and diet coach",
    long_about = "Builds weekly workout and daily diet recommendations from your profile, program and logged history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// History directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print a recommendation built from stored history
    Recommend {
        /// User profile JSON
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Active workout program JSON
        #[arg(long)]
        program: Option<PathBuf>,
        /// Today's intake JSON
        #[arg(long)]
        intake: Option<PathBuf>,
    },
    /// Log a finished program day as a workout session
    CompleteWorkout {
        #[arg(long)]
        program: PathBuf,
        #[arg(long)]
        week: i32,
        #[arg(long)]
        day: i32,
        /// Profile JSON, used for body weight
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Log today's intake into the nutrition history
    LogIntake {
        #[arg(long)]
        intake: PathBuf,
    },
    /// Print stored history
    History {
        #[arg(value_enum)]
        kind: HistoryArg,
    },
    /// Remove stored history
    ClearHistory {
        #[arg(value_enum)]
        kind: Option<HistoryArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum HistoryArg {
    Workouts,
    Nutrition,
}

impl From<HistoryArg> for HistoryKind {
    fn from(arg: HistoryArg) -> Self {
        match arg {
            HistoryArg::Workouts => HistoryKind::Workouts,
            HistoryArg::Nutrition => HistoryKind::Nutrition,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // tracing is not up yet
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::from(err.exit_code() as u8);
        }
    };
    init_tracing(&config, cli.verbose);

    let config = match &cli.data_dir {
        Some(dir) => config.with_data_dir(dir.to_string_lossy()),
        None => config,
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.storage.data_dir,
        "Starting Fitness Coach"
    );

    let state = AppState::new(config);
    match run(&state, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

async fn run(state: &AppState, command: Command) -> AppResult<()> {
    match command {
        Command::Recommend {
            profile,
            program,
            intake,
        } => {
            let profile: Option<UserProfile> = read_optional(profile.as_deref()).await?;
            let program: Option<ActiveWorkoutProgram> = read_optional(program.as_deref()).await?;
            let intake: Option<TodayIntake> = read_optional(intake.as_deref()).await?;

            let recommendation = CoachingService::recommend(
                state,
                profile.as_ref(),
                program.as_ref(),
                intake.as_ref(),
            )
            .await?;
            print_json(&recommendation)
        }
        Command::CompleteWorkout {
            program,
            week,
            day,
            profile,
        } => {
            let program: ActiveWorkoutProgram = read_json(&program).await?;
            let profile: Option<UserProfile> = read_optional(profile.as_deref()).await?;
            let weight = profile.and_then(|p| p.weight_kg);

            let session =
                CoachingService::complete_workout(state, &program, week, day, weight, Utc::now())
                    .await?;
            print_json(&session)
        }
        Command::LogIntake { intake } => {
            let intake: TodayIntake = read_json(&intake).await?;
            let entry = CoachingService::log_daily_intake(state, &intake, Utc::now()).await?;
            print_json(&entry)
        }
        Command::History { kind } => match kind {
            HistoryArg::Workouts => print_json(&CoachingService::workout_history(state).await),
            HistoryArg::Nutrition => print_json(&CoachingService::nutrition_history(state).await),
        },
        Command::ClearHistory { kind } => {
            CoachingService::clear_history(state, kind.map(HistoryKind::from)).await
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(format!("{} does not exist", path.display()))
        } else {
            AppError::Io(e)
        }
    })?;
    Ok(serde_json::from_str(&raw)?)
}

async fn read_optional<T: DeserializeOwned>(path: Option<&Path>) -> AppResult<Option<T>> {
    match path {
        Some(path) => Ok(Some(read_json(path).await?)),
        None => Ok(None),
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(config: &AppConfig, verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "fitness_coach=debug".into()
        } else {
            config.logging.default_filter.as_str().into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() || config.logging.json {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
