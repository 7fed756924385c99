#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod replay;

use bootstrap::{AppConfig, init_logging};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nbbang_application::{MealService, ParticipantDirectory};
use nbbang_domain::{DateRange, MealRecord, aggregate};
use nbbang_infrastructure::{InMemoryMealRepository, MealLog, SystemClock, UuidIdGenerator};
use nbbang_presentation::{Labels, SettlementPresenter, StatisticsPresenter};
use std::{borrow::Cow, path::PathBuf, process};

type CliResult<T> = Result<T, Cow<'static, str>>;

#[derive(Parser)]
#[command(name = "nbbang", about = "Replay a lunch meal log and print settlements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Meals of one day, each with its settlement, then the day total
    Day { log: PathBuf, date: NaiveDate },
    /// Daily and per-participant totals between two dates, inclusive
    Range {
        log: PathBuf,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Whole-history statistics of the group
    Stats { log: PathBuf },
}

impl Commands {
    fn log_path(&self) -> &PathBuf {
        match self {
            Commands::Day { log, .. } | Commands::Range { log, .. } | Commands::Stats { log } => {
                log
            }
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging();

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    let log = MealLog::load(cli.command.log_path()).map_err(|err| err.to_string())?;
    let directory = log.directory();

    let (repository, ids, clock) = (InMemoryMealRepository::new(), UuidIdGenerator, SystemClock);
    let service = MealService::new(&repository, &ids, &clock).with_policy(config.policy);

    let rejections =
        replay::replay_log(&log, &service, &directory).map_err(|err| err.to_string())?;
    for rejection in &rejections {
        eprintln!("Skipped {rejection}");
    }

    let output = match cli.command {
        Commands::Day { date, .. } => {
            let meals = service
                .meals_on(&log.group, date)
                .map_err(|err| err.to_string())?;
            render_day(&meals, &directory)
        }
        Commands::Range { start, end, .. } => {
            let range = DateRange::new(start, end)
                .ok_or_else(|| format!("Start date {start} is after end date {end}"))?;
            let meals = service
                .meals_between(&log.group, range)
                .map_err(|err| err.to_string())?;
            render_range(range, &meals, &directory)
        }
        Commands::Stats { .. } => {
            let report = service
                .group_statistics(&log.group, &log.current_roster())
                .map_err(|err| err.to_string())?;
            let history = service
                .group_history(&log.group)
                .map_err(|err| err.to_string())?;
            let snapshots =
                replay::rosters(history.iter().map(|meal| meal.participants.as_slice()));
            let labels = Labels::new(&directory).with_roster(&snapshots);
            StatisticsPresenter::render(&report, &labels)
        }
    };

    print!("{output}");
    Ok(())
}

fn render_day(meals: &[MealRecord], directory: &dyn ParticipantDirectory) -> String {
    let mut text = String::new();
    for meal in meals {
        text.push_str(&SettlementPresenter::render_meal(meal, directory).to_text());
        text.push('\n');
    }
    let snapshots = replay::rosters(meals.iter().map(|meal| meal.participants.as_slice()));
    let labels = Labels::new(directory).with_roster(&snapshots);
    text.push_str(&SettlementPresenter::render_aggregate(&aggregate(meals), &labels));
    text
}

fn render_range(
    range: DateRange,
    meals: &[MealRecord],
    directory: &dyn ParticipantDirectory,
) -> String {
    let snapshots = replay::rosters(meals.iter().map(|meal| meal.participants.as_slice()));
    let labels = Labels::new(directory).with_roster(&snapshots);
    let summary = aggregate(meals);
    let mut text = format!("{} ~ {}\n", range.start, range.end);
    if summary.meal_count() > 0 {
        text.push_str(&SettlementPresenter::build_daily_table(&summary));
        text.push('\n');
    }
    text.push_str(&SettlementPresenter::render_aggregate(&summary, &labels));
    text
}
