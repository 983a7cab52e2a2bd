#![warn(clippy::pedantic)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use setwise_domain as domain;
use setwise_storage::{self as storage, JsonCatalog, log::JsonJournal};

#[derive(Parser)]
#[command(name = "setwise")]
#[command(about = "Weekly strength training planner", long_about = None)]
struct Cli {
    /// Log debug messages
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Keep the most recent log messages in this JSON file
    #[arg(long, global = true)]
    journal: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly plan from an exercise catalog
    Plan(PlanArgs),
    /// Recommend an experience level from a self-assessment
    Assess(AssessArgs),
}

#[derive(Args)]
struct PlanArgs {
    /// Exercise catalog (JSON array)
    #[arg(short, long)]
    catalog: PathBuf,
    /// Profile file; the flags below override its values
    #[arg(short, long)]
    profile: Option<PathBuf>,
    /// Experience level (0 = beginner, 4 = professional)
    #[arg(short, long)]
    level: Option<i32>,
    #[arg(short, long, value_enum)]
    goal: Option<Goal>,
    /// Injured muscle to leave out (repeatable)
    #[arg(long = "injury")]
    injuries: Vec<String>,
    /// Available equipment (repeatable); all equipment if omitted
    #[arg(long)]
    equipment: Vec<String>,
    /// Training days per week
    #[arg(short, long, default_value_t = 4)]
    days: u32,
    /// Minutes per session
    #[arg(short, long, default_value_t = 120)]
    minutes: u32,
    /// Tuning file overriding the planning constants
    #[arg(short, long)]
    tuning: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Write the plan to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
#[allow(clippy::struct_excessive_bools)]
struct AssessArgs {
    /// Years of consistent training
    #[arg(long, default_value_t = 1.0)]
    years: f32,
    #[arg(long, default_value_t = 4)]
    sessions_per_week: u32,
    /// Regularly performs compound lifts
    #[arg(long)]
    compounds: bool,
    /// Comfortable with intense sessions of about two hours
    #[arg(long)]
    two_hours: bool,
    #[arg(long, value_enum, default_value_t = Recovery::Medium)]
    recovery: Recovery,
    /// Maximum consecutive pull-ups
    #[arg(long, default_value_t = 0)]
    pull_ups: u32,
    /// Bench press one-repetition maximum relative to body weight
    #[arg(long, value_enum, default_value_t = BenchRatio::HalfToThreeQuarters)]
    bench_ratio: BenchRatio,
    /// Average weekly sets per major muscle
    #[arg(long, value_enum, default_value_t = WeeklySets::SixToTen)]
    weekly_sets: WeeklySets,
    #[arg(long)]
    periodization: bool,
    /// Strength or volume development over the last three months
    #[arg(long, value_enum, default_value_t = Progress::Improved)]
    progress: Progress,
    #[arg(long)]
    gym: bool,
    /// Updates the routine about every three months
    #[arg(long)]
    quarterly: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
}

impl From<Goal> for domain::Goal {
    fn from(value: Goal) -> Self {
        match value {
            Goal::Strength => domain::Goal::Strength,
            Goal::Hypertrophy => domain::Goal::Hypertrophy,
            Goal::Endurance => domain::Goal::Endurance,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Recovery {
    Low,
    Medium,
    High,
}

impl From<Recovery> for domain::Recovery {
    fn from(value: Recovery) -> Self {
        match value {
            Recovery::Low => domain::Recovery::Low,
            Recovery::Medium => domain::Recovery::Medium,
            Recovery::High => domain::Recovery::High,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BenchRatio {
    #[value(name = "<0.5")]
    BelowHalf,
    #[value(name = "0.5-0.75")]
    HalfToThreeQuarters,
    #[value(name = "0.75-1.0")]
    ThreeQuartersToOne,
    #[value(name = ">=1.0")]
    OneOrMore,
}

impl From<BenchRatio> for domain::BenchRatio {
    fn from(value: BenchRatio) -> Self {
        match value {
            BenchRatio::BelowHalf => domain::BenchRatio::BelowHalf,
            BenchRatio::HalfToThreeQuarters => domain::BenchRatio::HalfToThreeQuarters,
            BenchRatio::ThreeQuartersToOne => domain::BenchRatio::ThreeQuartersToOne,
            BenchRatio::OneOrMore => domain::BenchRatio::OneOrMore,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WeeklySets {
    #[value(name = "<6")]
    BelowSix,
    #[value(name = "6-10")]
    SixToTen,
    #[value(name = "11-15")]
    ElevenToFifteen,
    #[value(name = ">15")]
    AboveFifteen,
}

impl From<WeeklySets> for domain::WeeklySets {
    fn from(value: WeeklySets) -> Self {
        match value {
            WeeklySets::BelowSix => domain::WeeklySets::BelowSix,
            WeeklySets::SixToTen => domain::WeeklySets::SixToTen,
            WeeklySets::ElevenToFifteen => domain::WeeklySets::ElevenToFifteen,
            WeeklySets::AboveFifteen => domain::WeeklySets::AboveFifteen,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Progress {
    Improved,
    Same,
    Worse,
}

impl From<Progress> for domain::Progress {
    fn from(value: Progress) -> Self {
        match value {
            Progress::Improved => domain::Progress::Improved,
            Progress::Same => domain::Progress::Same,
            Progress::Worse => domain::Progress::Worse,
        }
    }
}

impl PlanArgs {
    fn profile(&self, base: domain::Profile) -> Result<domain::Profile> {
        let mut profile = base;
        if let Some(level) = self.level {
            profile.level = domain::Level::from(level);
        }
        if let Some(goal) = self.goal {
            profile.goal = goal.into();
        }
        for injury in &self.injuries {
            profile.injuries.insert(
                domain::Muscle::new(injury).with_context(|| format!("invalid injury \"{injury}\""))?,
            );
        }
        if !self.equipment.is_empty() {
            profile.equipment = Some(
                self.equipment
                    .iter()
                    .map(|e| {
                        domain::Equipment::new(e)
                            .with_context(|| format!("invalid equipment \"{e}\""))
                    })
                    .collect::<Result<_>>()?,
            );
        }
        Ok(profile)
    }
}

impl From<&AssessArgs> for domain::Questionnaire {
    fn from(value: &AssessArgs) -> Self {
        Self {
            years: value.years,
            sessions_per_week: value.sessions_per_week,
            uses_compounds: value.compounds,
            can_train_two_hours: value.two_hours,
            recovery: value.recovery.into(),
            pull_ups: value.pull_ups,
            bench_ratio: value.bench_ratio.into(),
            weekly_sets: value.weekly_sets.into(),
            plans_periodization: value.periodization,
            recent_progress: value.progress.into(),
            trains_in_gym: value.gym,
            updates_quarterly: value.quarterly,
        }
    }
}

fn plan(args: &PlanArgs) -> Result<()> {
    let base = match &args.profile {
        Some(path) => storage::read_profile(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?,
        None => domain::Profile::default(),
    };
    let profile = args.profile(base)?;
    let tuning = match &args.tuning {
        Some(path) => storage::read_tuning(path)
            .with_context(|| format!("failed to read tuning {}", path.display()))?,
        None => domain::Tuning::default(),
    };

    let service = domain::Service::new(JsonCatalog::open(&args.catalog));
    let plan = service
        .generate_plan(&profile, args.days, args.minutes, &tuning)
        .context("failed to generate plan")?;

    match (args.format, &args.output) {
        (Format::Text, None) => print!("{plan}"),
        (Format::Text, Some(path)) => std::fs::write(path, plan.to_string())
            .with_context(|| format!("failed to write {}", path.display()))?,
        (Format::Json, None) => println!("{}", storage::to_json(&plan)?),
        (Format::Json, Some(path)) => storage::write_plan(&plan, path)
            .with_context(|| format!("failed to write {}", path.display()))?,
    }
    Ok(())
}

fn assess(args: &AssessArgs) {
    let assessment = domain::Questionnaire::from(args).assess();
    for (question, score) in &assessment.scores {
        println!("{question:<20} {score:>2}");
    }
    println!("{:<20} {:>2}", "total", assessment.total);
    println!("Recommended level: {}", assessment.level);
}

fn init_logging(verbose: bool, journal: Option<&Path>) -> Result<()> {
    let journal = journal.map(|path| {
        Arc::new(Mutex::new(JsonJournal::new(path))) as Arc<Mutex<dyn storage::log::Repository>>
    });
    let max_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    storage::log::init(journal, max_level)
        .map_err(|err| anyhow::anyhow!("failed to initialize logger: {err}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.journal.as_deref())?;

    match &cli.command {
        Commands::Plan(args) => plan(args)?,
        Commands::Assess(args) => assess(args),
    }
    Ok(())
}
