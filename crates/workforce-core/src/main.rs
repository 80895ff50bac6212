//! Workforce Simulation
//!
//! Runs the automation/labor-market model for a fixed number of rounds and
//! writes a JSON report with per-round metrics and a short analysis.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use workforce_core::config::{Config, ConfigError, DEFAULT_TUNING_PATH};
use workforce_core::output::{format_analysis, scenario_report, write_report, ReportError, REPORT_OUTPUT_PATH};
use workforce_core::{ModelError, Policy, RunSetup, Scenario, ScenarioSuite};
use workforce_records::Report;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "workforce_sim")]
#[command(about = "An agent-based simulation of labor markets under automation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of rounds to simulate
    #[arg(long, global = true)]
    rounds: Option<u64>,

    /// Tuning file with rule constants and run defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(long, global = true, default_value = REPORT_OUTPUT_PATH)]
    output: PathBuf,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "workforce_core=info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single model with explicit parameters
    Run {
        /// Number of workers
        #[arg(long)]
        workers: Option<usize>,

        /// Number of corporations
        #[arg(long)]
        corporations: Option<usize>,

        /// Initial automation level
        #[arg(long)]
        automation_level: Option<f64>,

        /// Override every worker's adaptability
        #[arg(long)]
        adaptability: Option<f64>,

        /// Override the government's starting policy
        #[arg(long)]
        policy: Option<Policy>,
    },
    /// Run a built-in scenario suite
    Scenarios {
        #[arg(long, value_enum, default_value_t = ScenarioSuite::Automation)]
        suite: ScenarioSuite,
    },
    /// Print the default tuning file
    InitConfig,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(DEFAULT_TUNING_PATH),
    };

    let mut setup = RunSetup {
        num_workers: config.simulation.num_workers,
        num_corporations: config.simulation.num_corporations,
        rounds: args.rounds.unwrap_or(config.simulation.rounds),
        seed: args.seed.unwrap_or(config.simulation.seed),
        rules: config.rules.clone(),
    };

    let scenarios = match args.command {
        Command::InitConfig => {
            print!("{}", config.to_toml()?);
            return Ok(());
        }
        Command::Run {
            workers,
            corporations,
            automation_level,
            adaptability,
            policy,
        } => {
            setup.num_workers = workers.unwrap_or(setup.num_workers);
            setup.num_corporations = corporations.unwrap_or(setup.num_corporations);
            let mut scenario = Scenario::new(
                "Custom",
                "Parameters given on the command line",
                automation_level.unwrap_or(config.simulation.automation_level),
            );
            scenario.overrides.worker_adaptability = adaptability;
            scenario.overrides.government_policy = policy;
            vec![scenario]
        }
        Command::Scenarios { suite } => suite.scenarios(),
    };

    println!("Workforce Simulation");
    println!("====================");
    println!("Seed: {}", setup.seed);
    println!("Rounds: {}", setup.rounds);
    println!("Workers: {}", setup.num_workers);
    println!("Corporations: {}", setup.num_corporations);
    println!();

    let mut report = Report::new();
    for scenario in &scenarios {
        println!("Running scenario: {} ({})", scenario.name, scenario.description);
        let series = scenario.run(&setup)?;
        let entry = scenario_report(scenario, &setup, series)?;
        println!("{}", format_analysis(&entry.name, &entry.analysis));
        println!();
        report.push(entry);
    }

    write_report(&report, &args.output)?;
    println!("Simulation complete. Report written to {}", args.output.display());
    Ok(())
}
