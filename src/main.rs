use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, ReplayArgs};
use config::{Config, OutputFormat};
use heapsched::scheduler::{LookupMode, PriorityScheduler};
use heapsched::trace::{self, Outcome, Report, Script};

fn setup_logging(log_level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("heapsched")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("heapsched.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG, when set, overrides the configured level
    let mut builder = env_logger::Builder::new();
    if let Some(level) = log_level {
        builder.parse_filters(level);
    }
    builder
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => {
            // Default: replay the built-in trace
            handle_demo_command(&ReplayArgs::default(), config)
        }
        Some(Commands::Demo { replay }) => handle_demo_command(replay, config),
        Some(Commands::Run { script, replay }) => handle_run_command(script, replay, config),
    }
}

fn handle_demo_command(args: &ReplayArgs, config: &Config) -> Result<()> {
    info!("Replaying built-in promotion trace");
    replay_and_print(&Script::promotion(), args, config)
}

fn handle_run_command(path: &Path, args: &ReplayArgs, config: &Config) -> Result<()> {
    info!("Replaying script: {}", path.display());
    let script = Script::from_path(path).context(format!("Failed to load script {}", path.display()))?;
    replay_and_print(&script, args, config)
}

fn replay_and_print(script: &Script, args: &ReplayArgs, config: &Config) -> Result<()> {
    let lookup = if args.indexed {
        LookupMode::Indexed
    } else {
        config.scheduler.lookup
    };
    let mut scheduler = PriorityScheduler::with_lookup(lookup, config.scheduler.initial_capacity);

    let report = trace::replay(script, &mut scheduler).context("Replay failed")?;

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &Report) {
    let name = report.name.as_deref().unwrap_or("script");
    println!(
        "{} {} ({} lookup)",
        "Replaying:".green(),
        name.bold(),
        report.lookup
    );

    for step in &report.steps {
        let outcome = match step.outcome {
            Outcome::Enqueued { pending } => format!("{} pending", pending).normal(),
            Outcome::Dequeued { task: Some(task) } => task.to_string().cyan(),
            Outcome::Dequeued { task: None } => "empty".yellow(),
            Outcome::PriorityChanged { found: true } => "updated".normal(),
            Outcome::PriorityChanged { found: false } => "unknown id, ignored".yellow(),
        };
        println!("{:>4}. {:<28} {}", step.number, step.op.to_string(), outcome);
    }

    println!("{} {}", "Pending:".green(), report.pending);
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the configured level is known
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
