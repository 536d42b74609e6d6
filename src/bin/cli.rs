//! Matrícula Web harvester CLI
//!
//! Prints harvested records as JSON on stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mweb::{
    Harvester,
    error::Result,
    models::{AcademicLevel, Config},
    pipeline,
    services::DEFAULT_DEPARTMENT,
};
use serde::Serialize;

/// mweb - Matrícula Web offering harvester
#[derive(Parser, Debug)]
#[command(name = "mweb", version, about = "Harvests course offerings from Matrícula Web")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "mweb.toml")]
    config: PathBuf,

    /// Academic level: graduacao or posgraduacao
    #[arg(short, long, global = true, default_value = "graduacao")]
    level: AcademicLevel,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List departments with offerings
    Departments {
        /// Regular expression matched against the department code
        #[arg(long)]
        filter: Option<String>,
    },

    /// List courses offered by a department
    Courses {
        #[arg(short, long, default_value = DEFAULT_DEPARTMENT)]
        department: String,
    },

    /// Show seats requested beyond capacity for a course
    Waitlist {
        course: String,

        /// Regular expression matched against the section label
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show the prerequisite rule of a course
    Prerequisites { course: String },

    /// Show sections with enrolled students for a course
    Sections { course: String },

    /// Harvest every course of a department
    Snapshot {
        #[arg(short, long, default_value = DEFAULT_DEPARTMENT)]
        department: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config);
    init_logging(cli.verbose, &config.logging.level);

    if let Command::Validate = cli.command {
        log::info!("Validating configuration...");
        if let Err(e) = config.validate() {
            log::error!("Config validation failed: {}", e);
            return Err(e);
        }
        log::info!("✓ Config OK ({})", config.portal.base_url);
        return Ok(());
    }

    let harvester = Harvester::from_config(&config)?;
    let level = cli.level;

    match cli.command {
        Command::Departments { filter } => {
            print_json(&harvester.departments(level, filter.as_deref()).await)?
        }
        Command::Courses { department } => {
            print_json(&harvester.courses(&department, level).await)?
        }
        Command::Waitlist { course, filter } => {
            print_json(&harvester.waitlist(&course, filter.as_deref(), level).await)?
        }
        Command::Prerequisites { course } => {
            let rule = harvester.prerequisites(&course, level).await;
            if !rule.is_empty() {
                log::info!("{course}: {rule}");
            }
            print_json(&rule)?
        }
        Command::Sections { course } => {
            print_json(&harvester.sections(&course, level).await)?
        }
        Command::Snapshot { department } => {
            let snapshot =
                pipeline::run_snapshot(&harvester, &config.crawler, &department, level).await;
            print_json(&snapshot)?
        }
        Command::Validate => {}
    }

    Ok(())
}
