//! smd-footprint-gen: KiCad footprint libraries for chip capacitors and chip inductors
//!
//! Writes the footprint libraries, packs test boards for proofing and lists
//! the part catalogs.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use smd_footprint_gen::batch::{self, BatchReport};
use smd_footprint_gen::config::{self, Config};
use smd_footprint_gen::error::GenerateError;
use smd_footprint_gen::footprint::{PartFamily, SolderProcess};
use smd_footprint_gen::kicad::{self, DirectorySource};

/// Generator for KiCad chip capacitor and chip inductor footprints.
///
/// Footprints are derived from Kemet and Murata land pattern tables, one
/// per soldering process.
#[derive(Parser, Debug)]
#[command(name = "smd-footprint-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Directory the libraries are written to (overrides the config)
    #[arg(short, long, global = true, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write all footprint libraries
    Generate {
        /// Write a JSON report of written, skipped and unresolved footprints
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Pack library footprints onto a test board template
    Board {
        /// Part family, selects the board layout
        #[arg(long, value_enum)]
        family: FamilyArg,

        /// Board template with `@<library>.pretty` lines
        #[arg(long, value_name = "FILE")]
        template: PathBuf,

        /// Board file to write
        #[arg(long, value_name = "FILE")]
        output: PathBuf,

        /// Write the libraries first and place exactly the footprints written
        #[arg(long)]
        generate: bool,
    },

    /// List the parts of every library
    List {
        /// Only list one family
        #[arg(long, value_enum)]
        family: Option<FamilyArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FamilyArg {
    Capacitor,
    Inductor,
}

impl From<FamilyArg> for PartFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Capacitor => Self::Capacitor,
            FamilyArg::Inductor => Self::Inductor,
        }
    }
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn write_report(report: &BatchReport, path: &Path) -> Result<(), GenerateError> {
    let json = serde_json::to_string_pretty(report).map_err(|e| GenerateError::Report {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    std::fs::write(path, json).map_err(|e| GenerateError::Report {
        path: path.to_path_buf(),
        source: e,
    })
}

fn run_generate(cfg: &Config, report_path: Option<&Path>) -> Result<(), GenerateError> {
    let report = batch::run(cfg)?;

    info!(
        output_dir = %cfg.output_dir.display(),
        written = report.written_count(),
        skipped = report.skipped_count(),
        "Generation finished"
    );

    if let Some(path) = report_path {
        write_report(&report, path)?;
    }
    Ok(())
}

fn run_board(
    cfg: &Config,
    family: PartFamily,
    template: &Path,
    output: &Path,
    generate: bool,
) -> Result<(), GenerateError> {
    let layout = cfg.board_layout(family);
    if generate {
        let report = batch::run(cfg)?;
        let source = report.footprint_source(&cfg.output_dir);
        kicad::pack_file(template, output, layout, &source)?;
    } else {
        kicad::pack_file(template, output, layout, &DirectorySource::beside(template))?;
    }
    Ok(())
}

fn run_list(cfg: &Config, family: Option<PartFamily>) -> Result<(), GenerateError> {
    let jobs = batch::load_jobs(cfg)?;

    for job in jobs
        .iter()
        .filter(|job| family.map_or(true, |f| f == job.catalog.family))
    {
        println!("{} ({}, {} parts)", job.name, job.catalog.family, job.catalog.len());
        for part in job.catalog.iter() {
            let processes: Vec<&str> = SolderProcess::ALL
                .iter()
                .filter(|p| part.pads(**p).is_some())
                .map(SolderProcess::name)
                .collect();
            println!(
                "  {:<24} {:>5} x {:<5} {}",
                part.id,
                part.body_length,
                part.body_width,
                processes.join(" ")
            );
        }
    }
    Ok(())
}

/// Entry point for smd-footprint-gen.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let mut cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(dir) = args.output_dir {
        cfg.output_dir = dir;
    }

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting smd-footprint-gen");

    let result = match &args.command {
        Command::Generate { report } => run_generate(&cfg, report.as_deref()),
        Command::Board {
            family,
            template,
            output,
            generate,
        } => run_board(&cfg, (*family).into(), template, output, *generate),
        Command::List { family } => run_list(&cfg, family.map(Into::into)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}
