use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::debug;

use student_ldif::{ConsoleReport, builtin_roster, generate_all_with, load_roster};

/// Output directory used when none is given, next to the scripts directory
const DEFAULT_OUTPUT_DIR: &str = "../user-ad/students/";

/// Generate per-class LDIF files with student accounts
#[derive(Parser, Debug)]
#[command(name = "student_ldif", version)]
struct Cli {
    /// Directory the class-*.ldif files are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Roster file (.toml, .yaml, .yml or .json) used instead of the built-in class lists
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let roster = match &cli.roster {
        Some(path) => load_roster(path)?,
        None => builtin_roster(),
    };

    let mut console = ConsoleReport::new(io::stdout().lock());
    console.banner(&roster)?;

    let summary = generate_all_with(&roster, &cli.output_dir, |report| console.class_written(report))?;

    console.summary(&roster, &summary)?;
    Ok(())
}
