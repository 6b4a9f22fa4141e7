use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use cvd_risk::input::batch::run_batch;
use cvd_risk::input::validate::validate_request;
use cvd_risk::input::{load_answers, load_profile, load_region_map, open_maybe_gz};
use cvd_risk::logging::init_logging;
use cvd_risk::model::RegionMap;
use cvd_risk::pipeline::compute_risk_with;
use cvd_risk::pipeline::stage1_region::resolve_region;
use cvd_risk::report::{ReportFormat, render};

#[derive(Debug, Parser)]
#[command(name = "cvd-risk", version, about = "SCORE2-family 10-year cardiovascular risk")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one answer set against one profile.
    Run {
        #[arg(long)]
        answers: PathBuf,
        #[arg(long)]
        profile: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Score a JSON-lines file of {id, profile, answers} records.
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the risk region a country resolves to.
    Region {
        country: String,
        #[arg(long)]
        region_map: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, clap::Args)]
struct CommonArgs {
    /// JSON file overriding the builtin country-to-region mapping.
    #[arg(long)]
    region_map: Option<PathBuf>,
    /// Reference date for deriving age from date_of_birth (default: today).
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run {
            answers,
            profile,
            format,
            out,
            common,
        } => {
            let regions = load_regions(common.region_map.as_deref())?;
            let as_of = resolve_as_of(common.as_of);

            let answers = load_answers(&answers).map_err(|e| e.to_string())?;
            let profile = load_profile(&profile)
                .and_then(|p| p.into_profile(as_of))
                .map_err(|e| e.to_string())?;
            validate_request(&answers, &profile).map_err(|e| e.to_string())?;

            let result =
                compute_risk_with(&answers, &profile, &regions).map_err(|e| e.to_string())?;
            tracing::info!(
                model = result.model_used.id(),
                region = %result.determined_risk_region,
                risk_percent = result.calibrated_10_year_risk_percent,
                "risk computed"
            );

            let rendered = render(&result, format).map_err(|e| e.to_string())?;
            write_output(out.as_deref(), &rendered).map_err(|e| e.to_string())
        }
        Command::Batch { input, out, common } => {
            let regions = load_regions(common.region_map.as_deref())?;
            let as_of = resolve_as_of(common.as_of);
            let reader = open_maybe_gz(&input).map_err(|e| e.to_string())?;
            let writer = open_output(out.as_deref()).map_err(|e| e.to_string())?;
            let summary =
                run_batch(reader, writer, &regions, as_of).map_err(|e| e.to_string())?;
            if summary.failed > 0 {
                tracing::warn!(
                    failed = summary.failed,
                    processed = summary.processed,
                    "some records could not be scored"
                );
            }
            Ok(())
        }
        Command::Region {
            country,
            region_map,
        } => {
            let regions = load_regions(region_map.as_deref())?;
            println!("{}", resolve_region(&country, &regions));
            Ok(())
        }
    }
}

fn load_regions(path: Option<&Path>) -> Result<RegionMap, String> {
    match path {
        Some(path) => load_region_map(path).map_err(|e| e.to_string()),
        None => Ok(RegionMap::builtin()),
    }
}

fn resolve_as_of(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| chrono::Local::now().date_naive())
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn write_output(path: Option<&Path>, content: &str) -> io::Result<()> {
    let mut writer = open_output(path)?;
    writer.write_all(content.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
