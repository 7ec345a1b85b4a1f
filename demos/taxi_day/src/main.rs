//! taxi-day: simulate one day of a taxi fleet and print every event.
//!
//! Each taxi works one shift drawn from the configured categories (night,
//! day, evening by default).  Events from all taxis are merged into a single
//! time-ordered report on stdout; the run stops at the day boundary.
//! Logging goes to stderr.
//!
//! ```text
//! taxi-day --taxis 10 --seed 7 -v
//! taxi-day --config fleet.json --csv ./out --quiet
//! ```

use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::info;

use ts_core::{EventKind, FleetConfig};
use ts_output::{ConsoleWriter, CsvWriter, EventLogObserver, OutputWriter, Tee};
use ts_sim::{NoopObserver, RunSummary, SimBuilder, StopReason};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Number of taxis in the fleet.
    #[arg(long)]
    taxis: Option<usize>,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// End of the simulated day, in hours.
    #[arg(long)]
    day_end: Option<f64>,

    /// Fleet configuration JSON file; the flags above override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write `events.csv` into this directory.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Do not print the event report to stdout.
    #[arg(short, long)]
    quiet: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn set_up_logger(verbose: u8) -> Result<(), fern::InitError> {
    let log_level = match verbose {
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        3.. => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(log_level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<FleetConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => FleetConfig::default(),
    };
    if let Some(taxis) = args.taxis {
        config.taxi_count = taxis;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(day_end) = args.day_end {
        config.day_end_hours = day_end;
    }
    Ok(config)
}

// ── Output ────────────────────────────────────────────────────────────────────

type BoxedWriter = Box<dyn OutputWriter>;

fn open_writer(args: &Args) -> Result<Option<BoxedWriter>> {
    let console = (!args.quiet)
        .then(|| Box::new(ConsoleWriter::new(BufWriter::new(io::stdout()))) as BoxedWriter);

    let csv = match &args.csv {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening CSV output in {}", dir.display()))?;
            Some(Box::new(writer) as BoxedWriter)
        }
        None => None,
    };

    Ok(match (console, csv) {
        (Some(console), Some(csv)) => Some(Box::new(Tee(console, csv)) as BoxedWriter),
        (console, csv) => console.or(csv),
    })
}

fn print_summary(summary: &RunSummary, elapsed_ms: u128) {
    eprintln!();
    eprintln!("Events reported: {}", summary.emitted);
    for kind in EventKind::ALL {
        eprintln!("  {:<12} {}", kind.label(), summary.count(kind));
    }
    match summary.stop {
        StopReason::DayEnded(next) => eprintln!("Stopped at the day boundary (next event at {next})"),
        StopReason::Exhausted => eprintln!("Every shift ended before the day boundary"),
    }
    eprintln!("Run time: {elapsed_ms} ms");
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    set_up_logger(args.verbose)?;

    let config = load_config(&args)?;
    info!(
        "fleet of {} taxis, seed {}, day ends at {}h",
        config.taxi_count, config.seed, config.day_end_hours
    );

    let mut sim = SimBuilder::new(config)?.build()?;

    let t0 = Instant::now();
    let summary = match open_writer(&args)? {
        Some(writer) => {
            let mut obs = EventLogObserver::new(writer);
            let summary = sim.run(&mut obs);
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing event report");
            }
            summary
        }
        None => sim.run(&mut NoopObserver),
    };

    print_summary(&summary, t0.elapsed().as_millis());
    Ok(())
}
