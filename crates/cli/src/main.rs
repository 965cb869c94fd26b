//! Page replacement simulator CLI.
//!
//! This binary is the single entry point for trace replays. It performs:
//! 1. **Configuration:** Flags or a JSON config file select the policy, frame
//!    count, page size, and Random seed.
//! 2. **Trace loading:** Reads one decimal address per line and derives page
//!    numbers by dividing out the page size.
//! 3. **Replay:** Drives the simulator over the full trace and reports the
//!    fault count, as a statistics banner or as JSON.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesim_core::config::{PolicyKind, SimConfig};
use pagesim_core::sim::{load_trace, PagingSimulator};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    version,
    about = "Simulate virtual-memory page replacement algorithms",
    long_about = "Replay an address trace against a page replacement policy and report the fault count.\n\nThe trace file holds one decimal address per line; page numbers are derived by integer-dividing each address by the page size.\n\nExamples:\n  pagesim FIFO trace.txt -n 4\n  pagesim OPT trace.txt -n 3 -s 4096\n  pagesim Random trace.txt -n 8 --seed 7 --json\n  pagesim LRU trace.txt --config sim.json"
)]
struct Cli {
    /// Replacement algorithm: FIFO, LRU, Random, or OPT.
    algorithm: String,

    /// Trace file: one decimal address per line.
    trace: PathBuf,

    /// Number of physical frames.
    #[arg(short = 'n', long, required_unless_present = "config")]
    num_frames: Option<usize>,

    /// Page size used to derive page numbers from addresses.
    #[arg(short = 's', long)]
    page_size: Option<u64>,

    /// Seed for the Random policy (ignored by the others).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file; the algorithm argument and explicit flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit statistics as JSON instead of the plain-text banner.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli);

    let trace = load_trace(&cli.trace, config.page_size).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let mut pager = PagingSimulator::from_config(&config, Some(&trace)).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    for &page in &trace {
        let frame = pager.access(page);
        assert!(
            pager.frame_contents()[frame] == Some(page),
            "page {page} not resident in frame {frame} after access"
        );
    }

    if cli.json {
        match serde_json::to_string_pretty(pager.stats()) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("error: failed to encode statistics: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("total page faults: {}", pager.fault_count());
        pager.stats().print();
    }
}

/// Assembles the run configuration from the config file (if any) and flags.
///
/// Flags always win over file values; the positional algorithm always wins
/// over the file's policy. Exits the process on an unusable configuration.
fn build_config(cli: &Cli) -> SimConfig {
    let policy = PolicyKind::from_str(&cli.algorithm).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("error: failed to read config {}: {e}", path.display());
                process::exit(1);
            });
            serde_json::from_str::<SimConfig>(&text).unwrap_or_else(|e| {
                eprintln!("error: invalid config {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => SimConfig::default_for(policy, 0),
    };

    config.policy = policy;
    if let Some(n) = cli.num_frames {
        config.num_frames = n;
    }
    if let Some(s) = cli.page_size {
        config.page_size = s;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        process::exit(1);
    }
    config
}
