//! Evaluate a bimodal or gshare predictor against a text branch trace.

use bpsim::*;
use clap::{Parser, Subcommand, ValueEnum};
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bpsim", version, about = "Branch predictor trace simulator")]
struct Args {
    /// Also print the N most common branches with a hit rate of at most 55%
    #[arg(long, global = true, value_name = "N")]
    branches: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a bimodal predictor with 2^M counters
    Bimodal {
        m: usize,
        trace: PathBuf,
    },
    /// Simulate a gshare predictor with 2^M counters and N bits of history
    Gshare {
        m: usize,
        n: usize,
        trace: PathBuf,
    },
    /// Report misprediction rates for a range of table sizes
    Sweep {
        #[arg(value_enum)]
        kind: Kind,
        trace: PathBuf,
        #[arg(long, default_value_t = 7)]
        min_m: usize,
        #[arg(long, default_value_t = 12)]
        max_m: usize,
        /// History bits for gshare (clamped to M, defaults to M)
        #[arg(long, value_name = "N")]
        history_bits: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Bimodal,
    Gshare,
}

fn trace_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn simulate(cfg: PredictorConfig, path: &Path, branches: Option<usize>)
    -> Result<Simulator>
{
    let mut sim = Simulator::new(cfg)?;
    if branches.is_some() {
        sim = sim.with_branch_stats();
    }
    let trace = TraceReader::from_file(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    info!("replaying {} through {} (m={}, n={})",
        path.display(), cfg.kind, cfg.index_bits, cfg.history_bits);
    sim.try_run(trace)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(sim)
}

fn print_low_rate_branches(stat: &BranchStats, n: usize) {
    println!("BRANCHES");
    println!("unique branches:\t\t{}", stat.num_unique_branches());
    println!("always taken:\t\t\t{}", stat.num_always_taken());
    println!("never taken:\t\t\t{}", stat.num_never_taken());
    for (pc, data) in stat.get_low_rate_branches(n, 100, 0.55) {
        println!("{:016x} {:8}/{:8} ({:.4}) H={:.2} {}",
            pc, data.hits, data.occ, data.hit_rate(),
            data.shannon_entropy(), data.recent_pattern(64)
        );
    }
}

fn run_single(cfg: PredictorConfig, path: &Path, branches: Option<usize>)
    -> Result<()>
{
    let sim = simulate(cfg, path, branches)?;
    if let (Some(n), Some(stat)) = (branches, sim.branch_stats()) {
        print_low_rate_branches(stat, n);
    }
    print!("{}", sim.into_report().with_trace_name(trace_name(path)));
    Ok(())
}

fn run_sweep(kind: Kind, path: &Path, min_m: usize, max_m: usize,
    history_bits: Option<usize>) -> Result<()>
{
    anyhow::ensure!(min_m <= max_m, "empty range m = {}..={}", min_m, max_m);
    println!("m\tn\tpredictions\tmispredictions\trate");
    for m in min_m..=max_m {
        let cfg = match kind {
            Kind::Bimodal => PredictorConfig::bimodal(m),
            Kind::Gshare => {
                PredictorConfig::gshare(m, history_bits.unwrap_or(m).min(m))
            },
        };
        let sim = simulate(cfg, path, None)?;
        let stat = sim.stats();
        let rate = match stat.misprediction_rate() {
            Some(rate) => format!("{:.2}%", rate),
            None => "undefined".to_string(),
        };
        println!("{}\t{}\t{}\t{}\t{}", m, cfg.history_bits,
            stat.predictions, stat.mispredictions, rate);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Bimodal { m, trace } => {
            run_single(PredictorConfig::bimodal(m), &trace, args.branches)
        },
        Command::Gshare { m, n, trace } => {
            run_single(PredictorConfig::gshare(m, n), &trace, args.branches)
        },
        Command::Sweep { kind, trace, min_m, max_m, history_bits } => {
            run_sweep(kind, &trace, min_m, max_m, history_bits)
        },
    }
}
