use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use cutscan::genomics::{
    self, create_rng, random_sequence, render_summary, sequence_fingerprint, DnaReport,
    DEFAULT_HEADER, DEFAULT_LENGTH, DEFAULT_LINE_WIDTH, DEFAULT_MAX_DISTANCE,
    DEFAULT_MIN_DISTANCE,
};
use cutscan::{AnalysisConfig, CutSiteAnalysis};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cutscan", about = "Restriction cut-site scanning and DNA utilities")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the complement, reversal and reverse complement of a sequence.
    Complement {
        /// DNA sequence (A/C/G/T, any case).
        sequence: String,
    },
    /// Find cut sites in a FASTA file and pair those within a distance window.
    CutSites {
        /// FASTA file; all records are concatenated.
        fasta: PathBuf,
        /// Recognition site, optionally with a `|` cut marker (e.g. G|AATTC).
        cut_site: String,
        /// Minimum separation between paired sites (inclusive).
        #[arg(long, default_value_t = DEFAULT_MIN_DISTANCE)]
        min_distance: usize,
        /// Maximum separation between paired sites (inclusive).
        #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE)]
        max_distance: usize,
        /// Summary output path.
        #[arg(long, default_value = "results/cutsite_summary.txt")]
        output: PathBuf,
        /// Shard the pair search across threads.
        #[arg(long)]
        parallel: bool,
        /// Worker threads for --parallel (default: one per core).
        #[arg(short, long, requires = "parallel", value_parser = threads_in_range)]
        threads: Option<usize>,
    },
    /// Write a FASTA file holding a uniformly random DNA sequence.
    Generate {
        /// Number of bases to generate.
        #[arg(long, default_value_t = DEFAULT_LENGTH)]
        length: usize,
        /// Bases per FASTA line.
        #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
        line_width: usize,
        /// FASTA header text (without `>`).
        #[arg(long, default_value = DEFAULT_HEADER)]
        header: String,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Output FASTA path.
        #[arg(long, default_value = "data/random_sequence.fasta")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!("Running {}-{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    run_command(cli.command, &mut io::stdout().lock())?;
    info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn run_command<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Complement { sequence } => run_complement(&sequence, out)?,
        Commands::CutSites {
            fasta,
            cut_site,
            min_distance,
            max_distance,
            output,
            parallel,
            threads,
        } => {
            if let Some(threads) = threads {
                init_thread_pool(threads)?;
            }
            let config = AnalysisConfig {
                parallel,
                ..AnalysisConfig::with_window(min_distance, max_distance)?
            };
            run_cut_sites(&fasta, &cut_site, config, &output, out)?
        }
        Commands::Generate {
            length,
            line_width,
            header,
            seed,
            output,
        } => run_generate(length, line_width, &header, seed, &output)?,
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_thread_pool(threads: usize) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("cutscan-{i}"))
        .build_global()
        .context("failed to initialize thread pool")?;
    debug!(threads, "initialized thread pool");
    Ok(())
}

fn threads_in_range(s: &str) -> Result<usize, String> {
    let threads: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a valid thread number"))?;
    if threads >= 1 {
        Ok(threads)
    } else {
        Err("Number of threads must be at least 1".to_string())
    }
}

fn run_complement<W: Write>(sequence: &str, out: &mut W) -> Result<()> {
    let report = DnaReport::from_sequence(sequence.as_bytes())
        .with_context(|| format!("cannot complement '{sequence}'"))?;
    write!(out, "{}", report.render())?;
    Ok(())
}

fn run_cut_sites<W: Write>(
    fasta: &Path,
    cut_site: &str,
    config: AnalysisConfig,
    output: &Path,
    out: &mut W,
) -> Result<()> {
    let analysis = CutSiteAnalysis::new(config);
    let summary = analysis
        .run_fasta(fasta, cut_site)
        .with_context(|| format!("cut-site analysis of {} failed", fasta.display()))?;

    let report = render_summary(&summary)?;
    write!(out, "{report}")?;

    create_parent_dir(output)?;
    fs::write(output, &report)
        .with_context(|| format!("failed to write summary to {}", output.display()))?;
    writeln!(out, "Results saved to {}", output.display())?;
    Ok(())
}

fn run_generate(
    length: usize,
    line_width: usize,
    header: &str,
    seed: Option<u64>,
    output: &Path,
) -> Result<()> {
    let mut rng = create_rng(seed);
    let sequence = random_sequence(&mut rng, length);
    info!(
        length,
        fingerprint = %sequence_fingerprint(&sequence),
        "generated random sequence"
    );

    create_parent_dir(output)?;
    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    genomics::write_fasta(&mut writer, header, &sequence, line_width)
        .with_context(|| format!("failed to write FASTA to {}", output.display()))?;
    info!(path = %output.display(), "wrote FASTA");
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
