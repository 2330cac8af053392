//! Amidakuji CLI — generate a ladder lottery and write it as a PDF.
//!
//! Required flags: `--lines`, `--min-bars`, `--max-bars`, `--output`.
//! Optional: a fixed seed or seed phrase, rung probability, a TOML layout
//! file, a sheet title, and a directory for the JSON/CSV artifacts.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use amidakuji_core::{
    generate, ladder_rng, trace, GeneratorParams, Ladder, Permutation, SeedSource,
    DEFAULT_RUNG_PROBABILITY,
};
use amidakuji_render::{
    compute_layout, render_pdf, save_artifacts, LadderManifest, LayoutConfig, SheetMeta,
};

#[derive(Parser, Debug)]
#[command(
    name = "amidakuji",
    about = "Generate an Amidakuji (ladder lottery) and output it as a PDF"
)]
struct Cli {
    /// Number of vertical lines (integer >= 2).
    #[arg(long, short = 'l', allow_negative_numbers = true)]
    lines: i64,

    /// Minimum number of rows of horizontal bars (integer >= 0).
    #[arg(long = "min-bars", visible_alias = "min", allow_negative_numbers = true)]
    min_bars: i64,

    /// Maximum number of rows of horizontal bars (integer >= 0).
    #[arg(long = "max-bars", visible_alias = "max", allow_negative_numbers = true)]
    max_bars: i64,

    /// Path to the output PDF file. Missing directories are created.
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Seed for a reproducible ladder. Drawn from OS entropy when omitted.
    #[arg(long, conflicts_with = "seed_phrase")]
    seed: Option<u64>,

    /// Derive the seed from a phrase instead of a number.
    #[arg(long)]
    seed_phrase: Option<String>,

    /// Chance that an eligible gap in a row receives a rung.
    #[arg(long, default_value_t = DEFAULT_RUNG_PROBABILITY)]
    rung_probability: f64,

    /// TOML file with page layout overrides.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Title printed above the ladder.
    #[arg(long)]
    title: Option<String>,

    /// Directory for manifest.json and rungs.csv.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short = 'v', default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn seed_source(&self) -> SeedSource {
        match (self.seed, &self.seed_phrase) {
            (Some(seed), _) => SeedSource::Fixed(seed),
            (None, Some(phrase)) => SeedSource::Phrase(phrase.clone()),
            (None, None) => SeedSource::Entropy,
        }
    }
}

/// What a successful run produced.
#[derive(Debug)]
struct RunSummary {
    seed: u64,
    ladder: Ladder,
    permutation: Permutation,
    output: PathBuf,
    artifact_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let summary = run(&cli)?;
    info!(
        "Complete! Saved Amidakuji with {} rows and {} rungs to {}.",
        summary.ladder.row_count(),
        summary.ladder.rung_count(),
        summary.output.display()
    );
    debug!(
        seed = summary.seed,
        permutation = ?summary.permutation.as_slice(),
        "trace result"
    );
    if let Some(dir) = &summary.artifact_dir {
        info!("Artifacts saved to: {}", dir.display());
    }
    Ok(())
}

/// `-v` always means debug; otherwise `RUST_LOG` applies, defaulting to info.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let params = GeneratorParams::from_signed(cli.lines, cli.min_bars, cli.max_bars)?
        .with_rung_probability(cli.rung_probability);
    params.validate()?;

    let layout = load_layout(cli.layout.as_deref(), cli.title.as_deref())?;

    let seed = cli.seed_source().resolve();
    info!(
        "Generating Amidakuji... (lines: {}, bars: {}-{}, seed: {seed})",
        params.line_count, params.min_bars, params.max_bars
    );
    let ladder = generate(&params, &mut ladder_rng(seed))?;

    let uncovered = ladder.uncovered_lines();
    if !uncovered.is_empty() {
        let numbers: Vec<String> = uncovered.iter().map(|l| (l + 1).to_string()).collect();
        warn!(
            "lines {} have no rungs; raise --max-bars or --rung-probability for a livelier draw",
            numbers.join(", ")
        );
    }

    let permutation = trace(&ladder).context("traced ladder failed its consistency check")?;

    info!("Generating PDF... (output: {})", cli.output.display());
    let meta = SheetMeta::for_ladder(&ladder, Some(seed));
    let drawing = compute_layout(&ladder, &permutation, &meta, &layout)?;
    render_pdf(&drawing, &cli.output)
        .with_context(|| format!("failed to write PDF to {}", cli.output.display()))?;

    let artifact_dir = match &cli.manifest {
        Some(dir) => {
            let manifest = LadderManifest::new(&ladder, &permutation, Some(seed));
            Some(save_artifacts(&manifest, dir)?)
        }
        None => None,
    };

    Ok(RunSummary {
        seed,
        ladder,
        permutation,
        output: cli.output.clone(),
        artifact_dir,
    })
}

fn load_layout(path: Option<&Path>, title: Option<&str>) -> Result<LayoutConfig> {
    let mut layout = match path {
        Some(path) => LayoutConfig::from_file(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(title) = title {
        layout.title = Some(title.to_string());
    }
    Ok(layout)
}
