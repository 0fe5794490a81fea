#![warn(missing_docs)]
//! Cosbench CLI Library
//!
//! Shared infrastructure for the three benchmark binaries. Each binary wires
//! one backend into the same run path: resolve settings, generate the input
//! array, time a single backend invocation, print the report.
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     cosbench_cli::run_vectorized()
//! }
//! ```

mod config;

pub use config::{CosConfig, InputConfig, NativeConfig, OutputConfig};

use clap::Parser;
use cosbench_backends::{DeviceBackend, NativeLibrary, VectorizedBackend, SAMPLE_ITEMS};
use cosbench_core::{pin_to_cpu, run_single_shot, sequential_floats, ComputeBackend};
use cosbench_report::{format_pairs, format_summary};
use std::path::PathBuf;

/// Command-line arguments shared by every benchmark binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "Cosbench - single-shot cosine benchmarks")]
pub struct Cli {
    /// Number of sequential floats to generate
    #[arg(long)]
    pub items: Option<u64>,

    /// Print the input/output pair table and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Pin the process to a CPU core before measuring
    #[arg(long)]
    pub pin: Option<usize>,

    /// Path to the pre-built shared library (native backend only)
    #[arg(long)]
    pub library: Option<PathBuf>,
}

/// Run parameters after layering: built-in defaults ← cosbench.toml ← CLI flags.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Configured item count; this is what the summary line reports.
    pub items: u64,
    /// Whether to print the pair table.
    pub verbose: bool,
    /// CPU core to pin to before measuring, if any.
    pub pin: Option<usize>,
    /// Shared-library path for the native backend.
    pub library: PathBuf,
}

/// Layer CLI flags over the discovered configuration.
pub fn resolve_settings(cli: &Cli, config: &CosConfig) -> RunSettings {
    RunSettings {
        items: cli.items.unwrap_or(config.input.items),
        verbose: cli.verbose || config.output.verbose,
        pin: cli.pin,
        library: cli
            .library
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.native.library)),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "cosbench=debug"
    } else {
        "cosbench=info"
    };

    // Diagnostics go to stderr; stdout carries only the report lines.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_and_resolve() -> RunSettings {
    let cli = Cli::parse();
    let config = CosConfig::discover().unwrap_or_default();
    let settings = resolve_settings(&cli, &config);
    init_tracing(settings.verbose);
    settings
}

/// Shared run path: generate `generated_items` inputs, time one backend
/// invocation, print the report.
///
/// The summary line reports `settings.items`, the configured count, even
/// when the generated array is shorter (the native binary's reduced sample).
pub fn run_backend(
    backend: &dyn ComputeBackend,
    settings: &RunSettings,
    generated_items: usize,
) -> anyhow::Result<()> {
    if let Some(core) = settings.pin {
        pin_to_cpu(core)
            .map_err(|e| anyhow::anyhow!("failed to pin to CPU core {}: {}", core, e))?;
        tracing::debug!(core, "pinned to CPU core");
    }

    tracing::debug!(
        backend = backend.label(),
        items = generated_items,
        "generating input sequence"
    );
    let input = sequential_floats(generated_items);

    let shot = run_single_shot(backend, &input)?;

    if settings.verbose {
        print!("{}", format_pairs(&input, &shot.output));
    }
    println!("{}", format_summary(shot.measurement.secs(), settings.items));

    Ok(())
}

/// Entry point for the vectorized in-process benchmark binary.
pub fn run_vectorized() -> anyhow::Result<()> {
    let settings = parse_and_resolve();
    run_backend(&VectorizedBackend, &settings, settings.items as usize)
}

/// Entry point for the native-library benchmark binary.
///
/// Generates only [`SAMPLE_ITEMS`] elements while the summary line keeps
/// reporting the configured item count.
pub fn run_native() -> anyhow::Result<()> {
    let settings = parse_and_resolve();
    let backend = NativeLibrary::open(&settings.library)?;
    run_backend(&backend, &settings, SAMPLE_ITEMS)
}

/// Entry point for the GPU device benchmark binary.
pub fn run_device() -> anyhow::Result<()> {
    let settings = parse_and_resolve();
    let backend = DeviceBackend::new()?;
    run_backend(&backend, &settings, settings.items as usize)
}
