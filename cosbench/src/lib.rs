#![warn(missing_docs)]
//! # Cosbench
//!
//! Single-shot cosine micro-benchmarks across three execution backends:
//! - **Vectorized**: in-process `ndarray` elementwise map
//! - **Native**: foreign call into a pre-built shared library (`benchmark` symbol)
//! - **Device**: `wgpu` compute shader with explicit queue barriers
//!
//! Each binary runs one linear sequence: build a sequential `f32` array,
//! invoke the backend once, measure the wall-clock window around the compute
//! call, print a summary line. There is no cross-run comparison and no
//! statistical aggregation; a backend fault aborts the run.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cosbench::{run_single_shot, sequential_floats, VectorizedBackend};
//!
//! let input = sequential_floats(1_000_000);
//! let shot = run_single_shot(&VectorizedBackend, &input)?;
//! println!("{}", cosbench::format_summary(shot.measurement.secs(), input.len() as u64));
//! ```

// Re-export core types
pub use cosbench_core::{
    pin_to_cpu, run_single_shot, sequential_floats, BackendError, ComputeBackend, Measurement,
    ShotResult, Stopwatch, DEFAULT_ITEMS, HAS_CYCLE_COUNTER,
};

// Re-export backends
pub use cosbench_backends::{
    DeviceBackend, NativeLibrary, VectorizedBackend, BENCHMARK_SYMBOL, DEFAULT_LIBRARY_PATH,
    SAMPLE_ITEMS, WORKGROUP_SIZE,
};

// Re-export reporting
pub use cosbench_report::{format_count, format_pairs, format_summary};

// Re-export CLI entry points for binaries embedding the harness
pub use cosbench_cli::{
    resolve_settings, run_backend, run_device, run_native, run_vectorized, Cli, CosConfig,
    RunSettings,
};
