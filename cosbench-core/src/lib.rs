#![warn(missing_docs)]
//! Cosbench Core - Measurement Runtime
//!
//! This crate provides the building blocks shared by the benchmark binaries:
//! - Sequential `f32` input generation
//! - Single-shot wall-clock timing (RDTSCP / CNTVCT_EL0 with Instant fallback)
//! - The `ComputeBackend` contract and its error taxonomy
//! - CPU affinity pinning for stable cycle readings

mod backend;
mod measure;
mod run;
mod sequence;

pub use backend::{BackendError, ComputeBackend};
/// Whether this platform provides hardware cycle counters (x86_64 RDTSCP or AArch64 CNTVCT_EL0).
/// When `false`, cycle counts are reported as 0 and only wall-clock time is available.
pub use measure::HAS_CYCLE_COUNTER;
pub use measure::{pin_to_cpu, Measurement, Stopwatch};
pub use run::{run_single_shot, ShotResult};
pub use sequence::{sequential_floats, DEFAULT_ITEMS};
