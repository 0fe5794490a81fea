#![warn(missing_docs)]
//! Cosbench Backends
//!
//! The three `ComputeBackend` implementations the benchmark binaries plug
//! into the single-shot runner:
//! - `VectorizedBackend` — in-process `ndarray` elementwise map
//! - `NativeLibrary` — foreign call into a pre-built shared library
//! - `DeviceBackend` — `wgpu` compute shader with explicit queue barriers

mod device;
mod native;
mod vectorized;

pub use device::{DeviceBackend, WORKGROUP_SIZE};
pub use native::{NativeLibrary, BENCHMARK_SYMBOL, DEFAULT_LIBRARY_PATH, SAMPLE_ITEMS};
pub use vectorized::VectorizedBackend;
