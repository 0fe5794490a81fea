//! Compute Backend Contract
//!
//! A backend consumes the input array and produces an equal-length array of
//! elementwise cosines. Backends do not retry: every fault here is fatal to
//! the run and surfaces as a non-zero process exit.

use thiserror::Error;

/// Faults a backend can raise. None of them are recoverable.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The shared library could not be opened.
    #[error("failed to load native library `{path}`: {reason}")]
    NativeLoad {
        /// Path the loader was given.
        path: String,
        /// Loader-reported cause.
        reason: String,
    },

    /// The library loaded but the expected symbol did not bind.
    #[error("symbol `{symbol}` not found in `{path}`: {reason}")]
    MissingSymbol {
        /// Symbol name that failed to bind.
        symbol: String,
        /// Library the symbol was looked up in.
        path: String,
        /// Loader-reported cause.
        reason: String,
    },

    /// No GPU adapter is available on this machine.
    #[error("no compatible GPU adapter available")]
    NoAdapter,

    /// The adapter refused to hand out a device/queue pair.
    #[error("GPU device request failed: {0}")]
    DeviceRequest(String),

    /// Reading results back from device memory failed.
    #[error("failed to read results back from device: {0}")]
    DeviceRead(String),
}

/// A strategy for computing the elementwise cosine of an input array.
pub trait ComputeBackend {
    /// Short name used in logs.
    fn label(&self) -> &'static str;

    /// Compute `cos` for every element of `input`.
    ///
    /// The returned array has the same length as `input`; an empty input
    /// yields an empty output. `output[i] = cos(input[i])` within the
    /// numeric precision of the backend.
    fn compute(&self, input: &[f32]) -> Result<Vec<f32>, BackendError>;
}
