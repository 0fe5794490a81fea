//! Foreign-Function Backend
//!
//! Loads a pre-built shared library at runtime and binds its `benchmark`
//! symbol: `(const float*, float*, int) -> void`, elementwise cosine written
//! into the caller-supplied buffer. The unsafe loader boundary stays inside
//! `NativeLibrary`; callers only see the `ComputeBackend` contract.
//!
//! A missing library or symbol fails at `open` time, before any input is
//! generated or any measurement begins.

use std::os::raw::{c_float, c_int};
use std::path::{Path, PathBuf};

use cosbench_core::{BackendError, ComputeBackend};
use libloading::{Library, Symbol};

/// Where the pre-built library is expected, relative to the working directory.
pub const DEFAULT_LIBRARY_PATH: &str = ".build/debug/libWrapper.dylib";

/// The symbol the library must export.
pub const BENCHMARK_SYMBOL: &[u8] = b"benchmark\0";

/// Elements the native benchmark binary generates. The configured item count
/// is left untouched; only the generated array is this short.
pub const SAMPLE_ITEMS: usize = 10;

/// `benchmark(input, output, count)` as exported by the library.
type BenchmarkFn = unsafe extern "C" fn(*const c_float, *mut c_float, c_int);

/// Safe wrapper around the dynamically loaded benchmark library.
#[derive(Debug)]
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Open the library at `path` and verify the benchmark symbol binds.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref().to_path_buf();

        // SAFETY: loading a library runs its initializers. The benchmark
        // library is a leaf compute kernel with no initialization side
        // effects the caller needs to coordinate with.
        let library =
            unsafe { Library::new(&path) }.map_err(|source| BackendError::NativeLoad {
                path: path.display().to_string(),
                reason: source.to_string(),
            })?;

        // Bind eagerly so a bad library fails here, not mid-measurement.
        {
            let _probe: Symbol<BenchmarkFn> = unsafe { library.get(BENCHMARK_SYMBOL) }
                .map_err(|source| BackendError::MissingSymbol {
                    symbol: "benchmark".to_string(),
                    path: path.display().to_string(),
                    reason: source.to_string(),
                })?;
        }

        tracing::debug!(path = %path.display(), "loaded native benchmark library");

        Ok(Self { library, path })
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ComputeBackend for NativeLibrary {
    fn label(&self) -> &'static str {
        "native"
    }

    fn compute(&self, input: &[f32]) -> Result<Vec<f32>, BackendError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut output = vec![0.0f32; input.len()];

        // SAFETY: `open` verified the symbol exists with this signature.
        let benchmark: Symbol<BenchmarkFn> =
            unsafe { self.library.get(BENCHMARK_SYMBOL) }.map_err(|source| {
                BackendError::MissingSymbol {
                    symbol: "benchmark".to_string(),
                    path: self.path.display().to_string(),
                    reason: source.to_string(),
                }
            })?;

        // SAFETY: `output` is sized to `input`, and the callee writes exactly
        // `count` floats into it. The output buffer is lent to the call and
        // owned exclusively by us again once it returns.
        unsafe {
            benchmark(input.as_ptr(), output.as_mut_ptr(), input.len() as c_int);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_library_fails_at_open() {
        let err = NativeLibrary::open("does/not/exist/libWrapper.dylib").unwrap_err();

        match err {
            BackendError::NativeLoad { path, .. } => {
                assert!(path.contains("libWrapper.dylib"));
            }
            other => panic!("expected NativeLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_default_path_is_relative() {
        assert!(Path::new(DEFAULT_LIBRARY_PATH).is_relative());
    }

    #[test]
    fn test_symbol_is_nul_terminated() {
        assert_eq!(BENCHMARK_SYMBOL.last(), Some(&0));
    }
}
