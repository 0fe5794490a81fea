//! Single-Shot Benchmark Runner
//!
//! The one process all three binaries share: start the stopwatch, invoke the
//! backend once, stop the stopwatch. Input generation and result formatting
//! happen outside the timed window; synchronization barriers a backend
//! performs internally happen inside it.

use crate::backend::{BackendError, ComputeBackend};
use crate::measure::{Measurement, Stopwatch};

/// Outcome of one timed backend invocation.
#[derive(Debug)]
pub struct ShotResult {
    /// Elementwise cosine of the input, same length as the input.
    pub output: Vec<f32>,
    /// Wall-clock time the invocation took.
    pub measurement: Measurement,
}

/// Run the backend exactly once over `input`, timing only the compute call.
pub fn run_single_shot(
    backend: &dyn ComputeBackend,
    input: &[f32],
) -> Result<ShotResult, BackendError> {
    let watch = Stopwatch::start();
    let output = backend.compute(input)?;
    let measurement = watch.stop();

    Ok(ShotResult {
        output,
        measurement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scalar reference backend for exercising the runner.
    struct ScalarCosine;

    impl ComputeBackend for ScalarCosine {
        fn label(&self) -> &'static str {
            "scalar"
        }

        fn compute(&self, input: &[f32]) -> Result<Vec<f32>, BackendError> {
            Ok(input.iter().map(|x| x.cos()).collect())
        }
    }

    struct AlwaysFails;

    impl ComputeBackend for AlwaysFails {
        fn label(&self) -> &'static str {
            "broken"
        }

        fn compute(&self, _input: &[f32]) -> Result<Vec<f32>, BackendError> {
            Err(BackendError::NoAdapter)
        }
    }

    #[test]
    fn test_output_matches_input_length() {
        let input = crate::sequential_floats(128);
        let shot = run_single_shot(&ScalarCosine, &input).unwrap();

        assert_eq!(shot.output.len(), input.len());
        for (x, y) in input.iter().zip(&shot.output) {
            assert!((y - x.cos()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_input() {
        let shot = run_single_shot(&ScalarCosine, &[]).unwrap();
        assert!(shot.output.is_empty());
    }

    #[test]
    fn test_measurement_is_positive() {
        let input = crate::sequential_floats(100_000);
        let shot = run_single_shot(&ScalarCosine, &input).unwrap();

        assert!(shot.measurement.wall().as_nanos() > 0);
    }

    #[test]
    fn test_backend_fault_propagates() {
        let err = run_single_shot(&AlwaysFails, &[1.0]).unwrap_err();
        assert!(matches!(err, BackendError::NoAdapter));
    }
}
