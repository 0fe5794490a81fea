//! Vectorized In-Process Backend
//!
//! One library-level elementwise map over the whole array. The cosine kernel
//! itself belongs to `ndarray`; this backend only borrows the input as a view
//! and hands ownership of the freshly allocated result back to the caller.

use cosbench_core::{BackendError, ComputeBackend};
use ndarray::ArrayView1;

/// Elementwise cosine through `ndarray`.
pub struct VectorizedBackend;

impl ComputeBackend for VectorizedBackend {
    fn label(&self) -> &'static str {
        "vectorized"
    }

    fn compute(&self, input: &[f32]) -> Result<Vec<f32>, BackendError> {
        let view = ArrayView1::from(input);
        Ok(view.mapv(f32::cos).into_raw_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let output = VectorizedBackend.compute(&[0.0, 1.0, 2.0]).unwrap();

        assert_eq!(output.len(), 3);
        assert!((output[0] - 1.0).abs() < 1e-4);
        assert!((output[1] - 0.5403).abs() < 1e-4);
        assert!((output[2] - -0.4161).abs() < 1e-4);
    }

    #[test]
    fn test_matches_scalar_cosine() {
        let input: Vec<f32> = (0..10_000).map(|i| i as f32).collect();
        let output = VectorizedBackend.compute(&input).unwrap();

        for (x, y) in input.iter().zip(&output) {
            assert!((y - x.cos()).abs() < 1e-5);
        }
    }

    #[test]
    fn test_idempotent() {
        let input: Vec<f32> = (0..1000).map(|i| i as f32).collect();
        let first = VectorizedBackend.compute(&input).unwrap();
        let second = VectorizedBackend.compute(&input).unwrap();

        // Same input, same kernel: bit-identical output
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let output = VectorizedBackend.compute(&[]).unwrap();
        assert!(output.is_empty());
    }
}
