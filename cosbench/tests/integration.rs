//! Integration tests for Cosbench
//!
//! These tests verify the end-to-end behavior of the single-shot benchmark
//! path with the backends that need no special hardware.

use cosbench::{
    format_summary, run_single_shot, sequential_floats, BackendError, ComputeBackend,
    DeviceBackend, NativeLibrary, VectorizedBackend, SAMPLE_ITEMS,
};

/// Full vectorized run: generate, measure, verify the output elementwise.
#[test]
fn test_vectorized_single_shot() {
    let input = sequential_floats(10_000);
    let shot = run_single_shot(&VectorizedBackend, &input).unwrap();

    assert_eq!(shot.output.len(), input.len());
    for (x, y) in input.iter().zip(&shot.output) {
        assert!((y - x.cos()).abs() < 1e-5);
    }
    assert!(shot.measurement.wall().as_nanos() > 0);
}

/// The summary line renders the measurement the way the binaries print it.
#[test]
fn test_summary_from_measurement() {
    let input = sequential_floats(1000);
    let shot = run_single_shot(&VectorizedBackend, &input).unwrap();

    let line = format_summary(shot.measurement.secs(), input.len() as u64);
    assert!(line.starts_with("Computation time: "));
    assert!(line.ends_with(" seconds; 1,000 items"));
}

/// The reduced native sample is a strict prefix of the full sequence.
#[test]
fn test_native_sample_is_prefix_of_full_sequence() {
    let sample = sequential_floats(SAMPLE_ITEMS);
    let full = sequential_floats(100_000);

    assert_eq!(sample.len(), 10);
    assert_eq!(sample.as_slice(), &full[..SAMPLE_ITEMS]);
}

/// Repeated runs over identical input are bit-identical.
#[test]
fn test_repeated_runs_identical() {
    let input = sequential_floats(4096);
    let first = run_single_shot(&VectorizedBackend, &input).unwrap();
    let second = run_single_shot(&VectorizedBackend, &input).unwrap();

    assert_eq!(first.output, second.output);
}

/// A missing native library aborts before any measurement.
#[test]
fn test_native_load_failure_is_fatal() {
    let err = NativeLibrary::open("nonexistent/libWrapper.dylib").unwrap_err();
    assert!(matches!(err, BackendError::NativeLoad { .. }));
}

/// Device and vectorized backends agree elementwise (skips without a GPU).
#[test]
fn test_device_agrees_with_vectorized() {
    let Ok(device) = DeviceBackend::new() else {
        return;
    };

    let input = sequential_floats(1000);
    let from_device = device.compute(&input).unwrap();
    let from_cpu = VectorizedBackend.compute(&input).unwrap();

    assert_eq!(from_device.len(), from_cpu.len());
    for (a, b) in from_device.iter().zip(&from_cpu) {
        assert!((a - b).abs() < 1e-5);
    }
}

/// Every hardware-free backend returns an empty output for an empty input.
#[test]
fn test_empty_input_yields_empty_output() {
    let shot = run_single_shot(&VectorizedBackend, &[]).unwrap();
    assert!(shot.output.is_empty());
}
