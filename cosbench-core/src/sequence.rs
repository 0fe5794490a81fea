//! Input Sequence Generation
//!
//! Every benchmark consumes the same input shape: `n` sequential
//! single-precision floats `0, 1, 2, ..., n-1`.

/// Number of elements the benchmarks generate when nothing overrides it.
pub const DEFAULT_ITEMS: u64 = 1_000_000_000;

/// Build the sequential input array of length `n`.
///
/// Values are evenly spaced from `0` to `n - 1` inclusive, converted to
/// single precision. Above 2^24 the conversion rounds to the nearest
/// representable `f32`, matching what every backend receives.
pub fn sequential_floats(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32).collect()
}
