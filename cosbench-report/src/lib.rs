#![warn(missing_docs)]
//! Cosbench Report - Human-Readable Output
//!
//! Terminal output only, no machine-readable formats:
//! - The summary line every run prints (elapsed seconds, item count)
//! - The optional table pairing each input value with its output value

/// Render a count with thousands separators: `1000000000` → `1,000,000,000`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format the summary line: elapsed time to six decimal places, item count
/// with thousands separators.
pub fn format_summary(elapsed_secs: f64, items: u64) -> String {
    format!(
        "Computation time: {:.6} seconds; {} items",
        elapsed_secs,
        format_count(items)
    )
}

/// Format the table pairing each input value with its computed cosine.
///
/// Printed only when verbose output is enabled; the default run stays at the
/// single summary line.
pub fn format_pairs(input: &[f32], output: &[f32]) -> String {
    let mut out = String::from("Input and Output (Cosine):\n");

    for (i, (x, y)) in input.iter().zip(output).enumerate() {
        out.push_str(&format!("  [{}] {} -> {}\n", i, x, y));
    }

    out
}
