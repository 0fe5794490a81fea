//! Foreign-function cosine benchmark: one call into the `benchmark` symbol
//! of a pre-built shared library.

fn main() -> anyhow::Result<()> {
    cosbench_cli::run_native()
}
