//! CPU vectorized cosine benchmark: one in-process `ndarray` map over the
//! whole input array.

fn main() -> anyhow::Result<()> {
    cosbench_cli::run_vectorized()
}
