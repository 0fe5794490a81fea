//! GPU device cosine benchmark: upload, barrier, compute shader, barrier,
//! readback.

fn main() -> anyhow::Result<()> {
    cosbench_cli::run_device()
}
