//! Single-Shot Timing
//!
//! Uses RDTSCP on x86_64 and CNTVCT_EL0 on AArch64 for minimal overhead
//! cycle counting, with std::time::Instant carrying the wall-clock side
//! on every platform. One `Stopwatch` brackets exactly one compute call.

use std::time::Duration;

// ─── Inline cycle counter helpers ────────────────────────────────────────────

/// Read the CPU cycle/tick counter (platform-specific).
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles() -> u64 {
    // SAFETY: RDTSCP is available on all x86_64 CPUs since ~2006.
    // It is serializing by design — waits for all prior instructions
    // to complete before reading the cycle counter.
    unsafe {
        let mut _aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut _aux)
    }
}

/// Read the virtual counter timer on AArch64 (comparable to x86 TSC).
#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles() -> u64 {
    let cnt: u64;
    // SAFETY: CNTVCT_EL0 is accessible from EL0 (userspace) on all
    // AArch64 implementations. It provides a monotonically increasing
    // counter at a fixed frequency (typically the system timer frequency).
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt, options(nostack, nomem));
    }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_cycles() -> u64 {
    0
}

/// Whether this platform provides real cycle counters.
pub const HAS_CYCLE_COUNTER: bool = cfg!(target_arch = "x86_64") || cfg!(target_arch = "aarch64");

// ─── Measurement ─────────────────────────────────────────────────────────────

/// The result of timing one backend invocation.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    wall: Duration,
    cycles: u64,
}

impl Measurement {
    /// Elapsed wall-clock time.
    #[inline]
    pub fn wall(&self) -> Duration {
        self.wall
    }

    /// Elapsed time as fractional seconds, the unit the summary line reports.
    #[inline]
    pub fn secs(&self) -> f64 {
        self.wall.as_secs_f64()
    }

    /// Raw cycle/tick count consumed (non-zero on x86_64 and aarch64).
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

// ─── Stopwatch ───────────────────────────────────────────────────────────────

/// Stopwatch bracketing a single compute call.
///
/// Consuming `stop` enforces the one-measurement-per-run contract: a stopped
/// watch cannot be restarted or read twice.
pub struct Stopwatch {
    start: std::time::Instant,
    cycles_start: u64,
}

impl Stopwatch {
    /// Capture the starting timestamps.
    #[inline(always)]
    pub fn start() -> Self {
        let cycles_start = read_cycles();
        Self {
            start: std::time::Instant::now(),
            cycles_start,
        }
    }

    /// Capture the ending timestamps and return the measurement.
    #[inline(always)]
    pub fn stop(self) -> Measurement {
        let wall = self.start.elapsed();
        let cycles = read_cycles().saturating_sub(self.cycles_start);
        Measurement { wall, cycles }
    }
}

/// Set CPU affinity to pin the current thread to a specific core
///
/// This improves TSC stability by avoiding core migrations.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

/// CPU pinning is a no-op on platforms without sched_setaffinity.
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwatch_measures_sleep() {
        let watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(10));
        let measurement = watch.stop();

        // Should be at least 10ms
        assert!(measurement.wall() >= Duration::from_millis(5));
        // Should be less than 100ms (accounting for scheduling)
        assert!(measurement.wall() < Duration::from_millis(100));
    }

    #[test]
    fn test_measurement_secs() {
        let watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(10));
        let measurement = watch.stop();

        assert!(measurement.secs() >= 0.005);
        assert!((measurement.secs() - measurement.wall().as_secs_f64()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cycle_counter() {
        if HAS_CYCLE_COUNTER {
            let watch = Stopwatch::start();
            std::thread::sleep(Duration::from_millis(1));
            let measurement = watch.stop();

            assert!(measurement.cycles() > 0, "cycle counter should advance");
        }
    }
}
