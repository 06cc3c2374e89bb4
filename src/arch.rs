#[cfg(target_arch = "x86")]
use core::arch::x86::_rdtsc;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::_rdtsc;

use tracing::debug;

use crate::sample::TscSample;

/// Read the time-stamp counter once.
///
/// No fence is issued before or after the read, so the sample may be
/// reordered against surrounding instructions.
#[inline]
pub fn read_counter() -> TscSample {
    // SAFETY: RDTSC has no side effects and the target is gated to x86.
    let raw = unsafe { _rdtsc() };
    let sample = TscSample::from(raw);
    debug!(tsc = sample.get(), cpu = ?current_cpu(), "sampled time-stamp counter");
    sample
}

/// Logical CPU the calling thread is running on, if the OS reports it.
#[cfg(target_os = "linux")]
pub fn current_cpu() -> Option<u32> {
    // SAFETY: sched_getcpu takes no arguments and only reports -1 on failure.
    let cpu = unsafe { libc::sched_getcpu() };
    u32::try_from(cpu).ok()
}

#[cfg(not(target_os = "linux"))]
pub fn current_cpu() -> Option<u32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_counter_nonzero() {
        assert_ne!(read_counter().get(), 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_current_cpu_reported() {
        let online = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_CONF) };
        let cpu = current_cpu().expect("sched_getcpu failed");
        assert!(i64::from(cpu) < online as i64);
    }
}
