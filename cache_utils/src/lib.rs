#![deny(unsafe_op_in_unsafe_fn)]

//! Low level timing and memory helpers shared by the benchmark.
//!
//! Everything in here is x86_64 only.

pub mod mmap;

use core::arch::x86_64 as arch_x86;
use core::hint::black_box;
use core::ptr;

/// Reads the time stamp counter with rdtscp.
///
/// Returns the counter and the content of IA32_TSC_AUX (the processor id on Linux).
pub fn rdtscp() -> (u64, u32) {
    let mut aux: u32 = 0;
    let tsc = unsafe { arch_x86::__rdtscp(&mut aux) };
    (tsc, aux)
}

/// Fenced timestamp.
///
/// rdtscp does not sample the counter until every previous instruction has executed.
/// The counter is sampled twice in a row: the first read waits for the work still in
/// flight, the second one is the timestamp that gets returned. Reported cycle counts
/// depend on the exact number of reads, so call this once per phase boundary.
pub fn fenced_timestamp() -> u64 {
    black_box(rdtscp());
    rdtscp().0
}

/// Source of phase boundary timestamps.
pub trait CycleCounter {
    fn timestamp(&mut self) -> u64;
}

/// The hardware time stamp counter, read through [`fenced_timestamp`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Rdtscp;

impl CycleCounter for Rdtscp {
    #[inline(always)]
    fn timestamp(&mut self) -> u64 {
        fenced_timestamp()
    }
}

/// # Safety
///
/// p must be valid for reads.
pub unsafe fn maccess<T>(p: *const T) {
    unsafe { ptr::read_volatile(p) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_timestamps_do_not_go_backwards() {
        let mut counter = Rdtscp;
        let mut last = counter.timestamp();
        for _ in 0..1000 {
            let t = counter.timestamp();
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn rdtscp_advances() {
        let (a, _) = rdtscp();
        let (b, _) = rdtscp();
        assert!(b >= a);
    }

    #[test]
    fn maccess_reads() {
        let x = [1u8, 2, 3];
        unsafe { maccess(&x[1] as *const u8) };
    }
}
