//! Read the processor time-stamp counter.
//!
//! The crate exposes the single `RDTSC` read used by the `rdtsc` binary,
//! plus the line formatting the binary prints.

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
compile_error!("rdtsc requires an x86 or x86_64 target with a time-stamp counter");

pub mod arch;
pub mod error;
pub mod output;
pub mod sample;


pub use crate::arch::{current_cpu, read_counter};
pub use crate::error::{RdtscError, Result};
pub use crate::output::{format_line, write_sample};
pub use crate::sample::TscSample;
