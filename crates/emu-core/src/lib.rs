//! Core traits for instruction-stepped emulation.
//!
//! A CPU advances one whole instruction per step and exposes its state
//! through string-keyed queries. Hosts drive and inspect any core through
//! these traits alone.

mod cpu;
mod observable;

pub use cpu::Cpu;
pub use observable::{Observable, Value};
