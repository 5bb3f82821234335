//! CPU core trait.

/// A CPU core that executes one complete instruction per step.
///
/// The core owns whatever memory it addresses. CPUs expose their internal
/// state for observation and debugging.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// What a step reports: running, stopped, or why it stopped.
    type Step;

    /// Execute one instruction.
    fn step(&mut self) -> Self::Step;

    /// Returns the current program counter.
    ///
    /// Returns `u32` so cores with wider address buses fit the same trait.
    /// Narrower CPUs zero-extend.
    fn pc(&self) -> u32;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Returns true if the CPU is halted.
    fn is_halted(&self) -> bool;

    /// Reset the CPU to its initial state.
    fn reset(&mut self);
}
