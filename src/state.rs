//! Public result types returned by stepping and running the machine.
//!
//! The heavy state lives on [`crate::Cpu`]; these small `Copy` enums are
//! just what a host gets back from [`crate::Cpu::step`] and [`crate::Cpu::run`].

use crate::error::CoreError;

/// Outcome of a single [`crate::Cpu::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// The instruction executed; the machine did not halt this step.
    Proceeded,
    /// The instruction executed and set the `halted` latch (e.g. HPR).
    Halted,
}

impl StepOutcome {
    /// `true` if the caller should keep stepping.
    pub const fn should_continue(self) -> bool {
        matches!(self, StepOutcome::Proceeded)
    }
}

/// Outcome of [`crate::Cpu::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutcome {
    /// The machine halted (via HPR, or was already halted) before the
    /// cycle budget was exhausted.
    Halted,
    /// The cycle budget was exhausted before the machine halted.
    BudgetExhausted,
}

/// Convert a `step` result into a `Result`, surfacing the one host-misuse
/// condition ([`CoreError::AlreadyHalted`]) that the architecture itself has
/// no latch for.
pub type StepResult = Result<StepOutcome, CoreError>;
