//! Errors surfaced at the public API seam.
//!
//! Almost every malformed condition the machine can encounter is absorbed
//! silently and reflected through the `halted`/`error` latches on [`crate::Cpu`]
//! rather than through a `Result` — see §7 of the design notes. [`CoreError`]
//! exists only for the one host-misuse case that is not part of the
//! machine's own architecture: asking the core to step a machine that has
//! already halted.

use thiserror::Error;

/// Error variants a host can receive from the public API.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// [`crate::Cpu::step`] was called after the `halted` latch was already
    /// set by a previous step.
    #[error("step called on an already-halted machine")]
    AlreadyHalted,
}
