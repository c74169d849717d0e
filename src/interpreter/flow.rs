//! The fetch-step driver (§4.7): instruction fetch, dispatch across the
//! five executor families, location-counter update, and the disc/cycle/
//! countdown bookkeeping that runs after every instruction.

use tracing::{instrument, trace};

use super::{compose_location, Cpu};
use crate::consts::SECTORS;
use crate::decode::{DecodedInstruction, Opcode};
use crate::error::CoreError;
pub use crate::state::{RunOutcome, StepOutcome, StepResult};

impl Cpu {
    /// Execute one instruction.
    ///
    /// Returns [`CoreError::AlreadyHalted`] if the machine was already
    /// halted — the one condition this core reports through a `Result`
    /// rather than absorbing into a latch, since it reflects host misuse
    /// rather than anything the original machine itself could observe.
    #[instrument(level = "trace", skip(self), fields(location = ?self.location()))]
    pub fn step(&mut self) -> StepResult {
        if self.halted {
            return Err(CoreError::AlreadyHalted);
        }

        let (channel, sector) = self.location();
        let word = self.read(channel, sector);
        let decoded = DecodedInstruction::decode(word);
        trace!(opcode = %decoded.opcode, channel, sector, "dispatching instruction");

        let jumped = self.dispatch(decoded);

        if !jumped {
            self.i = compose_location(channel, decoded.next_sector_pointer);
        }

        self.current_sector = (self.current_sector + 1) % SECTORS as u8;
        self.cycle_count += 1;

        if self.countdown_enabled && self.fine_countdown > 0 {
            self.fine_countdown -= 1;
        }

        Ok(if self.halted {
            StepOutcome::Halted
        } else {
            StepOutcome::Proceeded
        })
    }

    /// Dispatch a decoded instruction to its executor family. Returns
    /// `true` if the location counter was set to a jump target.
    fn dispatch(&mut self, decoded: DecodedInstruction) -> bool {
        match decoded.opcode {
            Opcode::Shift => {
                self.execute_shift(decoded);
                false
            }
            Opcode::Scl | Opcode::TmiOrTze | Opcode::Tmi | Opcode::Tra => {
                self.execute_control(decoded)
            }
            Opcode::Special => {
                self.execute_special(decoded);
                false
            }
            Opcode::Reserved => false,
            _ => {
                self.execute_arithmetic(decoded);
                false
            }
        }
    }

    /// Step repeatedly until the machine halts, an error is latched, or
    /// `max_cycles` steps have run, whichever comes first. A machine that
    /// starts out already halted reports [`RunOutcome::Halted`] immediately
    /// without error.
    pub fn run(&mut self, max_cycles: u64) -> RunOutcome {
        for _ in 0..max_cycles {
            if self.halted || self.error {
                return RunOutcome::Halted;
            }
            match self.step() {
                Ok(outcome) if !outcome.should_continue() => return RunOutcome::Halted,
                Ok(_) => {}
                Err(CoreError::AlreadyHalted) => return RunOutcome::Halted,
            }
            if self.error {
                return RunOutcome::Halted;
            }
        }
        if self.halted || self.error {
            RunOutcome::Halted
        } else {
            RunOutcome::BudgetExhausted
        }
    }
}
