//! Control-transfer executors (§4.7): TRA, TMI, TZE, and split-compare-and-limit.

use super::{compose_location, Cpu};
use crate::consts::MAGNITUDE_MASK;
use crate::decode::{DecodedInstruction, Opcode};
use crate::word;

impl Cpu {
    /// Dispatch TRA/TMI/TZE/SCL. Returns `true` if the location counter was
    /// set to a jump target (so the fetch-step driver should not overwrite
    /// it with the next-sector pointer).
    pub(super) fn execute_control(&mut self, decoded: DecodedInstruction) -> bool {
        match decoded.opcode {
            Opcode::Tra => {
                self.jump_to(decoded);
                true
            }
            Opcode::TmiOrTze => {
                if self.d37c_mode {
                    self.jump_if(decoded, self.a.raw() & MAGNITUDE_MASK == 0)
                } else {
                    self.jump_if(decoded, self.a.is_negative())
                }
            }
            Opcode::Tmi => self.jump_if(decoded, self.a.is_negative()),
            Opcode::Scl => {
                let operand = self.read(decoded.channel, decoded.sector);
                self.a = word::split_compare_and_limit(self.a, operand);
                false
            }
            _ => false,
        }
    }

    fn jump_to(&mut self, decoded: DecodedInstruction) {
        self.i = compose_location(decoded.channel, decoded.sector);
    }

    fn jump_if(&mut self, decoded: DecodedInstruction, condition: bool) -> bool {
        if condition {
            self.jump_to(decoded);
        }
        condition
    }
}
