//! Arithmetic/memory executor (§4.4) and flag-store (§4.6).

use tracing::trace;

use super::Cpu;
use crate::consts::CHAN_FLAG_STORE_MODIFIABLE;
use crate::decode::DecodedInstruction;
use crate::word::{self, Word};

impl Cpu {
    /// Dispatch one of CLA/ADD/SUB/SAD/SSU/MPY/SMP/MPM-DIV/STO, then apply
    /// flag-store if the instruction's flag bit is set.
    pub(super) fn execute_arithmetic(&mut self, decoded: DecodedInstruction) {
        use crate::decode::Opcode::*;

        let operand = self.read(decoded.channel, decoded.sector);

        match decoded.opcode {
            Cla => self.a = operand,
            Add => self.a = self.a.add(operand),
            Sub => self.a = self.a.sub(operand),
            Sad => self.a = word::split_add(self.a, operand),
            Ssu => self.a = word::split_subtract(self.a, operand),
            Mpy => {
                let (hi, lo) = word::multiply(self.a, operand, false);
                self.a = hi;
                self.l = lo;
            }
            Smp => {
                let (hi, lo) = word::multiply(self.a, operand, true);
                self.a = hi;
                self.l = lo;
            }
            MpmOrDiv => self.execute_mpm_or_div(operand),
            Sto => self.write(decoded.channel, decoded.sector, self.a),
            _ => {}
        }

        if decoded.flag {
            self.flag_store(decoded.flag_code(), decoded.sector);
        }
    }

    fn execute_mpm_or_div(&mut self, operand: Word) {
        if self.d37c_mode {
            let result = word::divide(self.a, self.l, operand);
            self.a = result.quotient;
            self.l = result.remainder;
            if result.error {
                self.error = true;
                trace!("DIV error: divide by zero or quotient overflow");
            }
        } else {
            let (hi, lo) = word::multiply(self.a.abs(), operand.abs(), false);
            self.a = hi;
            self.l = lo;
        }
    }

    /// Copy `A` to the loop/channel selected by the low 3 bits of the
    /// operand sector (§4.6). `sector` is the full 7-bit operand sector
    /// field; only its low bits are used by most destinations.
    fn flag_store(&mut self, flag_code: u8, sector: u8) {
        let value = self.a;
        match flag_code {
            0 => {}
            1 => {
                let len = self.f.len();
                self.f[sector as usize % len] = value;
            }
            // TODO: trigger telemetry timing signal
            2 => trace!("flag-store telemetry stub (no observable effect)"),
            3 => {
                let target_sector = sector.wrapping_sub(2) & 0x7F;
                self.write(CHAN_FLAG_STORE_MODIFIABLE, target_sector, value);
            }
            4 => {
                let len = self.e.len();
                self.e[sector as usize % len] = value;
            }
            5 => self.l = value,
            6 => {
                let len = self.h.len();
                self.h[sector as usize % len] = value;
            }
            7 => self.u = value,
            _ => unreachable!("flag_code is masked to 3 bits"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{DecodedInstruction, Opcode};

    fn instr(opcode: Opcode, flag: bool, channel: u8, sector: u8) -> DecodedInstruction {
        DecodedInstruction {
            opcode,
            flag,
            next_sector_pointer: 0,
            channel,
            sector,
        }
    }

    #[test]
    fn add_accumulates_from_memory() {
        let mut cpu = Cpu::new();
        cpu.write(0, 1, Word::new(3));
        cpu.a = Word::new(5);
        cpu.execute_arithmetic(instr(Opcode::Add, false, 0, 1));
        assert_eq!(cpu.a, Word::new(8));
    }

    #[test]
    fn sto_writes_accumulator_to_memory() {
        let mut cpu = Cpu::new();
        cpu.a = Word::new(9);
        cpu.execute_arithmetic(instr(Opcode::Sto, false, 0, 6));
        assert_eq!(cpu.read(0, 6), Word::new(9));
    }

    #[test]
    fn flag_store_l_destination_mirrors_post_add_accumulator() {
        let mut cpu = Cpu::new();
        cpu.write(0, 1, Word::new(3));
        cpu.a = Word::new(5);
        // flag_code 5 == S & 7 == 5
        cpu.execute_arithmetic(instr(Opcode::Add, true, 0, 0o5));
        assert_eq!(cpu.l, cpu.a);
    }

    #[test]
    fn div_d37c_mode() {
        let mut cpu = Cpu::new();
        cpu.a = Word::ZERO;
        cpu.l = Word::new(24);
        cpu.write(0, 1, Word::new(4));
        cpu.execute_arithmetic(instr(Opcode::MpmOrDiv, false, 0, 1));
        assert_eq!(cpu.a, Word::new(6));
        assert_eq!(cpu.l, Word::ZERO);
    }

    #[test]
    fn mpm_d17b_mode_uses_absolute_values() {
        let mut cpu = Cpu::new();
        cpu.set_d37c_mode(false);
        cpu.a = Word::new(0x800002); // -2
        cpu.write(0, 1, Word::new(0x800003)); // -3
        cpu.execute_arithmetic(instr(Opcode::MpmOrDiv, false, 0, 1));
        assert_eq!(cpu.a, Word::ZERO);
        assert_eq!(cpu.l, Word::new(6));
    }

    #[test]
    fn div_by_zero_sets_error_latch() {
        let mut cpu = Cpu::new();
        cpu.a = Word::new(1);
        cpu.l = Word::ZERO;
        cpu.write(0, 1, Word::ZERO);
        cpu.execute_arithmetic(instr(Opcode::MpmOrDiv, false, 0, 1));
        assert!(cpu.has_error());
    }
}
