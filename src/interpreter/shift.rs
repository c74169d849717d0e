//! Shift/rotate executor (§4.5, primary opcode 0).
//!
//! The S field doubles as sub-opcode and shift count: `sub_op = (S >> 3) &
//! 0x1F`, `count = S & 7` (a count of zero means eight). Several sub-opcode
//! slots mean different things in D17B vs. D37C mode.

use super::Cpu;
use crate::decode::DecodedInstruction;
use crate::word::Word;

impl Cpu {
    /// Dispatch one of SAL/ALS/SLL/ALC-SRL/SAR/ARS/SLR/ARC-SRR/COA.
    /// Unrecognized sub-opcodes are no-ops.
    pub(super) fn execute_shift(&mut self, decoded: DecodedInstruction) {
        let sub_op = decoded.shift_sub_op();
        let count = decoded.shift_count();
        let a = self.a;

        self.a = match sub_op {
            0x08 => {
                let (hi, lo) = a.split_lanes();
                Word::from_lanes(hi << count, lo << count)
            }
            0x09 => Word::new(a.raw() << count),
            0x0A => {
                let (hi, lo) = a.split_lanes();
                Word::from_lanes(hi << count, lo)
            }
            0x0B if self.d37c_mode => rotate_left_24(a, count),
            0x0B => {
                let (hi, lo) = a.split_lanes();
                Word::from_lanes(hi, lo << count)
            }
            0x0C => {
                let (hi, lo) = a.split_lanes();
                Word::from_lanes(hi >> count, lo >> count)
            }
            0x0D => Word::new(a.raw() >> count),
            0x0E => {
                let (hi, lo) = a.split_lanes();
                Word::from_lanes(hi >> count, lo)
            }
            0x0F if self.d37c_mode => rotate_right_24(a, count),
            0x0F => {
                let (hi, lo) = a.split_lanes();
                Word::from_lanes(hi, lo >> count)
            }
            // TODO: implement character output
            0x10 => a,
            _ => a,
        };
    }
}

fn rotate_left_24(word: Word, count: u32) -> Word {
    let raw = word.raw();
    Word::new((raw << count) | (raw >> (24 - count)))
}

fn rotate_right_24(word: Word, count: u32) -> Word {
    let raw = word.raw();
    Word::new((raw >> count) | (raw << (24 - count)))
}
