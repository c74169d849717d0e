//! Construction and reset.

use super::Cpu;
use crate::memory::Grid;
use crate::word::Word;

impl Cpu {
    /// Construct a freshly initialized machine: every register, loop, and
    /// latch zeroed, the location counter at `(0, 0)`, and D37C
    /// (superset) instruction-set mode selected by default.
    pub fn new() -> Self {
        Cpu {
            a: Word::ZERO,
            l: Word::ZERO,
            n: Word::ZERO,
            i: Word::ZERO,
            p: 0,

            u: Word::ZERO,
            f: Default::default(),
            e: Default::default(),
            h: Default::default(),
            v: Default::default(),
            r: Default::default(),

            memory: Grid::new(),
            current_sector: 0,
            cycle_count: 0,

            halted: false,
            error: false,
            d37c_mode: true,

            discrete_in_a: Word::ZERO,
            discrete_in_b: Word::ZERO,
            discrete_out_a: Word::ZERO,
            voltage_out: [0; 4],
            binary_out: [0; 4],
            detector: false,
            fine_countdown: 0,
            countdown_enabled: false,
        }
    }

    /// Re-zero every register, loop, memory cell, and latch. The
    /// `d37c_mode` flag is left untouched — it is configuration, not
    /// runtime state.
    pub fn reset(&mut self) {
        let d37c_mode = self.d37c_mode;
        *self = Cpu::new();
        self.d37c_mode = d37c_mode;
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_d37c_mode_and_zeroed_state() {
        let cpu = Cpu::new();
        assert!(cpu.d37c_mode());
        assert_eq!(cpu.a(), Word::ZERO);
        assert_eq!(cpu.location_counter(), Word::ZERO);
        assert!(!cpu.is_halted());
    }

    #[test]
    fn reset_preserves_mode_but_clears_everything_else() {
        let mut cpu = Cpu::new();
        cpu.set_d37c_mode(false);
        cpu.a = Word::new(42);
        cpu.halted = true;
        cpu.error = true;

        cpu.reset();

        assert!(!cpu.d37c_mode());
        assert_eq!(cpu.a(), Word::ZERO);
        assert!(!cpu.is_halted());
        assert!(!cpu.has_error());
    }
}
