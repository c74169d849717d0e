//! Field widths, masks and channel numbers fixed by the machine's wiring.

/// Width of a machine word, in bits.
pub const WORD_BITS: u32 = 24;

/// Mask selecting the 24 low bits of a `u32`.
pub const WORD_MASK: u32 = 0x00FF_FFFF;

/// Sign bit of a sign-magnitude word (bit 23).
pub const SIGN_BIT: u32 = 0x0080_0000;

/// Magnitude bits of a sign-magnitude word (bits 22..0).
pub const MAGNITUDE_MASK: u32 = 0x007F_FFFF;

/// Largest representable magnitude, `2^23 - 1`.
pub const MAX_MAGNITUDE: i64 = MAGNITUDE_MASK as i64;

/// Number of channels (tracks) on the disc, 0..=46.
pub const CHANNELS: usize = 47;

/// Number of sectors per channel.
pub const SECTORS: usize = 128;

/// Number of addressable channel numbers in the `C` instruction field (6 bits).
pub const CHANNEL_FIELD_RANGE: usize = 64;

/// Channel number aliased to the F loop (4 words).
pub const CHAN_F_LOOP: u8 = 0o52;
/// Channel number aliased to the H loop (16 words).
pub const CHAN_H_LOOP: u8 = 0o54;
/// Channel number aliased to the E loop (8 words).
pub const CHAN_E_LOOP: u8 = 0o56;
/// Channel number aliased to the U loop (1 word).
pub const CHAN_U_LOOP: u8 = 0o60;
/// Channel number aliased to the L register (1 word).
pub const CHAN_L_REG: u8 = 0o64;
/// Channel number aliased to the V loop (4 words).
pub const CHAN_V_LOOP: u8 = 0o70;
/// Channel number aliased to the R loop (4 words).
pub const CHAN_R_LOOP: u8 = 0o72;

/// Number of slots in the F loop.
pub const F_LOOP_SIZE: usize = 4;
/// Number of slots in the E loop.
pub const E_LOOP_SIZE: usize = 8;
/// Number of slots in the H loop.
pub const H_LOOP_SIZE: usize = 16;
/// Number of slots in the V loop.
pub const V_LOOP_SIZE: usize = 4;
/// Number of slots in the R loop.
pub const R_LOOP_SIZE: usize = 4;

/// Channel used by flag-store code `0x28` ("modifiable channel").
pub const CHAN_FLAG_STORE_MODIFIABLE: u8 = 0x28;

/// Number of I/O slots for binary/voltage output.
pub const IO_SLOT_COUNT: usize = 4;

/// Highest value the 3-bit phase register can hold.
pub const PHASE_MASK: u32 = 0x07;
