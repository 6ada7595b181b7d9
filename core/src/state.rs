use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_BASE, FONT_SET, MEMORY_SIZE, PROGRAM_START, STACK_DEPTH,
};

/// The FrameBuffer is indexed as [y][x]; 1 is lit, 0 is dark.
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// All mutable Chip-8 machine state
///
/// ## CPU
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - VF doubles as the carry/borrow/collision flag; several opcodes
///       overwrite it as a side effect, which is part of the architecture
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter; always points at the next fetch
/// - (sp) an 8-bit stack pointer into `stack`
///
/// ## Timers
/// - 2 8-bit countdown timers (delay & sound)
/// - nonzero means active; they decrement once per CPU cycle and hold at zero
///
/// ## Memory
/// - 4096 bytes of addressable memory; the font sprite sheet is baked in at
///   0x050 and ROMs load at 0x200
/// - a 16-slot stack of return addresses
/// - a 64x32 byte-per-pixel frame buffer
///
/// ## Input
/// - pressed status of keypad keys 0..F, written by the host between cycles
///
/// This layer enforces nothing: opcodes are responsible for the documented
/// invariants, and an out-of-range register, stack, or memory index panics
/// rather than wrapping so ISA-level bugs surface immediately.
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub keys: [bool; 16],
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font_base = FONT_BASE as usize;
        memory[font_base..font_base + FONT_SET.len()].copy_from_slice(&FONT_SET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            keys: [false; 16],
            draw_flag: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_loads_font() {
        let state = State::new();
        assert_eq!(state.memory[0x050..0x0A0], FONT_SET);
        // glyph for 0 starts the table
        assert_eq!(state.memory[0x050..0x055], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
    }

    #[test]
    fn test_new_state_zeroes_everything_else() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.v, [0; 16]);
        assert_eq!(state.stack, [0; 16]);
        assert_eq!(state.sp, 0);
        assert_eq!(state.memory[0x200..], [0; 0xE00]);
        assert!(state
            .frame_buffer
            .iter()
            .all(|row| row.iter().all(|&p| p == 0)));
    }
}
