use std::io;

use thiserror::Error;

use crate::constants::{MAX_ROM_SIZE, PROGRAM_START};
use crate::instruction;
use crate::state::{FrameBuffer, State};

/// A ROM that cannot be loaded into the machine.
#[derive(Debug, Error)]
pub enum RomError {
    /// The ROM does not fit between the load address and the end of memory.
    #[error("ROM is {size} bytes but at most {MAX_ROM_SIZE} fit above the load address")]
    TooLarge { size: usize },

    #[error("failed to read ROM: {0}")]
    Io(#[from] io::Error),
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns a single [`State`] and supplies the entire host contract:
/// - loading ROMs
/// - pressing and releasing keypad keys
/// - advancing the machine one cycle at a time
/// - inspecting the frame buffer for rendering by some display
///
/// The core is synchronous and does no pacing of its own: one [`step`] call is
/// one fetched instruction and one tick of both timers. The host's choice of
/// wall-clock delay between calls therefore sets both the effective clock
/// speed and the timer decay rate; pace at about 60 cycles of timer decay per
/// second for authentic timer behavior.
///
/// [`step`]: Chip8::step
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
        }
    }

    /// Loads a ROM verbatim into memory at the load address.
    ///
    /// Reads the source to its end and rejects it outright if it cannot fit;
    /// a rejected ROM leaves memory untouched. Nothing else is reset, so a
    /// fresh machine is needed per ROM. Returns the number of bytes loaded.
    pub fn load_rom(&mut self, reader: &mut impl io::Read) -> Result<usize, RomError> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        if rom.len() > MAX_ROM_SIZE {
            return Err(RomError::TooLarge { size: rom.len() });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(&rom);
        Ok(rom.len())
    }

    /// Runs one cycle: fetch, decode, execute, then tick both timers.
    ///
    /// The PC is advanced past the instruction word before execution, so the
    /// executed operation sees it pointing at the following instruction.
    pub fn step(&mut self) {
        let op = self.fetch();
        self.state.pc += 0x2;
        instruction::execute(op, &mut self.state);
        self.tick_timers();
    }

    /// Returns the FrameBuffer if the display should be redrawn.
    ///
    /// Reading the frame clears the draw flag, so the host only re-renders
    /// after a CLS or DRW actually changed something.
    pub fn frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Set the pressed status of a keypad key (0x0..=0xF).
    pub fn key_press(&mut self, key: u8) {
        self.state.keys[key as usize] = true;
    }

    /// Unset the pressed status of a keypad key (0x0..=0xF).
    pub fn key_release(&mut self, key: u8) {
        self.state.keys[key as usize] = false;
    }

    /// Whether the sound timer is active; the host should beep while true.
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Gets the instruction word currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two
    /// subsequent bytes, high byte at the lower address.
    fn fetch(&self) -> u16 {
        let left = u16::from(self.state.memory[self.state.pc as usize]);
        let right = u16::from(self.state.memory[self.state.pc as usize + 1]);
        left << 8 | right
    }

    /// Decrements each nonzero timer; both hold at zero.
    fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
