pub use chip8::{Chip8, RomError};
pub use constants::CLOCK_SPEED;

pub mod constants;
pub mod state;

mod chip8;
mod instruction;
mod opcode;
mod operations;
