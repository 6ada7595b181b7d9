/// Horizontal pixel count of the display.
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical pixel count of the display.
pub const DISPLAY_HEIGHT: usize = 32;

/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded and where the program counter starts.
/// Everything below is reserved for the interpreter itself.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between the load address and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Where the font sprite sheet is baked into memory at construction.
pub const FONT_BASE: u16 = 0x050;

/// Bytes per font glyph; each hex digit is an 8x5 sprite.
pub const FONT_GLYPH_SIZE: u16 = 5;

/// Call stack depth in return-address slots.
pub const STACK_DEPTH: usize = 16;

/// Default nanoseconds per CPU cycle; approximates a 500Hz clock.
///
/// Timers are decremented once per cycle, so the host's pacing choice is also
/// the timer decay rate. The canonical 60Hz timer behavior only emerges if the
/// host paces cycles accordingly.
pub const CLOCK_SPEED: usize = 2_000_000;

/// Sprites for the hex digits 0..F, five bytes each.
///
/// Each byte is one 8-pixel row, most significant bit leftmost. The glyphs
/// only use the high nibble of each row.
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
