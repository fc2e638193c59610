/// Width of the frame buffer in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// Height of the frame buffer in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Address at which program images are loaded and execution begins
pub const PROGRAM_START: usize = 0x200;

/// Largest program image that fits between `PROGRAM_START` and the end of memory
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START;

/// Highest address a 2 byte opcode can be fetched from
pub const MAX_PC: u16 = (MEMORY_SIZE - 2) as u16;

/// Nested subroutine calls the stack can hold
pub const STACK_SIZE: usize = 16;

/// Keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Bytes per glyph in the `SPRITE_SHEET`
pub const GLYPH_SIZE: u16 = 5;

/// # Sprite sheet
/// Glyphs for the hexadecimal digits 0..F, loaded at address 0x000.
///
/// Each glyph is 4 pixels wide and 5 rows tall; only the high nibble of each row is used.
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
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
