use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_COUNT, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET,
    STACK_SIZE,
};
use crate::error::Chip8Error;

/// The FrameBuffer is indexed as [y][x] with the origin in the top left.
/// Each cell is either 0 (unset) or 1 (set).
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// The Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 8-bit registers (V0..VF)
///     - VF doubles as the carry, borrow and collision flag; arithmetic and draw
///       instructions overwrite it, so it can't be relied on as a general register
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of active stack entries
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per executed cycle
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
/// - 32x64 frame buffer
///
/// ## Input
/// - pressed status of keys 0..F, written by the host and only read here
#[derive(Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keys: [bool; KEY_COUNT],
    rng: StdRng,
}

impl State {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a state whose random byte sequence is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        // 0x000 - 0x050 holds the sprite sheet, the rest up to 0x200 stays reserved
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START as u16,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            // forces the host to render an initial blank frame
            draw_flag: true,
            keys: [false; KEY_COUNT],
            rng,
        }
    }

    /// Puts every field back to its power-on value, keeping the random source
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(rng);
    }

    /// Reads the byte at `addr`, wrapping into the 4K address space
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[addr as usize % MEMORY_SIZE]
    }

    /// Writes `value` to `addr`, wrapping into the 4K address space
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize % MEMORY_SIZE] = value;
    }

    /// Pushes the current pc as a return address
    pub fn push(&mut self) -> Result<(), Chip8Error> {
        if self.sp as usize == STACK_SIZE {
            return Err(Chip8Error::StackOverflow { pc: self.pc.wrapping_sub(2) });
        }
        self.stack[self.sp as usize] = self.pc;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address
    pub fn pop(&mut self) -> Result<u16, Chip8Error> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow { pc: self.pc.wrapping_sub(2) });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp as usize])
    }

    pub fn random_byte(&mut self) -> u8 {
        self.rng.gen()
    }

    /// Whether the key selected by the low nibble of `key` is held down
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
