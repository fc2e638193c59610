use std::io::Read;

use tracing::{debug, trace, warn};

use crate::constants::{KEY_COUNT, MAX_PC, MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::Chip8Error;
use crate::instruction::from_op;
use crate::state::{FrameBuffer, State};

/// What happened during a single call to `Chip8::step`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// The opcode that was fetched
    pub opcode: u16,
    /// The sound timer ran out this cycle; the host should play a beep
    pub beep: bool,
    /// The opcode isn't part of the instruction set and was skipped
    pub unknown_opcode: bool,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - how many unknown opcodes have been skipped
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one cycle at a time, timers included
/// - inspecting its frame buffer for rendering by some display
///
/// Pacing is up to the caller: every `step` executes exactly one opcode and decrements
/// each timer once.
pub struct Chip8 {
    state: State,
    unknown_opcodes: u64,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            unknown_opcodes: 0,
        }
    }

    /// Creates a Chip-8 whose `Cxnn` random bytes are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::with_seed(seed),
            unknown_opcodes: 0,
        }
    }

    /// Returns to the power-on state: memory and registers zeroed, sprite sheet loaded,
    /// pc at 0x200 and the draw flag raised.
    pub fn initialize(&mut self) {
        self.state.reset();
        self.unknown_opcodes = 0;
    }

    /// Copies a program image into memory starting at 0x200
    ///
    /// # Arguments
    /// * `program` raw opcodes; byte `n` lands at address `0x200 + n`
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Chip8Error> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::CapacityExceeded {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        self.state.memory[PROGRAM_START..PROGRAM_START + program.len()].copy_from_slice(program);
        debug!(bytes = program.len(), "loaded program");
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a reader that yields a ROM image
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Chip8Error> {
        // one byte past the limit is enough to tell that an image doesn't fit
        let mut program = Vec::with_capacity(MAX_PROGRAM_SIZE + 1);
        reader
            .take(MAX_PROGRAM_SIZE as u64 + 1)
            .read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode at pc and moves pc past it; a pc outside of memory is
    ///   reported without being moved
    /// - executes it, or skips it if it's unknown
    /// - decrements the timers
    pub fn step(&mut self) -> Result<Cycle, Chip8Error> {
        let opcode = self.get_op()?;
        self.state.pc += 0x2;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            opcode,
            self.state.v,
            self.state.i,
            self.state.pc
        );

        let mut cycle = Cycle {
            opcode,
            ..Cycle::default()
        };
        match from_op(&opcode) {
            Some(operation) => operation(&opcode, &mut self.state)?,
            None => {
                self.unknown_opcodes += 1;
                cycle.unknown_opcode = true;
                warn!(
                    "unknown opcode {:04X} at {:04X}",
                    opcode,
                    self.state.pc - 0x2
                );
            }
        }

        cycle.beep = self.advance_timers();
        Ok(cycle)
    }

    /// Decrements both timers, returning whether the sound timer just ran out
    fn advance_timers(&mut self) -> bool {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        let beep = self.state.sound_timer == 1;
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
        beep
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<u16, Chip8Error> {
        let pc = self.state.pc;
        if pc > MAX_PC {
            return Err(Chip8Error::PcOutOfRange { pc });
        }
        let left = u16::from(self.state.memory[pc as usize]);
        let right = u16::from(self.state.memory[pc as usize + 1]);
        Ok(left << 8 | right)
    }

    /// Returns whether the frame buffer changed since the last call, and lowers the flag
    pub fn consume_draw_flag(&mut self) -> bool {
        std::mem::replace(&mut self.state.draw_flag, false)
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad index 0x0..=0xF
    /// * `pressed` whether it's currently held down
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        match self.state.keys.get_mut(key as usize) {
            Some(state) => *state = pressed,
            None => warn!("ignoring key {:#X}, the keypad has {} keys", key, KEY_COUNT),
        }
    }

    pub fn key_press(&mut self, key: u8) {
        self.set_key(key, true);
    }

    pub fn key_release(&mut self, key: u8) {
        self.set_key(key, false);
    }

    /// V0..VF; VF is clobbered by arithmetic and drawing
    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn sp(&self) -> u8 {
        self.state.sp
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    pub fn memory(&self) -> &[u8; MEMORY_SIZE] {
        &self.state.memory
    }

    /// How many unknown opcodes have been skipped since initialization
    pub fn unknown_opcodes(&self) -> u64 {
        self.unknown_opcodes
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
