use thiserror::Error;

/// Conditions that stop the Chip-8 from making progress.
///
/// Every variant is fatal to the run. Unknown opcodes are not errors; they are reported
/// through `Cycle::unknown_opcode` and execution continues.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("program is {size} bytes but at most {max} bytes fit after 0x200")]
    CapacityExceeded { size: usize, max: usize },

    #[error("unable to read program image: {0}")]
    Io(#[from] std::io::Error),

    #[error("call at {pc:#05X} exceeds the 16 entry stack")]
    StackOverflow { pc: u16 },

    #[error("return at {pc:#05X} with an empty stack")]
    StackUnderflow { pc: u16 },

    #[error("program counter {pc:#05X} is outside of memory")]
    PcOutOfRange { pc: u16 },
}
