pub use chip8::{Chip8, Cycle};
pub use error::Chip8Error;
pub use state::FrameBuffer;

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
mod state;
