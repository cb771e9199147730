mod frame;
mod instruction;

pub use frame::{BoxGeometry, FrameComposer};
pub use instruction::{Color, DrawInstruction};
