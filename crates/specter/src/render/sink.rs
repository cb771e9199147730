//! Render sink contract.

use crate::error::Result;
use crate::overlay::DrawInstruction;

/// Consumer of one tick's instruction stream.
///
/// Instructions arrive in draw order between `begin_frame` and
/// `end_frame` and must not be retained past the current tick.
pub trait RenderSink {
    fn begin_frame(&mut self) -> Result<()>;
    fn draw(&mut self, instruction: &DrawInstruction) -> Result<()>;
    fn end_frame(&mut self) -> Result<()>;
}

/// Sink that keeps every completed frame, used by loop tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<DrawInstruction>>,
    current: Vec<DrawInstruction>,
}

#[cfg(test)]
impl RenderSink for RecordingSink {
    fn begin_frame(&mut self) -> Result<()> {
        self.current.clear();
        Ok(())
    }

    fn draw(&mut self, instruction: &DrawInstruction) -> Result<()> {
        self.current.push(instruction.clone());
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frames.push(std::mem::take(&mut self.current));
        Ok(())
    }
}
