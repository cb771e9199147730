//! Draw instructions handed to the render sink.

use serde::{Deserialize, Serialize};

/// Plain RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One overlay element for the current tick.
///
/// Instructions are produced once per frame and consumed in order by the
/// sink. Box dimensions may be degenerate (zero or negative); the sink
/// decides how to clamp or drop them, the composer never rejects them.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    /// Bordered rectangle, positioned by its top-left corner.
    Box {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        thickness: u32,
        color: Color,
    },
    /// Text label anchored at a screen point.
    Text {
        x: f32,
        y: f32,
        color: Color,
        text: String,
    },
}
