//! GDI overlay painting directly onto the target window.

use windows::Win32::Foundation::{COLORREF, HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    CreateSolidBrush, DeleteObject, FillRect, GetDC, HDC, ReleaseDC, SetBkMode, SetTextColor,
    TRANSPARENT, TextOutA,
};

use crate::error::{Error, Result};
use crate::overlay::{Color, DrawInstruction};

use super::RenderSink;

fn colorref(color: Color) -> COLORREF {
    COLORREF(u32::from(color.r) | (u32::from(color.g) << 8) | (u32::from(color.b) << 16))
}

/// Paints instructions onto the target window's device context.
///
/// The DC is acquired per frame and released at frame end. Degenerate
/// boxes (negative extents) fall out naturally: GDI fills nothing for an
/// inverted rectangle.
pub struct GdiOverlay {
    window: HWND,
    text_color: Color,
    dc: Option<HDC>,
}

impl GdiOverlay {
    /// `text_color` is the DC's default; per-instruction colors override
    /// it draw by draw.
    pub fn new(window: HWND, text_color: Color) -> Self {
        Self {
            window,
            text_color,
            dc: None,
        }
    }

    fn active_dc(&self) -> Result<HDC> {
        self.dc
            .ok_or_else(|| Error::RenderFailed("no active frame".to_string()))
    }

    fn fill(&self, dc: HDC, left: i32, top: i32, right: i32, bottom: i32, color: Color) {
        // SAFETY: the DC is live for the current frame and the brush is
        // released before returning.
        unsafe {
            let brush = CreateSolidBrush(colorref(color));
            let rect = RECT {
                left,
                top,
                right,
                bottom,
            };
            FillRect(dc, &rect, brush);
            let _ = DeleteObject(brush);
        }
    }

    fn draw_border(&self, dc: HDC, x: i32, y: i32, width: i32, height: i32, thickness: u32, color: Color) {
        let t = thickness as i32;
        self.fill(dc, x, y, x + width, y + t, color);
        self.fill(dc, x, y, x + t, y + height, color);
        self.fill(dc, x + width - t, y, x + width, y + height, color);
        self.fill(dc, x, y + height - t, x + width, y + height, color);
    }
}

impl RenderSink for GdiOverlay {
    fn begin_frame(&mut self) -> Result<()> {
        // SAFETY: `window` is the live target window handle.
        let dc = unsafe { GetDC(self.window) };
        if dc.is_invalid() {
            return Err(Error::RenderFailed("failed to acquire device context".to_string()));
        }
        // SAFETY: the DC was just acquired and stays live for the frame.
        unsafe {
            SetBkMode(dc, TRANSPARENT);
            SetTextColor(dc, colorref(self.text_color));
        }
        self.dc = Some(dc);
        Ok(())
    }

    fn draw(&mut self, instruction: &DrawInstruction) -> Result<()> {
        let dc = self.active_dc()?;
        match instruction {
            DrawInstruction::Box {
                x,
                y,
                width,
                height,
                thickness,
                color,
            } => {
                self.draw_border(
                    dc,
                    *x as i32,
                    *y as i32,
                    *width as i32,
                    *height as i32,
                    *thickness,
                    *color,
                );
            }
            DrawInstruction::Text { x, y, color, text } => {
                // SAFETY: the DC is live and the byte slice outlives the
                // call.
                unsafe {
                    SetTextColor(dc, colorref(*color));
                    let _ = TextOutA(dc, *x as i32, *y as i32, text.as_bytes());
                }
            }
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if let Some(dc) = self.dc.take() {
            // SAFETY: `dc` was acquired by `begin_frame` for this window.
            unsafe { ReleaseDC(self.window, dc) };
        }
        Ok(())
    }
}
