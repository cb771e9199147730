mod sink;

#[cfg(target_os = "windows")]
mod gdi;

pub use sink::RenderSink;

#[cfg(target_os = "windows")]
pub use gdi::GdiOverlay;

#[cfg(test)]
pub use sink::RecordingSink;
