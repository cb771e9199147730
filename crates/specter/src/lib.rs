//! # specter
//!
//! Core library for the Specter entity overlay.
//!
//! This crate provides:
//! - Fault-tolerant reading of a foreign process's memory
//! - An entity model reconstructed from raw memory via a versioned
//!   offset table
//! - The world-to-screen projection transform
//! - Per-tick frame composition into draw instructions for an overlay
//!   render sink
//!
//! The live process and GDI backends are Windows-only; everything else,
//! including the whole composition pipeline, is platform-neutral and
//! testable against an in-memory mock of the target.

pub mod config;
pub mod error;
pub mod game;
pub mod math;
pub mod memory;
pub mod offset;
pub mod overlay;
pub mod prelude;
pub mod render;
pub mod specter;

pub use config::{Config, DisplayConfig, PerformanceConfig, WindowConfig};
pub use error::{Error, Result};
pub use game::EntityView;
pub use math::{Vec2, Vec3, ViewMatrix, Viewport};
pub use memory::ReadMemory;
pub use offset::{OffsetTable, load_offsets, save_offsets};
pub use overlay::{BoxGeometry, Color, DrawInstruction, FrameComposer};
pub use render::RenderSink;
pub use specter::Specter;

#[cfg(target_os = "windows")]
pub use memory::{MemoryReader, ProcessHandle};
#[cfg(target_os = "windows")]
pub use render::GdiOverlay;
