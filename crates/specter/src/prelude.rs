//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from
//! specter.
//!
//! # Usage
//!
//! ```ignore
//! use specter::prelude::*;
//! ```

// Core application types
pub use crate::specter::Specter;

// Error handling
pub use crate::error::{Error, Result};

// Configuration
pub use crate::config::{Config, DisplayConfig, PerformanceConfig, WindowConfig};

// Memory access
pub use crate::memory::ReadMemory;
#[cfg(target_os = "windows")]
pub use crate::memory::{MemoryReader, ProcessHandle};

// Offset table
pub use crate::offset::{OffsetTable, load_offsets, save_offsets};

// Entity model
pub use crate::game::EntityView;

// Projection math
pub use crate::math::{Vec2, Vec3, ViewMatrix, Viewport};

// Overlay output
pub use crate::overlay::{Color, DrawInstruction, FrameComposer};
pub use crate::render::RenderSink;
#[cfg(target_os = "windows")]
pub use crate::render::GdiOverlay;
