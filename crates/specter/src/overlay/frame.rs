//! Per-tick frame composition.
//!
//! The composer is the only piece that strings the pipeline together:
//! refresh the view matrix, walk the entity slots, project survivors, and
//! emit the ordered draw list. It holds no per-frame state across ticks;
//! a failed tick leaves nothing behind and the next tick starts fresh.

use std::time::Duration;

use tracing::trace;

use crate::config::{Config, defaults};
use crate::game::EntityView;
use crate::math::{Vec2, ViewMatrix};
use crate::memory::ReadMemory;
use crate::offset::OffsetTable;

use super::instruction::DrawInstruction;

/// Box outline derived from the two projected anchor points.
///
/// Dimensions can be negative when the head anchor projects below the
/// origin anchor; they are passed through to the sink untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoxGeometry {
    /// Derive the outline from the projected origin and head anchors.
    pub fn from_anchors(screen_pos: Vec2, screen_head: Vec2) -> Self {
        let height = screen_head.y - screen_pos.y;
        let width = height / 2.0;
        let center_offset = -width / 2.0;
        Self {
            x: screen_pos.x + center_offset,
            y: screen_head.y,
            width,
            height: height - 5.0,
        }
    }
}

/// Builds the ordered instruction list for one tick.
pub struct FrameComposer {
    offsets: OffsetTable,
    config: Config,
}

impl FrameComposer {
    pub fn new(offsets: OffsetTable, config: Config) -> Self {
        Self { offsets, config }
    }

    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compose the draw list for the current tick.
    ///
    /// An unreadable view matrix aborts the whole tick with an empty
    /// list; the next tick retries from scratch. Any single entity's
    /// read or projection failure skips only that entity. Entities are
    /// visited and emitted in increasing slot order.
    pub fn compose<R: ReadMemory + ?Sized>(
        &self,
        reader: &R,
        elapsed: Duration,
    ) -> Vec<DrawInstruction> {
        let mut instructions = Vec::new();

        let matrix = match reader.read_f32_array::<16>(self.offsets.view_matrix) {
            Ok(values) => ViewMatrix::new(values),
            Err(e) => {
                trace!("View matrix refresh failed: {e}");
                return instructions;
            }
        };

        for index in 0..self.config.performance.max_entities {
            let slot = self.offsets.slot_address(index);
            let address = match reader.read_addr(slot) {
                Ok(address) if address != 0 => address,
                _ => continue,
            };
            self.compose_entity(reader, address, &matrix, &mut instructions);
        }

        if self.config.display.show_startup_message
            && elapsed < self.config.display.startup_message_duration()
        {
            instructions.push(DrawInstruction::Text {
                x: defaults::STARTUP_MESSAGE_X,
                y: defaults::STARTUP_MESSAGE_Y,
                color: self.config.display.message_color,
                text: self.config.display.startup_message.clone(),
            });
        }

        instructions
    }

    fn compose_entity<R: ReadMemory + ?Sized>(
        &self,
        reader: &R,
        address: u64,
        matrix: &ViewMatrix,
        out: &mut Vec<DrawInstruction>,
    ) {
        let entity = EntityView::new(reader, &self.offsets, address);
        if !entity.is_alive() {
            return;
        }

        let viewport = self.config.screen;
        let Some(position) = entity.position() else {
            return;
        };
        let Some(head) = entity.head_position() else {
            return;
        };
        // No partial box: both anchors must project or the entity is
        // dropped for this tick.
        let Some(screen_pos) = matrix.world_to_screen(position, viewport) else {
            return;
        };
        let Some(screen_head) = matrix.world_to_screen(head, viewport) else {
            return;
        };

        let display = &self.config.display;
        if display.show_boxes {
            let geometry = BoxGeometry::from_anchors(screen_pos, screen_head);
            out.push(DrawInstruction::Box {
                x: geometry.x,
                y: geometry.y,
                width: geometry.width,
                height: geometry.height,
                thickness: display.box_thickness,
                color: display.box_color,
            });
        }

        if display.show_health
            && let Some(health) = entity.health()
        {
            out.push(DrawInstruction::Text {
                x: screen_pos.x,
                y: screen_pos.y,
                color: display.health_color,
                text: format!("Health: {health}"),
            });
        }
    }
}
