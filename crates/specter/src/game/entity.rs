//! Read-through view of one remote entity.

use crate::math::Vec3;
use crate::memory::ReadMemory;
use crate::offset::OffsetTable;

/// Lazy projection of the entity block at a fixed address.
///
/// Nothing is cached: every accessor re-reads the target, so values track
/// whatever the observed process currently holds, and repeated calls in
/// one frame are idempotent apart from the target mutating underneath.
pub struct EntityView<'a, R: ReadMemory + ?Sized> {
    reader: &'a R,
    offsets: &'a OffsetTable,
    address: u64,
}

impl<'a, R: ReadMemory + ?Sized> EntityView<'a, R> {
    pub fn new(reader: &'a R, offsets: &'a OffsetTable, address: u64) -> Self {
        Self {
            reader,
            offsets,
            address,
        }
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    /// World-space origin. Present only when all three components read;
    /// a partial position is never surfaced.
    pub fn position(&self) -> Option<Vec3> {
        self.vec3_at(
            self.offsets.position_x,
            self.offsets.position_y,
            self.offsets.position_z,
        )
    }

    /// Head-level anchor used for the secondary projection.
    pub fn head_position(&self) -> Option<Vec3> {
        self.vec3_at(self.offsets.head_x, self.offsets.head_y, self.offsets.head_z)
    }

    pub fn health(&self) -> Option<i32> {
        self.reader.read_i32(self.address + self.offsets.health).ok()
    }

    /// Alive means health was readable and positive. An entity whose
    /// state could not be confirmed is never treated as alive.
    pub fn is_alive(&self) -> bool {
        self.health().is_some_and(|health| health > 0)
    }

    pub fn is_valid(&self) -> bool {
        self.address != 0 && self.position().is_some()
    }

    fn vec3_at(&self, x_offset: u64, y_offset: u64, z_offset: u64) -> Option<Vec3> {
        let x = self.reader.read_f32(self.address + x_offset).ok()?;
        let y = self.reader.read_f32(self.address + y_offset).ok()?;
        let z = self.reader.read_f32(self.address + z_offset).ok()?;
        Some(Vec3::new(x, y, z))
    }
}
