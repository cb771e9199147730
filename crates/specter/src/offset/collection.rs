use serde::{Deserialize, Serialize};

/// Field offsets for one known memory layout of the target build.
///
/// `entity_list` and `view_matrix` are absolute addresses in the target's
/// address space; the per-field values are byte offsets from an entity's
/// base address. Supporting a new target build means swapping this table,
/// not touching the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetTable {
    /// Layout version label (target build id).
    pub version: String,
    /// Base of the entity slot array.
    pub entity_list: u64,
    /// Byte distance between consecutive slots.
    pub entity_stride: u64,
    /// Address of the 16-float view matrix.
    pub view_matrix: u64,
    pub position_x: u64,
    pub position_y: u64,
    pub position_z: u64,
    pub head_x: u64,
    pub head_y: u64,
    pub head_z: u64,
    pub health: u64,
}

impl OffsetTable {
    pub fn is_valid(&self) -> bool {
        !self.version.is_empty()
            && self.entity_list != 0
            && self.entity_stride != 0
            && self.view_matrix != 0
    }

    /// Address of slot `index` in the entity list.
    pub fn slot_address(&self, index: usize) -> u64 {
        self.entity_list + index as u64 * self.entity_stride
    }
}

impl Default for OffsetTable {
    /// Layout of the original supported target build (v1.0).
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            entity_list: 0x01BC_E4D0,
            entity_stride: 0x8C,
            view_matrix: 0x00B8_1060,
            position_x: 0x18,
            position_y: 0x1C,
            position_z: 0x20,
            head_x: 0x110,
            head_y: 0x114,
            head_z: 0x118,
            health: 0x184,
        }
    }
}
