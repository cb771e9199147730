//! World-to-screen projection math.
//!
//! `ViewMatrix` wraps the 16 floats read back from the target every tick
//! and carries the transform the rest of the pipeline is tuned against.
//! The screen mapping is the target's own arithmetic, not the conventional
//! `(ndc + 1) / 2 * size` viewport transform; downstream box sizing depends
//! on this exact form, so it must not be "corrected".

use serde::{Deserialize, Serialize};

/// Minimum clip-space W for a point to count as in front of the camera.
/// The threshold value itself is rejected, which also screens out
/// near-degenerate perspective divides.
pub const MIN_CLIP_W: f32 = 0.1;

/// 2D point in overlay-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 3D point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Pixel dimensions of the overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn half_width(&self) -> f32 {
        self.width as f32 / 2.0
    }

    fn half_height(&self) -> f32 {
        self.height as f32 / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

/// Row-major 4x4 world-to-clip transform, rebuilt from target memory every
/// tick. Any 16 floats are accepted; no mathematical validation is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMatrix([f32; 16]);

impl ViewMatrix {
    pub const fn new(values: [f32; 16]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f32; 16] {
        &self.0
    }

    /// Project a world-space point onto the overlay surface.
    ///
    /// Returns `None` when the point is behind (or too close to) the
    /// camera plane. Only rows 0, 1 and 3 of the matrix participate; clip
    /// Z is never needed for the 2D mapping.
    pub fn world_to_screen(&self, point: Vec3, viewport: Viewport) -> Option<Vec2> {
        let m = &self.0;

        let clip_x = point.x * m[0] + point.y * m[1] + point.z * m[2] + m[3];
        let clip_y = point.x * m[4] + point.y * m[5] + point.z * m[6] + m[7];
        let clip_w = point.x * m[12] + point.y * m[13] + point.z * m[14] + m[15];

        if clip_w <= MIN_CLIP_W {
            return None;
        }

        let ndc_x = clip_x / clip_w;
        let ndc_y = clip_y / clip_w;

        let half_w = viewport.half_width();
        let half_h = viewport.half_height();

        // The target's own mapping: the raw NDC value is added to the half
        // viewport instead of being folded into the scale, and Y is
        // inverted because world-space Y maps to screen-space "up".
        let screen_x = half_w * ndc_x + (ndc_x + half_w);
        let screen_y = -(half_h * ndc_y) + (ndc_y + half_h);

        Some(Vec2::new(screen_x, screen_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matrix whose rows pass X and Y through unchanged with clip W = 1.
    fn passthrough_matrix() -> ViewMatrix {
        ViewMatrix::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let screen = passthrough_matrix()
            .world_to_screen(Vec3::new(0.0, 0.0, 0.0), Viewport::new(1024, 768))
            .unwrap();
        assert_eq!(screen.x, 512.0);
        assert_eq!(screen.y, 384.0);
    }

    #[test]
    fn test_mapping_keeps_offset_form() {
        // ndc (1, 1) at 1024x768: x = 512*1 + (1 + 512) = 1025, not the
        // conventional 1024; y = -(384*1) + (1 + 384) = 1.
        let screen = passthrough_matrix()
            .world_to_screen(Vec3::new(1.0, 1.0, 0.0), Viewport::new(1024, 768))
            .unwrap();
        assert_eq!(screen.x, 1025.0);
        assert_eq!(screen.y, 1.0);
    }

    #[test]
    fn test_y_axis_inverted() {
        // World "up" must move toward the top of the screen.
        let matrix = passthrough_matrix();
        let viewport = Viewport::new(1024, 768);
        let low = matrix
            .world_to_screen(Vec3::new(0.0, 0.0, 0.0), viewport)
            .unwrap();
        let high = matrix
            .world_to_screen(Vec3::new(0.0, 0.5, 0.0), viewport)
            .unwrap();
        assert!(high.y < low.y);
    }

    #[test]
    fn test_behind_camera_rejected() {
        // W comes straight from m15 with a zeroed bottom row.
        let mut values = [0.0; 16];
        values[15] = 0.05;
        let matrix = ViewMatrix::new(values);
        assert!(
            matrix
                .world_to_screen(Vec3::new(0.0, 0.0, 0.0), Viewport::default())
                .is_none()
        );

        values[15] = -3.0;
        let matrix = ViewMatrix::new(values);
        assert!(
            matrix
                .world_to_screen(Vec3::new(0.0, 0.0, 0.0), Viewport::default())
                .is_none()
        );
    }

    #[test]
    fn test_near_plane_boundary_rejected() {
        let mut values = [0.0; 16];
        values[15] = MIN_CLIP_W;
        let matrix = ViewMatrix::new(values);
        assert!(
            matrix
                .world_to_screen(Vec3::new(0.0, 0.0, 0.0), Viewport::default())
                .is_none()
        );

        values[15] = 0.11;
        let matrix = ViewMatrix::new(values);
        assert!(
            matrix
                .world_to_screen(Vec3::new(0.0, 0.0, 0.0), Viewport::default())
                .is_some()
        );
    }

    #[test]
    fn test_clip_z_row_ignored() {
        let mut values = *passthrough_matrix().values();
        values[8] = 99.0;
        values[9] = -42.0;
        values[10] = 7.5;
        values[11] = 1234.0;
        let garbled = ViewMatrix::new(values);

        let point = Vec3::new(0.25, -0.75, 3.0);
        let viewport = Viewport::new(1920, 1080);
        assert_eq!(
            passthrough_matrix().world_to_screen(point, viewport),
            garbled.world_to_screen(point, viewport)
        );
    }

    #[test]
    fn test_screen_coordinates_invert_back_to_ndc() {
        // screen_x = ndc*(half_w + 1) + half_w, so the inverse scaling must
        // reproduce the NDC values the divide produced.
        let matrix = ViewMatrix::new([
            2.0, 0.5, 0.0, 1.0, //
            0.0, 3.0, 1.0, -2.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.5, 2.0,
        ]);
        let point = Vec3::new(1.5, -2.0, 4.0);
        let viewport = Viewport::new(1024, 768);
        let screen = matrix.world_to_screen(point, viewport).unwrap();

        let clip_x: f32 = 1.5 * 2.0 + -2.0 * 0.5 + 1.0;
        let clip_y: f32 = -2.0 * 3.0 + 4.0 + -2.0;
        let clip_w: f32 = 4.0 * 0.5 + 2.0;
        let ndc_x = clip_x / clip_w;
        let ndc_y = clip_y / clip_w;

        let recovered_x = (screen.x - 512.0) / (512.0 + 1.0);
        let recovered_y = (screen.y - 384.0) / (1.0 - 384.0);
        assert!((recovered_x - ndc_x).abs() < 1e-5);
        assert!((recovered_y - ndc_y).abs() < 1e-5);
    }
}
