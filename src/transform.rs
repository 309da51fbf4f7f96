use glam::{Mat4, Vec3};

use crate::config::ScaleMode;

/// Model-view matrix of the quad.
///
/// Rotation accumulates over the whole session and is never reset. The
/// matrix is stored column-major, ready for `uniformMatrix4fv`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    matrix: Mat4,
    angle: f32,
    scale: f32,
    mode: ScaleMode,
}

impl Transform {
    pub fn new(mode: ScaleMode) -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            angle: 0.0,
            scale: 1.0,
            mode,
        }
    }

    /// Rotates in place about the Z axis: `m = m * Rz(radians)`.
    pub fn rotate_z(&mut self, radians: f32) {
        self.matrix *= Mat4::from_rotation_z(radians);
        self.angle += radians;
    }

    /// Scales X and Y in place: `m = m * S(factor, factor, 1)`.
    pub fn scale(&mut self, factor: f32) {
        self.matrix *= Mat4::from_scale(Vec3::new(factor, factor, 1.0));
        self.scale *= factor;
    }

    /// Advances the transform by one tick.
    pub fn step(&mut self, radians: f32, scale: f32) {
        match self.mode {
            ScaleMode::Compounding => {
                self.rotate_z(radians);
                self.scale(scale);
            }
            ScaleMode::Absolute => {
                self.angle += radians;
                self.scale = scale;
                self.matrix = Mat4::from_rotation_z(self.angle)
                    * Mat4::from_scale(Vec3::new(scale, scale, 1.0));
            }
        }
    }

    /// Total rotation applied since creation, in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Uniform XY scale currently baked into the matrix.
    pub fn current_scale(&self) -> f32 {
        self.scale
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        self.matrix.to_cols_array()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(ScaleMode::default())
    }
}
