//! Perspective projection and viewport mapping.

use nalgebra::Vector3;

/// Pinhole projection: scale by a focal constant and divide by the distance
/// from the camera plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Focal scale applied to both screen axes (K1).
    pub focal: f32,
    /// Camera-to-origin distance along the view axis (K2). Must exceed the
    /// torus's outer radius so the divisor stays bounded away from zero.
    pub camera_distance: f32,
}

/// A projected sample: screen offsets from the viewport centre plus the
/// inverse view depth used for the depth test.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// `1 / (camera_distance + z)`. Larger means closer to the viewer.
    pub inv_depth: f32,
}

impl Projection {
    pub fn new(focal: f32, camera_distance: f32) -> Self {
        Self {
            focal,
            camera_distance,
        }
    }

    pub fn project(&self, p: Vector3<f32>) -> Projected {
        let inv_depth = 1.0 / (self.camera_distance + p.z);
        Projected {
            x: self.focal * p.x * inv_depth,
            y: self.focal * p.y * inv_depth,
            inv_depth,
        }
    }
}

/// Fixed-size character viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Map projected offsets to a grid cell: centre in the viewport,
    /// truncate toward zero, and flip the vertical axis (3D up is row 0
    /// direction; rows grow downward). Returns `None` off screen.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = self.width as i32 / 2 + x as i32;
        let row = self.height as i32 / 2 - y as i32;
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some((col as usize, row as usize))
    }
}
