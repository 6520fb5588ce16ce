//! The frame renderer: samples the torus surface, rotates it, projects it,
//! and rasterizes it into a character grid behind a depth buffer.

use crate::screen::{Projection, Viewport};
use crate::torus::{sweep_and_spin, Torus};
use crate::{BACKGROUND, LUMINANCE_RAMP};
use nalgebra::Vector3;
use std::f32::consts::TAU;

/// Everything the renderer needs besides the per-frame angle pair.
///
/// All of these are fixed for the lifetime of a `Renderer`; they are fields
/// rather than literals so the pipeline is testable at small resolutions.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub torus: Torus,
    pub projection: Projection,
    pub viewport: Viewport,
    /// Sample count across the tube cross-section (outer loop).
    pub theta_steps: usize,
    /// Sample count around the central axis (inner loop).
    pub phi_steps: usize,
    /// Directional light, pointing toward the viewer and down. Left
    /// unnormalized so luminance tops out at its magnitude (sqrt 2 for the
    /// classic light).
    pub light: Vector3<f32>,
}

impl RenderConfig {
    /// The classic 80x28 terminal setup.
    pub fn classic() -> Self {
        Self {
            torus: Torus::new(1.15, 2.0),
            projection: Projection::new(20.0, 5.0),
            viewport: Viewport::new(80, 28),
            theta_steps: 90,
            phi_steps: 314,
            light: Vector3::new(0.0, 1.0, -1.0),
        }
    }
}

/// A finished character grid plus the depth buffer that resolved it.
///
/// The two arrays always have identical dimensions and are only written
/// together through [`Frame::plot`], so a cell's glyph and its stored depth
/// can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    glyphs: Vec<u8>,
    depth: Vec<f32>,
}

impl Frame {
    fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            glyphs: vec![BACKGROUND; viewport.cells()],
            depth: vec![0.0; viewport.cells()],
        }
    }

    /// Reset every cell to background and every depth to the "infinitely
    /// far" sentinel. Nothing survives from the previous frame.
    fn clear(&mut self) {
        self.glyphs.fill(BACKGROUND);
        self.depth.fill(0.0);
    }

    /// Depth-test one sample against a cell. A strictly larger inverse depth
    /// wins; on a win both buffers are updated, otherwise neither is.
    fn plot(&mut self, col: usize, row: usize, inv_depth: f32, glyph: u8) {
        let idx = row * self.width + col;
        if inv_depth > self.depth[idx] {
            self.depth[idx] = inv_depth;
            self.glyphs[idx] = glyph;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph(&self, col: usize, row: usize) -> u8 {
        self.glyphs[row * self.width + col]
    }

    /// Stored inverse depth for a cell; `0.0` means nothing was drawn there.
    pub fn depth(&self, col: usize, row: usize) -> f32 {
        self.depth[row * self.width + col]
    }

    /// Number of cells holding a ramp glyph rather than background.
    pub fn lit_cells(&self) -> usize {
        self.glyphs.iter().filter(|&&g| g != BACKGROUND).count()
    }

    /// Iterate over the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.glyphs.chunks(self.width)
    }

    /// Render the grid as newline-separated text for display.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.width * self.height + self.height);
        for row in self.rows() {
            // Glyphs are always ASCII, so this never fails.
            out.push_str(std::str::from_utf8(row).unwrap_or(""));
            out.push('\n');
        }
        out
    }
}

/// Map a positive luminance value to a ramp glyph.
///
/// Luminance tops out at the light vector's magnitude (sqrt 2 classically),
/// so scaling by 8 spans the 12-glyph ramp. The clamp guards the float
/// boundary at the very top, where rounding could index one past the end.
pub fn shade(luminance: f32) -> u8 {
    let idx = ((luminance * 8.0) as usize).min(LUMINANCE_RAMP.len() - 1);
    LUMINANCE_RAMP[idx]
}

/// The torus renderer. Owns the frame storage and reuses it across calls;
/// every call starts from a fully cleared grid.
pub struct Renderer {
    config: RenderConfig,
    frame: Frame,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        assert!(
            config.projection.camera_distance > config.torus.outer_radius(),
            "camera distance must clear the torus so the perspective divide never hits zero"
        );
        let frame = Frame::new(config.viewport);
        Self { config, frame }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one frame of the torus spun by `a` about x and `b` about z.
    ///
    /// Pure in its inputs: the returned grid depends only on `(a, b)` and
    /// the config. The frame storage is reused but carries no information
    /// between calls.
    pub fn render_frame(&mut self, a: f32, b: f32) -> &Frame {
        self.frame.clear();
        let cfg = &self.config;

        for t in 0..cfg.theta_steps {
            let theta = t as f32 * TAU / cfg.theta_steps as f32;
            let circle = cfg.torus.circle_point(theta);
            let normal = cfg.torus.circle_normal(theta);

            for p in 0..cfg.phi_steps {
                let phi = p as f32 * TAU / cfg.phi_steps as f32;
                let point = sweep_and_spin(circle, phi, a, b);

                let projected = cfg.projection.project(point);
                let Some((col, row)) = cfg.viewport.to_cell(projected.x, projected.y) else {
                    continue;
                };

                let luminance = sweep_and_spin(normal, phi, a, b).dot(&cfg.light);
                if luminance <= 0.0 {
                    continue; // facing away from the light
                }

                self.frame.plot(col, row, projected.inv_depth, shade(luminance));
            }
        }

        &self.frame
    }
}
