//! Torus geometry and the rigid rotations applied to it each frame.

use nalgebra::Vector3;

/// Torus dimensions: a tube of radius `tube_radius` swept around the
/// central (y) axis at distance `ring_radius` from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    pub tube_radius: f32,
    pub ring_radius: f32,
}

impl Torus {
    pub fn new(tube_radius: f32, ring_radius: f32) -> Self {
        assert!(
            tube_radius < ring_radius,
            "tube radius must be smaller than the ring radius"
        );
        Self {
            tube_radius,
            ring_radius,
        }
    }

    /// Point on the generating circle, `theta` radians from horizontal.
    /// The circle lies in the xy-plane, centred at `(ring_radius, 0, 0)`.
    pub fn circle_point(&self, theta: f32) -> Vector3<f32> {
        Vector3::new(
            self.ring_radius + self.tube_radius * theta.cos(),
            self.tube_radius * theta.sin(),
            0.0,
        )
    }

    /// Outward unit normal of the generating circle at `theta`.
    pub fn circle_normal(&self, theta: f32) -> Vector3<f32> {
        Vector3::new(theta.cos(), theta.sin(), 0.0)
    }

    /// Farthest any surface point gets from the origin.
    pub fn outer_radius(&self) -> f32 {
        self.ring_radius + self.tube_radius
    }
}

/// Rotate `v` by `angle` radians about the y axis (the torus's central axis).
pub fn rotate_y(v: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (s, c) = angle.sin_cos();
    Vector3::new(v.x * c - v.z * s, v.y, v.x * s + v.z * c)
}

/// Rotate `v` by `angle` radians about the x axis.
pub fn rotate_x(v: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (s, c) = angle.sin_cos();
    Vector3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c)
}

/// Rotate `v` by `angle` radians about the z axis.
pub fn rotate_z(v: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (s, c) = angle.sin_cos();
    Vector3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}

/// Full per-sample transform: sweep the generating circle around the central
/// axis by `phi`, then spin the whole torus by `a` about x and `b` about z.
///
/// The application order is a contract. It reproduces the reference
/// composition `v · Y(phi) · X(a) · Z(b)`; swapping any two stages changes
/// the rendered orientation.
pub fn sweep_and_spin(v: Vector3<f32>, phi: f32, a: f32, b: f32) -> Vector3<f32> {
    rotate_z(rotate_x(rotate_y(v, phi), a), b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).norm() < EPS
    }

    #[test]
    fn test_circle_starts_on_outer_edge() {
        let torus = Torus::new(1.15, 2.0);
        let p = torus.circle_point(0.0);
        assert!(close(p, Vector3::new(3.15, 0.0, 0.0)));
    }

    #[test]
    fn test_circle_top_of_tube() {
        let torus = Torus::new(1.0, 2.0);
        let p = torus.circle_point(FRAC_PI_2);
        assert!(close(p, Vector3::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn test_circle_normal_is_unit() {
        let torus = Torus::new(1.15, 2.0);
        for i in 0..16 {
            let theta = i as f32 * PI / 8.0;
            let n = torus.circle_normal(theta);
            assert!((n.norm() - 1.0).abs() < EPS);
        }
    }

    #[test]
    #[should_panic]
    fn test_self_intersecting_torus_rejected() {
        Torus::new(2.0, 1.0);
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let v = rotate_y(Vector3::new(1.0, 0.0, 0.0), FRAC_PI_2);
        assert!(close(v, Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let v = rotate_x(Vector3::new(0.0, 1.0, 0.0), FRAC_PI_2);
        assert!(close(v, Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let v = rotate_z(Vector3::new(1.0, 0.0, 0.0), FRAC_PI_2);
        assert!(close(v, Vector3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_rotations_preserve_length() {
        let v = Vector3::new(1.2, -0.7, 3.4);
        for f in [rotate_x, rotate_y, rotate_z] {
            assert!((f(v, 0.83).norm() - v.norm()).abs() < EPS);
        }
    }

    #[test]
    fn test_identity_sweep_and_spin() {
        let v = Vector3::new(3.15, 0.0, 0.0);
        assert!(close(sweep_and_spin(v, 0.0, 0.0, 0.0), v));
    }

    #[test]
    fn test_sweep_and_spin_matches_reference_depth() {
        // z after the full rotation is cy*sin(a) + cx*sin(phi)*cos(a).
        let (cx, cy) = (3.0f32, 0.8f32);
        let (phi, a, b) = (0.9f32, 0.4f32, 1.3f32);
        let p = sweep_and_spin(Vector3::new(cx, cy, 0.0), phi, a, b);
        let expected = cy * a.sin() + cx * phi.sin() * a.cos();
        assert!((p.z - expected).abs() < EPS);
    }

    #[test]
    fn test_rotation_order_matters() {
        // Applying the spins before the sweep is a different transform.
        let v = Vector3::new(3.15, 0.6, 0.0);
        let (phi, a, b) = (0.7f32, 0.4f32, 0.2f32);
        let contract = sweep_and_spin(v, phi, a, b);
        let swapped = rotate_y(rotate_x(rotate_z(v, b), a), phi);
        assert!(!close(contract, swapped));
    }
}
