//! 2D affine transforms attached to every label object
//!
//! The matrix follows the usual row-vector convention:
//!
//! ```text
//! x' = m11 * x + m21 * y + dx
//! y' = m12 * x + m22 * y + dy
//! ```
//!
//! On disk the six coefficients are written as `a0..a5` in the order
//! `m11 m12 m21 m22 dx dy`.

/// A 2D affine transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, dx: f64, dy: f64) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            dx,
            dy,
        }
    }

    /// Build from the `a0..a5` coefficient order
    pub fn from_coefficients(a: [f64; 6]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }

    /// Coefficients in `a0..a5` order
    pub fn coefficients(&self) -> [f64; 6] {
        [self.m11, self.m12, self.m21, self.m22, self.dx, self.dy]
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            m11: sx,
            m22: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `degrees`, clockwise on a Y-down canvas
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Apply `self` first, then `other`
    pub fn then(&self, other: &Affine) -> Affine {
        Affine {
            m11: self.m11 * other.m11 + self.m12 * other.m21,
            m12: self.m11 * other.m12 + self.m12 * other.m22,
            m21: self.m21 * other.m11 + self.m22 * other.m21,
            m22: self.m21 * other.m12 + self.m22 * other.m22,
            dx: self.dx * other.m11 + self.dy * other.m21 + other.dx,
            dy: self.dx * other.m12 + self.dy * other.m22 + other.dy,
        }
    }

    /// Map a point through the transform
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.m11 * x + self.m21 * y + self.dx,
            self.m12 * x + self.m22 * y + self.dy,
        )
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn assert_point_eq(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < EPSILON && (actual.1 - expected.1).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_identity_maps_point_unchanged() {
        assert!(Affine::default().is_identity());
        assert_point_eq(Affine::IDENTITY.map(3.0, 4.0), (3.0, 4.0));
    }

    #[test]
    fn test_rotation_90_clockwise() {
        // Right becomes down on a Y-down canvas
        let rot = Affine::rotation(90.0);
        assert_point_eq(rot.map(1.0, 0.0), (0.0, 1.0));
        assert_point_eq(rot.map(0.0, 1.0), (-1.0, 0.0));
    }

    #[test]
    fn test_then_applies_in_order() {
        let t = Affine::scale(2.0, 3.0).then(&Affine::translation(10.0, 20.0));
        assert_point_eq(t.map(1.0, 1.0), (12.0, 23.0));

        let t = Affine::translation(10.0, 20.0).then(&Affine::scale(2.0, 3.0));
        assert_point_eq(t.map(1.0, 1.0), (22.0, 63.0));
    }

    #[test]
    fn test_coefficient_order() {
        let a = Affine::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(a.coefficients(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(Affine::from_coefficients(a.coefficients()), a);
    }
}
