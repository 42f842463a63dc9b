//! 2D vector helpers for path generation
//!
//! All values are in millimeters and radians. `Point` doubles as a vector;
//! the free functions cover what the drawing layer needs: polar points,
//! circle tangents and polygon outsetting for kerf compensation.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point or vector in the drawing plane (mm)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate in mm.
    pub x: f64,
    /// Y coordinate in mm.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point from coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scale to unit length. The zero vector stays zero.
    pub fn normalized(self) -> Point {
        let l = self.length();
        if l == 0.0 {
            Point::ZERO
        } else {
            Point::new(self.x / l, self.y / l)
        }
    }

    /// Clip to a maximum length, preserving direction.
    pub fn clipped(self, max_len: f64) -> Point {
        let l = self.length();
        if l > max_len {
            self * (max_len / l)
        } else {
            self
        }
    }

    /// Counterclockwise orthogonal vector.
    pub fn orthogonal(self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Dot product.
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate around the origin by `angle` radians.
    pub fn rotated(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Point on a circle of radius `r` at angle `a` (radians).
pub fn circle_point(r: f64, a: f64) -> Point {
    Point::new(r * a.cos(), r * a.sin())
}

/// Angle and length of a tangent from the origin to a circle of
/// radius `r` centered at `(x, y)`.
///
/// Returns `None` when the origin lies inside the circle.
pub fn tangent(x: f64, y: f64, r: f64) -> Option<(f64, f64)> {
    let l1 = Point::new(x, y).length();
    if r > l1 {
        return None;
    }
    let a1 = y.atan2(x);
    let a2 = (r / l1).asin();
    let l2 = a2.cos() * l1;
    Some((a1 + a2, l2))
}

/// Outset a polygon outline by `k`.
///
/// Each point moves along the bisector of its adjacent segment normals,
/// scaled so that both segments end up offset by exactly `k`. With
/// `closed` false the first and last points move along a single normal.
pub fn kerf_offset(points: &[Point], k: f64, closed: bool) -> Vec<Point> {
    let lp = points.len();
    let mut result = Vec::with_capacity(lp);

    for i in 0..lp {
        let prev = points[(i + lp - 1) % lp];
        let next = points[(i + 1) % lp];
        let mut v1 = (points[i] - prev).normalized().orthogonal();
        let mut v2 = (next - points[i]).normalized().orthogonal();

        if !closed {
            if i == 0 {
                v1 = v2;
            }
            if i == lp - 1 {
                v2 = v1;
            }
        }
        let d = (v1 + v2).normalized();
        let cos_alpha = v1.dot(d);
        result.push(points[i] + d * (-k / cos_alpha));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(Point::ZERO.normalized(), Point::ZERO);
    }

    #[test]
    fn test_circle_point_quadrants() {
        assert!(close(circle_point(2.0, 0.0), Point::new(2.0, 0.0)));
        assert!(close(
            circle_point(2.0, std::f64::consts::FRAC_PI_2),
            Point::new(0.0, 2.0)
        ));
    }

    #[test]
    fn test_tangent_known_values() {
        // Circle at (0, 10), radius 5: tangent length is sqrt(100 - 25).
        let (a, l) = tangent(0.0, 10.0, 5.0).unwrap();
        assert!((l - 75.0_f64.sqrt()).abs() < EPS);
        assert!((a - (std::f64::consts::FRAC_PI_2 + (0.5_f64).asin())).abs() < EPS);
        // Origin inside the circle has no tangent.
        assert!(tangent(1.0, 0.0, 2.0).is_none());
    }

    #[test]
    fn test_kerf_offset_square_grows() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        // Counterclockwise outline, normals point inward, positive k grows it.
        let out = kerf_offset(&square, 1.0, true);
        assert!(close(out[0], Point::new(-1.0, -1.0)));
        assert!(close(out[2], Point::new(11.0, 11.0)));
    }

    #[test]
    fn test_kerf_offset_open_polyline_ends() {
        let line = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ];
        let out = kerf_offset(&line, 1.0, false);
        // End points move straight along the segment normal.
        assert!(close(out[0], Point::new(0.0, -1.0)));
        assert!(close(out[2], Point::new(20.0, -1.0)));
    }

    proptest! {
        #[test]
        fn orthogonal_is_perpendicular(x in -1e3..1e3f64, y in -1e3..1e3f64) {
            let v = Point::new(x, y);
            prop_assert!(v.dot(v.orthogonal()).abs() < 1e-6);
        }

        #[test]
        fn rotation_preserves_length(x in -1e3..1e3f64, y in -1e3..1e3f64, a in -10.0..10.0f64) {
            let v = Point::new(x, y);
            prop_assert!((v.rotated(a).length() - v.length()).abs() < 1e-6);
        }
    }
}
