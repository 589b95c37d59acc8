use std::ops::{Add, Mul, Sub};

/// Surface coordinates in logical points, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn polar(radius: f32, angle: f32) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[must_use]
    pub fn lerp(self, to: Point, t: f32) -> Self {
        self + (to - self) * t
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

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Negative extents are a host bug; release builds clamp them to zero.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "negative surface bounds {width}x{height}"
        );
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[must_use]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Point at `t` (0..=1) along a polyline, parameterised by arc length.
#[must_use]
pub fn point_along(points: &[Point], t: f32) -> Point {
    let Some(first) = points.first().copied() else {
        return Point::ZERO;
    };
    let total = polyline_length(points);
    if total <= f32::EPSILON {
        return first;
    }

    let mut remaining = t.clamp(0.0, 1.0) * total;
    for pair in points.windows(2) {
        let segment = (pair[1] - pair[0]).length();
        if remaining <= segment {
            let local = if segment > 0.0 {
                remaining / segment
            } else {
                0.0
            };
            return pair[0].lerp(pair[1], local);
        }
        remaining -= segment;
    }
    points.last().copied().unwrap_or(first)
}

#[must_use]
pub fn polyline_length(points: &[Point]) -> f32 {
    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).length())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn point_along_uses_arc_length() {
        let path = [
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 10.0),
        ];
        assert!(close(point_along(&path, 0.0), Point::new(0.0, 0.0)));
        assert!(close(point_along(&path, 0.75), Point::new(30.0, 0.0)));
        assert!(close(point_along(&path, 0.875), Point::new(30.0, 5.0)));
        assert!(close(point_along(&path, 1.0), Point::new(30.0, 10.0)));
    }

    #[test]
    fn point_along_handles_degenerate_paths() {
        assert_eq!(point_along(&[], 0.5), Point::ZERO);
        let single = [Point::new(4.0, 2.0)];
        assert_eq!(point_along(&single, 0.5), Point::new(4.0, 2.0));
        let stacked = [Point::new(1.0, 1.0), Point::new(1.0, 1.0)];
        assert_eq!(point_along(&stacked, 0.9), Point::new(1.0, 1.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let rotated = Point::new(10.0, 0.0).rotated(std::f32::consts::FRAC_PI_2);
        assert!(close(rotated, Point::new(0.0, 10.0)));
    }

    #[test]
    fn zero_bounds_are_empty() {
        assert!(Bounds::new(0.0, 0.0).is_empty());
        assert!(!Bounds::new(10.0, 4.0).is_empty());
        assert_eq!(Bounds::new(10.0, 4.0).min_side(), 4.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative surface bounds")]
    fn negative_bounds_are_fatal_in_debug() {
        let _ = Bounds::new(-1.0, 4.0);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn negative_bounds_clamp_to_zero_in_release() {
        let bounds = Bounds::new(-1.0, 4.0);
        assert_eq!(bounds, Bounds { width: 0.0, height: 4.0 });
        assert!(bounds.is_empty());
    }
}
