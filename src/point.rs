use core::ops::{Add, Mul, Sub};

/// Point in 2D screen space. The y axis grows downward, matching the
/// canvas the control points are edited on.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Snap both coordinates to the nearest integer (pixel position).
    pub fn rounded(self) -> Self {
        Point {
            x: self.x.round(),
            y: self.y.round(),
        }
    }

    pub fn squared_length(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Mirror the y coordinate into a y-up frame of the given height.
    pub(crate) fn flipped_y(self, canvas_height: f64) -> Self {
        Point {
            x: self.x,
            y: canvas_height - self.y,
        }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, scalar: f64) -> Point {
        Point {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}
