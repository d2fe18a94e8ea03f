use crate::point::Point;

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub(crate) start: Point,
    pub(crate) ctrl1: Point,
    pub(crate) ctrl2: Point,
    pub(crate) end: Point,
}

impl CubicBezier {
    pub fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Evaluate the curve at t by direct evaluation of the polynomial (not numerically stable)
    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.start * (one_t2 * one_t)
            + self.ctrl1 * (3.0 * one_t2 * t)
            + self.ctrl2 * (3.0 * one_t * t2)
            + self.end * (t2 * t)
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: f64) -> Point {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }
}
