use crate::point::Point;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier {
    pub(crate) start: Point,
    pub(crate) ctrl: Point,
    pub(crate) end: Point,
}

impl QuadraticBezier {
    pub fn new(start: Point, ctrl: Point, end: Point) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.start * one_t2 + self.ctrl * 2.0 * one_t * t + self.end * t2
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: f64) -> Point {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl - self.start) * t;
        let ctrl_1bc = self.ctrl + (self.end - self.ctrl) * t;
        // second iteration, final point on the curve
        ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t
    }
}
