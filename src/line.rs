use crate::point::Point;

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval().
/// A LineSegment is equal to a linear Bezier curve, which is why there is no
/// specialized type for that case.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment {
    pub(crate) start: Point,
    pub(crate) end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        LineSegment { start, end }
    }

    pub fn eval(&self, t: f64) -> Point {
        self.start + (self.end - self.start) * t
    }
}
