//! Sum type for specialized Bezier segments.

use core::fmt;

use tinyvec::ArrayVec;

use crate::cubic_bezier::CubicBezier;
use crate::error::CurveError;
use crate::line::LineSegment;
use crate::point::Point;
use crate::quadratic_bezier::QuadraticBezier;

/// Degree of a Bezier segment, keyed by its control point count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Degree {
    Linear,
    Quadratic,
    Cubic,
}

impl Degree {
    /// Map a control point count to a degree, rejecting anything
    /// outside 2..=4.
    pub fn from_point_count(count: usize) -> Result<Self, CurveError> {
        match count {
            2 => Ok(Degree::Linear),
            3 => Ok(Degree::Quadratic),
            4 => Ok(Degree::Cubic),
            other => Err(CurveError::InvalidPointCount(other)),
        }
    }

    pub fn point_count(self) -> usize {
        match self {
            Degree::Linear => 2,
            Degree::Quadratic => 3,
            Degree::Cubic => 4,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Degree::Linear => "Linear",
            Degree::Quadratic => "Quadratic",
            Degree::Cubic => "Cubic",
        };
        f.write_str(label)
    }
}

/// Sum type for line/quadratic/cubic Bezier segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BezierSegment {
    Linear(LineSegment),
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
}

impl BezierSegment {
    /// Build a segment from a control point list, picking the degree
    /// from the point count.
    pub fn from_points(points: &[Point]) -> Result<Self, CurveError> {
        match *points {
            [start, end] => Ok(BezierSegment::Linear(LineSegment::new(start, end))),
            [start, ctrl, end] => Ok(BezierSegment::Quadratic(QuadraticBezier::new(
                start, ctrl, end,
            ))),
            [start, ctrl1, ctrl2, end] => Ok(BezierSegment::Cubic(CubicBezier::new(
                start, ctrl1, ctrl2, end,
            ))),
            _ => Err(CurveError::InvalidPointCount(points.len())),
        }
    }

    pub fn degree(&self) -> Degree {
        match self {
            BezierSegment::Linear(..) => Degree::Linear,
            BezierSegment::Quadratic(..) => Degree::Quadratic,
            BezierSegment::Cubic(..) => Degree::Cubic,
        }
    }

    /// Evaluate the segment at `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        match self {
            BezierSegment::Linear(segment) => segment.eval(t),
            BezierSegment::Quadratic(segment) => segment.eval(t),
            BezierSegment::Cubic(segment) => segment.eval(t),
        }
    }

    /// Evaluate the segment at `t` and snap the result to the pixel grid.
    /// This is the evaluation the editor canvas works with.
    pub fn eval_rounded(&self, t: f64) -> Point {
        self.eval(t).rounded()
    }

    /// Return the segment start point.
    pub fn start(&self) -> Point {
        match self {
            BezierSegment::Linear(segment) => segment.start,
            BezierSegment::Quadratic(segment) => segment.start,
            BezierSegment::Cubic(segment) => segment.start,
        }
    }

    #[inline]
    /// Return the segment end point.
    pub fn end(&self) -> Point {
        match self {
            BezierSegment::Linear(segment) => segment.end,
            BezierSegment::Quadratic(segment) => segment.end,
            BezierSegment::Cubic(segment) => segment.end,
        }
    }

    /// Control points in curve order, start to end.
    pub fn control_points(&self) -> ArrayVec<[Point; 4]> {
        let mut points = ArrayVec::new();
        match self {
            BezierSegment::Linear(segment) => {
                points.push(segment.start);
                points.push(segment.end);
            }
            BezierSegment::Quadratic(segment) => {
                points.push(segment.start);
                points.push(segment.ctrl);
                points.push(segment.end);
            }
            BezierSegment::Cubic(segment) => {
                points.push(segment.start);
                points.push(segment.ctrl1);
                points.push(segment.ctrl2);
                points.push(segment.end);
            }
        }
        points
    }

    /// Move one control point. Panics if `index` is outside the segment's
    /// point count.
    pub fn set_control_point(&mut self, index: usize, point: Point) {
        let slot = match (self, index) {
            (BezierSegment::Linear(segment), 0) => &mut segment.start,
            (BezierSegment::Linear(segment), 1) => &mut segment.end,
            (BezierSegment::Quadratic(segment), 0) => &mut segment.start,
            (BezierSegment::Quadratic(segment), 1) => &mut segment.ctrl,
            (BezierSegment::Quadratic(segment), 2) => &mut segment.end,
            (BezierSegment::Cubic(segment), 0) => &mut segment.start,
            (BezierSegment::Cubic(segment), 1) => &mut segment.ctrl1,
            (BezierSegment::Cubic(segment), 2) => &mut segment.ctrl2,
            (BezierSegment::Cubic(segment), 3) => &mut segment.end,
            (segment, index) => panic!(
                "control point index {} out of bounds for {} segment",
                index,
                segment.degree()
            ),
        };
        *slot = point;
    }

    /// Sample the segment into a pixel-space polyline of `detail` points.
    /// A linear segment needs no sampling and yields its two endpoints.
    pub fn polyline(&self, detail: usize) -> Vec<Point> {
        if let BezierSegment::Linear(segment) = self {
            return vec![segment.start.rounded(), segment.end.rounded()];
        }
        let steps = detail.max(2);
        let mut points = Vec::with_capacity(steps);
        for i in 0..steps {
            let t = i as f64 / (steps - 1) as f64;
            points.push(self.eval_rounded(t));
        }
        points
    }
}

impl From<LineSegment> for BezierSegment {
    fn from(s: LineSegment) -> Self {
        BezierSegment::Linear(s)
    }
}

impl From<QuadraticBezier> for BezierSegment {
    fn from(s: QuadraticBezier) -> Self {
        BezierSegment::Quadratic(s)
    }
}

impl From<CubicBezier> for BezierSegment {
    fn from(s: CubicBezier) -> Self {
        BezierSegment::Cubic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_arch() -> BezierSegment {
        BezierSegment::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn from_points_picks_degree_by_count() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 10.0),
        ];
        assert_eq!(
            BezierSegment::from_points(&points[..2]).unwrap().degree(),
            Degree::Linear
        );
        assert_eq!(
            BezierSegment::from_points(&points[..3]).unwrap().degree(),
            Degree::Quadratic
        );
        assert_eq!(
            BezierSegment::from_points(&points).unwrap().degree(),
            Degree::Cubic
        );
    }

    #[test]
    fn from_points_rejects_bad_counts() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(
            BezierSegment::from_points(&[p]),
            Err(CurveError::InvalidPointCount(1))
        );
        assert_eq!(
            BezierSegment::from_points(&[p; 5]),
            Err(CurveError::InvalidPointCount(5))
        );
    }

    #[test]
    fn eval_rounded_snaps_to_pixels() {
        let segment = BezierSegment::from_points(&[
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
        ])
        .unwrap();
        assert_eq!(segment.eval_rounded(0.5), Point::new(200.0, 100.0));

        // a third of the way along lands between pixels and gets snapped
        let third = segment.eval(1.0 / 3.0);
        assert!(third.x.fract() != 0.0);
        assert_eq!(segment.eval_rounded(1.0 / 3.0), third.rounded());
    }

    #[test]
    fn polyline_samples_curved_segments() {
        let segment = quad_arch();
        let polyline = segment.polyline(100);
        assert_eq!(polyline.len(), 100);
        assert_eq!(polyline[0], segment.start());
        assert_eq!(polyline[99], segment.end());
        // the arch apex shows up in the middle sample
        assert_eq!(polyline[50], Point::new(51.0, 50.0));
    }

    #[test]
    fn polyline_of_line_is_its_endpoints() {
        let segment = BezierSegment::from_points(&[
            Point::new(100.0, 100.0),
            Point::new(300.0, 200.0),
        ])
        .unwrap();
        assert_eq!(
            segment.polyline(100),
            vec![Point::new(100.0, 100.0), Point::new(300.0, 200.0)]
        );
    }

    #[test]
    fn set_control_point_moves_one_point() {
        let mut segment = quad_arch();
        segment.set_control_point(1, Point::new(50.0, -100.0));
        assert_eq!(segment.control_points()[1], Point::new(50.0, -100.0));
        assert_eq!(segment.control_points()[0], Point::new(0.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_control_point_rejects_bad_index() {
        let mut segment = quad_arch();
        segment.set_control_point(3, Point::new(0.0, 0.0));
    }

    #[test]
    fn degree_labels() {
        assert_eq!(Degree::Linear.to_string(), "Linear");
        assert_eq!(Degree::Quadratic.to_string(), "Quadratic");
        assert_eq!(Degree::Cubic.to_string(), "Cubic");
        assert_eq!(Degree::from_point_count(4), Ok(Degree::Cubic));
        assert_eq!(
            Degree::from_point_count(7),
            Err(CurveError::InvalidPointCount(7))
        );
    }
}
