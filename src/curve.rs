//! The curve model tying evaluation, equations, extrema and bounds together.

use tinyvec::ArrayVec;

use crate::bezier_segment::{BezierSegment, Degree};
use crate::bounds::BoundingBox;
use crate::error::CurveError;
use crate::extrema::Extrema;
use crate::point::Point;
use crate::polynomial::Equations;
use crate::CURVE_DETAIL;

/// Everything derived from one set of control points. A snapshot is built
/// as a whole and swapped in as a whole, so readers never observe a
/// polyline from one edit and equations from another.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSnapshot {
    /// Pixel-space polyline ready for the canvas.
    pub polyline: Vec<Point>,
    /// Power-basis equation pair in the y-up frame.
    pub equations: Equations,
    /// Filtered extremum parameters per axis.
    pub extrema: Extrema,
    /// The extrema evaluated back onto the curve, in screen space,
    /// ordered like [`Extrema::all`].
    pub extremum_points: Vec<Point>,
}

/// A named, editable Bezier curve of degree one to three.
///
/// Control point edits go through [`BezierCurve::set_control_point`],
/// which rebuilds the snapshot; derived state is only ever read from the
/// current snapshot.
#[derive(Clone, Debug)]
pub struct BezierCurve {
    name: String,
    segment: BezierSegment,
    canvas_height: f64,
    detail: usize,
    snapshot: CurveSnapshot,
    substituted: Option<usize>,
}

impl BezierCurve {
    /// Build a curve from 2, 3 or 4 control points in screen coordinates.
    /// `canvas_height` fixes the y-up frame the equations are reported in.
    pub fn new(
        name: impl Into<String>,
        points: &[Point],
        canvas_height: f64,
    ) -> Result<Self, CurveError> {
        let segment = BezierSegment::from_points(points)?;
        let snapshot = compute_snapshot(&segment, canvas_height, CURVE_DETAIL);
        Ok(BezierCurve {
            name: name.into(),
            segment,
            canvas_height,
            detail: CURVE_DETAIL,
            snapshot,
            substituted: None,
        })
    }

    /// Override the polyline sampling density (minimum 2 samples).
    pub fn with_detail(mut self, detail: usize) -> Self {
        self.detail = detail.max(2);
        self.recompute();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn degree(&self) -> Degree {
        self.segment.degree()
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn control_points(&self) -> ArrayVec<[Point; 4]> {
        self.segment.control_points()
    }

    /// The current derived state. Always consistent with the control
    /// points as of the last edit.
    pub fn snapshot(&self) -> &CurveSnapshot {
        &self.snapshot
    }

    /// Move one control point and rebuild the snapshot. Panics if `index`
    /// is outside the curve's point count.
    pub fn set_control_point(&mut self, index: usize, point: Point) {
        self.segment.set_control_point(index, point);
        self.recompute();
    }

    /// Put every control point back on its default layout for the given
    /// canvas size.
    pub fn reset_control_points(&mut self, canvas_width: f64) {
        let defaults = default_control_points(self.degree(), canvas_width, self.canvas_height);
        for (index, point) in defaults.iter().enumerate() {
            self.segment.set_control_point(index, *point);
        }
        self.recompute();
    }

    /// Rebuild polyline, equations, extrema and extremum points from the
    /// current control points. Any active substitution is cleared.
    pub fn recompute(&mut self) -> &CurveSnapshot {
        self.snapshot = compute_snapshot(&self.segment, self.canvas_height, self.detail);
        self.substituted = None;
        log::debug!(
            "recomputed '{}' ({}): {} x-extrema, {} y-extrema",
            self.name,
            self.degree(),
            self.snapshot.extrema.x.len(),
            self.snapshot.extrema.y.len(),
        );
        &self.snapshot
    }

    /// Bounding box over the endpoints and the current extremum points.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_extent(
            [self.segment.start(), self.segment.end()],
            &self.snapshot.extremum_points,
        )
    }

    /// Advance the substitution cursor through the extrema: none, first,
    /// second, ..., last, and back to none. Returns the equations with the
    /// now-selected extremum substituted in, if any is selected.
    pub fn cycle_substituted_extremum(&mut self) -> Option<(String, String)> {
        let total = self.snapshot.extrema.all().len();
        self.substituted = if total == 0 {
            None
        } else {
            match self.substituted {
                None => Some(0),
                Some(index) if index + 1 < total => Some(index + 1),
                Some(_) => None,
            }
        };
        self.substituted_equations()
    }

    /// Index into [`Extrema::all`] of the currently substituted extremum.
    pub fn substituted_extremum(&self) -> Option<usize> {
        self.substituted
    }

    /// The equation pair with the selected extremum substituted for t.
    pub fn substituted_equations(&self) -> Option<(String, String)> {
        let index = self.substituted?;
        let value = self.snapshot.extrema.all()[index];
        Some(self.snapshot.equations.substitute(value))
    }
}

/// Default control point layout for a fresh curve: x evenly spaced across
/// the canvas, endpoints in the lower third, interior points in the upper
/// third, snapped to whole pixels.
pub fn default_control_points(
    degree: Degree,
    canvas_width: f64,
    canvas_height: f64,
) -> ArrayVec<[Point; 4]> {
    let count = degree.point_count();
    let mut points = ArrayVec::new();
    for i in 0..count {
        let x = canvas_width * (i + 1) as f64 / (count + 1) as f64;
        let y = if i == 0 || i == count - 1 {
            canvas_height * 2.0 / 3.0
        } else {
            canvas_height / 3.0
        };
        points.push(Point::new(x, y).rounded());
    }
    points
}

fn compute_snapshot(segment: &BezierSegment, canvas_height: f64, detail: usize) -> CurveSnapshot {
    let polyline = segment.polyline(detail);
    let equations = Equations::derive(segment, canvas_height);
    let extrema = Extrema::solve(&equations, segment.degree());
    let extremum_points = extrema
        .all()
        .iter()
        .map(|t| segment.eval_rounded(*t))
        .collect();
    CurveSnapshot {
        polyline,
        equations,
        extrema,
        extremum_points,
    }
}
