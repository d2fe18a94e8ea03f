//! Curve mathematics for an interactive 2D Bezier editor.
//!
//! Curves of degree one to three live in screen space: the origin is the
//! top-left corner of the canvas and y grows downward. Evaluation and
//! extremum placement stay in that frame and snap to whole pixels, while
//! the parametric equations are reported in the conventional y-up frame
//! (control points are mirrored with `y' = height - y` before expansion).
//!
//! [`BezierCurve`] is the model an editor holds per curve. Every edit
//! rebuilds a [`CurveSnapshot`] with the polyline, the power-basis
//! equations, the axis extrema and their on-curve points, so all derived
//! state always belongs to the same set of control points.
//!
//! ```
//! use camber::{BezierCurve, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(50.0, 100.0),
//!     Point::new(100.0, 0.0),
//! ];
//! let curve = BezierCurve::new("Quadratic #1", &points, 400.0).unwrap();
//!
//! let snapshot = curve.snapshot();
//! assert_eq!(snapshot.equations.x_equation(), "x = 0*t^2 + 100*t + 0");
//! assert_eq!(snapshot.extrema.y.as_slice(), &[0.5]);
//! ```

mod bezier_segment;
mod bounds;
mod cubic_bezier;
mod curve;
mod error;
mod extrema;
mod line;
mod point;
mod polynomial;
mod project;
mod quadratic_bezier;

pub use bezier_segment::{BezierSegment, Degree};
pub use bounds::BoundingBox;
pub use cubic_bezier::CubicBezier;
pub use curve::{default_control_points, BezierCurve, CurveSnapshot};
pub use error::{CurveError, ProjectError};
pub use extrema::Extrema;
pub use line::LineSegment;
pub use point::Point;
pub use polynomial::{Equations, Polynomial};
pub use project::{normalize_name, Project};
pub use quadratic_bezier::QuadraticBezier;

/// Tolerance for near-zero tests in the extremum solver (degenerate
/// leading coefficients and discriminants).
pub const EPSILON: f64 = 1e-6;

/// Default number of polyline samples for curved segments.
pub const CURVE_DETAIL: usize = 100;
