//! Axis extremum solving on the derived parametric equations.
//!
//! An extremum here is a parameter value where x(t) or y(t) has a critical
//! point, found by solving the derivative polynomial per axis. Candidates
//! are filtered against a validity window keyed by the curve degree before
//! they are reported.

use tinyvec::ArrayVec;

use crate::bezier_segment::Degree;
use crate::polynomial::Equations;
use crate::EPSILON;

/// Critical parameter values of x(t) and y(t), already filtered and
/// rounded to three decimals. At most two survive per axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extrema {
    pub x: ArrayVec<[f64; 2]>,
    pub y: ArrayVec<[f64; 2]>,
}

impl Extrema {
    /// Solve both axis polynomials of the given degree for their critical
    /// points.
    ///
    /// Degenerate axes never abort the solve: a vanishing leading
    /// coefficient yields the sentinel -1.0 (or a lower-order fallback for
    /// cubics), which the validity window then drops.
    pub fn solve(equations: &Equations, degree: Degree) -> Self {
        let mut extrema = Extrema::default();
        solve_axis(equations.x().coefficients(), degree, &mut extrema.x);
        solve_axis(equations.y().coefficients(), degree, &mut extrema.y);
        extrema
    }

    /// Every surviving extremum, x axis first, in solver order.
    pub fn all(&self) -> ArrayVec<[f64; 4]> {
        self.x.iter().chain(self.y.iter()).copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }

    /// One-line report for the x axis, e.g. `Extremum in X at t = 0.5`.
    pub fn x_summary(&self) -> String {
        axis_summary("X", &self.x)
    }

    /// One-line report for the y axis.
    pub fn y_summary(&self) -> String {
        axis_summary("Y", &self.y)
    }
}

fn axis_summary(axis: &str, values: &[f64]) -> String {
    if values.is_empty() {
        return format!("No Extremum in {}", axis);
    }
    let joined = values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("Extremum in {} at t = {}", axis, joined)
}

fn solve_axis(coeffs: &[f64], degree: Degree, out: &mut ArrayVec<[f64; 2]>) {
    match degree {
        // a line has no interior critical point; the slope itself is kept
        // as the candidate and the window decides whether to report it
        Degree::Linear => out.push(coeffs[0]),
        Degree::Quadratic => out.push(quadratic_critical_point(coeffs)),
        Degree::Cubic => cubic_critical_points(coeffs, out),
    }
    out.retain(|t| in_window(degree, *t));
    for t in out.iter_mut() {
        *t = round3(*t);
    }
}

/// Critical point of a*t^2 + b*t + c. A vanishing leading coefficient
/// (compared exactly, not against the tolerance) yields -1.0, which sits
/// outside every validity window.
fn quadratic_critical_point(coeffs: &[f64]) -> f64 {
    if coeffs[0] != 0.0 {
        coeffs[1] / (-2.0 * coeffs[0])
    } else {
        -1.0
    }
}

/// Critical points of a*t^3 + b*t^2 + c*t + d via the roots of its
/// derivative. The discriminant is checked before the degeneracy of the
/// leading coefficient; a near-zero leading coefficient falls back to the
/// critical point of the remaining quadratic part.
fn cubic_critical_points(coeffs: &[f64], out: &mut ArrayVec<[f64; 2]>) {
    let a = 3.0 * coeffs[0];
    let b = 2.0 * coeffs[1];
    let c = coeffs[2];

    let discriminant = b * b - 4.0 * a * c;
    if !(discriminant > 0.0 || discriminant.abs() < EPSILON) {
        return;
    }
    if a.abs() < EPSILON {
        log::trace!("cubic leading coefficient near zero, solving quadratic part instead");
        out.push(quadratic_critical_point(&coeffs[1..]));
        return;
    }
    // clamp tiny negative discriminants left over from the tolerance check
    let sqrt_d = discriminant.max(0.0).sqrt();
    out.push((-b + sqrt_d) / (2.0 * a));
    out.push((-b - sqrt_d) / (2.0 * a));
}

fn in_window(degree: Degree, t: f64) -> bool {
    match degree {
        Degree::Linear => t > 0.0 && t <= 1.0,
        Degree::Quadratic | Degree::Cubic => (0.0..1.0).contains(&t),
    }
}

fn round3(value: f64) -> f64 {
    let rounded = (value * 1_000.0).round() / 1_000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
