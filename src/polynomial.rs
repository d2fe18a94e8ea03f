//! Power-basis parametric equations derived from a segment's control points.
//!
//! The editor canvas has its origin in the top-left corner with y growing
//! downward. Equations are reported in the conventional y-up frame instead,
//! so every control point is mirrored with `y' = height - y` before the
//! Bernstein form is expanded. Evaluation and extremum placement stay in
//! screen space untouched.

use tinyvec::ArrayVec;

use crate::bezier_segment::BezierSegment;
use crate::point::Point;

/// Polynomial in t with coefficients ordered highest degree first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: ArrayVec<[f64; 4]>,
}

impl Polynomial {
    /// Coefficients are rounded to four decimals on entry; the rendered
    /// equation and the extremum solver share the same numbers.
    pub(crate) fn new(coeffs: impl IntoIterator<Item = f64>) -> Self {
        Polynomial {
            coeffs: coeffs.into_iter().map(round4).collect(),
        }
    }

    /// Coefficients ordered highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluate at t using Horner's scheme.
    pub fn eval(&self, t: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * t + c)
    }

    /// Right-hand side of the equation, e.g. `200*t^2 + -200*t + 400`.
    /// Negative coefficients keep their sign after the plus, matching
    /// what the equation panel displays.
    fn rhs(&self) -> String {
        let degree = self.degree();
        let mut out = String::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                out.push_str(" + ");
            }
            match degree - i {
                0 => out.push_str(&format!("{}", c)),
                1 => out.push_str(&format!("{}*t", c)),
                power => out.push_str(&format!("{}*t^{}", c, power)),
            }
        }
        out
    }
}

/// The x(t)/y(t) equation pair for one curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Equations {
    x: Polynomial,
    y: Polynomial,
}

impl Equations {
    /// Expand the control polygon into power-basis form, one polynomial
    /// per axis, with the y axis flipped into the y-up frame.
    pub fn derive(segment: &BezierSegment, canvas_height: f64) -> Self {
        let flip = |p: Point| p.flipped_y(canvas_height);
        match segment {
            BezierSegment::Linear(line) => {
                let (p0, p1) = (flip(line.start), flip(line.end));
                let axis = |a: f64, b: f64| Polynomial::new([b - a, a]);
                Equations {
                    x: axis(p0.x, p1.x),
                    y: axis(p0.y, p1.y),
                }
            }
            BezierSegment::Quadratic(quad) => {
                let (p0, p1, p2) = (flip(quad.start), flip(quad.ctrl), flip(quad.end));
                let axis = |a: f64, b: f64, c: f64| {
                    Polynomial::new([a - 2.0 * b + c, -2.0 * a + 2.0 * b, a])
                };
                Equations {
                    x: axis(p0.x, p1.x, p2.x),
                    y: axis(p0.y, p1.y, p2.y),
                }
            }
            BezierSegment::Cubic(cubic) => {
                let (p0, p1, p2, p3) = (
                    flip(cubic.start),
                    flip(cubic.ctrl1),
                    flip(cubic.ctrl2),
                    flip(cubic.end),
                );
                let axis = |a: f64, b: f64, c: f64, d: f64| {
                    Polynomial::new([
                        -a + 3.0 * b - 3.0 * c + d,
                        3.0 * a - 6.0 * b + 3.0 * c,
                        -3.0 * a + 3.0 * b,
                        a,
                    ])
                };
                Equations {
                    x: axis(p0.x, p1.x, p2.x, p3.x),
                    y: axis(p0.y, p1.y, p2.y, p3.y),
                }
            }
        }
    }

    pub fn x(&self) -> &Polynomial {
        &self.x
    }

    pub fn y(&self) -> &Polynomial {
        &self.y
    }

    pub fn x_equation(&self) -> String {
        format!("x = {}", self.x.rhs())
    }

    pub fn y_equation(&self) -> String {
        format!("y = {}", self.y.rhs())
    }

    /// Both right-hand sides as a coordinate tuple, the clipboard format.
    pub fn as_tuple(&self) -> String {
        format!("({}, {})", self.x.rhs(), self.y.rhs())
    }

    /// Equation pair with the parameter symbol replaced by a concrete value.
    /// Purely textual, exactly as shown when an extremum is substituted in.
    pub fn substitute(&self, value: f64) -> (String, String) {
        let value = value.to_string();
        (
            self.x_equation().replace('t', &value),
            self.y_equation().replace('t', &value),
        )
    }
}

fn round4(value: f64) -> f64 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // keep -0.0 out of rendered equations
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn segment(points: &[Point]) -> BezierSegment {
        BezierSegment::from_points(points).unwrap()
    }

    #[test]
    fn linear_equations_flip_y() {
        let line = segment(&[Point::new(100.0, 100.0), Point::new(300.0, 100.0)]);
        let eq = Equations::derive(&line, 400.0);
        assert_eq!(eq.x_equation(), "x = 200*t + 100");
        assert_eq!(eq.y_equation(), "y = 0*t + 300");
    }

    #[test]
    fn quadratic_equations() {
        let arch = segment(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        ]);
        let eq = Equations::derive(&arch, 400.0);
        assert_eq!(eq.x().coefficients(), &[0.0, 100.0, 0.0]);
        assert_eq!(eq.y().coefficients(), &[200.0, -200.0, 400.0]);
        assert_eq!(eq.x_equation(), "x = 0*t^2 + 100*t + 0");
        assert_eq!(eq.y_equation(), "y = 200*t^2 + -200*t + 400");
    }

    #[test]
    fn cubic_equations() {
        let wave = segment(&[
            Point::new(0.0, 100.0),
            Point::new(33.0, 0.0),
            Point::new(66.0, 200.0),
            Point::new(100.0, 100.0),
        ]);
        let eq = Equations::derive(&wave, 300.0);
        assert_eq!(eq.x().coefficients(), &[1.0, 0.0, 99.0, 0.0]);
        // flipped control heights are 200, 300, 100, 200
        assert_eq!(eq.y().coefficients(), &[600.0, -900.0, 300.0, 200.0]);
    }

    /// Evaluating the derived polynomials must reproduce the curve itself,
    /// up to the y flip.
    #[test]
    fn equations_match_curve_evaluation() {
        let height = 400.0;
        let curve = segment(&[
            Point::new(50.0, 280.0),
            Point::new(120.0, 40.0),
            Point::new(260.0, 40.0),
            Point::new(330.0, 280.0),
        ]);
        let eq = Equations::derive(&curve, height);

        let nsteps = 50;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let p = curve.eval(t);
            assert_abs_diff_eq!(eq.x().eval(t), p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(eq.y().eval(t), height - p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn coefficients_round_to_four_decimals() {
        let line = segment(&[Point::new(0.123456, 0.0), Point::new(1.0, 1.0)]);
        let eq = Equations::derive(&line, 0.0);
        assert_eq!(eq.x().coefficients(), &[0.8765, 0.1235]);
    }

    #[test]
    fn substitution_is_textual() {
        let arch = segment(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        ]);
        let eq = Equations::derive(&arch, 400.0);
        let (x, y) = eq.substitute(0.5);
        assert_eq!(x, "x = 0*0.5^2 + 100*0.5 + 0");
        assert_eq!(y, "y = 200*0.5^2 + -200*0.5 + 400");
    }

    #[test]
    fn tuple_export_strips_axis_prefixes() {
        let line = segment(&[Point::new(100.0, 100.0), Point::new(300.0, 100.0)]);
        let eq = Equations::derive(&line, 400.0);
        assert_eq!(eq.as_tuple(), "(200*t + 100, 0*t + 300)");
    }
}
