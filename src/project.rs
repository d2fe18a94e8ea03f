//! Plain-text project records.
//!
//! A record is line oriented: the project name, then an optional tracing
//! image path (blank when unset), then one curve per line as
//! semicolon-separated `x,y` integer pairs. The curve degree is implied
//! by the number of pairs on the line.

use crate::bezier_segment::Degree;
use crate::curve::BezierCurve;
use crate::error::{CurveError, ProjectError};
use crate::point::Point;

/// A parsed project record, not yet turned into curve models.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub name: String,
    pub image: Option<String>,
    pub curves: Vec<Vec<Point>>,
}

impl Project {
    /// Parse a record. Structure is validated here (both header lines must
    /// exist, every pair must be two integers); point counts are checked
    /// later when curves are built.
    pub fn parse(text: &str) -> Result<Self, ProjectError> {
        let mut lines = text.lines().map(str::trim);
        let name = lines
            .next()
            .ok_or(ProjectError::MissingLine("project name"))?
            .to_string();
        let image_line = lines.next().ok_or(ProjectError::MissingLine("image path"))?;
        let image = if image_line.is_empty() {
            None
        } else {
            Some(image_line.to_string())
        };

        let mut curves = Vec::new();
        for (index, line) in lines.enumerate() {
            // header is two lines, so curve lines are 1-based from 3
            curves.push(parse_points(line, index + 3)?);
        }
        log::debug!("parsed project '{}' with {} curves", name, curves.len());
        Ok(Project { name, image, curves })
    }

    /// Render the record back to text, coordinates as whole pixels.
    /// Parsing the result yields this project again.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push('\n');
        if let Some(image) = &self.image {
            out.push_str(image);
        }
        out.push('\n');
        for points in &self.curves {
            let line = points
                .iter()
                .map(|p| format!("{},{}", p.x.round() as i64, p.y.round() as i64))
                .collect::<Vec<_>>()
                .join(";");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Build curve models from the stored point lists, named by degree in
    /// order of appearance (`Linear #1`, `Cubic #1`, `Linear #2`, ...).
    pub fn reconstruct(&self, canvas_height: f64) -> Result<Vec<BezierCurve>, CurveError> {
        let mut ordinals = [0usize; 3];
        let mut curves = Vec::with_capacity(self.curves.len());
        for points in &self.curves {
            let degree = Degree::from_point_count(points.len())?;
            let slot = match degree {
                Degree::Linear => &mut ordinals[0],
                Degree::Quadratic => &mut ordinals[1],
                Degree::Cubic => &mut ordinals[2],
            };
            *slot += 1;
            let name = format!("{} #{}", degree, *slot);
            curves.push(BezierCurve::new(name, points, canvas_height)?);
        }
        Ok(curves)
    }
}

/// Normalize a user-chosen project name for storage: trimmed, lowercased,
/// spaces replaced with underscores.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

fn parse_points(line: &str, line_number: usize) -> Result<Vec<Point>, ProjectError> {
    let malformed = |pair: &str| ProjectError::MalformedPair {
        line: line_number,
        pair: pair.to_string(),
    };

    let mut points = Vec::new();
    for pair in line.split(';') {
        let mut parts = pair.split(',');
        let x = parts.next().unwrap_or("");
        let y = parts.next().ok_or_else(|| malformed(pair))?;
        if parts.next().is_some() {
            return Err(malformed(pair));
        }
        let x: i64 = x.trim().parse().map_err(|_| malformed(pair))?;
        let y: i64 = y.trim().parse().map_err(|_| malformed(pair))?;
        points.push(Point::new(x as f64, y as f64));
    }
    Ok(points)
}
