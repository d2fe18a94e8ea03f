use crate::point::Point;

/// Axis-aligned bounding box in screen coordinates, so the top edge has
/// the smaller y value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Span the box over the curve endpoints and its evaluated extremum
    /// points. Interior control points are not candidates; a curve whose
    /// extrema lie outside the validity window is bounded by its endpoints
    /// alone, which can undershoot the true extent.
    pub fn from_extent(endpoints: [Point; 2], extremum_points: &[Point]) -> Self {
        let [a, b] = endpoints;
        let mut bounds = BoundingBox {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        };
        for point in extremum_points {
            bounds.include(*point);
        }
        bounds
    }

    fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    /// Corners in drawing order: clockwise from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_alone_span_the_box() {
        let bounds = BoundingBox::from_extent(
            [Point::new(300.0, 100.0), Point::new(100.0, 250.0)],
            &[],
        );
        assert_eq!(
            bounds,
            BoundingBox {
                min_x: 100.0,
                min_y: 100.0,
                max_x: 300.0,
                max_y: 250.0,
            }
        );
    }

    #[test]
    fn extremum_points_widen_the_box() {
        let bounds = BoundingBox::from_extent(
            [Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            &[Point::new(50.0, 50.0)],
        );
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 50.0);
        assert_eq!(
            bounds.corners(),
            [
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(0.0, 50.0),
            ]
        );
    }
}
