use crate::pattern_lock::geometry::{Dot, Layout, Point};

/// Circular hit region whose diameter equals the drawn dot size.
pub fn is_within_dot(point: Point, dot: &Dot, dot_size: f32) -> bool {
    point.distance(dot.center) <= dot_size / 2.0
}

/// Lowest-index dot containing `point`. NaN coordinates never hit.
pub fn find_dot_at(point: Point, layout: &Layout, dot_size: f32) -> Option<usize> {
    layout
        .dots()
        .iter()
        .find(|dot| is_within_dot(point, dot, dot_size))
        .map(|dot| dot.index)
}

/// Maps host client coordinates into canvas-local intrinsic pixels.
///
/// The displayed canvas may be stretched relative to its intrinsic size
/// (responsive layout, pixel density), so each axis is scaled by
/// `intrinsic / display` after translating by the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub origin: Point,
    pub display_size: (f32, f32),
    pub intrinsic_size: (f32, f32),
}

impl CanvasTransform {
    pub fn identity(size: f32) -> Self {
        Self {
            origin: Point::default(),
            display_size: (size, size),
            intrinsic_size: (size, size),
        }
    }

    pub fn scale(&self) -> (f32, f32) {
        (
            axis_scale(self.intrinsic_size.0, self.display_size.0),
            axis_scale(self.intrinsic_size.1, self.display_size.1),
        )
    }

    pub fn to_canvas(&self, client: Point) -> Point {
        let (sx, sy) = self.scale();
        Point {
            x: (client.x - self.origin.x) * sx,
            y: (client.y - self.origin.y) * sy,
        }
    }

    pub fn to_client(&self, canvas: Point) -> Point {
        let (sx, sy) = self.scale();
        Point {
            x: canvas.x / sx + self.origin.x,
            y: canvas.y / sy + self.origin.y,
        }
    }

    pub fn contains_client(&self, client: Point) -> bool {
        client.x >= self.origin.x
            && client.y >= self.origin.y
            && client.x <= self.origin.x + self.display_size.0
            && client.y <= self.origin.y + self.display_size.1
    }
}

fn axis_scale(intrinsic: f32, display: f32) -> f32 {
    if display > 0.0 && display.is_finite() && intrinsic.is_finite() {
        intrinsic / display
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern_lock::geometry::DEFAULT_ARITY;

    #[test]
    fn boundary_of_radius_counts_as_hit() {
        let layout = Layout::new(300.0, DEFAULT_ARITY);
        let dot = layout.dots()[0];
        assert!(is_within_dot(Point::new(85.0, 75.0), &dot, 20.0));
        assert!(!is_within_dot(Point::new(85.1, 75.0), &dot, 20.0));
    }

    #[test]
    fn finds_dot_under_point() {
        let layout = Layout::new(300.0, DEFAULT_ARITY);
        assert_eq!(find_dot_at(Point::new(150.0, 150.0), &layout, 20.0), Some(4));
        assert_eq!(find_dot_at(Point::new(228.0, 72.0), &layout, 20.0), Some(2));
        assert_eq!(find_dot_at(Point::new(110.0, 110.0), &layout, 20.0), None);
    }

    #[test]
    fn overlapping_dots_resolve_to_lowest_index() {
        let layout = Layout::new(300.0, DEFAULT_ARITY);
        let between = Point::new(112.5, 75.0);
        assert_eq!(find_dot_at(between, &layout, 200.0), Some(0));
    }

    #[test]
    fn malformed_coordinates_never_hit() {
        let layout = Layout::new(300.0, DEFAULT_ARITY);
        assert_eq!(find_dot_at(Point::new(f32::NAN, 75.0), &layout, 20.0), None);
        assert_eq!(find_dot_at(Point::new(-1e9, 1e9), &layout, 20.0), None);
    }

    #[test]
    fn transform_scales_by_intrinsic_over_display() {
        let transform = CanvasTransform {
            origin: Point::new(10.0, 20.0),
            display_size: (150.0, 150.0),
            intrinsic_size: (300.0, 300.0),
        };
        assert_eq!(transform.to_canvas(Point::new(85.0, 95.0)), Point::new(150.0, 150.0));
        assert_eq!(transform.to_client(Point::new(150.0, 150.0)), Point::new(85.0, 95.0));
        assert!(transform.contains_client(Point::new(160.0, 170.0)));
        assert!(!transform.contains_client(Point::new(161.0, 170.0)));
    }

    #[test]
    fn zero_display_size_falls_back_to_unit_scale() {
        let transform = CanvasTransform {
            origin: Point::default(),
            display_size: (0.0, 100.0),
            intrinsic_size: (300.0, 300.0),
        };
        assert_eq!(transform.scale(), (1.0, 3.0));
    }
}
