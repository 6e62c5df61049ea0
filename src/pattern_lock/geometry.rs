use serde::{Deserialize, Serialize};

/// Grid arity used when nothing else is configured (a 3x3 grid).
pub const DEFAULT_ARITY: usize = 3;

/// Canvas-pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from(value: (f32, f32)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub index: usize,
    pub center: Point,
}

/// Dot centers for one canvas size, in row-major index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    size: f32,
    arity: usize,
    dots: Vec<Dot>,
}

impl Layout {
    /// Dots are spaced `size / (arity + 1)` apart and inset one spacing
    /// unit from the top-left edge.
    pub fn new(size: f32, arity: usize) -> Self {
        let arity = arity.max(1);
        let spacing = if size.is_finite() && size > 0.0 {
            size / (arity as f32 + 1.0)
        } else {
            0.0
        };
        let mut dots = Vec::with_capacity(arity * arity);
        for row in 0..arity {
            for col in 0..arity {
                dots.push(Dot {
                    index: row * arity + col,
                    center: Point {
                        x: spacing + col as f32 * spacing,
                        y: spacing + row as f32 * spacing,
                    },
                });
            }
        }
        Self { size, arity, dots }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn spacing(&self) -> f32 {
        self.dots
            .first()
            .map(|dot| dot.center.x)
            .unwrap_or_default()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn center(&self, index: usize) -> Option<Point> {
        self.dots.get(index).map(|dot| dot.center)
    }
}

/// Keeps the last computed layout and rebuilds it only when the size or
/// arity changes.
#[derive(Debug, Clone)]
pub struct LayoutCache {
    layout: Layout,
}

impl LayoutCache {
    pub fn new(size: f32, arity: usize) -> Self {
        Self {
            layout: Layout::new(size, arity),
        }
    }

    pub fn get(&mut self, size: f32, arity: usize) -> &Layout {
        if self.layout.size != size || self.layout.arity != arity.max(1) {
            self.layout = Layout::new(size, arity);
        }
        &self.layout
    }

    pub fn current(&self) -> &Layout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_inset_by_quarter_spacing() {
        let layout = Layout::new(300.0, DEFAULT_ARITY);
        assert_eq!(layout.len(), 9);
        assert_eq!(layout.center(0), Some(Point::new(75.0, 75.0)));
        assert_eq!(layout.center(4), Some(Point::new(150.0, 150.0)));
        assert_eq!(layout.center(8), Some(Point::new(225.0, 225.0)));
        assert_eq!(layout.center(2), Some(Point::new(225.0, 75.0)));
        assert_eq!(layout.center(9), None);
    }

    #[test]
    fn indices_are_row_major() {
        let layout = Layout::new(250.0, DEFAULT_ARITY);
        for (i, dot) in layout.dots().iter().enumerate() {
            assert_eq!(dot.index, i);
        }
        assert!(layout.center(1).unwrap().x > layout.center(0).unwrap().x);
        assert!(layout.center(3).unwrap().y > layout.center(0).unwrap().y);
    }

    #[test]
    fn larger_arity_uses_wider_divisor() {
        let layout = Layout::new(500.0, 4);
        assert_eq!(layout.len(), 16);
        assert_eq!(layout.spacing(), 100.0);
        assert_eq!(layout.center(15), Some(Point::new(400.0, 400.0)));
    }

    #[test]
    fn degenerate_size_collapses_to_origin() {
        let layout = Layout::new(-10.0, 0);
        assert_eq!(layout.arity(), 1);
        assert_eq!(layout.center(0), Some(Point::default()));
    }

    #[test]
    fn cache_rebuilds_only_on_change() {
        let mut cache = LayoutCache::new(300.0, 3);
        assert_eq!(cache.get(300.0, 3).spacing(), 75.0);
        assert_eq!(cache.get(250.0, 3).spacing(), 62.5);
        assert_eq!(cache.current().size(), 250.0);
    }
}
