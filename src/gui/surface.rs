use crate::gui::theme::color_to_color32;
use crate::pattern_lock::geometry::Point;
use crate::pattern_lock::hit_test::CanvasTransform;
use crate::pattern_lock::render::{Color, Outline, Surface};
use eframe::egui;

const CANVAS_ROUNDING: f32 = 8.0;

/// Paints canvas-local draw commands into an egui rect.
pub struct EguiSurface {
    painter: egui::Painter,
    transform: CanvasTransform,
    border: egui::Color32,
    opacity: f32,
}

impl EguiSurface {
    pub fn new(painter: egui::Painter, transform: CanvasTransform, border: egui::Color32) -> Self {
        Self {
            painter,
            transform,
            border,
            opacity: 1.0,
        }
    }

    /// Dims everything painted afterwards, used for the disabled look.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn pos(&self, point: Point) -> egui::Pos2 {
        let client = self.transform.to_client(point);
        egui::pos2(client.x, client.y)
    }

    fn length(&self, value: f32) -> f32 {
        let (sx, _) = self.transform.scale();
        value / sx
    }

    fn color(&self, color: Color) -> egui::Color32 {
        color_to_color32(color.with_alpha_factor(self.opacity))
    }

    fn rect(&self) -> egui::Rect {
        let origin = self.transform.origin;
        let (w, h) = self.transform.display_size;
        egui::Rect::from_min_size(egui::pos2(origin.x, origin.y), egui::vec2(w, h))
    }
}

impl Surface for EguiSurface {
    fn clear(&mut self, color: Color) {
        self.painter.rect(
            self.rect(),
            CANVAS_ROUNDING,
            self.color(color),
            egui::Stroke::new(1.0, self.border.gamma_multiply(self.opacity)),
        );
    }

    fn polyline(&mut self, points: &[Point], width: f32, color: Color) {
        let path = points.iter().map(|point| self.pos(*point)).collect();
        let stroke = egui::Stroke::new(self.length(width), self.color(color));
        self.painter.extend(stroke_shapes(path, stroke));
    }

    fn circle(&mut self, center: Point, radius: f32, fill: Color, outline: Outline) {
        self.painter.circle(
            self.pos(center),
            self.length(radius),
            self.color(fill),
            egui::Stroke::new(self.length(outline.width), self.color(outline.color)),
        );
    }
}

/// One joined path for the stroke. Round caps are discs at both ends, which
/// only overlap the path invisibly while the stroke is opaque.
fn stroke_shapes(path: Vec<egui::Pos2>, stroke: egui::Stroke) -> Vec<egui::Shape> {
    let mut shapes = Vec::with_capacity(3);
    if stroke.color.a() == u8::MAX {
        let ends = path.first().into_iter().chain(path.last());
        for end in ends {
            shapes.push(egui::Shape::circle_filled(*end, stroke.width / 2.0, stroke.color));
        }
    }
    shapes.insert(0, egui::Shape::line(path, stroke));
    shapes
}
