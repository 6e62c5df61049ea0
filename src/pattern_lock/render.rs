use crate::pattern_lock::geometry::{Layout, Point};
use crate::pattern_lock::machine::{hovered_dot, GestureSnapshot};
use serde::{Deserialize, Serialize};

const DOT_OUTLINE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn with_alpha_factor(self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub line: Color,
    pub dot_fill: Color,
    pub dot_outline: Color,
    pub accent: Color,
    pub accent_outline: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            line: Color::BLACK,
            dot_fill: Color::BLACK,
            dot_outline: Color::rgb(226, 232, 240),
            accent: Color::rgb(15, 23, 42),
            accent_outline: Color::rgb(248, 250, 252),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::rgb(2, 8, 23),
            line: Color::WHITE,
            dot_fill: Color::WHITE,
            dot_outline: Color::rgb(30, 41, 59),
            accent: Color::rgb(248, 250, 252),
            accent_outline: Color::rgb(15, 23, 42),
        }
    }

    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::light(),
            ResolvedTheme::Dark => Self::dark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub dot_size: f32,
    pub line_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            dot_size: 20.0,
            line_width: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    /// Round-capped, round-joined connected path.
    Polyline {
        points: Vec<Point>,
        width: f32,
        color: Color,
    },
    Circle {
        index: usize,
        center: Point,
        radius: f32,
        fill: Color,
        outline: Outline,
        active: bool,
    },
}

/// Drawing surface in canvas-local pixels.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn polyline(&mut self, points: &[Point], width: f32, color: Color);
    fn circle(&mut self, center: Point, radius: f32, fill: Color, outline: Outline);
}

/// Builds a full frame for the current snapshot. Every call produces the
/// complete scene, starting with a clear.
pub fn build_frame(
    snapshot: &GestureSnapshot,
    layout: &Layout,
    style: &RenderStyle,
    palette: &Palette,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(layout.len() + 2);
    commands.push(DrawCommand::Clear {
        color: palette.background,
    });

    let mut path: Vec<Point> = snapshot
        .pattern
        .indices()
        .iter()
        .filter_map(|&index| layout.center(index))
        .collect();
    if snapshot.is_dragging() && !path.is_empty() {
        if let Some(live) = snapshot.live_point {
            path.push(live);
        }
    }
    if path.len() > 1 {
        commands.push(DrawCommand::Polyline {
            points: path,
            width: style.line_width,
            color: palette.line,
        });
    }

    let hovered = hovered_dot(snapshot, layout, style.dot_size);
    for dot in layout.dots() {
        let active = snapshot.pattern.contains(dot.index) || hovered == Some(dot.index);
        let (fill, outline) = if active {
            (palette.accent, palette.accent_outline)
        } else {
            (palette.dot_fill, palette.dot_outline)
        };
        commands.push(DrawCommand::Circle {
            index: dot.index,
            center: dot.center,
            radius: style.dot_size / 2.0,
            fill,
            outline: Outline {
                width: DOT_OUTLINE_WIDTH,
                color: outline,
            },
            active,
        });
    }
    commands
}

/// Replays `commands` onto `surface`. Returns `false` without painting when
/// the surface is not available yet.
pub fn paint<S: Surface + ?Sized>(surface: Option<&mut S>, commands: &[DrawCommand]) -> bool {
    let Some(surface) = surface else {
        return false;
    };
    for command in commands {
        match command {
            DrawCommand::Clear { color } => surface.clear(*color),
            DrawCommand::Polyline {
                points,
                width,
                color,
            } => surface.polyline(points, *width, *color),
            DrawCommand::Circle {
                center,
                radius,
                fill,
                outline,
                ..
            } => surface.circle(*center, *radius, *fill, *outline),
        }
    }
    true
}
