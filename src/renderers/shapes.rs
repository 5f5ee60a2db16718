//! Drawable primitives — the closed set of shapes a scene is made of.
//!
//! Each variant knows how to write itself as an SVG element; the whole enum
//! serializes to JSON with a `"type"` discriminator.

use serde::Serialize;

// ─── Color ───────────────────────────────────────────────────────────────────

/// Normalized (0..1) RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const DARK_TEXT: Color = Color {
        r: 27.0 / 255.0,
        g: 27.0 / 255.0,
        b: 27.0 / 255.0,
    };
    pub const SUB_TEXT: Color = Color {
        r: 137.0 / 255.0,
        g: 137.0 / 255.0,
        b: 137.0 / 255.0,
    };
    pub const GREY_BACKGROUND: Color = Color {
        r: 194.0 / 255.0,
        g: 195.0 / 255.0,
        b: 203.0 / 255.0,
    };
    pub const LIGHT_BACKGROUND: Color = Color {
        r: 241.0 / 255.0,
        g: 241.0 / 255.0,
        b: 241.0 / 255.0,
    };
    pub const ARROW: Color = Color {
        r: 200.0 / 255.0,
        g: 200.0 / 255.0,
        b: 200.0 / 255.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `RRGGBB` without the leading `#`.
    ///
    /// Each channel is scaled by 16: the integer part is the high digit, the
    /// fraction scaled by 16 again is the low digit. Digits clamp to `0..=15`,
    /// so `1.0` comes out as `F0`.
    pub fn hex(&self) -> String {
        [self.r, self.g, self.b]
            .into_iter()
            .flat_map(hex_pair)
            .collect()
    }
}

fn hex_pair(component: f32) -> [char; 2] {
    let scaled = component * 16.0;
    let high = scaled.floor();
    let low = ((scaled - high) * 16.0).floor();
    [hex_digit(high), hex_digit(low)]
}

fn hex_digit(v: f32) -> char {
    let v = v.clamp(0.0, 15.0) as u32;
    char::from_digit(v, 16)
        .unwrap_or('F')
        .to_ascii_uppercase()
}

pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ─── Text ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// A single line of text; `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: i64,
    pub y: i64,
    pub size: i64,
    pub anchor: Anchor,
    pub color: Color,
    pub string: String,
}

impl Text {
    pub fn to_svg(&self) -> String {
        format!(
            r##"<text x="{}" y="{}" font-size="{}" text-anchor="{}" fill="#{}">{}</text>"##,
            self.x,
            self.y,
            self.size,
            self.anchor.as_str(),
            self.color.hex(),
            escape(&self.string)
        )
    }
}

// ─── Rectangle ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub color: Color,
}

impl Rectangle {
    pub fn to_svg(&self) -> String {
        format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#{}"/>"##,
            self.x,
            self.y,
            self.width,
            self.height,
            self.color.hex()
        )
    }
}

// ─── Arrow ───────────────────────────────────────────────────────────────────

/// Cubic Bezier between two sockets with horizontal tangents at both ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrow {
    pub start_x: i64,
    pub start_y: i64,
    pub end_x: i64,
    pub end_y: i64,
    /// Horizontal offset of each control point from its endpoint.
    pub curviness: i64,
    pub stroke_width: i64,
    pub color: Color,
}

impl Arrow {
    pub fn to_svg(&self) -> String {
        let (sx, sy, ex, ey, c) = (
            self.start_x,
            self.start_y,
            self.end_x,
            self.end_y,
            self.curviness,
        );
        format!(
            r##"<path d="M{sx},{sy} C{},{sy} {},{ey} {ex},{ey}" fill="none" stroke="#{}" stroke-width="{}px"/>"##,
            sx + c,
            ex - c,
            self.color.hex(),
            self.stroke_width
        )
    }
}

// ─── Shape ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Shape {
    Text(Text),
    Rectangle(Rectangle),
    Arrow(Arrow),
}

impl Shape {
    pub fn to_svg(&self) -> String {
        match self {
            Shape::Text(t) => t.to_svg(),
            Shape::Rectangle(r) => r.to_svg(),
            Shape::Arrow(a) => a.to_svg(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_shapes.rs"]
mod tests;
