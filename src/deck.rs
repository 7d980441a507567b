// ABOUTME: Deck model for the slidegen application
// ABOUTME: Holds surfaces and the positioned, styled elements generators place on them

use crate::errors::{Result, SlideError};
use serde::Serialize;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const TEXT: Rgb = Rgb::new(0x33, 0x33, 0x33);
    pub const MUTED: Rgb = Rgb::new(0x75, 0x75, 0x75);
    pub const PANEL: Rgb = Rgb::new(0xF5, 0xF6, 0xF8);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) string
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(SlideError::ThemeError(format!("invalid color: {}", value)));
        }
        let bytes = hex::decode(digits)
            .map_err(|_| SlideError::ThemeError(format!("invalid color: {}", value)))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }

    /// Uppercase `RRGGBB` without the leading `#`, as DrawingML expects it
    pub fn to_hex(self) -> String {
        hex::encode_upper([self.r, self.g, self.b])
    }

    /// Blend toward white; `amount` 0.0 keeps the color, 1.0 yields white
    pub fn tint(self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f64 + (255.0 - c as f64) * amount).round() as u8;
        Self::new(mix(self.r), mix(self.g), mix(self.b))
    }
}

/// Axis-aligned box in points, origin at the top-left of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the interiors of the two boxes intersect; shared edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink on every side by `amount`
    pub fn inset(&self, amount: f64) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
}

/// A run of text and the style it is drawn with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub color: Rgb,
    pub bold: bool,
    pub align: Align,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Rectangle,
    RoundRectangle,
    Ellipse,
    Triangle,
    Trapezoid,
    Chevron,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Text,
    Shape(ShapeKind),
}

/// One positioned element on a surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub name: String,
    pub kind: ElementKind,
    pub bounds: Rect,
    pub fill: Option<Rgb>,
    pub outline: Option<Rgb>,
    pub text: Option<TextRun>,
}

/// Element name used for footer stamps
pub const FOOTER_ELEMENT: &str = "Footer";

/// A single slide
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Surface {
    pub elements: Vec<Element>,
    pub notes: Option<String>,
}

impl Surface {
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name == name)
    }

    pub fn has_footer(&self) -> bool {
        self.element(FOOTER_ELEMENT).is_some()
    }

    /// All text drawn on the surface, in insertion order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter_map(|e| e.text.as_ref().map(|t| t.text.as_str()))
    }

    pub fn is_blank(&self) -> bool {
        self.elements.is_empty() && self.notes.is_none()
    }
}

/// An ordered sequence of surfaces owned by a backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub id: String,
    pub title: String,
    pub surfaces: Vec<Surface>,
}

impl Deck {
    /// A fresh deck holds the blank leading surface backends create alongside it
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            surfaces: vec![Surface::default()],
        }
    }

    pub fn append_surface(&mut self) -> &mut Surface {
        self.surfaces.push(Surface::default());
        let last = self.surfaces.len() - 1;
        &mut self.surfaces[last]
    }

    pub fn remove_surface(&mut self, index: usize) -> Option<Surface> {
        if index < self.surfaces.len() {
            Some(self.surfaces.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::from_hex("#4285f4").unwrap();
        assert_eq!(color, Rgb::new(0x42, 0x85, 0xF4));
        assert_eq!(color.to_hex(), "4285F4");
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_tint_limits() {
        let color = Rgb::new(0x10, 0x20, 0x30);
        assert_eq!(color.tint(0.0), color);
        assert_eq!(color.tint(1.0), Rgb::WHITE);
    }

    #[test]
    fn test_touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn test_new_deck_has_blank_leading_surface() {
        let mut deck = Deck::new("id", "Title");
        assert_eq!(deck.len(), 1);
        assert!(deck.surfaces[0].is_blank());
        deck.append_surface();
        assert_eq!(deck.len(), 2);
        assert!(deck.remove_surface(5).is_none());
    }
}
