// ABOUTME: Triangle slide template
// ABOUTME: Three cards on the corners of a central triangle

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::records::TriangleSlide;

const CORNERS: [Rect; 3] = [
    Rect::new(250.0, 100.0, 220.0, 76.0),
    Rect::new(60.0, 280.0, 220.0, 76.0),
    Rect::new(440.0, 280.0, 220.0, 76.0),
];
const TRIANGLE: Rect = Rect::new(300.0, 186.0, 120.0, 88.0);

pub fn render(canvas: &mut Canvas, slide: &TriangleSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());
    if slide.items.is_empty() {
        canvas.omit("no triangle items");
        return;
    }
    if slide.items.len() != CORNERS.len() {
        canvas.omit(format!(
            "triangle lays out {} items, got {}",
            CORNERS.len(),
            slide.items.len()
        ));
    }

    let accent = canvas.accent();
    canvas.shape(
        "Triangle",
        ShapeKind::Triangle,
        TRIANGLE,
        Some(accent.tint(0.3)),
        None,
    );

    for (i, (item, corner)) in slide.items.iter().zip(CORNERS).enumerate() {
        canvas.shape(
            format!("Corner {} Card", i + 1),
            ShapeKind::RoundRectangle,
            corner,
            Some(Rgb::PANEL),
            Some(accent),
        );
        canvas.text(
            format!("Corner {} Title", i + 1),
            Rect::new(corner.x + 8.0, corner.y + 4.0, corner.width - 16.0, 26.0),
            &item.title,
            TextStyle::heading(16.0, accent).centered(),
        );
        canvas.text(
            format!("Corner {} Description", i + 1),
            Rect::new(corner.x + 8.0, corner.y + 30.0, corner.width - 16.0, 42.0),
            &item.desc,
            TextStyle::body(12.0).centered(),
        );
    }
}
