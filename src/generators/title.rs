// ABOUTME: Title slide template
// ABOUTME: Accent bar, large title, rule and optional date

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::CANVAS_HEIGHT;
use crate::records::TitleSlide;

const ACCENT_BAR: Rect = Rect::new(0.0, 0.0, 14.0, CANVAS_HEIGHT);
const TITLE: Rect = Rect::new(60.0, 120.0, 600.0, 110.0);
const RULE: Rect = Rect::new(60.0, 240.0, 120.0, 4.0);
const DATE: Rect = Rect::new(60.0, 254.0, 600.0, 24.0);

pub fn render(canvas: &mut Canvas, slide: &TitleSlide) {
    let accent = canvas.accent();
    canvas.shape("Accent Bar", ShapeKind::Rectangle, ACCENT_BAR, Some(accent), None);

    if slide.title.trim().is_empty() {
        canvas.omit("title is empty");
    } else {
        canvas.text("Title", TITLE, &slide.title, TextStyle::heading(34.0, accent));
    }
    canvas.shape("Title Rule", ShapeKind::Rectangle, RULE, Some(accent), None);

    if let Some(date) = &slide.date {
        canvas.text("Date", DATE, date, TextStyle::body(14.0).color(Rgb::MUTED));
    }
}
