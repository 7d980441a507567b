// ABOUTME: Section divider template
// ABOUTME: Full-bleed accent background with section number and title

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::records::SectionSlide;

const BACKGROUND: Rect = Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
const NUMBER: Rect = Rect::new(60.0, 100.0, 600.0, 80.0);
const TITLE: Rect = Rect::new(60.0, 190.0, 600.0, 70.0);
const RULE: Rect = Rect::new(60.0, 270.0, 80.0, 3.0);

pub fn render(canvas: &mut Canvas, slide: &SectionSlide) {
    let accent = canvas.accent();
    canvas.shape("Background", ShapeKind::Rectangle, BACKGROUND, Some(accent), None);

    if let Some(number) = slide.section_no {
        canvas.text(
            "Section Number",
            NUMBER,
            &format!("{:02}", number),
            TextStyle::heading(54.0, accent.tint(0.6)),
        );
    }

    if slide.title.trim().is_empty() {
        canvas.omit("title is empty");
    } else {
        canvas.text("Title", TITLE, &slide.title, TextStyle::heading(32.0, Rgb::WHITE));
    }
    canvas.shape("Title Rule", ShapeKind::Rectangle, RULE, Some(Rgb::WHITE), None);
}
