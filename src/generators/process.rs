// ABOUTME: Process slide template
// ABOUTME: Left-to-right chevrons, one per step, with the step text underneath

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{self, CONTENT_BOX};
use crate::records::ProcessSlide;

const CHEVRON_TOP: f64 = 10.0;
const CHEVRON_HEIGHT: f64 = 56.0;
const TEXT_OFFSET: f64 = 80.0;

pub fn render(canvas: &mut Canvas, slide: &ProcessSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());
    if slide.steps.is_empty() {
        canvas.omit("no process steps");
        return;
    }

    let accent = canvas.accent();
    let count = slide.steps.len();
    for (i, step) in slide.steps.iter().enumerate() {
        let col = layout::column(&CONTENT_BOX, i, count);
        canvas.labeled_shape(
            format!("Step {}", i + 1),
            ShapeKind::Chevron,
            Rect::new(col.x, col.y + CHEVRON_TOP, col.width, CHEVRON_HEIGHT),
            Some(accent),
            None,
            &format!("STEP {}", i + 1),
            TextStyle::heading(14.0, Rgb::WHITE).centered(),
        );
        canvas.text(
            format!("Step {} Text", i + 1),
            Rect::new(col.x, col.y + TEXT_OFFSET, col.width, col.height - TEXT_OFFSET),
            step,
            TextStyle::body(14.0).centered(),
        );
    }
}
