// ABOUTME: Step-up slide template
// ABOUTME: Bars rising left to right with each step's description above its bar

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{self, CONTENT_BOX};
use crate::records::StepUpSlide;

const MIN_STEP: f64 = 60.0;
const MAX_STEP: f64 = 190.0;
const DESCRIPTION_GAP: f64 = 6.0;

pub fn render(canvas: &mut Canvas, slide: &StepUpSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());
    if slide.items.is_empty() {
        canvas.omit("no steps");
        return;
    }

    let accent = canvas.accent();
    let count = slide.items.len();
    for (i, item) in slide.items.iter().enumerate() {
        let col = layout::column(&CONTENT_BOX, i, count);
        let height = MIN_STEP + (MAX_STEP - MIN_STEP) * (i + 1) as f64 / count as f64;
        let bar = Rect::new(col.x, col.bottom() - height, col.width, height);

        canvas.labeled_shape(
            format!("Step {}", i + 1),
            ShapeKind::Rectangle,
            bar,
            Some(accent.tint(0.4 * (count - 1 - i) as f64 / count as f64)),
            None,
            &item.title,
            TextStyle::heading(15.0, Rgb::WHITE).centered(),
        );
        canvas.text(
            format!("Step {} Description", i + 1),
            Rect::new(col.x, col.y, col.width, bar.y - col.y - DESCRIPTION_GAP),
            &item.desc,
            TextStyle::body(12.0).centered(),
        );
    }
}
