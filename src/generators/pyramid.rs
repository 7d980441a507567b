// ABOUTME: Pyramid slide template
// ABOUTME: Stacked levels widening toward the base, each with a description beside it

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{self, CONTENT_BOX, MARGIN};
use crate::records::PyramidSlide;

const STACK_WIDTH: f64 = 320.0;
const MIN_LEVEL_WIDTH: f64 = 80.0;
const DESCRIPTION_GAP: f64 = 24.0;

pub fn render(canvas: &mut Canvas, slide: &PyramidSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());
    if slide.levels.is_empty() {
        canvas.omit("no pyramid levels");
        return;
    }

    let accent = canvas.accent();
    let count = slide.levels.len();
    let stack = Rect::new(MARGIN, CONTENT_BOX.y, STACK_WIDTH, CONTENT_BOX.height);
    let center = stack.x + stack.width / 2.0;
    let description_x = stack.right() + DESCRIPTION_GAP;

    for (i, level) in slide.levels.iter().enumerate() {
        let band = layout::row(&stack, i, count);
        let width = (stack.width * (i + 1) as f64 / count as f64).max(MIN_LEVEL_WIDTH);
        let bounds = Rect::new(center - width / 2.0, band.y, width, band.height);

        canvas.labeled_shape(
            format!("Level {}", i + 1),
            ShapeKind::Trapezoid,
            bounds,
            Some(accent.tint(0.45 * i as f64 / count as f64)),
            None,
            &level.title,
            TextStyle::heading(16.0, Rgb::WHITE).centered(),
        );
        canvas.text(
            format!("Level {} Description", i + 1),
            Rect::new(
                description_x,
                band.y,
                CONTENT_BOX.right() - description_x,
                band.height,
            ),
            &level.description,
            TextStyle::body(13.0),
        );
    }
}
