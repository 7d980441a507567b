// ABOUTME: Closing slide template
// ABOUTME: Full-bleed accent background with a centered thank-you line

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::records::ClosingSlide;

pub const CLOSING_MESSAGE: &str = "Thank you";

const BACKGROUND: Rect = Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
const MESSAGE: Rect = Rect::new(60.0, 150.0, 600.0, 70.0);
const RULE: Rect = Rect::new(330.0, 232.0, 60.0, 3.0);

pub fn render(canvas: &mut Canvas, _slide: &ClosingSlide) {
    let accent = canvas.accent();
    canvas.shape("Background", ShapeKind::Rectangle, BACKGROUND, Some(accent), None);
    canvas.text(
        "Message",
        MESSAGE,
        CLOSING_MESSAGE,
        TextStyle::heading(40.0, Rgb::WHITE).centered(),
    );
    canvas.shape("Rule", ShapeKind::Rectangle, RULE, Some(Rgb::WHITE), None);
}
