// ABOUTME: Agenda slide template
// ABOUTME: Numbered items spread evenly down the content area

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{self, CONTENT_BOX};
use crate::records::AgendaSlide;

const MAX_BADGE: f64 = 30.0;
const BADGE_GAP: f64 = 14.0;

pub fn render(canvas: &mut Canvas, slide: &AgendaSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());
    if slide.items.is_empty() {
        canvas.omit("no agenda items");
        return;
    }

    let accent = canvas.accent();
    let count = slide.items.len();
    for (i, item) in slide.items.iter().enumerate() {
        let band = layout::row(&CONTENT_BOX, i, count);
        let badge_size = band.height.min(MAX_BADGE);
        let badge = Rect::new(
            band.x,
            band.y + (band.height - badge_size) / 2.0,
            badge_size,
            badge_size,
        );
        canvas.labeled_shape(
            format!("Item {} Number", i + 1),
            ShapeKind::Ellipse,
            badge,
            Some(accent),
            None,
            &(i + 1).to_string(),
            TextStyle::heading(badge_size * 0.5, Rgb::WHITE).centered(),
        );

        let offset = badge_size + BADGE_GAP;
        let label = Rect::new(band.x + offset, band.y, band.width - offset, band.height);
        canvas.text(format!("Item {}", i + 1), label, item, TextStyle::body(16.0));
    }
}
