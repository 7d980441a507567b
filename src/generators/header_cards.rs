// ABOUTME: Header cards slide template
// ABOUTME: Grid of cards, each with an accent header and a description body

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{self, CONTENT_BOX};
use crate::records::HeaderCardsSlide;

const DEFAULT_COLUMNS: usize = 3;
const MAX_HEADER: f64 = 34.0;

pub fn render(canvas: &mut Canvas, slide: &HeaderCardsSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());
    if slide.items.is_empty() {
        canvas.omit("no cards");
        return;
    }

    let accent = canvas.accent();
    let count = slide.items.len();
    let columns = slide
        .columns
        .map(|c| c as usize)
        .unwrap_or(DEFAULT_COLUMNS)
        .clamp(1, count);

    for (i, item) in slide.items.iter().enumerate() {
        let cell = layout::grid_cell(&CONTENT_BOX, i, count, columns);
        let header_height = (cell.height * 0.3).min(MAX_HEADER);

        canvas.labeled_shape(
            format!("Card {} Header", i + 1),
            ShapeKind::Rectangle,
            Rect::new(cell.x, cell.y, cell.width, header_height),
            Some(accent),
            None,
            &item.title,
            TextStyle::heading(16.0, Rgb::WHITE).centered(),
        );
        canvas.labeled_shape(
            format!("Card {} Body", i + 1),
            ShapeKind::Rectangle,
            Rect::new(
                cell.x,
                cell.y + header_height,
                cell.width,
                cell.height - header_height,
            ),
            Some(Rgb::WHITE),
            Some(accent.tint(0.4)),
            &item.desc,
            TextStyle::body(13.0),
        );
    }
}
