// ABOUTME: Comparison slide template
// ABOUTME: Two columns with a header bar and a bulleted panel each

use super::{bullets, Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{self, CONTENT_BOX};
use crate::records::CompareSlide;

const HEADER_HEIGHT: f64 = 36.0;
const PANEL_OFFSET: f64 = 44.0;

pub fn render(canvas: &mut Canvas, slide: &CompareSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());

    let accent = canvas.accent();
    let sides = [
        ("Left", &slide.left_title, &slide.left_items),
        ("Right", &slide.right_title, &slide.right_items),
    ];
    let count = sides.len();
    for (i, (side, title, items)) in sides.into_iter().enumerate() {
        if title.trim().is_empty() && items.is_empty() {
            canvas.omit(format!("{} column is empty", side.to_lowercase()));
            continue;
        }

        let col = layout::column(&CONTENT_BOX, i, count);
        let head = Rect::new(col.x, col.y, col.width, HEADER_HEIGHT);
        let panel = Rect::new(col.x, col.y + PANEL_OFFSET, col.width, col.height - PANEL_OFFSET);

        canvas.labeled_shape(
            format!("{} Header", side),
            ShapeKind::Rectangle,
            head,
            Some(accent),
            None,
            title,
            TextStyle::heading(18.0, Rgb::WHITE).centered(),
        );
        canvas.shape(
            format!("{} Panel", side),
            ShapeKind::Rectangle,
            panel,
            Some(Rgb::PANEL),
            Some(accent.tint(0.5)),
        );

        if items.is_empty() {
            canvas.omit(format!("{} column has no items", side.to_lowercase()));
        } else {
            canvas.text(
                format!("{} Items", side),
                panel.inset(8.0),
                &bullets(items),
                TextStyle::body(14.0),
            );
        }
    }
}
