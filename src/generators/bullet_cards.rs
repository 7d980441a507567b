// ABOUTME: Bullet cards slide template
// ABOUTME: One horizontal card per item with an accent edge, title and description

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{self, CONTENT_BOX};
use crate::records::BulletCardsSlide;

const EDGE_WIDTH: f64 = 6.0;
const TITLE_WIDTH: f64 = 190.0;

pub fn render(canvas: &mut Canvas, slide: &BulletCardsSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());
    if slide.items.is_empty() {
        canvas.omit("no cards");
        return;
    }

    let accent = canvas.accent();
    let count = slide.items.len();
    for (i, item) in slide.items.iter().enumerate() {
        let card = layout::row(&CONTENT_BOX, i, count);
        canvas.shape(
            format!("Card {}", i + 1),
            ShapeKind::RoundRectangle,
            card,
            Some(Rgb::PANEL),
            None,
        );
        canvas.shape(
            format!("Card {} Edge", i + 1),
            ShapeKind::Rectangle,
            Rect::new(card.x, card.y, EDGE_WIDTH, card.height),
            Some(accent),
            None,
        );

        let title = Rect::new(card.x + 18.0, card.y, TITLE_WIDTH, card.height);
        canvas.text(
            format!("Card {} Title", i + 1),
            title,
            &item.title,
            TextStyle::heading(16.0, accent),
        );
        let desc_x = title.right() + 12.0;
        canvas.text(
            format!("Card {} Description", i + 1),
            Rect::new(desc_x, card.y, card.right() - desc_x - 12.0, card.height),
            &item.desc,
            TextStyle::body(14.0),
        );
    }
}
