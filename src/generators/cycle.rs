// ABOUTME: Cycle slide template
// ABOUTME: Nodes spaced evenly around a ring with optional text in the middle

use super::{Canvas, TextStyle};
use crate::deck::{Rect, Rgb, ShapeKind};
use crate::layout::{self, CONTENT_BOX};
use crate::records::CycleSlide;
use std::f64::consts::PI;

const RADIUS: f64 = 85.0;
const MAX_NODE: f64 = 96.0;
/// Node diameter as a share of the distance between neighbours; below 1/sqrt(2) so
/// the bounding boxes of neighbouring nodes stay apart at any angle
const NODE_SPACING: f64 = 0.63;
const CENTER_CLEARANCE: f64 = 12.0;
const MIN_CENTER: f64 = 40.0;

pub fn render(canvas: &mut Canvas, slide: &CycleSlide) {
    canvas.header(&slide.title, slide.subhead.as_deref());
    if slide.items.is_empty() {
        canvas.omit("no cycle items");
        return;
    }

    let accent = canvas.accent();
    let count = slide.items.len();
    let cx = CONTENT_BOX.x + CONTENT_BOX.width / 2.0;
    let cy = CONTENT_BOX.y + CONTENT_BOX.height / 2.0;

    let chord = if count > 1 {
        2.0 * RADIUS * (PI / count as f64).sin()
    } else {
        f64::INFINITY
    };
    let node = MAX_NODE.min(chord * NODE_SPACING);

    canvas.shape(
        "Ring",
        ShapeKind::Ellipse,
        Rect::new(cx - RADIUS, cy - RADIUS, 2.0 * RADIUS, 2.0 * RADIUS),
        None,
        Some(accent.tint(0.5)),
    );

    let centers: Vec<(f64, f64)> = (0..count)
        .map(|i| layout::radial_position(i, count, cx, cy, RADIUS))
        .collect();
    for (i, (item, &(x, y))) in slide.items.iter().zip(&centers).enumerate() {
        let bounds = Rect::new(x - node / 2.0, y - node / 2.0, node, node);
        canvas.shape(
            format!("Node {}", i + 1),
            ShapeKind::Ellipse,
            bounds,
            Some(accent),
            None,
        );
        canvas.text(
            format!("Node {} Label", i + 1),
            Rect::new(bounds.x, bounds.y + node * 0.18, node, node * 0.38),
            &item.label,
            TextStyle::heading(15.0, Rgb::WHITE).centered(),
        );
        canvas.text(
            format!("Node {} Sub Label", i + 1),
            Rect::new(bounds.x, bounds.y + node * 0.56, node, node * 0.28),
            &item.sub_label,
            TextStyle::body(10.0).color(Rgb::WHITE).centered(),
        );
    }

    if let Some(center_text) = &slide.center_text {
        // closest any node box gets to the middle, measured along either axis
        let reach = centers
            .iter()
            .map(|(x, y)| (x - cx).abs().max((y - cy).abs()))
            .fold(f64::INFINITY, f64::min);
        let diameter = 2.0 * (reach - node / 2.0) - CENTER_CLEARANCE;
        if diameter < MIN_CENTER {
            canvas.omit("no room for center text");
            return;
        }
        canvas.labeled_shape(
            "Center",
            ShapeKind::Ellipse,
            Rect::new(cx - diameter / 2.0, cy - diameter / 2.0, diameter, diameter),
            Some(Rgb::WHITE),
            Some(accent),
            center_text,
            TextStyle::heading(14.0, accent).centered(),
        );
    }
}
