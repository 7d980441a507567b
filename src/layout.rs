// ABOUTME: Layout utilities for the slidegen application
// ABOUTME: Canvas bounds, even distribution, standard boxes and the text auto-fit policy

use crate::deck::Rect;
use std::f64::consts::PI;

/// Canvas size in points (16:9)
pub const CANVAS_WIDTH: f64 = 720.0;
pub const CANVAS_HEIGHT: f64 = 405.0;
pub const MARGIN: f64 = 40.0;

/// Standard header and content regions shared by the content templates
pub const TITLE_BOX: Rect = Rect::new(MARGIN, 20.0, CANVAS_WIDTH - 2.0 * MARGIN, 40.0);
pub const SUBHEAD_BOX: Rect = Rect::new(MARGIN, 62.0, CANVAS_WIDTH - 2.0 * MARGIN, 22.0);
pub const CONTENT_BOX: Rect = Rect::new(MARGIN, 100.0, CANVAS_WIDTH - 2.0 * MARGIN, 265.0);
pub const FOOTER_BOX: Rect = Rect::new(MARGIN, 380.0, CANVAS_WIDTH - 2.0 * MARGIN, 18.0);

/// Padding between a box edge and the text inside it
pub const TEXT_INSET: f64 = 3.6;
pub const MIN_FONT_SIZE: f64 = 8.0;
const MIN_SHRINK: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.2;
const NARROW_EM: f64 = 0.55;
const WIDE_EM: f64 = 1.0;

const GAP_RATIO: f64 = 0.1;
const MAX_GAP: f64 = 16.0;

/// A position and extent along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub size: f64,
}

impl Span {
    pub fn end(&self) -> f64 {
        self.start + self.size
    }

    pub fn shift(self, offset: f64) -> Span {
        Span {
            start: self.start + offset,
            size: self.size,
        }
    }
}

/// Place item `index` of `count` along an axis of `axis_length`, leaving `margin` at both ends.
///
/// The usable length is cut into `count` equal slots; each item is centered in its
/// slot and is `min(slot * 0.1, 16)` shorter than it, so neighbours are always separated
/// by that gap no matter how many items there are. A `count` of zero is treated as one.
pub fn distribute(index: usize, count: usize, axis_length: f64, margin: f64) -> Span {
    let count = count.max(1);
    let usable = (axis_length - 2.0 * margin).max(0.0);
    let slot = usable / count as f64;
    let gap = (slot * GAP_RATIO).min(MAX_GAP);
    Span {
        start: margin + index as f64 * slot + gap / 2.0,
        size: slot - gap,
    }
}

/// Horizontal band of `region` for item `index` of `count`
pub fn column(region: &Rect, index: usize, count: usize) -> Rect {
    let span = distribute(index, count, region.width, 0.0).shift(region.x);
    Rect::new(span.start, region.y, span.size, region.height)
}

/// Vertical band of `region` for item `index` of `count`
pub fn row(region: &Rect, index: usize, count: usize) -> Rect {
    let span = distribute(index, count, region.height, 0.0).shift(region.y);
    Rect::new(region.x, span.start, region.width, span.size)
}

/// Cell `index` of a grid with `columns` columns holding `count` items
pub fn grid_cell(region: &Rect, index: usize, count: usize, columns: usize) -> Rect {
    let columns = columns.max(1);
    let rows = (count.max(1) + columns - 1) / columns;
    let band = row(region, index / columns, rows);
    column(&band, index % columns, columns)
}

/// Center of item `index` of `count` on a circle, starting at twelve o'clock, clockwise
pub fn radial_position(index: usize, count: usize, cx: f64, cy: f64, radius: f64) -> (f64, f64) {
    let angle = -PI / 2.0 + 2.0 * PI * index as f64 / count.max(1) as f64;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Where the footer stamp goes on every surface
pub fn footer_box() -> Rect {
    FOOTER_BOX
}

/// Text adjusted to fit a box
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub text: String,
    pub font_size: f64,
}

/// Shrink `text` in 1pt steps from `base_size` down to `max(60% of base, 8pt)`; if it
/// still overflows `bounds`, truncate it with an ellipsis at the smallest size.
pub fn fit_text(text: &str, bounds: &Rect, base_size: f64) -> FittedText {
    let area = bounds.inset(TEXT_INSET);
    let min_size = (base_size * MIN_SHRINK).max(MIN_FONT_SIZE).min(base_size);

    let mut size = base_size;
    while size >= min_size {
        if text_fits(text, &area, size) {
            return FittedText {
                text: text.to_string(),
                font_size: size,
            };
        }
        size -= 1.0;
    }

    // Fitting is monotonic in the kept prefix, so search for the longest one
    let chars: Vec<char> = text.chars().collect();
    let fits = |keep: usize| text_fits(&ellipsized(&chars, keep), &area, min_size);
    let mut lo = 0;
    let mut hi = if fits(0) { chars.len() } else { 0 };
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    FittedText {
        text: ellipsized(&chars, lo),
        font_size: min_size,
    }
}

fn ellipsized(chars: &[char], keep: usize) -> String {
    let head: String = chars[..keep].iter().collect();
    format!("{}…", head.trim_end())
}

/// Estimated width of `text` in ems
pub fn text_width_em(text: &str) -> f64 {
    text.chars()
        .map(|c| if is_wide(c) { WIDE_EM } else { NARROW_EM })
        .sum()
}

fn text_fits(text: &str, area: &Rect, size: f64) -> bool {
    if area.width <= 0.0 || area.height <= 0.0 {
        return false;
    }
    let lines: f64 = text
        .split('\n')
        .map(|paragraph| {
            let width = text_width_em(paragraph) * size;
            (width / area.width).ceil().max(1.0)
        })
        .sum();
    lines * size * LINE_HEIGHT <= area.height
}

fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6)
}
