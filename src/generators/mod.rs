// ABOUTME: Template generators for the slidegen application
// ABOUTME: Dispatches each slide record to its template and provides the shared drawing canvas

mod agenda;
mod bullet_cards;
mod closing;
mod compare;
mod cycle;
mod header_cards;
mod process;
mod pyramid;
mod section;
mod step_up;
mod title;
mod triangle;

use crate::deck::{Align, Element, ElementKind, Rect, Rgb, ShapeKind, Surface, TextRun, FOOTER_ELEMENT};
use crate::layout::{self, SUBHEAD_BOX, TITLE_BOX};
use crate::records::SlideRecord;
use crate::theme::ThemeConfig;
use log::debug;

/// Size, color and weight of a text element; the font family always comes from the theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Rgb,
    pub bold: bool,
    pub align: Align,
}

impl TextStyle {
    pub fn body(size: f64) -> Self {
        Self {
            size,
            color: Rgb::TEXT,
            bold: false,
            align: Align::Left,
        }
    }

    pub fn heading(size: f64, color: Rgb) -> Self {
        Self {
            size,
            color,
            bold: true,
            align: Align::Left,
        }
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }
}

/// A surface being drawn on with the run's theme
pub struct Canvas<'a> {
    surface: &'a mut Surface,
    theme: &'a ThemeConfig,
    accent: Rgb,
    omissions: Vec<String>,
}

impl<'a> Canvas<'a> {
    pub fn new(surface: &'a mut Surface, theme: &'a ThemeConfig) -> Self {
        Self {
            surface,
            theme,
            accent: theme.accent(),
            omissions: Vec::new(),
        }
    }

    pub fn accent(&self) -> Rgb {
        self.accent
    }

    /// Text fitted to `bounds` in the theme font; blank text draws nothing
    pub fn text(&mut self, name: impl Into<String>, bounds: Rect, text: &str, style: TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        let run = self.run(text, &bounds, style);
        self.surface.push(Element {
            name: name.into(),
            kind: ElementKind::Text,
            bounds,
            fill: None,
            outline: None,
            text: Some(run),
        });
    }

    pub fn shape(
        &mut self,
        name: impl Into<String>,
        kind: ShapeKind,
        bounds: Rect,
        fill: Option<Rgb>,
        outline: Option<Rgb>,
    ) {
        self.surface.push(Element {
            name: name.into(),
            kind: ElementKind::Shape(kind),
            bounds,
            fill,
            outline,
            text: None,
        });
    }

    /// A shape carrying its own text; blank text leaves the shape empty
    #[allow(clippy::too_many_arguments)]
    pub fn labeled_shape(
        &mut self,
        name: impl Into<String>,
        kind: ShapeKind,
        bounds: Rect,
        fill: Option<Rgb>,
        outline: Option<Rgb>,
        text: &str,
        style: TextStyle,
    ) {
        let run = if text.trim().is_empty() {
            None
        } else {
            Some(self.run(text, &bounds, style))
        };
        self.surface.push(Element {
            name: name.into(),
            kind: ElementKind::Shape(kind),
            bounds,
            fill,
            outline,
            text: run,
        });
    }

    /// Standard title, accent rule and optional subhead of the content templates
    pub fn header(&mut self, title: &str, subhead: Option<&str>) {
        let accent = self.accent;
        if title.trim().is_empty() {
            self.omit("title is empty");
        } else {
            self.text("Title", TITLE_BOX, title, TextStyle::heading(24.0, accent));
        }
        self.shape(
            "Title Rule",
            ShapeKind::Rectangle,
            Rect::new(TITLE_BOX.x, 88.0, 60.0, 3.0),
            Some(accent),
            None,
        );
        if let Some(subhead) = subhead {
            self.text(
                "Subhead",
                SUBHEAD_BOX,
                subhead,
                TextStyle::body(14.0).color(Rgb::MUTED),
            );
        }
    }

    /// Speaker notes go to the notes channel, never onto the slide
    pub fn notes(&mut self, notes: Option<&str>) {
        if let Some(notes) = notes.filter(|n| !n.trim().is_empty()) {
            self.surface.notes = Some(notes.to_string());
        }
    }

    /// Record a part of the record that could not be drawn
    pub fn omit(&mut self, detail: impl Into<String>) {
        let detail = detail.into();
        debug!("Omitting from slide: {}", detail);
        self.omissions.push(detail);
    }

    pub fn finish(self) -> Vec<String> {
        self.omissions
    }

    fn run(&self, text: &str, bounds: &Rect, style: TextStyle) -> TextRun {
        let fitted = layout::fit_text(text, bounds, style.size);
        TextRun {
            text: fitted.text,
            font_family: self.theme.font_family.clone(),
            font_size: fitted.font_size,
            color: style.color,
            bold: style.bold,
            align: style.align,
        }
    }
}

/// Draw `slide` onto `surface`; returns what had to be left out
pub fn render_slide(surface: &mut Surface, slide: &SlideRecord, theme: &ThemeConfig) -> Vec<String> {
    let mut canvas = Canvas::new(surface, theme);
    match slide {
        SlideRecord::Title(s) => title::render(&mut canvas, s),
        SlideRecord::Agenda(s) => agenda::render(&mut canvas, s),
        SlideRecord::Section(s) => section::render(&mut canvas, s),
        SlideRecord::Compare(s) => compare::render(&mut canvas, s),
        SlideRecord::Pyramid(s) => pyramid::render(&mut canvas, s),
        SlideRecord::BulletCards(s) => bullet_cards::render(&mut canvas, s),
        SlideRecord::Process(s) => process::render(&mut canvas, s),
        SlideRecord::Triangle(s) => triangle::render(&mut canvas, s),
        SlideRecord::HeaderCards(s) => header_cards::render(&mut canvas, s),
        SlideRecord::Cycle(s) => cycle::render(&mut canvas, s),
        SlideRecord::StepUp(s) => step_up::render(&mut canvas, s),
        SlideRecord::Closing(s) => closing::render(&mut canvas, s),
    }
    canvas.notes(slide.notes());
    canvas.finish()
}

/// Add the footer text to a surface without touching what is already there
pub fn stamp_footer(surface: &mut Surface, theme: &ThemeConfig) {
    let mut canvas = Canvas::new(surface, theme);
    canvas.text(
        FOOTER_ELEMENT,
        layout::footer_box(),
        &theme.footer_text,
        TextStyle::body(9.0).color(Rgb::MUTED),
    );
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
