// ABOUTME: Generation orchestrator for the slidegen application
// ABOUTME: Walks the record array, drives the generators and finishes the deck on a backend

use crate::backend::Backend;
use crate::generators::{render_slide, stamp_footer};
use crate::records::{Record, SlideRecord};
use crate::theme::{ThemeConfig, ThemeSettings, ThemeStore};
use crate::errors::Result;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static FOLDER_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\w]{25,}").expect("folder ID pattern is valid"));

/// Title used when neither the caller nor a leading title record names the deck
pub const FALLBACK_TITLE: &str = "Generated Presentation";

/// Per-run options
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub title: Option<String>,
    pub settings: Option<ThemeSettings>,
}

/// Something that went wrong without stopping the run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    UnknownRecord { index: usize, tag: String },
    InvalidRecord { index: usize, tag: String, reason: String },
    IncompleteRecord { index: usize, tag: String, detail: String },
    /// Skipped records left the backend's blank first surface in the deck
    LeadingBlankKept { skipped: usize },
    FolderIdNotFound { url: String },
    PlacementFailed { folder_id: String, reason: String },
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub deck_id: String,
    pub title: String,
    pub url: String,
    pub surface_count: usize,
    pub warnings: Vec<Warning>,
}

/// Generate a deck from `records` and return where it ended up.
///
/// Only deck creation and persistence are fatal; record problems and placement
/// failures come back as warnings in the report.
pub fn generate<B: Backend>(
    backend: &mut B,
    base_theme: &ThemeConfig,
    records: &[Record],
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    let mut store = ThemeStore::new(base_theme.clone());
    if let Some(settings) = &options.settings {
        store.update(settings)?;
    }
    let theme = store.snapshot();

    let title = resolve_title(options.title.as_deref(), records, FALLBACK_TITLE);
    info!("Generating {:?} from {} records", title, records.len());

    let mut deck = backend.create_deck(&title)?;
    let leading_blank = deck.surfaces.first().map_or(false, |s| s.is_blank());
    let mut warnings = Vec::new();
    let mut first_generated = None;
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
        let (slide, ignored) = match record {
            Record::Known(slide) => (slide, &[][..]),
            Record::Partial { slide, ignored } => (slide, ignored.as_slice()),
            Record::Unknown { tag } => {
                skipped += 1;
                warn!("Skipping record {} with unknown type {:?}", index, tag);
                warnings.push(Warning::UnknownRecord {
                    index,
                    tag: tag.clone(),
                });
                continue;
            }
            Record::Invalid { tag, reason } => {
                skipped += 1;
                warn!("Skipping invalid {:?} record {}: {}", tag, index, reason);
                warnings.push(Warning::InvalidRecord {
                    index,
                    tag: tag.clone(),
                    reason: reason.clone(),
                });
                continue;
            }
        };

        let position = deck.len();
        let surface = deck.append_surface();
        let omissions = render_slide(surface, slide, &theme);
        debug!("Rendered {} record {} on surface {}", slide.tag(), index, position);

        if index == 0 {
            first_generated = Some(position);
        }
        for detail in ignored.iter().cloned().chain(omissions) {
            warn!("Record {} ({}) incomplete: {}", index, slide.tag(), detail);
            warnings.push(Warning::IncompleteRecord {
                index,
                tag: slide.tag().to_string(),
                detail,
            });
        }
    }

    if theme.has_footer() {
        let skip = match records.first().and_then(Record::as_slide) {
            Some(SlideRecord::Title(_)) => first_generated,
            _ => None,
        };
        for (position, surface) in deck.surfaces.iter_mut().enumerate() {
            if Some(position) != skip {
                stamp_footer(surface, &theme);
            }
        }
    }

    if deck.len() > records.len() {
        deck.remove_surface(0);
        debug!("Removed the leading blank surface");
    } else if leading_blank {
        warn!(
            "{} skipped records leave the blank first surface in the deck",
            skipped
        );
        warnings.push(Warning::LeadingBlankKept { skipped });
    }

    let mut url = backend.save_deck(&deck)?;
    info!("Saved deck {} with {} surfaces", deck.id, deck.len());

    if !theme.output_folder_url.is_empty() {
        match extract_folder_id(&theme.output_folder_url) {
            None => {
                warn!(
                    "No folder ID in {:?}, leaving the deck in place",
                    theme.output_folder_url
                );
                warnings.push(Warning::FolderIdNotFound {
                    url: theme.output_folder_url.clone(),
                });
            }
            Some(folder_id) => match place(backend, &deck.id, &folder_id) {
                Ok(moved) => {
                    info!("Moved deck {} to folder {}", deck.id, folder_id);
                    url = moved;
                }
                Err(e) => {
                    warn!("Could not move deck to folder {}: {}", folder_id, e);
                    warnings.push(Warning::PlacementFailed {
                        folder_id,
                        reason: e.to_string(),
                    });
                }
            },
        }
    }

    Ok(GenerationReport {
        deck_id: deck.id.clone(),
        title,
        surface_count: deck.len(),
        url,
        warnings,
    })
}

fn place<B: Backend>(backend: &mut B, deck_id: &str, folder_id: &str) -> Result<String> {
    let folder = backend.get_folder_by_id(folder_id)?;
    backend.move_file(deck_id, &folder)
}

/// Explicit title, else the first line of a leading title record, else `fallback`
pub fn resolve_title(explicit: Option<&str>, records: &[Record], fallback: &str) -> String {
    if let Some(title) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }
    match records.first().and_then(Record::as_slide) {
        Some(SlideRecord::Title(slide)) => {
            let line = slide.title.lines().next().unwrap_or_default().trim();
            if line.is_empty() {
                fallback.to_string()
            } else {
                line.to_string()
            }
        }
        _ => fallback.to_string(),
    }
}

/// First run of 25 or more word/hyphen characters in a folder URL
pub fn extract_folder_id(url: &str) -> Option<String> {
    FOLDER_ID.find(url).map(|m| m.as_str().to_string())
}
