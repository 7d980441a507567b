// ABOUTME: Library module for the slidegen program.
// ABOUTME: Turns typed slide records into themed, laid-out decks on a pluggable backend.

pub mod backend;
pub mod config;
pub mod deck;
pub mod entry;
pub mod errors;
pub mod generate;
pub mod generators;
pub mod layout;
pub mod pptx;
pub mod records;
pub mod server;
pub mod theme;

// Reexport common types and functions
pub use backend::{Backend, DeckService, Folder, MemoryBackend, PlacementService};
pub use config::Config;
pub use deck::{Deck, Element, Rect, Surface};
pub use entry::{create_presentation_from_json, handle_post, PostResponse};
pub use errors::{Result, SlideError};
pub use generate::{generate, GenerateOptions, GenerationReport, Warning};
pub use pptx::{write_pptx, PptxBackend};
pub use records::{parse_records, sample_records, Record, SlideRecord};
pub use server::serve;
pub use theme::{ThemeConfig, ThemeSettings, ThemeStore, PRESETS};

#[cfg(test)]
mod tests;
