// ABOUTME: Configuration module for the slidegen application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::backend::MemoryBackend;
use crate::pptx::PptxBackend;
use crate::theme::ThemeConfig;
use log::warn;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;

/// Global configuration for the application
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where saved decks are written
    pub output_dir: PathBuf,
    /// Directory whose sub-directories act as destination folders
    pub folder_root: PathBuf,
    pub theme: ThemeConfig,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            folder_root: PathBuf::from("folders"),
            theme: ThemeConfig::default(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let output_dir = lookup("SLIDEGEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let folder_root = lookup("SLIDEGEN_FOLDER_ROOT")
            .map(PathBuf::from)
            .unwrap_or(defaults.folder_root);
        let port = match lookup("SLIDEGEN_PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                warn!("Ignoring invalid SLIDEGEN_PORT {:?}", value);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let mut theme = defaults.theme;
        if let Some(color) = lookup("SLIDEGEN_THEME_COLOR") {
            theme.theme_color = color;
        }
        if let Some(font) = lookup("SLIDEGEN_FONT_FAMILY") {
            theme.font_family = font;
        }
        // An empty value is kept: it switches the footer off
        if let Some(footer) = lookup("SLIDEGEN_FOOTER_TEXT") {
            theme.footer_text = footer;
        }

        Self {
            output_dir,
            folder_root,
            theme,
            port,
        }
    }

    /// Base theme every run starts from
    pub fn theme(&self) -> ThemeConfig {
        self.theme.clone()
    }

    /// File backend writing into the configured directories
    pub fn pptx_backend(&self) -> PptxBackend {
        PptxBackend::new(&self.output_dir, &self.folder_root)
    }

    /// Backend that keeps everything in memory
    pub fn memory_backend(&self) -> MemoryBackend {
        MemoryBackend::new()
    }
}
