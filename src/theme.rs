// ABOUTME: Theme configuration for the slidegen application
// ABOUTME: Defaults, presets and caller overrides merged into one run-scoped snapshot

use crate::deck::Rgb;
use crate::errors::{Result, SlideError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Style parameters every generator reads during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub preset_name: String,
    pub theme_color: String,
    pub font_family: String,
    pub footer_text: String,
    pub output_folder_url: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset_name: "Default".to_string(),
            theme_color: "#4285F4".to_string(),
            font_family: "Noto Sans JP".to_string(),
            footer_text: "© Google Inc.".to_string(),
            output_folder_url: String::new(),
        }
    }
}

impl ThemeConfig {
    /// Accent color; an unparsable value falls back to the default accent
    pub fn accent(&self) -> Rgb {
        Rgb::from_hex(&self.theme_color).unwrap_or_else(|_| {
            warn!(
                "Invalid theme color {:?}, using the default accent",
                self.theme_color
            );
            Rgb::new(0x42, 0x85, 0xF4)
        })
    }

    pub fn has_footer(&self) -> bool {
        !self.footer_text.is_empty()
    }
}

/// Caller-supplied override; absent fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_folder_url: Option<String>,
}

impl From<ThemeConfig> for ThemeSettings {
    fn from(config: ThemeConfig) -> Self {
        Self {
            preset_name: Some(config.preset_name),
            theme_color: Some(config.theme_color),
            font_family: Some(config.font_family),
            footer_text: Some(config.footer_text),
            output_folder_url: Some(config.output_folder_url),
        }
    }
}

/// Named color/font combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub color: &'static str,
    pub font: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Default",
        color: "#1B2A4A",
        font: "Noto Sans JP",
    },
    Preset {
        name: "Corporate",
        color: "#0F3460",
        font: "Biz UDMincho",
    },
    Preset {
        name: "Creative",
        color: "#E94560",
        font: "M PLUS Rounded 1c",
    },
];

/// Look up a preset by name, ignoring ASCII case
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Run-scoped theme store: updates are applied whole, then generators read a snapshot
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    current: ThemeConfig,
}

impl ThemeStore {
    pub fn new(defaults: ThemeConfig) -> Self {
        Self { current: defaults }
    }

    pub fn get(&self) -> &ThemeConfig {
        &self.current
    }

    /// Merge a settings object; validation happens before any field is written
    pub fn update(&mut self, settings: &ThemeSettings) -> Result<()> {
        if let Some(color) = &settings.theme_color {
            Rgb::from_hex(color)?;
        }

        let mut next = self.current.clone();
        if let Some(name) = &settings.preset_name {
            next.preset_name = name.clone();
        }
        if let Some(color) = &settings.theme_color {
            next.theme_color = color.clone();
        }
        if let Some(font) = &settings.font_family {
            next.font_family = font.clone();
        }
        if let Some(footer) = &settings.footer_text {
            next.footer_text = footer.clone();
        }
        if let Some(url) = &settings.output_folder_url {
            next.output_folder_url = url.clone();
        }

        debug!("Theme updated: {:?}", next);
        self.current = next;
        Ok(())
    }

    /// Apply a named preset (name, color and font only)
    pub fn apply_preset(&mut self, name: &str) -> Result<()> {
        let preset = find_preset(name)
            .ok_or_else(|| SlideError::ThemeError(format!("unknown preset: {}", name)))?;
        self.current.preset_name = preset.name.to_string();
        self.current.theme_color = preset.color.to_string();
        self.current.font_family = preset.font.to_string();
        Ok(())
    }

    pub fn snapshot(&self) -> ThemeConfig {
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_only_touches_present_fields() {
        let mut store = ThemeStore::default();
        store
            .update(&ThemeSettings {
                theme_color: Some("#E94560".to_string()),
                ..Default::default()
            })
            .unwrap();

        let theme = store.get();
        assert_eq!(theme.theme_color, "#E94560");
        assert_eq!(theme.font_family, "Noto Sans JP");
        assert_eq!(theme.footer_text, "© Google Inc.");
    }

    #[test]
    fn test_empty_footer_overrides_default() {
        let mut store = ThemeStore::default();
        store
            .update(&ThemeSettings {
                footer_text: Some(String::new()),
                ..Default::default()
            })
            .unwrap();
        assert!(!store.get().has_footer());
    }

    #[test]
    fn test_invalid_color_leaves_store_untouched() {
        let mut store = ThemeStore::default();
        let before = store.snapshot();
        let result = store.update(&ThemeSettings {
            font_family: Some("BIZ UDPGothic".to_string()),
            theme_color: Some("blue".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_reapplying_preset_is_idempotent() {
        let mut store = ThemeStore::default();
        store.apply_preset("Default").unwrap();
        let first = serde_json::to_vec(store.get()).unwrap();
        store.apply_preset("Default").unwrap();
        let second = serde_json::to_vec(store.get()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_preset() {
        let mut store = ThemeStore::default();
        assert!(store.apply_preset("Neon").is_err());
        assert_eq!(find_preset("corporate").map(|p| p.font), Some("Biz UDMincho"));
    }

    #[test]
    fn test_settings_wire_format() {
        let settings: ThemeSettings = serde_json::from_str(
            r##"{"presetName":"Creative","themeColor":"#E94560","fontFamily":"M PLUS Rounded 1c","footerText":"","outputFolderUrl":""}"##,
        )
        .unwrap();
        assert_eq!(settings.footer_text.as_deref(), Some(""));
        assert_eq!(settings.preset_name.as_deref(), Some("Creative"));
    }
}
