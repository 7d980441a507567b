// ABOUTME: Entry adapters for the slidegen application
// ABOUTME: Turns raw JSON requests into generation runs and structured responses

use crate::backend::Backend;
use crate::errors::{Result, SlideError};
use crate::generate::{generate, resolve_title, GenerateOptions, GenerationReport};
use crate::records::{parse_records, Record};
use crate::theme::{ThemeConfig, ThemeSettings};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title used by the JSON entry points when the records do not name the deck
pub const ENTRY_FALLBACK_TITLE: &str = "New Presentation";

/// Parse `records_json` (and optional settings) and run a generation.
///
/// Parse errors come back as `InputError` before the backend is touched; failures
/// during the run are wrapped as `GenerationFailed`.
pub fn create_presentation_from_json<B: Backend>(
    backend: &mut B,
    base_theme: &ThemeConfig,
    records_json: &str,
    settings_json: Option<&str>,
) -> Result<GenerationReport> {
    let records = parse_records(records_json)?;
    let settings = match settings_json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => Some(
            serde_json::from_str::<ThemeSettings>(json)
                .map_err(|e| SlideError::InputError(format!("settings: {}", e)))?,
        ),
        None => None,
    };

    let options = GenerateOptions {
        title: Some(resolve_title(None, &records, ENTRY_FALLBACK_TITLE)),
        settings,
    };

    generate(backend, base_theme, &records, &options).map_err(SlideError::generation_failed)
}

/// Object form of a generation POST: the record array plus optional settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub slides: Value,
    #[serde(default)]
    pub settings: Option<ThemeSettings>,
}

/// Read a POST body: a bare record array, or `{"slides": [...], "settings": {...}}`
pub fn parse_post_body(body: &str) -> Result<(Vec<Record>, Option<ThemeSettings>)> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => Ok((items.into_iter().map(Record::from_value).collect(), None)),
        value @ Value::Object(_) => {
            let request: PostRequest = serde_json::from_value(value)?;
            match request.slides {
                Value::Array(items) => Ok((
                    items.into_iter().map(Record::from_value).collect(),
                    request.settings,
                )),
                _ => Err(SlideError::InputError(
                    "\"slides\" must be an array of slide records".to_string(),
                )),
            }
        }
        _ => Err(SlideError::InputError(
            "expected a record array or an object with \"slides\"".to_string(),
        )),
    }
}

/// Response envelope of a generation POST
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PostResponse {
    pub fn ok(url: String) -> Self {
        Self {
            success: true,
            url: Some(url),
            error: None,
        }
    }

    pub fn failed(err: &SlideError) -> Self {
        Self {
            success: false,
            url: None,
            error: Some(err.to_string()),
        }
    }
}

/// Handle a generation POST; no title is passed, so the orchestrator's fallback applies
pub fn handle_post<B: Backend>(backend: &mut B, base_theme: &ThemeConfig, body: &str) -> PostResponse {
    let result = parse_post_body(body).and_then(|(records, settings)| {
        let options = GenerateOptions {
            title: None,
            settings,
        };
        generate(backend, base_theme, &records, &options).map_err(SlideError::generation_failed)
    });

    match result {
        Ok(report) => {
            info!("POST generation finished: {}", report.url);
            PostResponse::ok(report.url)
        }
        Err(e) => {
            error!("POST generation failed: {}", e);
            PostResponse::failed(&e)
        }
    }
}
