//! WebAssembly bindings for the browser page script.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { renderProfile, RenderOptions } from '@folio-render/wasm';
//!
//! await init();
//!
//! const response = await fetch('data/profile.json');
//! const page = renderProfile(await response.text());
//!
//! document.title = page.title;
//! for (const [id, html] of page.regions) {
//!     const el = document.getElementById(id);
//!     if (el && html) el.innerHTML = html;
//! }
//! ```

#![cfg(feature = "wasm")]

use crate::config::RenderConfig;
use crate::format::format_label;
use crate::loader::parse_document;
use crate::render_json;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in console
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Render a profile document.
///
/// Returns an object with `title`, `description`, `regions` (`[id, html]`
/// pairs, bars already at their final width) and `diagnostics`.
///
/// # Errors
///
/// Returns an error if the document cannot be parsed or the options are invalid.
#[wasm_bindgen(js_name = renderProfile)]
pub fn render_profile(json: &str, options: Option<RenderOptions>) -> Result<JsValue, JsError> {
    let config = options.map(|o| o.config).unwrap_or_default();
    let rendered = render_json(json, Some(&config)).map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&rendered)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Check a profile document without rendering it.
#[wasm_bindgen(js_name = validateProfile)]
pub fn validate_profile(json: &str) -> Result<JsValue, JsError> {
    let result = match parse_document(json.as_bytes()) {
        Ok(doc) => ValidationResult {
            valid: true,
            error: None,
            has_stats: doc.stats.is_some(),
        },
        Err(e) => ValidationResult {
            valid: false,
            error: Some(e.to_string()),
            has_stats: false,
        },
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Display label for a camel-case key, e.g. `ciCd` becomes `CI/CD`.
#[wasm_bindgen(js_name = formatLabel)]
pub fn format_label_js(key: &str) -> String {
    format_label(key)
}

/// Get the library version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Configuration options for rendering.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct RenderOptions {
    config: RenderConfig,
}

#[wasm_bindgen]
impl RenderOptions {
    /// Create a new options object with defaults.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a TOML document.
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(toml: &str) -> Result<RenderOptions, JsError> {
        let config = RenderConfig::from_toml_str(toml).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { config })
    }

    /// Set the delay of the skill meter sweep in milliseconds.
    #[wasm_bindgen(js_name = setSkillsDelayMs)]
    pub fn set_skills_delay_ms(&mut self, ms: u32) {
        self.config.animation.skills_delay_ms = u64::from(ms);
    }

    /// Set the delay of the stat bar sweep in milliseconds.
    #[wasm_bindgen(js_name = setStatsDelayMs)]
    pub fn set_stats_delay_ms(&mut self, ms: u32) {
        self.config.animation.stats_delay_ms = u64::from(ms);
    }

    /// Set the resume download file name.
    #[wasm_bindgen(js_name = setResumeFileName)]
    pub fn set_resume_file_name(&mut self, name: &str) {
        self.config.resume_file_name = Some(name.to_string());
    }

    /// Set the banner text shown when loading fails.
    #[wasm_bindgen(js_name = setLoadFailureMessage)]
    pub fn set_load_failure_message(&mut self, message: &str) {
        self.config.load_failure_message = message.to_string();
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationResult {
    valid: bool,
    error: Option<String>,
    has_stats: bool,
}
