//! # folio-render
//!
//! Binds a structured profile document (personal details, skills, work
//! history, projects and summary stats) to the named regions of a static
//! portfolio page.
//!
//! ## Pipeline
//!
//! 1. **Load**: fetch the document once from a [`Source`] and normalize it.
//! 2. **Render**: run the Personal, Skills, Experience, Projects and Stats
//!    renderers in that order. Each one regenerates its own region and nothing
//!    else; a missing region or missing data only affects that section.
//! 3. **Animate**: Skills and Stats queue a one-shot sweep that raises their
//!    bars from zero to the recorded percentage.
//!
//! A failed load touches no region. It is logged and a dismissible banner is
//! shown instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_render::{Page, Portfolio, RenderConfig, StaticSource};
//! use std::time::Duration;
//!
//! let json = r#"{
//!     "personal": {"name": "Ada Lovelace", "title": "QA Engineer"},
//!     "skills": {"ciCd": ["Jenkins", "GitHub Actions"]},
//!     "stats": {"automationCoverage": 85}
//! }"#;
//!
//! let config = RenderConfig::default();
//! let mut page = Page::portfolio(&config.regions);
//! let mut portfolio = Portfolio::new(config);
//!
//! portfolio.init(&mut StaticSource::new(json), &mut page).unwrap();
//! assert_eq!(page.title(), "Ada Lovelace | QA Engineer");
//! assert!(page.region_html("skills-container").unwrap().contains("<h3>CI/CD</h3>"));
//!
//! // Let the deferred bar sweeps fire.
//! portfolio.advance(Duration::from_secs(1), &mut page);
//! assert!(page.region_html("stats-container").unwrap().contains("width: 85%"));
//! ```
//!
//! ## Document Shape
//!
//! ```text
//! {
//!   "personal":   { "name", "title", "summary"?, "phone"?, "location"?, "email"?,
//!                   "resume"?, "social"?: { "linkedin"?, "github"? } },
//!   "skills":     { "<categoryKey>": ["Label", ...] | [{ "name", "level" }, ...] },
//!   "experience": [{ "period", "position", "company", "location", "project"?,
//!                    "achievements": [..], "technologies"?: [..] }],
//!   "projects":   [{ "title", "category"?, "description", "technologies"?: [..],
//!                    "link"?, "github"? }],
//!   "stats":      { "<statKey>": 0-100 }
//! }
//! ```
//!
//! Keys of `skills` and `stats` are camel-case and displayed through
//! [`format::format_label`]. A `link`/`github` value of `#` means "no link".
//!
//! ## Configuration
//!
//! [`RenderConfig`] can be built in code or read from TOML:
//!
//! ```text
//! resume_file_name = "Ada_Lovelace_CV.pdf"
//!
//! [regions]
//! experience = "work-history"
//!
//! [animation]
//! skills_delay_ms = 500
//! stats_delay_ms = 1000
//! ```
//!
//! ## Features
//!
//! - `wasm`: Enable WebAssembly bindings (requires `wasm-bindgen`)

pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod markup;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod schedule;
pub mod source;
pub mod surface;

// FFI module (only for non-WASM builds)
#[cfg(not(target_arch = "wasm32"))]
pub mod ffi;

// WASM module (only with feature)
#[cfg(feature = "wasm")]
pub mod wasm;

// Convenience re-exports
pub use config::{AnimationConfig, RegionIds, RenderConfig};
pub use error::{ConfigError, Error, LoadError, RenderError, Result};
pub use loader::{load, parse_document};
pub use markup::{Element, Fragment, Node};
pub use model::ProfileDocument;
pub use pipeline::{Portfolio, SectionOutcome};
pub use render::{Section, SectionStatus};
pub use report::{Diagnostic, Reporter, Severity};
pub use schedule::{BarKind, Scheduler};
pub use source::{FetchFailure, FileSource, Source, StaticSource};
pub use surface::{Page, Surface};

/// A fully rendered page: every region's markup plus the page metadata.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RenderedPage {
    pub title: String,
    pub description: Option<String>,
    /// `(region id, inner markup)` for every region, in configuration order.
    pub regions: Vec<(String, String)>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse, render and settle a profile document in one step.
///
/// Renders into a fresh [`Page::portfolio`] layout and fires every bar sweep
/// immediately, so the returned markup shows final bar widths.
///
/// # Example
///
/// ```rust
/// let page = folio_render::render_json(r#"{"stats": {"bugDetection": 92}}"#, None).unwrap();
/// let (_, stats) = page.regions.iter().find(|(id, _)| id == "stats-container").unwrap();
/// assert!(stats.contains("width: 92%"));
/// ```
pub fn render_json(json: &str, config: Option<&RenderConfig>) -> Result<RenderedPage> {
    let config = config.cloned().unwrap_or_default();
    config.validate()?;

    let mut page = Page::portfolio(&config.regions);
    let mut portfolio = Portfolio::new(config);
    portfolio.init(&mut StaticSource::new(json), &mut page)?;
    portfolio.scheduler_mut().run_until_idle(&mut page);

    let regions = portfolio
        .config()
        .regions
        .all()
        .map(|id| (id.to_string(), page.region_html(id).unwrap_or_default()))
        .collect();

    Ok(RenderedPage {
        title: page.title().to_string(),
        description: page.description().map(String::from),
        regions,
        diagnostics: portfolio.reporter().diagnostics().to_vec(),
    })
}
