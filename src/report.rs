//! Failure reporting.
//!
//! Every failure goes to the diagnostic log. Only a failed document load is
//! shown to the visitor, as a dismissible banner; section-local problems are
//! logged and the rest of the page renders normally.

use crate::error::{LoadError, RenderError};
use crate::markup::Element;
use crate::surface::Surface;
use serde::Serialize;
use tracing::{debug, error, warn};

/// Class of the banner element.
pub const BANNER_CLASS: &str = "error-message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Warning,
    Error,
}

/// One logged condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Collects diagnostics and raises the load-failure banner.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a low-importance note, e.g. a skipped personal field.
    pub fn note(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("{}", message);
        self.push(Severity::Debug, message);
    }

    /// Record a section-local failure. Never shown to the visitor.
    pub fn section(&mut self, err: &RenderError) {
        match err {
            RenderError::RegionMissing { section, region } => {
                warn!(section, region = %region, "region not found");
            }
            RenderError::DataMissing { section } => {
                warn!(section, "section data missing");
            }
        }
        self.push(Severity::Warning, err.to_string());
    }

    /// Record a fatal load failure and show `message` in a banner.
    pub fn load_failure(&mut self, err: &LoadError, message: &str, surface: &mut dyn Surface) {
        match err {
            LoadError::SourceUnavailable { status, reason } => {
                error!(?status, reason = %reason, "failed to fetch profile data");
            }
            LoadError::MalformedDocument(detail) => {
                error!(detail = %detail, "failed to parse profile data");
            }
        }
        self.push(Severity::Error, err.to_string());
        surface.show_banner(banner(message));
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics at or above `severity`.
    pub fn at_least(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity >= severity)
    }

    fn push(&mut self, severity: Severity, message: String) {
        self.diagnostics.push(Diagnostic { severity, message });
    }
}

/// The visitor-facing banner with a dismiss control.
pub fn banner(message: &str) -> Element {
    Element::new("div")
        .class(BANNER_CLASS)
        .attr("role", "alert")
        .child(Element::new("p").text(format!("⚠️ {}", message)))
        .child(
            Element::new("button")
                .attr("type", "button")
                .attr("data-action", "dismiss")
                .text("Dismiss"),
        )
}
