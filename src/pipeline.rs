//! The page render pipeline: load once, then run every section renderer.

use crate::config::RenderConfig;
use crate::error::{LoadError, RenderError};
use crate::loader::load;
use crate::model::ProfileDocument;
use crate::render::{render_section, RenderContext, Section, SectionStatus};
use crate::report::Reporter;
use crate::schedule::Scheduler;
use crate::source::Source;
use crate::surface::Surface;
use std::time::Duration;
use tracing::{debug, info};

/// Result of running one section renderer.
pub type SectionOutcome = (Section, Result<SectionStatus, RenderError>);

/// Render state for one page view.
///
/// Holds the document once it has loaded, the ready flag, the pending bar
/// sweeps and the diagnostics collected so far. The document is never
/// modified after loading.
#[derive(Debug)]
pub struct Portfolio {
    config: RenderConfig,
    document: Option<ProfileDocument>,
    ready: bool,
    reporter: Reporter,
    scheduler: Scheduler,
}

impl Portfolio {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            document: None,
            ready: false,
            reporter: Reporter::new(),
            scheduler: Scheduler::new(),
        }
    }

    /// Load the document from `source` and render every section.
    ///
    /// On failure no section is touched: the failure is logged and the
    /// load-failure banner is shown instead.
    pub fn init(
        &mut self,
        source: &mut dyn Source,
        surface: &mut dyn Surface,
    ) -> Result<Vec<SectionOutcome>, LoadError> {
        for (section, id) in self.config.regions.containers() {
            debug!(section, region = id, present = surface.has_element(id), "checking container");
        }

        match load(source) {
            Ok(document) => {
                info!("profile data loaded");
                self.document = Some(document);
                self.ready = true;
                Ok(self.render_all(surface))
            }
            Err(err) => {
                self.reporter
                    .load_failure(&err, &self.config.load_failure_message, surface);
                Err(err)
            }
        }
    }

    /// Run every section renderer in the fixed order.
    ///
    /// Section failures are reported and do not stop later sections.
    /// Calling this again regenerates every region from the same document.
    pub fn render_all(&mut self, surface: &mut dyn Surface) -> Vec<SectionOutcome> {
        let outcomes: Vec<SectionOutcome> = Section::ALL
            .iter()
            .map(|&section| (section, self.render_section(section, surface)))
            .collect();

        let rendered = outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Ok(SectionStatus::Rendered)))
            .count();
        info!(rendered, total = outcomes.len(), "portfolio rendered");

        outcomes
    }

    /// Run one section renderer, reporting any failure.
    pub fn render_section(
        &mut self,
        section: Section,
        surface: &mut dyn Surface,
    ) -> Result<SectionStatus, RenderError> {
        let Some(document) = self.document.as_ref() else {
            let err = RenderError::DataMissing {
                section: section.name(),
            };
            self.reporter.section(&err);
            return Err(err);
        };

        let mut cx = RenderContext {
            config: &self.config,
            reporter: &mut self.reporter,
            scheduler: &mut self.scheduler,
        };
        let outcome = render_section(section, document, surface, &mut cx);

        if let Err(err) = &outcome {
            self.reporter.section(err);
        }
        outcome
    }

    /// Advance the sweep clock, firing due bar sweeps. Returns how many fired.
    pub fn advance(&mut self, elapsed: Duration, surface: &mut dyn Surface) -> usize {
        self.scheduler.advance(elapsed, surface)
    }

    /// Whether a document has been loaded successfully.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn document(&self) -> Option<&ProfileDocument> {
        self.document.as_ref()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
