//! Section renderers.
//!
//! Each renderer owns exactly one region of the page (Personal owns a set of
//! individual fields plus the page title and description). A renderer
//! regenerates its whole region on every call and touches nothing else.

pub mod experience;
pub mod personal;
pub mod projects;
pub mod skills;
pub mod stats;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::markup::Fragment;
use crate::model::ProfileDocument;
use crate::report::Reporter;
use crate::schedule::Scheduler;
use crate::surface::Surface;
use std::fmt;

/// The page sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Personal,
    Skills,
    Experience,
    Projects,
    Stats,
}

impl Section {
    /// Every section in the fixed render order.
    pub const ALL: [Section; 5] = [
        Section::Personal,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Stats,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Stats => "stats",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a renderer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    /// The region was regenerated.
    Rendered,
    /// There was nothing to render; the region keeps its existing content.
    Skipped,
}

/// State shared by the renderers during one pass.
pub struct RenderContext<'a> {
    pub config: &'a RenderConfig,
    pub reporter: &'a mut Reporter,
    pub scheduler: &'a mut Scheduler,
}

/// Run one section's renderer against its slice of `doc`.
pub fn render_section(
    section: Section,
    doc: &ProfileDocument,
    surface: &mut dyn Surface,
    cx: &mut RenderContext<'_>,
) -> Result<SectionStatus, RenderError> {
    match section {
        Section::Personal => personal::render(doc.personal.as_ref(), surface, cx),
        Section::Skills => skills::render(doc.skills.as_deref(), surface, cx),
        Section::Experience => experience::render(doc.experience.as_deref(), surface, cx),
        Section::Projects => projects::render(doc.projects.as_deref(), surface, cx),
        Section::Stats => stats::render(doc.stats.as_deref(), surface, cx),
    }
}

/// Replace the whole content of the region `id`.
pub(crate) fn replace_region(
    surface: &mut dyn Surface,
    section: Section,
    id: &str,
    content: Fragment,
) -> Result<(), RenderError> {
    let region = surface
        .element_mut(id)
        .ok_or_else(|| RenderError::RegionMissing {
            section: section.name(),
            region: id.to_string(),
        })?;
    region.replace_children(content);
    Ok(())
}
