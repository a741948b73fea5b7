//! Work history timeline.

use super::{replace_region, RenderContext, Section, SectionStatus};
use crate::error::RenderError;
use crate::markup::{Element, Fragment};
use crate::model::ExperienceEntry;
use crate::surface::Surface;

pub fn render(
    experience: Option<&[ExperienceEntry]>,
    surface: &mut dyn Surface,
    cx: &mut RenderContext<'_>,
) -> Result<SectionStatus, RenderError> {
    let entries = experience.unwrap_or_default();
    if entries.is_empty() {
        return Ok(SectionStatus::Skipped);
    }

    let content: Fragment = entries.iter().map(timeline_item).collect();
    replace_region(
        surface,
        Section::Experience,
        &cx.config.regions.experience,
        content,
    )?;

    Ok(SectionStatus::Rendered)
}

fn timeline_item(entry: &ExperienceEntry) -> Element {
    let highlight = entry.project.as_deref().map(|project| {
        Element::new("div")
            .class("project-highlight")
            .text(format!("Project: {}", project))
    });

    let content = Element::new("div")
        .class("timeline-content")
        .child(Element::new("h3").text(entry.position.as_str()))
        .child(Element::new("h4").text(format!("{} • {}", entry.company, entry.location)))
        .child_opt(highlight)
        .child(
            Element::new("ul").class("achievements").children(
                entry
                    .achievements
                    .iter()
                    .map(|achievement| Element::new("li").text(achievement.as_str())),
            ),
        )
        .child(
            Element::new("div").class("tech-used").children(
                entry
                    .technologies
                    .iter()
                    .map(|tech| Element::new("span").class("tech-badge").text(tech.as_str())),
            ),
        );

    Element::new("div")
        .class("timeline-item")
        .child(
            Element::new("div")
                .class("timeline-date")
                .text(entry.period.as_str()),
        )
        .child(content)
}
