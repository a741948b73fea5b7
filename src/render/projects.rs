//! Project cards.

use super::{replace_region, RenderContext, Section, SectionStatus};
use crate::error::RenderError;
use crate::markup::Element;
use crate::model::ProjectEntry;
use crate::surface::Surface;

pub fn render(
    projects: Option<&[ProjectEntry]>,
    surface: &mut dyn Surface,
    cx: &mut RenderContext<'_>,
) -> Result<SectionStatus, RenderError> {
    let projects = projects.unwrap_or_default();
    if projects.is_empty() {
        return Ok(SectionStatus::Skipped);
    }

    let grid = Element::new("div")
        .class("projects-grid")
        .children(projects.iter().map(card));
    replace_region(
        surface,
        Section::Projects,
        &cx.config.regions.projects,
        grid.into(),
    )?;

    Ok(SectionStatus::Rendered)
}

fn card(project: &ProjectEntry) -> Element {
    let meta = project.category.as_deref().map(|category| {
        Element::new("div")
            .class("project-meta")
            .child(Element::new("span").class("project-category").text(category))
    });

    let header = Element::new("div")
        .class("project-card-header")
        .child(Element::new("h3").text(project.title.as_str()))
        .child_opt(meta);

    let body = Element::new("div")
        .class("project-card-body")
        .child(Element::new("p").text(project.description.as_str()))
        .child(
            Element::new("div").class("project-tech").children(
                project
                    .technologies
                    .iter()
                    .map(|tech| Element::new("span").text(tech.as_str())),
            ),
        );

    let footer = Element::new("div")
        .class("project-card-footer")
        .child_opt(
            project
                .live_link()
                .map(|href| action_link(href, "btn-qa", "View Project")),
        )
        .child_opt(
            project
                .repository_link()
                .map(|href| action_link(href, "btn-qa btn-outline", "GitHub")),
        );

    Element::new("div")
        .class("project-card")
        .child(header)
        .child(body)
        .child(footer)
}

fn action_link(href: &str, class: &str, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .class(class)
        .text(label)
}
