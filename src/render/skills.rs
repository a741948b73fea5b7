//! Skill categories, rendered as tag clouds or proficiency meters.

use super::{replace_region, RenderContext, Section, SectionStatus};
use crate::error::RenderError;
use crate::format::format_label;
use crate::markup::{Element, Fragment};
use crate::model::{LeveledSkill, SkillCategory, SkillList};
use crate::schedule::{BarKind, DATA_VALUE};
use crate::surface::Surface;

pub fn render(
    skills: Option<&[SkillCategory]>,
    surface: &mut dyn Surface,
    cx: &mut RenderContext<'_>,
) -> Result<SectionStatus, RenderError> {
    let content: Fragment = skills
        .unwrap_or_default()
        .iter()
        .filter(|category| !category.items.is_empty())
        .map(category)
        .collect();

    if content.is_empty() {
        return Ok(SectionStatus::Skipped);
    }

    replace_region(surface, Section::Skills, &cx.config.regions.skills, content)?;
    cx.scheduler
        .schedule(BarKind::SkillMeter, cx.config.animation.skills_delay());

    Ok(SectionStatus::Rendered)
}

fn category(category: &SkillCategory) -> Element {
    let items = match &category.items {
        SkillList::Leveled(skills) => Element::new("div")
            .class("skill-items")
            .children(skills.iter().map(meter)),
        SkillList::Tags(tags) => Element::new("div").class("skill-items").child(
            Element::new("div").class("skill-tags").children(
                tags.iter()
                    .map(|tag| Element::new("span").class("skill-tag").text(tag.as_str())),
            ),
        ),
    };

    Element::new("div")
        .class("skill-category")
        .child(Element::new("h3").text(format_label(&category.key)))
        .child(items)
}

fn meter(skill: &LeveledSkill) -> Element {
    Element::new("div")
        .class("skill-meter")
        .child(
            Element::new("div")
                .class("meter-label")
                .child(Element::new("span").text(skill.name.as_str()))
                .child(Element::new("span").text(format!("{}%", skill.level))),
        )
        .child(
            Element::new("div").class("meter-bar").child(
                Element::new("div")
                    .class(BarKind::SkillMeter.fill_class())
                    .attr(DATA_VALUE, skill.level.to_string())
                    .attr("style", "width: 0%"),
            ),
        )
}
