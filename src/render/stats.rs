//! Summary statistic cards.
//!
//! Stats are expected in every successfully loaded document, so an absent
//! slice is reported as missing data rather than silently skipped.

use super::{replace_region, RenderContext, Section, SectionStatus};
use crate::error::RenderError;
use crate::format::format_label;
use crate::markup::Element;
use crate::model::Stat;
use crate::schedule::{BarKind, DATA_VALUE};
use crate::surface::Surface;

pub fn render(
    stats: Option<&[Stat]>,
    surface: &mut dyn Surface,
    cx: &mut RenderContext<'_>,
) -> Result<SectionStatus, RenderError> {
    let stats = stats.ok_or(RenderError::DataMissing {
        section: Section::Stats.name(),
    })?;
    if stats.is_empty() {
        return Ok(SectionStatus::Skipped);
    }

    let grid = Element::new("div")
        .class("stats-grid")
        .children(stats.iter().map(stat_card));
    replace_region(surface, Section::Stats, &cx.config.regions.stats, grid.into())?;
    cx.scheduler
        .schedule(BarKind::StatBar, cx.config.animation.stats_delay());

    Ok(SectionStatus::Rendered)
}

fn stat_card(stat: &Stat) -> Element {
    Element::new("div")
        .class("stat-card")
        .child(Element::new("h3").text(format_label(&stat.key)))
        .child(
            Element::new("div")
                .class("stat-number")
                .text(format!("{}%", stat.value)),
        )
        .child(
            Element::new("div").class("stat-bar").child(
                Element::new("div")
                    .class(BarKind::StatBar.fill_class())
                    .attr(DATA_VALUE, stat.value.to_string()),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::Harness;
    use crate::surface::Page;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_render_stats() {
        let stats = vec![Stat { key: "automationCoverage".into(), value: 85 }];
        let mut harness = Harness::default();
        let mut page = Page::with_elements(["stats-container"]);

        render(Some(stats.as_slice()), &mut page, &mut harness.cx()).unwrap();
        assert_eq!(
            page.region_html("stats-container").unwrap(),
            concat!(
                r#"<div class="stats-grid"><div class="stat-card"><h3>Automation Coverage</h3>"#,
                r#"<div class="stat-number">85%</div>"#,
                r#"<div class="stat-bar"><div class="stat-fill" data-value="85"></div></div>"#,
                r#"</div></div>"#
            )
        );
        assert_eq!(harness.scheduler.next_due(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn test_out_of_range_value_rendered_as_is() {
        let stats = vec![Stat { key: "overdrive".into(), value: 130 }];
        let mut harness = Harness::default();
        let mut page = Page::with_elements(["stats-container"]);

        render(Some(stats.as_slice()), &mut page, &mut harness.cx()).unwrap();
        let html = page.region_html("stats-container").unwrap();
        assert!(html.contains(r#"<div class="stat-number">130%</div>"#));
        assert!(html.contains(r#"data-value="130""#));
    }

    #[test]
    fn test_absent_stats_is_data_missing() {
        let mut harness = Harness::default();
        let mut page = Page::with_elements(["stats-container"]);
        assert_eq!(
            render(None, &mut page, &mut harness.cx()),
            Err(RenderError::DataMissing { section: "stats" })
        );
        assert_eq!(page.region_html("stats-container").unwrap(), "");
    }

    #[test]
    fn test_empty_stats_is_skipped() {
        let mut harness = Harness::default();
        let mut page = Page::with_elements(["stats-container"]);
        assert_eq!(
            render(Some(&[][..]), &mut page, &mut harness.cx()),
            Ok(SectionStatus::Skipped)
        );
        assert_eq!(harness.scheduler.pending(), 0);
    }
}
