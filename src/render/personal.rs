//! Hero and contact fields.
//!
//! Every field is written independently: a missing value or a missing element
//! skips only that field.

use super::{RenderContext, SectionStatus};
use crate::error::RenderError;
use crate::format::{mailto_href, resume_file_name, tel_href};
use crate::markup::Element;
use crate::model::Personal;
use crate::report::Reporter;
use crate::surface::Surface;

pub fn render(
    personal: Option<&Personal>,
    surface: &mut dyn Surface,
    cx: &mut RenderContext<'_>,
) -> Result<SectionStatus, RenderError> {
    let Some(p) = personal else {
        return Ok(SectionStatus::Skipped);
    };
    let config = cx.config;
    let ids = &config.regions;
    let reporter = &mut *cx.reporter;

    surface.set_title(&p.page_title());
    surface.set_description(p.summary.as_deref().unwrap_or_default());

    write_field(surface, reporter, &ids.hero_name, Some(p.name.as_str()), |el, name| {
        el.set_text(name)
    });
    write_field(surface, reporter, &ids.hero_title, Some(p.title.as_str()), |el, title| {
        el.set_text(title)
    });
    write_field(surface, reporter, &ids.hero_summary, p.summary.as_deref(), |el, summary| {
        el.set_text(summary)
    });
    write_field(surface, reporter, &ids.hero_phone, p.phone.as_deref(), |el, phone| {
        el.set_text(phone);
        el.set_attr("href", tel_href(phone));
    });
    write_field(surface, reporter, &ids.hero_location, p.location.as_deref(), |el, location| {
        el.set_text(location)
    });

    write_field(surface, reporter, &ids.linkedin, p.linkedin(), |el, url| {
        el.set_attr("href", url);
        el.set_text("LinkedIn");
    });
    write_field(surface, reporter, &ids.github, p.github(), |el, url| {
        el.set_attr("href", url);
        el.set_text("GitHub");
    });

    let download = config
        .resume_file_name
        .clone()
        .unwrap_or_else(|| resume_file_name(&p.name));
    write_field(surface, reporter, &ids.resume, p.resume.as_deref(), |el, resume| {
        el.set_attr("href", resume);
        el.set_attr("download", download.as_str());
    });

    write_field(surface, reporter, &ids.email, p.email.as_deref(), |el, email| {
        el.set_attr("href", mailto_href(email));
        el.set_text(email);
    });

    Ok(SectionStatus::Rendered)
}

fn write_field<'v>(
    surface: &mut dyn Surface,
    reporter: &mut Reporter,
    id: &str,
    value: Option<&'v str>,
    write: impl FnOnce(&mut Element, &'v str),
) {
    let Some(value) = value else {
        return;
    };
    match surface.element_mut(id) {
        Some(element) => write(element, value),
        None => reporter.note(format!("personal element `{}` not found", id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegionIds;
    use crate::render::test_support::Harness;
    use crate::surface::Page;
    use pretty_assertions::assert_eq;

    fn ada() -> Personal {
        serde_json::from_str(
            r#"{
                "name": "Ada Lovelace",
                "title": "QA Engineer",
                "summary": "Finds bugs before users do.",
                "phone": "+1 (555) 010-2030",
                "location": "London, UK",
                "email": "ada@example.com",
                "resume": "assets/resume.pdf",
                "social": {"linkedin": "https://linkedin.com/in/ada", "github": "https://github.com/ada"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_all_fields() {
        let mut harness = Harness::default();
        let mut page = Page::portfolio(&RegionIds::default());
        let status = render(Some(&ada()), &mut page, &mut harness.cx()).unwrap();
        assert_eq!(status, SectionStatus::Rendered);

        assert_eq!(page.title(), "Ada Lovelace | QA Engineer");
        assert_eq!(page.description(), Some("Finds bugs before users do."));
        assert_eq!(page.region_html("hero-name").unwrap(), "Ada Lovelace");
        assert_eq!(
            page.element("hero-phone").unwrap().to_html(),
            r#"<a id="hero-phone" href="tel:15550102030">+1 (555) 010-2030</a>"#
        );
        assert_eq!(
            page.element("linkedin-link").unwrap().to_html(),
            r#"<a id="linkedin-link" href="https://linkedin.com/in/ada">LinkedIn</a>"#
        );
        assert_eq!(
            page.element("resume-download").unwrap().to_html(),
            r#"<a id="resume-download" class="btn-outline" href="assets/resume.pdf" download="Ada_Lovelace_Resume.pdf"></a>"#
        );
        assert_eq!(
            page.element("email-tracked").unwrap().to_html(),
            r#"<a id="email-tracked" href="mailto:ada@example.com">ada@example.com</a>"#
        );
    }

    #[test]
    fn test_missing_phone_does_not_block_email() {
        let mut harness = Harness::default();
        let mut page = Page::portfolio(&RegionIds::default());
        let mut p = ada();
        p.phone = None;

        render(Some(&p), &mut page, &mut harness.cx()).unwrap();
        assert_eq!(page.region_html("hero-phone").unwrap(), "");
        assert_eq!(page.region_html("email-tracked").unwrap(), "ada@example.com");
    }

    #[test]
    fn test_social_links_are_independent() {
        let mut harness = Harness::default();
        let mut page = Page::portfolio(&RegionIds::default());
        let mut p = ada();
        p.social.as_mut().unwrap().linkedin = None;

        render(Some(&p), &mut page, &mut harness.cx()).unwrap();
        assert_eq!(page.element("linkedin-link").unwrap().get_attr("href"), None);
        assert_eq!(
            page.element("github-link").unwrap().get_attr("href"),
            Some("https://github.com/ada")
        );
    }

    #[test]
    fn test_resume_needs_data_and_element() {
        let mut harness = Harness::default();
        let mut page = Page::portfolio(&RegionIds::default()).without("resume-download");
        render(Some(&ada()), &mut page, &mut harness.cx()).unwrap();
        assert!(harness
            .reporter
            .diagnostics()
            .iter()
            .any(|d| d.message.contains("resume-download")));

        let mut page = Page::portfolio(&RegionIds::default());
        let mut p = ada();
        p.resume = None;
        render(Some(&p), &mut page, &mut harness.cx()).unwrap();
        assert_eq!(page.element("resume-download").unwrap().get_attr("href"), None);
    }

    #[test]
    fn test_configured_resume_name() {
        let mut harness = Harness::default();
        harness.config.resume_file_name = Some("cv.pdf".into());
        let mut page = Page::portfolio(&RegionIds::default());
        render(Some(&ada()), &mut page, &mut harness.cx()).unwrap();
        assert_eq!(
            page.element("resume-download").unwrap().get_attr("download"),
            Some("cv.pdf")
        );
    }

    #[test]
    fn test_absent_personal_is_skipped() {
        let mut harness = Harness::default();
        let mut page = Page::portfolio(&RegionIds::default());
        let before = page.clone();
        assert_eq!(
            render(None, &mut page, &mut harness.cx()).unwrap(),
            SectionStatus::Skipped
        );
        assert_eq!(page, before);
    }

    #[test]
    fn test_text_fields_are_escaped() {
        let mut harness = Harness::default();
        let mut page = Page::portfolio(&RegionIds::default());
        let mut p = ada();
        p.name = "<b>Ada</b>".into();
        render(Some(&p), &mut page, &mut harness.cx()).unwrap();
        assert_eq!(page.region_html("hero-name").unwrap(), "&lt;b&gt;Ada&lt;/b&gt;");
    }
}
