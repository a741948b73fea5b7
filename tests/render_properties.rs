//! End-to-end behavior of the render pipeline against an in-memory page.

use folio_render::format::format_label;
use folio_render::{
    FetchFailure, FileSource, LoadError, Page, Portfolio, RegionIds, RenderConfig, RenderError,
    Section, SectionStatus, Severity, StaticSource,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/profile.json")
}

fn rendered(json: &str) -> (Portfolio, Page) {
    init_tracing();
    let mut page = Page::portfolio(&RegionIds::default());
    let mut portfolio = Portfolio::default();
    portfolio
        .init(&mut StaticSource::new(json), &mut page)
        .unwrap();
    (portfolio, page)
}

#[test]
fn test_fixture_renders_every_section() {
    init_tracing();
    let mut page = Page::portfolio(&RegionIds::default());
    let mut portfolio = Portfolio::default();
    let outcomes = portfolio
        .init(&mut FileSource::new(fixture()), &mut page)
        .unwrap();

    for (section, outcome) in &outcomes {
        assert_eq!(outcome, &Ok(SectionStatus::Rendered), "{}", section);
    }
    assert_eq!(page.title(), "Ada Lovelace | Senior QA Automation Engineer");
    assert!(page.banners().is_empty());

    let skills = page.region_html("skills-container").unwrap();
    let test_automation = skills.find("Test Automation").unwrap();
    let ci_cd = skills.find("<h3>CI/CD</h3>").unwrap();
    assert!(test_automation < ci_cd);
    assert!(!skills.contains("Performance Testing"));

    let experience = page.region_html("experience-timeline").unwrap();
    assert_eq!(experience.matches("timeline-item").count(), 2);
    assert!(experience.contains("Analytical Engines Ltd • London"));
    assert!(experience.contains("Project: Checkout Platform"));
}

#[test]
fn test_missing_optional_field_only_blanks_that_field() {
    let (_, page) = rendered(
        r#"{"personal": {"name": "Ada", "title": "QA", "email": "ada@example.com"}}"#,
    );

    assert_eq!(page.region_html("hero-name").unwrap(), "Ada");
    assert_eq!(page.region_html("hero-phone").unwrap(), "");
    assert_eq!(page.element("hero-phone").unwrap().get_attr("href"), None);
    assert_eq!(page.region_html("hero-location").unwrap(), "");
    assert_eq!(
        page.element("email-tracked").unwrap().get_attr("href"),
        Some("mailto:ada@example.com")
    );
}

#[test]
fn test_missing_region_only_affects_its_section() {
    init_tracing();
    let json = std::fs::read_to_string(fixture()).unwrap();
    let mut page = Page::portfolio(&RegionIds::default()).without("projects-container");
    let mut portfolio = Portfolio::default();

    let outcomes = portfolio
        .init(&mut StaticSource::new(json), &mut page)
        .unwrap();

    assert_eq!(
        outcomes[3],
        (
            Section::Projects,
            Err(RenderError::RegionMissing {
                section: "projects",
                region: "projects-container".to_string(),
            })
        )
    );
    assert_eq!(outcomes[4].1, Ok(SectionStatus::Rendered));
    assert!(page
        .region_html("stats-container")
        .unwrap()
        .contains("Bug Detection"));
    assert!(page.banners().is_empty());
    assert_eq!(portfolio.reporter().at_least(Severity::Warning).count(), 1);
}

#[test]
fn test_first_element_decides_skill_form() {
    let (_, page) = rendered(
        r#"{"skills": {
            "tools": ["Jira", {"name": "Postman", "level": 70}],
            "languages": [{"name": "Rust", "level": 80}, "Python"]
        }}"#,
    );
    let skills = page.region_html("skills-container").unwrap();

    assert!(skills.contains(r#"<span class="skill-tag">Postman</span>"#));
    assert_eq!(skills.matches("skill-meter").count(), 2);
    assert!(skills.contains(r#"data-value="0""#));
}

#[test]
fn test_placeholder_links_are_never_rendered() {
    let (_, page) = rendered(&std::fs::read_to_string(fixture()).unwrap());
    let projects = page.region_html("projects-container").unwrap();

    assert!(!projects.contains(r##"href="#""##));
    assert_eq!(projects.matches("View Project").count(), 1);
    assert_eq!(projects.matches(">GitHub<").count(), 1);
    assert!(projects.contains(r#"rel="noopener noreferrer""#));
}

#[test]
fn test_label_formatting() {
    assert_eq!(format_label("testAutomation"), "Test Automation");
    assert_eq!(format_label("ciCd"), "CI/CD");
    assert_eq!(format_label("automationCoverage"), "Automation Coverage");
    assert_eq!(format_label("x"), "X");
}

#[test]
fn test_render_all_is_idempotent() {
    let (mut portfolio, mut page) = rendered(&std::fs::read_to_string(fixture()).unwrap());
    let first = page.clone();

    portfolio.render_all(&mut page);
    assert_eq!(page, first);
}

#[test]
fn test_fetch_failure_shows_one_banner_and_touches_nothing() {
    init_tracing();
    let blank = Page::portfolio(&RegionIds::default());
    let mut page = blank.clone();
    let mut portfolio = Portfolio::default();
    let mut source = StaticSource::failing(FetchFailure::with_status(404, "Not Found"));

    let err = portfolio.init(&mut source, &mut page).unwrap_err();
    assert!(matches!(
        err,
        LoadError::SourceUnavailable {
            status: Some(404),
            ..
        }
    ));

    assert_eq!(page.banners().len(), 1);
    assert!(page.banners()[0]
        .text_content()
        .contains("Failed to load portfolio data"));
    for id in RegionIds::default().all() {
        assert_eq!(page.element(id), blank.element(id), "{}", id);
    }
    assert_eq!(portfolio.reporter().at_least(Severity::Error).count(), 1);

    assert!(page.dismiss_banner(0));
    assert_eq!(page, blank);
}

#[test]
fn test_malformed_document_is_a_load_failure() {
    init_tracing();
    let mut page = Page::portfolio(&RegionIds::default());
    let mut portfolio = Portfolio::default();

    let err = portfolio
        .init(&mut StaticSource::new(r#"{"stats": {"x": "high"}}"#), &mut page)
        .unwrap_err();
    assert!(matches!(err, LoadError::MalformedDocument(_)));
    assert_eq!(page.banners().len(), 1);
    assert!(!portfolio.is_ready());
}

#[test]
fn test_sweeps_fill_every_bar_at_configured_delays() {
    init_tracing();
    let config = RenderConfig::from_toml_str(
        "[animation]\nskills_delay_ms = 200\nstats_delay_ms = 400\n",
    )
    .unwrap();
    let mut page = Page::portfolio(&config.regions);
    let mut portfolio = Portfolio::new(config);
    portfolio
        .init(&mut FileSource::new(fixture()), &mut page)
        .unwrap();

    let skills = page.region_html("skills-container").unwrap();
    assert_eq!(skills.matches("width: 0%").count(), 2);

    assert_eq!(portfolio.advance(Duration::from_millis(199), &mut page), 0);
    assert_eq!(portfolio.advance(Duration::from_millis(1), &mut page), 1);
    let skills = page.region_html("skills-container").unwrap();
    assert!(skills.contains("width: 95%"));
    assert!(skills.contains("width: 88%"));
    assert!(!page.region_html("stats-container").unwrap().contains("width"));

    assert_eq!(portfolio.advance(Duration::from_millis(200), &mut page), 1);
    let stats = page.region_html("stats-container").unwrap();
    assert!(stats.contains("width: 85%"));
    assert!(stats.contains("width: 92%"));
    assert_eq!(portfolio.scheduler().pending(), 0);
}

#[test]
fn test_custom_region_ids() {
    init_tracing();
    let config = RenderConfig::from_toml_str("[regions]\nstats = \"numbers\"\n").unwrap();
    let mut page = Page::portfolio(&config.regions);
    let mut portfolio = Portfolio::new(config);
    portfolio
        .init(&mut StaticSource::new(r#"{"stats": {"uptime": 99}}"#), &mut page)
        .unwrap();

    assert!(page.region_html("numbers").unwrap().contains("Uptime"));
    assert!(page.element("stats-container").is_none());
}
