//! The page the renderer writes into.
//!
//! A [`Surface`] exposes named insertion points. Every lookup is optional:
//! renderers treat a missing element as a logged no-op, never a failure.

use crate::config::RegionIds;
use crate::markup::Element;
use std::collections::BTreeMap;

/// Named insertion points plus the page-level title and description.
pub trait Surface {
    /// Look up an element by identifier.
    fn element_mut(&mut self, id: &str) -> Option<&mut Element>;

    /// Whether an element with this identifier exists.
    fn has_element(&self, id: &str) -> bool;

    /// Overwrite the page title.
    fn set_title(&mut self, title: &str);

    /// Overwrite the description metadata, if the page has one.
    fn set_description(&mut self, description: &str);

    /// Prepend a banner to the page body.
    fn show_banner(&mut self, banner: Element);

    /// Visit every element on the page, including region descendants.
    fn for_each_element(&mut self, visit: &mut dyn FnMut(&mut Element));
}

/// An in-memory page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    title: String,
    description: Option<Element>,
    elements: BTreeMap<String, Element>,
    banners: Vec<Element>,
}

impl Page {
    /// An empty page with no insertion points.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with one empty `div` per identifier.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut page = Self::new();
        for id in ids {
            let id = id.into();
            let element = Element::new("div").attr("id", id.as_str());
            page.elements.insert(id, element);
        }
        page
    }

    /// The complete portfolio layout for the given region identifiers,
    /// including the description metadata.
    pub fn portfolio(regions: &RegionIds) -> Self {
        let mut page = Self::new();
        page.description = Some(
            Element::new("meta")
                .attr("name", "description")
                .attr("content", ""),
        );

        let layout: [(&str, &str, &str); 13] = [
            (regions.hero_name.as_str(), "h1", ""),
            (regions.hero_title.as_str(), "h2", ""),
            (regions.hero_summary.as_str(), "p", ""),
            (regions.hero_phone.as_str(), "a", ""),
            (regions.hero_location.as_str(), "span", ""),
            (regions.linkedin.as_str(), "a", ""),
            (regions.github.as_str(), "a", ""),
            (regions.email.as_str(), "a", ""),
            (regions.resume.as_str(), "a", "btn-outline"),
            (regions.skills.as_str(), "div", ""),
            (regions.experience.as_str(), "div", "timeline"),
            (regions.projects.as_str(), "div", ""),
            (regions.stats.as_str(), "div", ""),
        ];

        for (id, tag, class) in layout {
            let mut element = Element::new(tag).attr("id", id);
            if !class.is_empty() {
                element = element.class(class);
            }
            page.elements.insert(id.to_string(), element);
        }

        page
    }

    /// Add or replace an element.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    /// Remove an element, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    /// Builder form of [`Page::remove`].
    pub fn without(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Serialized content of the element with this identifier.
    pub fn region_html(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(Element::inner_html)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description
            .as_ref()
            .and_then(|meta| meta.get_attr("content"))
    }

    /// Banners currently shown, newest first.
    pub fn banners(&self) -> &[Element] {
        &self.banners
    }

    /// Remove the banner at `index`. Returns whether one was removed.
    pub fn dismiss_banner(&mut self, index: usize) -> bool {
        if index < self.banners.len() {
            self.banners.remove(index);
            true
        } else {
            false
        }
    }
}

impl Surface for Page {
    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_description(&mut self, description: &str) {
        if let Some(meta) = self.description.as_mut() {
            meta.set_attr("content", description);
        }
    }

    fn show_banner(&mut self, banner: Element) {
        self.banners.insert(0, banner);
    }

    fn for_each_element(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        for element in self.elements.values_mut() {
            element.walk_mut(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_layout_has_every_region() {
        let regions = RegionIds::default();
        let page = Page::portfolio(&regions);
        for id in regions.all() {
            assert!(page.has_element(id), "missing {}", id);
        }
        assert_eq!(page.element("hero-name").unwrap().tag(), "h1");
        assert_eq!(page.element("resume-download").unwrap().tag(), "a");
        assert_eq!(page.element("experience-timeline").unwrap().tag(), "div");
        assert_eq!(page.description(), Some(""));
    }

    #[test]
    fn test_without_removes_region() {
        let page = Page::portfolio(&RegionIds::default()).without("skills-container");
        assert!(!page.has_element("skills-container"));
        assert!(page.has_element("stats-container"));
    }

    #[test]
    fn test_description_needs_meta() {
        let mut page = Page::with_elements(["hero-name"]);
        page.set_description("ignored");
        assert_eq!(page.description(), None);
    }

    #[test]
    fn test_banners_prepend_and_dismiss() {
        let mut page = Page::new();
        page.show_banner(Element::new("div").text("first"));
        page.show_banner(Element::new("div").text("second"));
        assert_eq!(page.banners()[0].text_content(), "second");

        assert!(page.dismiss_banner(0));
        assert_eq!(page.banners().len(), 1);
        assert!(!page.dismiss_banner(5));
    }
}
