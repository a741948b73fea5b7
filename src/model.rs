//! Profile document definitions.
//!
//! The document is produced once by the loader and never mutated afterwards.
//! Mappings from the source payload (skill categories, stats) are kept as
//! ordered vectors so renderers see them in the order the payload listed them.

use serde::Deserialize;

/// Link value the data source uses to mean "no link".
pub const PLACEHOLDER_LINK: &str = "#";

/// The root profile document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDocument {
    /// Personal details shown in the hero and contact areas
    pub personal: Option<Personal>,
    /// Skill categories in payload order
    pub skills: Option<Vec<SkillCategory>>,
    /// Work history in presentation order
    pub experience: Option<Vec<ExperienceEntry>>,
    /// Project cards in presentation order
    pub projects: Option<Vec<ProjectEntry>>,
    /// Summary percentages in payload order
    pub stats: Option<Vec<Stat>>,
}

/// Personal information. `name` and `title` are required when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Personal {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub social: Option<Social>,
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl Personal {
    /// The page title, `"{name} | {title}"`.
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.name, self.title)
    }

    pub fn linkedin(&self) -> Option<&str> {
        self.social.as_ref().and_then(|s| s.linkedin.as_deref())
    }

    pub fn github(&self) -> Option<&str> {
        self.social.as_ref().and_then(|s| s.github.as_deref())
    }
}

/// One named skill category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    /// Source key, e.g. `programmingLanguages`. Never rewritten.
    pub key: String,
    pub items: SkillList,
}

/// The items of one category. A category is either all tags or all meters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillList {
    /// Plain labels rendered as tags
    Tags(Vec<String>),
    /// Labels with a proficiency percentage rendered as meters
    Leveled(Vec<LeveledSkill>),
}

impl SkillList {
    pub fn len(&self) -> usize {
        match self {
            SkillList::Tags(items) => items.len(),
            SkillList::Leveled(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A skill with a proficiency percentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeveledSkill {
    pub name: String,
    /// Percentage, nominally 0-100. Not clamped.
    pub level: i64,
}

/// One work history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

/// One project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl ProjectEntry {
    /// The project link, unless absent, empty, or the `#` placeholder.
    pub fn live_link(&self) -> Option<&str> {
        actionable(self.link.as_deref())
    }

    /// The repository link, unless absent, empty, or the `#` placeholder.
    pub fn repository_link(&self) -> Option<&str> {
        actionable(self.github.as_deref())
    }
}

fn actionable(link: Option<&str>) -> Option<&str> {
    link.filter(|l| !l.is_empty() && *l != PLACEHOLDER_LINK)
}

/// One summary statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub key: String,
    /// Percentage, nominally 0-100. Not clamped.
    pub value: i64,
}

/// Reads `null` as the field's default (empty text or list).
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
