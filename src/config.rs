//! Renderer configuration.

use crate::error::ConfigError;
use serde::Deserialize;
use std::time::Duration;

/// Default user-facing message for a failed load.
pub const DEFAULT_LOAD_FAILURE_MESSAGE: &str =
    "Failed to load portfolio data. Please refresh the page.";

/// Configuration for a page render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Element identifiers of every insertion point.
    pub regions: RegionIds,
    /// Delays of the deferred bar sweeps.
    pub animation: AnimationConfig,
    /// Banner text shown when the document cannot be loaded.
    pub load_failure_message: String,
    /// Download name for the resume link. Derived from the person's name when unset.
    pub resume_file_name: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            regions: RegionIds::default(),
            animation: AnimationConfig::default(),
            load_failure_message: DEFAULT_LOAD_FAILURE_MESSAGE.to_string(),
            resume_file_name: None,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a TOML configuration. Missing keys take defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig =
            toml::from_str(input).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(empty) = self.regions.named().find(|(_, id)| id.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "region `{}` has an empty identifier",
                empty.0
            )));
        }

        if self.animation.skills_delay_ms >= self.animation.stats_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "skills sweep ({} ms) must fire before the stats sweep ({} ms)",
                self.animation.skills_delay_ms, self.animation.stats_delay_ms
            )));
        }

        Ok(())
    }
}

/// Element identifiers the renderers look up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegionIds {
    pub hero_name: String,
    pub hero_title: String,
    pub hero_summary: String,
    pub hero_phone: String,
    pub hero_location: String,
    pub linkedin: String,
    pub github: String,
    pub email: String,
    pub resume: String,
    pub skills: String,
    pub experience: String,
    pub projects: String,
    pub stats: String,
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            hero_name: "hero-name".to_string(),
            hero_title: "hero-title".to_string(),
            hero_summary: "hero-summary".to_string(),
            hero_phone: "hero-phone".to_string(),
            hero_location: "hero-location".to_string(),
            linkedin: "linkedin-link".to_string(),
            github: "github-link".to_string(),
            email: "email-tracked".to_string(),
            resume: "resume-download".to_string(),
            skills: "skills-container".to_string(),
            experience: "experience-timeline".to_string(),
            projects: "projects-container".to_string(),
            stats: "stats-container".to_string(),
        }
    }
}

impl RegionIds {
    /// Every identifier, personal fields first.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.named().map(|(_, id)| id)
    }

    /// The section container identifiers, in render order.
    pub fn containers(&self) -> [(&'static str, &str); 4] {
        [
            ("skills", self.skills.as_str()),
            ("experience", self.experience.as_str()),
            ("projects", self.projects.as_str()),
            ("stats", self.stats.as_str()),
        ]
    }

    fn named(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("hero_name", self.hero_name.as_str()),
            ("hero_title", self.hero_title.as_str()),
            ("hero_summary", self.hero_summary.as_str()),
            ("hero_phone", self.hero_phone.as_str()),
            ("hero_location", self.hero_location.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("github", self.github.as_str()),
            ("email", self.email.as_str()),
            ("resume", self.resume.as_str()),
            ("skills", self.skills.as_str()),
            ("experience", self.experience.as_str()),
            ("projects", self.projects.as_str()),
            ("stats", self.stats.as_str()),
        ]
        .into_iter()
    }
}

/// Delays of the two one-shot bar sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub skills_delay_ms: u64,
    pub stats_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            skills_delay_ms: 500,
            stats_delay_ms: 1000,
        }
    }
}

impl AnimationConfig {
    pub fn skills_delay(&self) -> Duration {
        Duration::from_millis(self.skills_delay_ms)
    }

    pub fn stats_delay(&self) -> Duration {
        Duration::from_millis(self.stats_delay_ms)
    }
}
