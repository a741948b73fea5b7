//! Acquires the profile payload and normalizes it into a [`ProfileDocument`].
//!
//! Skill lists arrive as JSON arrays whose elements are either plain labels or
//! `{name, level}` records. The first element decides the variant for the
//! whole category, and every element is converted to that variant here, so
//! renderers never inspect shapes.

use crate::error::LoadError;
use crate::model::{
    ExperienceEntry, LeveledSkill, Personal, ProfileDocument, ProjectEntry, SkillCategory,
    SkillList, Stat,
};
use crate::source::Source;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Fetch and parse the profile document from `source`.
pub fn load(source: &mut dyn Source) -> Result<ProfileDocument, LoadError> {
    info!(source = %source.describe(), "loading profile data");

    let payload = source.fetch().map_err(|failure| LoadError::SourceUnavailable {
        status: failure.status,
        reason: failure.reason,
    })?;

    parse_document(&payload)
}

/// Parse and normalize a raw JSON payload.
pub fn parse_document(payload: &[u8]) -> Result<ProfileDocument, LoadError> {
    let raw: RawDocument = serde_json::from_slice(payload)
        .map_err(|e| LoadError::MalformedDocument(e.to_string()))?;

    let skills = raw.skills.map(convert_skills).transpose()?;
    let stats = raw.stats.map(convert_stats).transpose()?;

    Ok(ProfileDocument {
        personal: raw.personal,
        skills,
        experience: raw.experience,
        projects: raw.projects,
        stats,
    })
}

/// Raw document structure for deserialization.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    personal: Option<Personal>,
    #[serde(default)]
    skills: Option<Map<String, Value>>,
    #[serde(default)]
    experience: Option<Vec<ExperienceEntry>>,
    #[serde(default)]
    projects: Option<Vec<ProjectEntry>>,
    #[serde(default)]
    stats: Option<Map<String, Value>>,
}

fn convert_skills(raw: Map<String, Value>) -> Result<Vec<SkillCategory>, LoadError> {
    let mut categories = Vec::with_capacity(raw.len());

    for (key, value) in raw {
        let items = match value {
            Value::Array(items) => items,
            other => {
                debug!(category = %key, kind = value_kind(&other), "skipping non-list skill category");
                continue;
            }
        };

        let list = if is_leveled(items.first()) {
            let skills = items
                .iter()
                .map(|item| leveled_skill(&key, item))
                .collect::<Result<Vec<_>, _>>()?;
            SkillList::Leveled(skills)
        } else {
            SkillList::Tags(items.iter().map(tag_label).collect())
        };

        categories.push(SkillCategory { key, items: list });
    }

    Ok(categories)
}

fn is_leveled(first: Option<&Value>) -> bool {
    matches!(first, Some(Value::Object(record)) if record.contains_key("name"))
}

fn leveled_skill(category: &str, item: &Value) -> Result<LeveledSkill, LoadError> {
    match item {
        Value::Object(record) => {
            let name = record.get("name").map(tag_label).unwrap_or_default();
            let level = match record.get("level") {
                None | Some(Value::Null) => 0,
                Some(level) => percentage(level).ok_or_else(|| {
                    LoadError::MalformedDocument(format!(
                        "skill `{}` in `{}` has non-integer level {}",
                        name, category, level
                    ))
                })?,
            };
            Ok(LeveledSkill { name, level })
        }
        other => Ok(LeveledSkill {
            name: tag_label(other),
            level: 0,
        }),
    }
}

fn tag_label(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Object(record) => match record.get("name") {
            Some(Value::String(name)) => name.clone(),
            _ => item.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn convert_stats(raw: Map<String, Value>) -> Result<Vec<Stat>, LoadError> {
    raw.into_iter()
        .map(|(key, value)| match percentage(&value) {
            Some(value) => Ok(Stat { key, value }),
            None => Err(LoadError::MalformedDocument(format!(
                "stat `{}` is not an integer percentage: {}",
                key, value
            ))),
        })
        .collect()
}

/// An integral percentage. Values outside the `i64` range are rejected, never clamped.
fn percentage(value: &Value) -> Option<i64> {
    if let Some(v) = value.as_i64() {
        return Some(v);
    }
    if value.is_u64() {
        return None;
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= I64_MIN_F64 && *f < I64_END_F64)
        .map(|f| f as i64)
}

// -2^63 and 2^63, both exact in f64.
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
