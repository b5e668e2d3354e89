//! Catalog record types
//!
//! Field names on the wire follow the GraphQL schema (`fleeRate`, `maxCP`,
//! `maxHP`); everything else is already lower camel case with one word.

use serde::{Deserialize, Serialize};

/// Minimal list-row representation of a creature.
///
/// Produced by the list query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub id: String,
    /// Display number, zero padded by the catalog (e.g. "025")
    pub number: String,
    pub name: String,
    /// Type tags in catalog order
    pub types: Vec<String>,
    /// Artwork URL
    pub image: String,
}

impl CreatureSummary {
    /// Type tags joined by a single space, the form the search filter matches against.
    pub fn joined_types(&self) -> String {
        self.types.join(" ")
    }
}

/// Minimum/maximum pair as reported by the catalog (e.g. "0.61m" .. "0.79m").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub minimum: String,
    pub maximum: String,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \u{2013} {}", self.minimum, self.maximum)
    }
}

/// Full record fetched for a single selected creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureDetail {
    pub id: String,
    pub number: String,
    pub name: String,
    pub weight: Dimension,
    pub height: Dimension,
    pub classification: String,
    pub types: Vec<String>,
    pub resistant: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Probability in `0.0..=1.0`
    #[serde(rename = "fleeRate")]
    pub flee_rate: f64,
    #[serde(rename = "maxCP")]
    pub max_cp: i64,
    #[serde(rename = "maxHP")]
    pub max_hp: i64,
    pub image: String,
}

impl CreatureDetail {
    /// Flee rate as a whole percentage, rounded half away from zero.
    pub fn flee_percent(&self) -> i64 {
        (self.flee_rate * 100.0).round() as i64
    }
}

/// Value/label pair for pickers and compact listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureOption {
    /// Creature id
    pub value: String,
    /// Creature name
    pub label: String,
}

impl From<&CreatureSummary> for CreatureOption {
    fn from(summary: &CreatureSummary) -> Self {
        Self {
            value: summary.id.clone(),
            label: summary.name.clone(),
        }
    }
}

/// Build picker options from a fetched list, preserving order.
pub fn creature_options(list: &[CreatureSummary]) -> Vec<CreatureOption> {
    list.iter().map(CreatureOption::from).collect()
}

/// Lookup key for the detail query.
///
/// Either field may be set; when neither carries a non-blank value the key is
/// empty and the fetch must be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DetailKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DetailKey {
    /// Key a lookup by catalog id
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    /// Key a lookup by creature name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Key from the selected name, if any
    pub fn from_selection(selected: Option<String>) -> Self {
        selected.map(Self::by_name).unwrap_or_default()
    }

    /// True when no usable id or name is present
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        blank(&self.id) && blank(&self.name)
    }
}
