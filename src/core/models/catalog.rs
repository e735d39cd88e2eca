//! Reference content: minerals, classifications, regulations and lessons

use serde::{Deserialize, Serialize};

/// Difficulty given to lessons without one
pub const DEFAULT_DIFFICULTY: &str = "beginner";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mineral {
    pub id: i32,
    pub name: String,
    pub formula: Option<String>,
    pub properties: Option<String>,
    pub uses: Option<String>,
    pub economic: Option<String>,
    pub countries: Option<String>,
    pub image: Option<String>,
}

/// Classification referenced by `deposits.mineral_type_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MineralType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// precious, industrial, base_metal, rare_earth, fossil_fuel
    pub category: Option<String>,
}

/// Classification referenced by `deposits.ore_type_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OreType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub extraction_difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regulation {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Comma separated state names
    pub applicable_states: Option<String>,
    pub requirements: Option<String>,
    pub contact_authority: Option<String>,
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub document_url: Option<String>,
}

/// Learning content entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub content: String,
    pub summary: Option<String>,
    /// Comma separated mineral names
    pub related_minerals: Option<String>,
    pub difficulty_level: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Admin-supplied mineral fields; an edit replaces all of them
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MineralInput {
    pub name: String,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub properties: Option<String>,
    #[serde(default)]
    pub uses: Option<String>,
    #[serde(default)]
    pub economic: Option<String>,
    #[serde(default)]
    pub countries: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Admin-supplied lesson fields; an edit replaces all of them
#[derive(Debug, Clone, Deserialize)]
pub struct LessonInput {
    pub title: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub related_minerals: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty_level: String,
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}
