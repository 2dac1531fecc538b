use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generator::vocabulary::ContentType;

/// Granularity of the requested count. Parsing is lenient: anything that is
/// not a known unit becomes `Unknown`, which composes a single paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum UnitType {
    Words,
    Sentences,
    #[default]
    Paragraphs,
    Unknown,
}

impl UnitType {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "words" => UnitType::Words,
            "sentences" => UnitType::Sentences,
            "paragraphs" => UnitType::Paragraphs,
            other => {
                tracing::warn!(unit = other, "unknown unit, falling back to a single paragraph");
                UnitType::Unknown
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitType::Words => "words",
            UnitType::Sentences => "sentences",
            UnitType::Paragraphs => "paragraphs",
            UnitType::Unknown => "unknown",
        }
    }
}

impl From<String> for UnitType {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<&str> for UnitType {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorRequest {
    pub count: usize,
    pub unit: UnitType,
    pub content_type: ContentType,
    pub include_html: bool,
}

impl GeneratorRequest {
    pub fn new(count: usize, unit: UnitType, content_type: ContentType, include_html: bool) -> Self {
        Self {
            count,
            unit,
            content_type,
            include_html,
        }
    }
}

impl Default for GeneratorRequest {
    fn default() -> Self {
        Self::new(3, UnitType::Paragraphs, ContentType::Lorem, false)
    }
}

/// Summary line, e.g. `3 paragraphs of lorem ipsum with HTML`.
impl fmt::Display for GeneratorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} of {} ipsum", self.count, self.unit, self.content_type)?;
        if self.include_html {
            f.write_str(" with HTML")?;
        }
        Ok(())
    }
}
