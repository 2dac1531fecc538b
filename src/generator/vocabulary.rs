use std::fmt;

use serde::{Deserialize, Serialize};

pub type Vocabulary = &'static [&'static str];

const LOREM_WORDS: Vocabulary = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

// "sustainable" is listed twice, which doubles its sampling weight.
const HIPSTER_WORDS: Vocabulary = &[
    "artisan", "craft", "organic", "sustainable", "locally", "sourced", "vintage", "authentic",
    "handmade", "bespoke", "curated", "artisanal", "farm-to-table", "small-batch",
    "single-origin", "fair-trade", "ethically", "conscious", "minimalist", "aesthetic",
    "boutique", "heritage", "traditional", "rustic", "bohemian", "eclectic", "innovative",
    "contemporary", "sustainable", "ethical",
];

const TECH_WORDS: Vocabulary = &[
    "algorithm", "blockchain", "cloud", "data", "encryption", "framework", "github", "hosting",
    "infrastructure", "javascript", "kubernetes", "linux", "machine", "learning", "network",
    "optimization", "protocol", "quantum", "repository", "scalability", "technology", "unicode",
    "virtual", "website", "xml", "yaml", "zip", "api", "backend", "frontend", "database",
    "server",
];

const STARTUP_WORDS: Vocabulary = &[
    "disruption", "innovation", "scalable", "agile", "pivot", "unicorn", "synergy", "leverage",
    "ecosystem", "viral", "growth", "hacking", "monetization", "freemium", "saas", "platform",
    "vertical", "horizontal", "b2b", "b2c", "mvp", "iteration", "sprint", "scrum", "kanban",
    "lean", "bootstrap", "venture", "capital", "funding", "round", "valuation",
];

/// Vocabulary theme. Deserialization goes through [`ContentType::from_key`],
/// so stale or misspelled keys land on `Lorem` instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ContentType {
    #[default]
    Lorem,
    Hipster,
    Tech,
    Startup,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Lorem,
        ContentType::Hipster,
        ContentType::Tech,
        ContentType::Startup,
    ];

    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "lorem" => ContentType::Lorem,
            "hipster" => ContentType::Hipster,
            "tech" => ContentType::Tech,
            "startup" => ContentType::Startup,
            other => {
                tracing::warn!(content_type = other, "unknown content type, using lorem");
                ContentType::Lorem
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Lorem => "lorem",
            ContentType::Hipster => "hipster",
            ContentType::Tech => "tech",
            ContentType::Startup => "startup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Lorem => "Classic Lorem Ipsum",
            ContentType::Hipster => "Hipster Ipsum",
            ContentType::Tech => "Tech Ipsum",
            ContentType::Startup => "Startup Ipsum",
        }
    }
}

impl From<String> for ContentType {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<&str> for ContentType {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn select_vocabulary(content_type: ContentType) -> Vocabulary {
    match content_type {
        ContentType::Lorem => LOREM_WORDS,
        ContentType::Hipster => HIPSTER_WORDS,
        ContentType::Tech => TECH_WORDS,
        ContentType::Startup => STARTUP_WORDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vocabulary_is_non_empty_and_lowercase() {
        for content_type in ContentType::ALL {
            let words = select_vocabulary(content_type);
            assert!(!words.is_empty(), "{content_type} vocabulary is empty");
            for word in words {
                assert!(!word.is_empty());
                assert_eq!(*word, word.to_lowercase(), "{word} is not lowercase");
                assert!(!word.contains(' ') && !word.contains('.'));
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_lorem() {
        assert_eq!(ContentType::from_key("klingon"), ContentType::Lorem);
        assert_eq!(ContentType::from_key(""), ContentType::Lorem);
        assert_eq!(
            select_vocabulary(ContentType::from_key("klingon")),
            select_vocabulary(ContentType::Lorem)
        );
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for content_type in ContentType::ALL {
            assert_eq!(ContentType::from_key(content_type.as_str()), content_type);
        }
        assert_eq!(ContentType::from_key("  TECH "), ContentType::Tech);
    }

    #[test]
    fn vocabularies_are_distinct() {
        assert!(select_vocabulary(ContentType::Tech).contains(&"kubernetes"));
        assert!(select_vocabulary(ContentType::Startup).contains(&"unicorn"));
        assert!(select_vocabulary(ContentType::Hipster).contains(&"farm-to-table"));
        assert!(!select_vocabulary(ContentType::Lorem).contains(&"kubernetes"));
    }
}
