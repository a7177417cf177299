use std::fmt;

use serde::{Deserialize, Serialize};

/// A zone classification tag ("school", "playground", "pedestrian_zone", ...).
/// Normalized to lowercase on construction so matching never depends on how
/// the upstream data source cased the property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Category(String);

impl Category {
    pub fn new(raw: &str) -> Self {
        Category(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::new(raw)
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::new(&raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(Category::new("  School "), Category::new("school"));
        assert_eq!(Category::new("PEDESTRIAN_ZONE").as_str(), "pedestrian_zone");
    }

    #[test]
    fn test_deserializes_normalized() {
        let c: Category = serde_json::from_str("\"Playground\"").unwrap();
        assert_eq!(c, Category::new("playground"));
    }
}
