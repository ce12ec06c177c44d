use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    History,
    Nature,
    Wellness,
    Cultural,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::History => "history",
            Category::Nature => "nature",
            Category::Wellness => "wellness",
            Category::Cultural => "cultural",
        }
    }

    /// Resolve an interest token to the category it selects.
    ///
    /// `adventure` and `food` are synonyms for `nature` and `cultural`; any
    /// other token must name a category directly. Tokens are expected to be
    /// already trimmed and lower-cased.
    pub fn from_interest(interest: &str) -> Option<Self> {
        match interest {
            "history" => Some(Category::History),
            "nature" | "adventure" => Some(Category::Nature),
            "wellness" => Some(Category::Wellness),
            "cultural" | "food" => Some(Category::Cultural),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Spot {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl Spot {
    /// Tips shown for this spot, falling back to generic advice when the
    /// catalog entry carries none.
    pub fn tips_or_default(&self) -> String {
        match &self.tips {
            Some(tips) if !tips.trim().is_empty() => tips.clone(),
            _ => default_tips(&self.name),
        }
    }
}

pub fn default_tips(name: &str) -> String {
    format!(
        "Plan to spend 2-4 hours exploring {}. Bring comfortable walking shoes and water.",
        name
    )
}
