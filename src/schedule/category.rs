use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// Channel a scheduled item belongs to, used for colour-coding and filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SocialMedia,
    Influencer,
    Email,
    PaidAds,
    Content,
    Event,
    Flyer,
    Print,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::SocialMedia,
        Category::Influencer,
        Category::Email,
        Category::PaidAds,
        Category::Content,
        Category::Event,
        Category::Flyer,
        Category::Print,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SocialMedia => "social_media",
            Category::Influencer => "influencer",
            Category::Email => "email",
            Category::PaidAds => "paid_ads",
            Category::Content => "content",
            Category::Event => "event",
            Category::Flyer => "flyer",
            Category::Print => "print",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::SocialMedia => "Social Media",
            Category::Influencer => "Influencer",
            Category::Email => "Email",
            Category::PaidAds => "Paid Ads",
            Category::Content => "Content",
            Category::Event => "Event",
            Category::Flyer => "Flyer",
            Category::Print => "Print",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ScheduleError;

    /// Accepts the serialized form plus spaced or hyphenated spellings in any case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace([' ', '-'], "_");
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ScheduleError::invalid_record(value, "unknown category"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_loose_spellings() {
        assert_eq!("Social Media".parse::<Category>().unwrap(), Category::SocialMedia);
        assert_eq!("paid-ads".parse::<Category>().unwrap(), Category::PaidAds);
        assert_eq!(" FLYER ".parse::<Category>().unwrap(), Category::Flyer);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("billboard".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::PaidAds).unwrap();
        assert_eq!(json, "\"paid_ads\"");
    }
}
