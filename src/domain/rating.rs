//! Self-assessed rating of a practice attempt

use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;
use std::str::FromStr;

const STAR: &str = "⭐️";

/// How an attempt went, on a 1-5 scale (shown as stars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&stars).then_some(Rating(stars))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    /// Parse either a digit ("3") or a run of star symbols.
    fn parse_lenient(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Self::new(n);
        }
        let stars = trimmed.chars().filter(|c| *c == '⭐' || *c == '*').count();
        let only_stars = trimmed
            .chars()
            .all(|c| c == '⭐' || c == '*' || c == '\u{fe0f}');
        if only_stars {
            u8::try_from(stars).ok().and_then(Self::new)
        } else {
            None
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STAR.repeat(self.0 as usize))
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| {
            format!(
                "Invalid rating: '{}'. Use a number from 1 to {}",
                s,
                Self::MAX
            )
        })
    }
}

/// Stored rating: star string, empty when unset. Unreadable values load as unset.
pub(crate) mod lenient {
    use super::*;

    pub fn serialize<S>(value: &Option<Rating>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(rating) => serializer.serialize_str(&rating.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Rating>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        let raw: Option<Raw> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(Raw::Number(n)) => u8::try_from(n).ok().and_then(Rating::new),
            Some(Raw::Text(text)) => Rating::parse_lenient(&text),
            Some(Raw::Other(_)) | None => None,
        })
    }
}
