//! Difficulty levels and difficulty filters

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Difficulty of a problem or pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Label used in storage and output ("Easy", "Medium", "Hard")
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!(
                "Invalid difficulty: '{}'. Valid difficulties: easy, medium, hard",
                s
            )),
        }
    }
}

/// Records that carry a (possibly unset) difficulty
pub trait Graded {
    fn difficulty(&self) -> Option<Difficulty>;
}

/// Which difficulties a listing should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Records with an unset difficulty only pass the `All` filter.
    pub fn matches(&self, difficulty: Option<Difficulty>) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => difficulty == Some(*wanted),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(DifficultyFilter::All);
        }
        Difficulty::from_str(s).map(DifficultyFilter::Only)
    }
}

/// Stored difficulty: exact labels map to a level, anything else is unset.
pub(crate) mod lenient {
    use super::*;

    pub fn serialize<S>(value: &Option<Difficulty>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map(|d| d.label()).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Label(String),
            Other(serde::de::IgnoredAny),
        }

        let raw: Option<Raw> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(Raw::Label(label)) => Difficulty::ALL
                .into_iter()
                .find(|difficulty| difficulty.label() == label),
            Some(Raw::Other(_)) | None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_str("MEDIUM").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::from_str(" Hard ").unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_parse_invalid() {
        let err = Difficulty::from_str("extreme").unwrap_err();
        assert!(err.contains("easy, medium, hard"));
        assert!(Difficulty::from_str("").is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(
            DifficultyFilter::from_str("All").unwrap(),
            DifficultyFilter::All
        );
        assert_eq!(
            DifficultyFilter::from_str("hard").unwrap(),
            DifficultyFilter::Only(Difficulty::Hard)
        );
        assert!(DifficultyFilter::from_str("none").is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Stored {
        #[serde(default, with = "lenient")]
        difficulty: Option<Difficulty>,
    }

    #[test]
    fn test_lenient_load_of_stored_labels() {
        let load = |json: &str| serde_json::from_str::<Stored>(json).unwrap().difficulty;
        assert_eq!(load(r#"{"difficulty": "Medium"}"#), Some(Difficulty::Medium));
        assert_eq!(load(r#"{"difficulty": ""}"#), None);
        assert_eq!(load(r#"{"difficulty": "Extreme"}"#), None);
        assert_eq!(load(r#"{"difficulty": 3}"#), None);
        assert_eq!(load(r#"{"difficulty": {"level": "Hard"}}"#), None);
        assert_eq!(load(r#"{}"#), None);
    }

    #[test]
    fn test_filter_matches() {
        let hard = DifficultyFilter::Only(Difficulty::Hard);
        assert!(hard.matches(Some(Difficulty::Hard)));
        assert!(!hard.matches(Some(Difficulty::Easy)));
        assert!(!hard.matches(None));
        assert!(DifficultyFilter::All.matches(None));
    }
}
