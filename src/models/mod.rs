use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

mod game;
mod preferences;
mod recommendation;

pub use game::Game;
pub use preferences::{ParsedPreferences, ValidationReport, MAX_AGE, MIN_AGE};
pub use recommendation::{Recommendation, RecommendationSet};

/// Video game genre
///
/// The closed label set every catalog index and every parsed preference is
/// keyed by. Free-form genre strings are converted to this enum at the
/// input-parsing boundary; anything that does not parse is simply not a genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Rpg,
    Action,
    Adventure,
    Strategy,
    Simulation,
    Puzzle,
    Indie,
    Horror,
    Racing,
    Sports,
}

impl Genre {
    pub const ALL: [Genre; 10] = [
        Genre::Rpg,
        Genre::Action,
        Genre::Adventure,
        Genre::Strategy,
        Genre::Simulation,
        Genre::Puzzle,
        Genre::Indie,
        Genre::Horror,
        Genre::Racing,
        Genre::Sports,
    ];

    /// Canonical label as shown to the user and matched in free text
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Rpg => "RPG",
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Strategy => "Strategy",
            Genre::Simulation => "Simulation",
            Genre::Puzzle => "Puzzle",
            Genre::Indie => "Indie",
            Genre::Horror => "Horror",
            Genre::Racing => "Racing",
            Genre::Sports => "Sports",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returned when a string does not name any canonical genre
#[derive(Debug, thiserror::Error)]
#[error("unknown genre: {0}")]
pub struct UnknownGenre(String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Genre::ALL
            .iter()
            .find(|g| g.label().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// Difficulty tier assigned to some catalog games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Popularity tier assigned to some catalog games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Popularity {
    VeryPopular,
    Popular,
    Niche,
}

/// Platform a game is available on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Pc,
    PlayStation,
    Xbox,
    Nintendo,
    Mobile,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Pc,
        Platform::PlayStation,
        Platform::Xbox,
        Platform::Nintendo,
        Platform::Mobile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::Nintendo => "Nintendo",
            Platform::Mobile => "Mobile",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_parse_is_case_insensitive() {
        assert_eq!("rpg".parse::<Genre>().unwrap(), Genre::Rpg);
        assert_eq!("HORROR".parse::<Genre>().unwrap(), Genre::Horror);
        assert_eq!(" Racing ".parse::<Genre>().unwrap(), Genre::Racing);
    }

    #[test]
    fn test_genre_parse_rejects_unknown_label() {
        assert!("roguelike".parse::<Genre>().is_err());
        assert!("".parse::<Genre>().is_err());
    }

    #[test]
    fn test_genre_label_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(genre.label().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn test_genre_serialization() {
        let json = serde_json::to_string(&Genre::Rpg).unwrap();
        assert_eq!(json, "\"rpg\"");

        let deserialized: Genre = serde_json::from_str("\"sports\"").unwrap();
        assert_eq!(deserialized, Genre::Sports);
    }

    #[test]
    fn test_popularity_serialization() {
        let json = serde_json::to_string(&Popularity::VeryPopular).unwrap();
        assert_eq!(json, "\"very_popular\"");
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Pc.to_string(), "PC");
        assert_eq!(Platform::PlayStation.to_string(), "PlayStation");
    }
}
