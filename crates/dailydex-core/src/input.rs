//! User input for a daily submission

use serde::{Deserialize, Serialize};

/// Mood reported for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Normal,
    Excited,
    Annoyed,
    Sad,
}

/// Style tag for the day's outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Minimal,
    Street,
    Casual,
    Formal,
    Girly,
    Sporty,
    Vintage,
    Dandy,
    Techwear,
    Amekaji,
}

/// One day's submission: colors, mood, and outfit style
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    /// Main color as `#RRGGBB`
    pub main_color: String,
    /// Sub color as `#RRGGBB`
    pub sub_color: String,
    pub mood: Mood,
    /// Optional one-line note about the mood
    #[serde(default)]
    pub mood_note: Option<String>,
    /// At least one style tag
    pub style_tags: Vec<StyleTag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_serde_names() {
        assert_eq!(ron::to_string(&Mood::Excited).unwrap(), "excited");
        assert_eq!(ron::from_str::<StyleTag>("techwear").unwrap(), StyleTag::Techwear);
    }
}
