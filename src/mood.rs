//! The assistant's mood and the accent colour it drives.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
    Sad,
    Excited,
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Neutral,
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Angry,
    ];

    /// Accent colour for this mood. This table is the only source of mood colours.
    pub fn color(self) -> &'static str {
        match self {
            Mood::Neutral => "#9f9ea1",
            Mood::Happy => "#7dc4e4",
            Mood::Sad => "#5e81ac",
            Mood::Excited => "#d08770",
            Mood::Angry => "#bf616a",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Angry => "angry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Neutral => "Neutral",
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Excited => "Excited",
            Mood::Angry => "Angry",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct MoodRule {
    pub keywords: &'static [&'static str],
    pub mood: Mood,
}

/// Checked in order; the first rule with a keyword in the text wins.
pub const MOOD_RULES: &[MoodRule] = &[
    MoodRule {
        keywords: &["happy", "great"],
        mood: Mood::Happy,
    },
    MoodRule {
        keywords: &["sad", "depressed"],
        mood: Mood::Sad,
    },
    MoodRule {
        keywords: &["excited", "amazing"],
        mood: Mood::Excited,
    },
    MoodRule {
        keywords: &["angry", "annoyed"],
        mood: Mood::Angry,
    },
];

/// Case-insensitive substring match against [`MOOD_RULES`].
pub fn infer_mood(text: &str) -> Option<Mood> {
    let text = text.to_lowercase();
    MOOD_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|rule| rule.mood)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoodStore {
    mood: Mood,
}

impl MoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn color(&self) -> &'static str {
        self.mood.color()
    }

    pub fn set_mood(&mut self, mood: Mood) {
        if self.mood != mood {
            tracing::debug!(from = %self.mood, to = %mood, "mood changed");
        }
        self.mood = mood;
    }

    /// Set the mood inferred from `text`, if any rule matches.
    pub fn apply_inference(&mut self, text: &str) -> Option<Mood> {
        let mood = infer_mood(text)?;
        self.set_mood(mood);
        Some(mood)
    }
}

/// Append a two-digit hex alpha to a `#rrggbb` colour, e.g. for tinted card
/// backgrounds. Other inputs are returned unchanged.
pub fn with_alpha(hex: &str, alpha: f32) -> String {
    let is_rgb = hex.len() == 7
        && hex.starts_with('#')
        && hex[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !is_rgb {
        return hex.to_string();
    }
    let byte = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("{hex}{byte:02x}")
}
