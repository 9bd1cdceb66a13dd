//! Tone-driven reply formatting.
//!
//! A [`PersonalityEngine`] owns the current [`Tone`] and wraps generated text
//! in that tone's fixed template. Invalid tone requests are ignored with a
//! warning so a bad selection never interrupts a session.

use crate::error::ToneError;
use std::fmt;
use std::str::FromStr;

/// Persona style controlling reply phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Collaborative,
    Curious,
    Sharp,
}

impl Tone {
    /// Every selectable tone, in display order.
    pub const ALL: [Tone; 3] = [Tone::Collaborative, Tone::Curious, Tone::Sharp];

    /// Stable lowercase tag used in config and `/tone`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collaborative => "collaborative",
            Self::Curious => "curious",
            Self::Sharp => "sharp",
        }
    }

    /// Fixed opening sentence of this tone's template.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Collaborative => "Eidos: Got it! Let’s break this down together.",
            Self::Curious => "Eidos: Hmm, interesting!",
            Self::Sharp => "Eidos: Straight to the point.",
        }
    }

    /// Fixed closing sentence of this tone's template.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Collaborative => "What’s your take on this approach?",
            Self::Curious => {
                "I’m curious—have you tried this before? What worked or didn’t work?"
            }
            Self::Sharp => "Here’s the plan: [insert actionable steps]. Let’s execute.",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ToneError;

    /// Tags match exactly; `"Sharp"` is not `"sharp"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| ToneError::Unknown(s.to_string()))
    }
}

/// Holds the active tone and renders replies in it.
#[derive(Debug, Clone, Default)]
pub struct PersonalityEngine {
    tone: Tone,
}

impl PersonalityEngine {
    pub fn new(tone: Tone) -> Self {
        Self { tone }
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Switch to `tag` if it names a known tone.
    ///
    /// Returns `false` and keeps the current tone otherwise.
    pub fn set_tone(&mut self, tag: &str) -> bool {
        match tag.parse::<Tone>() {
            Ok(tone) => {
                self.tone = tone;
                true
            }
            Err(err) => {
                tracing::warn!(%err, current = %self.tone, "ignoring tone change");
                false
            }
        }
    }

    /// Wrap `text` in the active tone's template.
    pub fn generate_response(&self, text: &str) -> String {
        format!("{} {text} {}", self.tone.prefix(), self.tone.suffix())
    }
}
