use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("level must be between 0 and {max}, got {value}", max = Level::MAX_VALUE)]
pub struct LevelError {
    value: u8,
}

/// Cosmetic tier selected by completion percent, always within `0..=10`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MAX_VALUE: u8 = 10;
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(Self::MAX_VALUE);

    /// # Errors
    ///
    /// Returns `LevelError` if `value` is above 10.
    pub fn new(value: u8) -> Result<Self, LevelError> {
        if value > Self::MAX_VALUE {
            return Err(LevelError { value });
        }
        Ok(Self(value))
    }

    /// `floor(percent / 10)`, clamped to 10.
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        Self((percent / 10).min(Self::MAX_VALUE))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 == Self::MAX_VALUE
    }

    /// Every level from 0 to 10 in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (0..=Self::MAX_VALUE).map(Self)
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── FORMS ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelFormsError {
    #[error("expected {expected} level forms, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("form at position {position} is declared for level {declared}")]
    OutOfOrder { position: usize, declared: u8 },

    #[error("form for level {0} has an empty name")]
    EmptyName(u8),
}

/// Display form of the character at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelForm {
    pub level: Level,
    pub icon: String,
    pub color: String,
    pub name: String,
    pub quote: String,
}

impl LevelForm {
    fn builtin(level: u8, icon: &str, color: &str, name: &str, quote: &str) -> Self {
        Self {
            level: Level(level),
            icon: icon.to_owned(),
            color: color.to_owned(),
            name: name.to_owned(),
            quote: quote.to_owned(),
        }
    }
}

/// Lookup table holding exactly one form per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelForms {
    forms: Vec<LevelForm>,
}

impl LevelForms {
    /// Validates that `forms` holds one entry per level, in level order.
    ///
    /// # Errors
    ///
    /// Returns `LevelFormsError` when the table is incomplete, out of order,
    /// or has a blank name.
    pub fn new(forms: Vec<LevelForm>) -> Result<Self, LevelFormsError> {
        let expected = usize::from(Level::MAX_VALUE) + 1;
        if forms.len() != expected {
            return Err(LevelFormsError::WrongCount {
                expected,
                actual: forms.len(),
            });
        }
        for (position, form) in forms.iter().enumerate() {
            if usize::from(form.level.value()) != position {
                return Err(LevelFormsError::OutOfOrder {
                    position,
                    declared: form.level.value(),
                });
            }
            if form.name.trim().is_empty() {
                return Err(LevelFormsError::EmptyName(form.level.value()));
            }
        }
        Ok(Self { forms })
    }

    #[must_use]
    pub fn form(&self, level: Level) -> &LevelForm {
        // `new` guarantees one entry per level.
        &self.forms[usize::from(level.value())]
    }

    #[must_use]
    pub fn forms(&self) -> &[LevelForm] {
        &self.forms
    }
}

impl Default for LevelForms {
    fn default() -> Self {
        let forms = vec![
            LevelForm::builtin(
                0,
                "🧣",
                "#a5f2f3",
                "Wandering Girl",
                "This fraction multiplication... it's so hard...",
            ),
            LevelForm::builtin(
                1,
                "❄️",
                "#8be9fd",
                "Elements Awaken",
                "I can feel the numbers flowing...",
            ),
            LevelForm::builtin(
                2,
                "📜",
                "#50fa7b",
                "First Frost",
                "Find the unit whole and the problem falls apart.",
            ),
            LevelForm::builtin(
                3,
                "🧭",
                "#ff79c6",
                "Skyward Gaze",
                "North, south, east or west, I know my coordinates.",
            ),
            LevelForm::builtin(
                4,
                "⚖️",
                "#bd93f9",
                "Frozen Memory",
                "Both terms of a ratio must stay in perfect balance.",
            ),
            LevelForm::builtin(
                5,
                "⚗️",
                "#ff5555",
                "Winter Decree",
                "Magic is shared out in its simplest ratio.",
            ),
            LevelForm::builtin(
                6,
                "🛡️",
                "#8be9fd",
                "Snow Crystal Carving",
                "Geometry builds the skeleton of the world.",
            ),
            LevelForm::builtin(
                7,
                "⭕",
                "#f1fa8c",
                "Eternal Ring",
                "The circle is the perfect path to truth.",
            ),
            LevelForm::builtin(
                8,
                "🔬",
                "#ff79c6",
                "Micro Insight",
                "Not even a one percent error is allowed.",
            ),
            LevelForm::builtin(
                9,
                "🦋",
                "#ffb86c",
                "Ice Oracle",
                "Growth or decline, I have foreseen it all.",
            ),
            LevelForm::builtin(
                10,
                "👑",
                "#ffd700",
                "Omniscient Winter Goddess",
                "All things under heaven are within my statistics.",
            ),
        ];
        Self { forms }
    }
}
