//! User-facing messages derived from toggle outcomes.

use quest_core::model::{LevelForm, LevelForms};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::progress_tracker::ToggleOutcome;

pub static ENCOURAGE_MESSAGES: [&str; 8] = [
    "✨ Perfect mastery!",
    "⭐ Magic +1!",
    "🌟 Excellent!",
    "💫 Knowledge absorbed!",
    "❄️ Ice magic enhanced!",
    "🔮 Wisdom grows!",
    "✦ Brilliantly done!",
    "⚡ Power surge!",
];

pub const SECTION_COMPLETE_MESSAGE: &str = "🎉 Section complete! Seal broken!";

/// Messages to show after a toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleFeedback {
    /// Short floating message, only when a point was checked.
    pub encouragement: Option<&'static str>,
    /// Toast text. Section completion wins over a level-up.
    pub toast: Option<String>,
}

#[must_use]
pub fn feedback_for<R: Rng + ?Sized>(
    outcome: &ToggleOutcome,
    forms: &LevelForms,
    rng: &mut R,
) -> ToggleFeedback {
    let encouragement = if outcome.checked {
        ENCOURAGE_MESSAGES.choose(rng).copied()
    } else {
        None
    };

    let toast = if outcome.section_completed {
        Some(SECTION_COMPLETE_MESSAGE.to_owned())
    } else if outcome.level_change.is_level_up() {
        let form = forms.form(outcome.level_change.level());
        Some(format!("✨ Realm breakthrough! Ascended to: {}", form.name))
    } else {
        None
    };

    ToggleFeedback {
        encouragement,
        toast,
    }
}

/// What the character says when clicked.
#[must_use]
pub fn talk_message(form: &LevelForm) -> String {
    format!("Freya: \"{}\"", form.quote)
}
