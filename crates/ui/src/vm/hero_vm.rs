use quest_core::model::LevelForm;
use quest_core::progress::ProgressSnapshot;

/// Everything the hero panel shows: progress bar, realm badge and avatar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroVm {
    pub level: u8,
    pub percent: u8,
    pub checked: usize,
    pub total: usize,
    pub realm_label: String,
    pub form_name: String,
    pub icon: String,
    pub color: String,
    pub is_max: bool,
}

impl HeroVm {
    #[must_use]
    pub fn new(snapshot: &ProgressSnapshot, form: &LevelForm) -> Self {
        Self {
            level: snapshot.level.value(),
            percent: snapshot.percent,
            checked: snapshot.checked,
            total: snapshot.total,
            realm_label: format!("Realm {}", snapshot.level),
            form_name: form.name.clone(),
            icon: form.icon.clone(),
            color: form.color.clone(),
            is_max: snapshot.level.is_max(),
        }
    }

    #[must_use]
    pub fn avatar_class(&self) -> &'static str {
        if self.is_max {
            "freya-avatar level-max"
        } else {
            "freya-avatar"
        }
    }

    #[must_use]
    pub fn badge_style(&self) -> String {
        format!("background: linear-gradient(90deg, {}, #fff);", self.color)
    }

    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }
}
