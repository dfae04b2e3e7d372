use quest_core::model::{Level, LevelForms};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormCardVm {
    pub level: u8,
    pub icon: String,
    pub color: String,
    pub name: String,
    pub quote: String,
    pub unlocked: bool,
    pub current: bool,
}

impl FormCardVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.current, self.unlocked) {
            (true, _) => "form-card current",
            (false, true) => "form-card unlocked",
            (false, false) => "form-card locked",
        }
    }
}

/// Every form, marking the ones reached so far. Locked forms hide their quote.
#[must_use]
pub fn map_form_cards(forms: &LevelForms, current: Level) -> Vec<FormCardVm> {
    forms
        .forms()
        .iter()
        .map(|form| {
            let unlocked = form.level <= current;
            FormCardVm {
                level: form.level.value(),
                icon: form.icon.clone(),
                color: form.color.clone(),
                name: form.name.clone(),
                quote: if unlocked {
                    form.quote.clone()
                } else {
                    "???".to_owned()
                },
                unlocked,
                current: form.level == current,
            }
        })
        .collect()
}
