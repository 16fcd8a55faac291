use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::engine::session::RoleDefaults;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    #[default]
    Fa,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "fa" => Some(Language::Fa),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Fa)
    }
}

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("title", "Mafia Night"),
        ("start", "Start"),
        ("reset", "Reset"),
        ("restart", "Play again"),
        ("seen", "Got it"),
        ("roles", "Roles"),
        ("mafiasCount", "Mafia count"),
        ("citizensCount", "Citizen count"),
        ("mafiaRole", "Mafia role"),
        ("citizenRole", "Citizen role"),
        ("defaultMafia", "Mafia"),
        ("defaultCitizen", "Citizen"),
        ("scenarioName", "Scenario name"),
        ("saveScenario", "Save scenario"),
        ("renameScenario", "Rename scenario"),
        ("deleteScenario", "Delete scenario"),
        ("suggestedScenarios", "Suggested scenarios"),
        ("tapToReveal", "Tap to reveal"),
        ("cardsRemaining", "Cards remaining"),
    ])
});

static FA: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("title", "شب مافیا"),
        ("start", "شروع"),
        ("reset", "از نو"),
        ("restart", "بازی دوباره"),
        ("seen", "دیدم"),
        ("roles", "نقش‌ها"),
        ("mafiasCount", "تعداد مافیا"),
        ("citizensCount", "تعداد شهروندان"),
        ("mafiaRole", "نقش مافیا"),
        ("citizenRole", "نقش شهروند"),
        ("defaultMafia", "مافیا"),
        ("defaultCitizen", "شهروند"),
        ("scenarioName", "نام سناریو"),
        ("saveScenario", "ذخیره سناریو"),
        ("renameScenario", "تغییر نام سناریو"),
        ("deleteScenario", "حذف سناریو"),
        ("suggestedScenarios", "سناریوهای پیشنهادی"),
        ("tapToReveal", "برای دیدن لمس کنید"),
        ("cardsRemaining", "کارت‌های باقی‌مانده"),
    ])
});

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Display-text source for one selected language. A plain value object:
/// constructed at startup, handed to whoever renders text.
#[derive(Clone, Debug)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Look up a display string. Keys missing from the active catalog fall
    /// back to the Persian catalog, then to the key itself.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.language {
            Language::En => &EN,
            Language::Fa => &FA,
        };
        if let Some(&text) = table.get(key) {
            return text;
        }
        if let Some(&text) = FA.get(key) {
            return text;
        }
        key
    }

    /// Locale-aware digit rendering: Western digits for English, Eastern
    /// Arabic-Indic for Persian.
    pub fn format_number(&self, n: usize) -> String {
        let plain = n.to_string();
        match self.language {
            Language::En => plain,
            Language::Fa => plain.chars().map(persian_digit).collect(),
        }
    }

    /// Labels used for slots whose role name was left blank.
    pub fn role_defaults(&self) -> RoleDefaults {
        RoleDefaults {
            mafia: self.translate("defaultMafia").to_string(),
            citizen: self.translate("defaultCitizen").to_string(),
        }
    }
}

fn persian_digit(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => PERSIAN_DIGITS[d as usize],
        None => c,
    }
}
