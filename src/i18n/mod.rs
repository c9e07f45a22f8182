//! Locale model and UI string catalog.
//!
//! Two locales are supported: English (default) and Arabic (right-to-left).
//! Marketing copy lives next to the sections in [`crate::content`] as
//! [`Localized`] pairs; short interface strings live in the [`Text`] catalog.

mod catalog;

pub use catalog::Text;

use serde::{Deserialize, Serialize};

/// Active display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Text direction for the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// Every selectable locale, in selector order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// BCP 47 language tag, also used for the `lang` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Locale::En),
            "ar" | "arabic" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Short label shown on the selector button.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "ENG",
            Locale::Ar => "AR",
        }
    }

    /// Human-readable language name (in English, for aria labels).
    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "Arabic",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A string available in every locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ar => self.ar,
        }
    }
}

/// Look up an interface string for a locale.
pub fn t(locale: Locale, text: Text) -> &'static str {
    text.localized().get(locale)
}
