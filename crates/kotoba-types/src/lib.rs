use serde::{Deserialize, Serialize};

/// Languages the bot can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ru,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Lang::Ru => "🇷🇺",
            Lang::En => "🇬🇧",
        }
    }

    /// Parse a language code, e.g. from callback data
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "ru" => Some(Lang::Ru),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Ru
    }
}

/// Glosses for one entry. Both languages are always present, possibly
/// as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub en: String,
    pub ru: String,
}

impl Translations {
    pub fn new(en: String, ru: String) -> Self {
        Self { en, ru }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ru => &self.ru,
        }
    }

    pub fn set(&mut self, lang: Lang, value: String) {
        match lang {
            Lang::En => self.en = value,
            Lang::Ru => self.ru = value,
        }
    }

    pub fn is_missing(&self, lang: Lang) -> bool {
        self.get(lang).is_empty()
    }
}

/// Normalized vocabulary record. The headword is never empty; the
/// normalizer discards records it cannot name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub headword: String,
    pub reading: String,
    pub translations: Translations,
    pub pos: Option<String>,
    pub strokes: Option<String>,
    pub frequency_rank: Option<String>,
}

/// Which bucket a tabular catalog row lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Word,
    Fact,
    Proverb,
}

impl Category {
    /// Route a CSV category tag. Unknown tags count as plain words,
    /// matching the source data where the column is often blank.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "fact" => Category::Fact,
            "proverb" => Category::Proverb,
            _ => Category::Word,
        }
    }
}

/// Normalized row of the tabular catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub headword: String,
    pub reading: String,
    pub translations: Translations,
    pub emoji: String,
    pub category: Category,
}
