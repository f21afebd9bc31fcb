use std::collections::HashMap;

/// JLPT proficiency levels, coarsest (N5) to finest (N1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl JlptLevel {
    /// All levels in menu order, beginner first.
    pub const ALL: [JlptLevel; 5] = [
        JlptLevel::N5,
        JlptLevel::N4,
        JlptLevel::N3,
        JlptLevel::N2,
        JlptLevel::N1,
    ];

    /// Parse a level tag from source data. Case-insensitive; a leading
    /// `JLPT` token is stripped, so `"jlpt n4"` and `"N4"` both resolve.
    pub fn parse(s: &str) -> Option<Self> {
        let tag = s.to_uppercase().replace("JLPT", "");
        match tag.trim() {
            "N5" => Some(JlptLevel::N5),
            "N4" => Some(JlptLevel::N4),
            "N3" => Some(JlptLevel::N3),
            "N2" => Some(JlptLevel::N2),
            "N1" => Some(JlptLevel::N1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }

    /// Menu label with a difficulty badge.
    pub fn badge(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "🟢 N5",
            JlptLevel::N4 => "🟡 N4",
            JlptLevel::N3 => "🟠 N3",
            JlptLevel::N2 => "🔴 N2",
            JlptLevel::N1 => "🟣 N1",
        }
    }
}

/// Headword → level cross-reference, built from the kanji-level source
/// during ingestion. Consulted when a vocabulary record carries no level
/// field of its own.
#[derive(Default)]
pub struct KanjiLevels {
    levels: HashMap<String, JlptLevel>,
}

impl KanjiLevels {
    pub fn new() -> Self {
        Self {
            levels: HashMap::new(),
        }
    }

    pub fn insert(&mut self, headword: String, level: JlptLevel) {
        self.levels.insert(headword, level);
    }

    pub fn get(&self, headword: &str) -> Option<JlptLevel> {
        self.levels.get(headword).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_tags() {
        assert_eq!(JlptLevel::parse("N5"), Some(JlptLevel::N5));
        assert_eq!(JlptLevel::parse("n3"), Some(JlptLevel::N3));
        assert_eq!(JlptLevel::parse("JLPT N4"), Some(JlptLevel::N4));
        assert_eq!(JlptLevel::parse("jlptn1"), Some(JlptLevel::N1));
        assert_eq!(JlptLevel::parse("N6"), None);
        assert_eq!(JlptLevel::parse(""), None);
    }

    #[test]
    fn levels_order_coarsest_first() {
        assert!(JlptLevel::N5 < JlptLevel::N1);
        assert_eq!(JlptLevel::ALL[0], JlptLevel::N5);
        assert_eq!(JlptLevel::ALL[4], JlptLevel::N1);
    }

    #[test]
    fn cross_reference_lookup() {
        let mut xref = KanjiLevels::new();
        xref.insert("猫".to_string(), JlptLevel::N5);
        assert_eq!(xref.get("猫"), Some(JlptLevel::N5));
        assert_eq!(xref.get("犬"), None);
        assert_eq!(xref.len(), 1);
    }
}
