use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("unknown locale {0:?}")]
    UnknownTag(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Currency conventions of one locale: what the formatter needs to turn a
/// number into a displayable amount.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub fraction_digits: u32,
}

impl CurrencyFormat {
    pub fn new(
        symbol: String,
        symbol_position: SymbolPosition,
        decimal_separator: char,
        grouping_separator: char,
        fraction_digits: u32,
    ) -> CurrencyFormat {
        CurrencyFormat {
            symbol,
            symbol_position,
            decimal_separator,
            grouping_separator,
            fraction_digits,
        }
    }

    pub fn us_dollars() -> CurrencyFormat {
        CurrencyFormat::new("$".to_string(), SymbolPosition::Prefix, '.', ',', 2)
    }

    pub fn british_pounds() -> CurrencyFormat {
        CurrencyFormat::new("£".to_string(), SymbolPosition::Prefix, '.', ',', 2)
    }

    pub fn german_euros() -> CurrencyFormat {
        CurrencyFormat::new("€".to_string(), SymbolPosition::Suffix, ',', '.', 2)
    }

    pub fn french_euros() -> CurrencyFormat {
        CurrencyFormat::new("€".to_string(), SymbolPosition::Suffix, ',', ' ', 2)
    }

    pub fn japanese_yen() -> CurrencyFormat {
        CurrencyFormat::new("¥".to_string(), SymbolPosition::Prefix, '.', ',', 0)
    }
}

pub struct LocaleEntry {
    pub tag: String,
    pub format: CurrencyFormat,
}

impl LocaleEntry {
    pub fn new(tag: String, format: CurrencyFormat) -> LocaleEntry {
        LocaleEntry { tag, format }
    }
}

/// Locale tag to currency format lookup. Later entries shadow earlier ones,
/// so definitions loaded from a file override the built-ins.
pub struct LocaleRegistry {
    entries: Vec<LocaleEntry>,
}

impl LocaleRegistry {
    pub fn builtin() -> LocaleRegistry {
        LocaleRegistry {
            entries: vec![
                LocaleEntry::new("en-US".to_string(), CurrencyFormat::us_dollars()),
                LocaleEntry::new("en-GB".to_string(), CurrencyFormat::british_pounds()),
                LocaleEntry::new("de-DE".to_string(), CurrencyFormat::german_euros()),
                LocaleEntry::new("fr-FR".to_string(), CurrencyFormat::french_euros()),
                LocaleEntry::new("ja-JP".to_string(), CurrencyFormat::japanese_yen()),
            ],
        }
    }

    pub fn add(&mut self, entry: LocaleEntry) {
        self.entries.push(entry);
    }

    pub fn resolve(&self, tag: &str) -> Result<CurrencyFormat, LocaleError> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.tag.eq_ignore_ascii_case(tag))
            .map(|entry| entry.format.clone())
            .ok_or_else(|| LocaleError::UnknownTag(tag.to_string()))
    }
}

/// Locale tag from the environment, in POSIX precedence order.
/// `en_US.UTF-8` becomes `en-US`.
pub fn detect_tag() -> Option<String> {
    ["LC_ALL", "LC_MONETARY", "LANG"]
        .iter()
        .find_map(|name| normalize_tag(&std::env::var(name).ok()?))
}

fn normalize_tag(value: &str) -> Option<String> {
    let tag = value.split(['.', '@']).next()?;
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag.replace('_', "-"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_builtin_tag() {
        let registry = LocaleRegistry::builtin();

        assert_eq!(CurrencyFormat::us_dollars(), registry.resolve("en-US").unwrap());
        assert_eq!(CurrencyFormat::japanese_yen(), registry.resolve("ja-JP").unwrap());
    }

    #[test]
    fn test_resolve_ignores_case() {
        let registry = LocaleRegistry::builtin();

        assert_eq!(CurrencyFormat::german_euros(), registry.resolve("de-de").unwrap());
    }

    #[test]
    fn test_resolve_unknown_tag() {
        let registry = LocaleRegistry::builtin();

        assert!(registry.resolve("xx-XX").is_err());
    }

    #[test]
    fn test_added_entry_shadows_builtin() {
        let mut registry = LocaleRegistry::builtin();
        let plain = CurrencyFormat::new("USD ".to_string(), SymbolPosition::Prefix, '.', ',', 2);
        registry.add(LocaleEntry::new("en-US".to_string(), plain.clone()));

        assert_eq!(plain, registry.resolve("en-US").unwrap());
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(Some("en-US".to_string()), normalize_tag("en_US.UTF-8"));
        assert_eq!(Some("fr-FR".to_string()), normalize_tag("fr_FR@euro"));
        assert_eq!(None, normalize_tag("C"));
        assert_eq!(None, normalize_tag("POSIX"));
        assert_eq!(None, normalize_tag(""));
    }
}
