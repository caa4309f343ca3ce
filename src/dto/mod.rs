use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::Deserializer;

use crate::model;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, Deserialize)]
struct LocaleDefinition {
    tag: String,
    symbol: String,
    symbol_position: SymbolPosition,
    decimal_separator: char,
    grouping_separator: char,
    fraction_digits: u32,
}

impl LocaleDefinition {
    pub fn to_model(&self) -> model::locale::LocaleEntry {
        let position = match self.symbol_position {
            SymbolPosition::Prefix => model::locale::SymbolPosition::Prefix,
            SymbolPosition::Suffix => model::locale::SymbolPosition::Suffix,
        };

        model::locale::LocaleEntry::new(
            self.tag.clone(),
            model::locale::CurrencyFormat::new(
                self.symbol.clone(),
                position,
                self.decimal_separator,
                self.grouping_separator,
                self.fraction_digits,
            ),
        )
    }
}

/// Loads extra currency formats from a multi-document YAML file, one locale
/// definition per document.
pub fn load_locales(path: &Path) -> Result<Vec<model::locale::LocaleEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading locale definitions from {path:?}"))?;

    let mut result: Vec<model::locale::LocaleEntry> = Vec::new();
    for doc in Deserializer::from_str(&contents) {
        let definition = LocaleDefinition::deserialize(doc)
            .with_context(|| format!("parsing locale definition in {path:?}"))?;
        result.push(definition.to_model());
    }

    Ok(result)
}
