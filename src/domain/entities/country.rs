//! Country metadata entities and the fill-if-placeholder merge rules.
//!
//! [`CountryRecord`] starts out fully at placeholder values and is enriched by
//! [`CountryCandidate`]s from successive sources. A field only ever moves from
//! its placeholder to a real value; once resolved it is never replaced.

use crate::utils::normalize::{PLACEHOLDER, is_placeholder};

/// Currency of a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

impl CurrencyInfo {
    /// Returns true while no source has supplied a currency code.
    pub fn is_unresolved(&self) -> bool {
        is_placeholder(&self.code)
    }
}

impl Default for CurrencyInfo {
    fn default() -> Self {
        Self {
            code: PLACEHOLDER.to_string(),
            name: PLACEHOLDER.to_string(),
            symbol: PLACEHOLDER.to_string(),
        }
    }
}

/// Resolved country metadata.
///
/// `languages` is never empty: the unresolved state is `["N/A"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: String,
    pub capital: String,
    pub languages: Vec<String>,
    pub currency: CurrencyInfo,
    pub flag_url: String,
}

impl CountryRecord {
    /// Creates a record with every field at its placeholder.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capital: PLACEHOLDER.to_string(),
            languages: vec![PLACEHOLDER.to_string()],
            currency: CurrencyInfo::default(),
            flag_url: String::new(),
        }
    }

    /// Returns true while `languages` still holds the placeholder list.
    pub fn needs_languages(&self) -> bool {
        languages_unresolved(&self.languages)
    }

    /// Returns true while no currency code has been resolved.
    pub fn needs_currency(&self) -> bool {
        self.currency.is_unresolved()
    }

    /// Fills every field still at its placeholder from `candidate`.
    ///
    /// The record name is not touched; only the primary source may rename.
    pub fn fill_from(&mut self, candidate: CountryCandidate) {
        self.capital = fill_text(std::mem::take(&mut self.capital), candidate.capital);
        self.flag_url = fill_url(std::mem::take(&mut self.flag_url), candidate.flag_url);
        self.languages = fill_languages(std::mem::take(&mut self.languages), candidate.languages);
        self.currency = fill_currency(std::mem::take(&mut self.currency), candidate.currency);
    }
}

/// What a single country source managed to extract for one country.
///
/// Fields are `None`/empty when the source had nothing usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCandidate {
    pub name: Option<String>,
    pub capital: Option<String>,
    pub languages: Vec<String>,
    pub currency: Option<CurrencyInfo>,
    pub flag_url: Option<String>,
}

fn languages_unresolved(languages: &[String]) -> bool {
    languages.first().is_none_or(|l| is_placeholder(l))
}

/// Keeps `current` unless it is `"N/A"` and `candidate` holds a real value.
pub fn fill_text(current: String, candidate: Option<String>) -> String {
    match candidate {
        Some(value) if is_placeholder(&current) && !is_placeholder(&value) => value,
        _ => current,
    }
}

/// Keeps `current` unless it is empty and `candidate` is not.
pub fn fill_url(current: String, candidate: Option<String>) -> String {
    match candidate {
        Some(value) if current.is_empty() && !value.is_empty() => value,
        _ => current,
    }
}

/// Keeps `current` unless it is the placeholder list and `candidate` is non-empty.
pub fn fill_languages(current: Vec<String>, candidate: Vec<String>) -> Vec<String> {
    if languages_unresolved(&current) && !candidate.is_empty() {
        candidate
    } else {
        current
    }
}

/// Keeps `current` unless its code is unresolved and `candidate` carries a code.
pub fn fill_currency(current: CurrencyInfo, candidate: Option<CurrencyInfo>) -> CurrencyInfo {
    match candidate {
        Some(value) if current.is_unresolved() && !value.is_unresolved() => value,
        _ => current,
    }
}
