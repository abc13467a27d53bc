//! Core data models for the Ekilex dictionary responses
//!
//! This module contains the records parsed from the API payloads and the
//! display model derived from them.

pub mod morph;

pub use morph::{morph_label, noun_codes, verb_codes};

use serde::Deserialize;

/// Response body of a word search
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WordSearchResult {
    /// Candidate words matching the search term
    #[serde(default)]
    pub words: Vec<WordMatch>,
}

/// A search candidate
///
/// Homonyms share the same `word_value` and differ by `word_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMatch {
    #[serde(default)]
    pub word_id: i64,
    #[serde(default)]
    pub word_value: String,
    /// Three-letter language code, e.g. `est`
    #[serde(default)]
    pub lang: String,
}

/// Details of a single word
///
/// `paradigms` is filled from a separate paradigm fetch after the details
/// payload has been parsed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDetails {
    #[serde(default)]
    pub word_class: String,
    #[serde(default)]
    pub lexemes: Vec<Lexeme>,
    #[serde(default)]
    pub paradigms: Vec<Paradigm>,
}

/// One sense of a word, with part-of-speech hints and synonyms
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexeme {
    #[serde(default)]
    pub pos: Vec<PosInfo>,
    #[serde(default)]
    pub synonym_lang_groups: Vec<SynonymLangGroup>,
}

/// Part-of-speech tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PosInfo {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub value: String,
}

/// Synonyms grouped by language
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SynonymLangGroup {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Synonym {
    #[serde(default)]
    pub words: Vec<SynonymWord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynonymWord {
    #[serde(default)]
    pub word_value: String,
    #[serde(default)]
    pub lang: String,
}

/// An inflection pattern with its surface forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paradigm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub inflection_type_nr: String,
    #[serde(default)]
    pub inflection_type: String,
    #[serde(default)]
    pub word_class: String,
    #[serde(default, rename = "paradigmForms")]
    pub forms: Vec<Form>,
}

/// One inflected form tagged with its morphological code
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub morph_code: String,
}

impl Form {
    /// Convenience constructor, mostly for tests
    pub fn new(morph_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            morph_code: morph_code.into(),
        }
    }
}

/// A single rendered form line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLine {
    pub code: String,
    pub label: String,
    pub value: String,
}

/// Everything the renderer needs to print a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayModel {
    pub header: String,
    /// Unique translations in first-seen order
    pub translations: Vec<String>,
    pub lines: Vec<FormLine>,
}
