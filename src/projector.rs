//! Projection of raw API payloads into display models
//!
//! Everything here is pure: payload bytes go in, domain records come out, and
//! records are merged into a `DisplayModel` for the renderer. Forms from every
//! paradigm of a word are merged, keeping each distinct value once in the
//! order it was first seen.

use crate::data::{
    morph_label, noun_codes, verb_codes, DisplayModel, FormLine, Paradigm, WordDetails,
    WordMatch, WordSearchResult,
};
use crate::error::LookupError;

/// Language of the headwords we look up
pub const SOURCE_LANG: &str = "est";

/// Language of the translations shown under the header
pub const TRANSLATION_LANG: &str = "eng";

/// Header used when a word has no paradigm data
pub const NO_DATA_HEADER: &str = "no data available";

/// Placeholder for a curated form missing from every paradigm
pub const MISSING_FORM: &str = "-";

/// Separator between distinct values of one morph code
pub const VALUE_SEPARATOR: &str = ", ";

pub fn parse_search(data: &[u8]) -> Result<WordSearchResult, LookupError> {
    Ok(serde_json::from_slice(data)?)
}

pub fn parse_details(data: &[u8]) -> Result<WordDetails, LookupError> {
    Ok(serde_json::from_slice(data)?)
}

pub fn parse_paradigms(data: &[u8]) -> Result<Vec<Paradigm>, LookupError> {
    Ok(serde_json::from_slice(data)?)
}

/// Keeps the matches in language `lang`, preserving order
pub fn filter_by_language(words: &[WordMatch], lang: &str) -> Vec<WordMatch> {
    words.iter().filter(|w| w.lang == lang).cloned().collect()
}

/// Picks a homonym by its 1-based position
pub fn select_homonym(words: &[WordMatch], index: usize) -> Result<&WordMatch, LookupError> {
    if words.is_empty() {
        return Err(LookupError::NoMatches);
    }

    index
        .checked_sub(1)
        .and_then(|i| words.get(i))
        .ok_or(LookupError::IndexOutOfRange {
            index,
            available: words.len(),
        })
}

/// Collects unique English synonyms across all lexemes, in first-seen order
pub fn extract_translations(details: &WordDetails) -> Vec<String> {
    let mut translations: Vec<String> = Vec::new();

    let words = details
        .lexemes
        .iter()
        .flat_map(|lexeme| &lexeme.synonym_lang_groups)
        .filter(|group| group.lang == TRANSLATION_LANG)
        .flat_map(|group| &group.synonyms)
        .flat_map(|synonym| &synonym.words)
        .filter(|word| word.lang == TRANSLATION_LANG && !word.word_value.is_empty());

    for word in words {
        if !translations.contains(&word.word_value) {
            translations.push(word.word_value.clone());
        }
    }

    translations
}

/// Resolves the part-of-speech label and whether the word inflects as a verb
///
/// The word class wins when it says `verb`; otherwise the first POS code of
/// the first lexeme decides. Unknown codes fall back to `noun`.
pub fn determine_part_of_speech(details: &WordDetails) -> (&'static str, bool) {
    if details.word_class.trim() == "verb" {
        return ("verb", true);
    }

    let code = details
        .lexemes
        .first()
        .and_then(|lexeme| lexeme.pos.first())
        .map(|pos| pos.code.trim());

    match code {
        Some("adj") => ("adj", false),
        Some("v") => ("verb", true),
        _ => ("noun", false),
    }
}

/// Curated morph codes for the concise view
pub fn select_display_codes(is_verb: bool) -> &'static [&'static str] {
    if is_verb {
        verb_codes()
    } else {
        noun_codes()
    }
}

/// Distinct values for one morph code across paradigms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedForm {
    pub code: String,
    pub values: Vec<String>,
}

/// Merges the forms of every paradigm
///
/// Codes appear in first-appearance order; each code keeps its distinct
/// values in first-appearance order. Codes and values are trimmed.
pub fn merge_forms(paradigms: &[Paradigm]) -> Vec<MergedForm> {
    let mut merged: Vec<MergedForm> = Vec::new();

    for form in paradigms.iter().flat_map(|p| &p.forms) {
        let code = form.morph_code.trim();
        let value = form.value.trim();

        match merged.iter_mut().find(|m| m.code == code) {
            Some(entry) => {
                if !entry.values.iter().any(|v| v == value) {
                    entry.values.push(value.to_string());
                }
            }
            None => merged.push(MergedForm {
                code: code.to_string(),
                values: vec![value.to_string()],
            }),
        }
    }

    merged
}

/// Distinct non-empty inflection type numbers across paradigms
pub fn inflection_types(paradigms: &[Paradigm]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for nr in paradigms.iter().map(|p| p.inflection_type_nr.trim()) {
        if !nr.is_empty() && !types.iter().any(|t| t == nr) {
            types.push(nr.to_string());
        }
    }
    types
}

fn form_line(code: &str, value: String) -> FormLine {
    FormLine {
        code: code.to_string(),
        label: morph_label(code).to_string(),
        value,
    }
}

/// Builds the display model for a word
///
/// # Arguments
/// * `word` - Headword shown in the header
/// * `details` - Word details with paradigms already merged in
/// * `homonym_index` - 1-based index of the selected homonym
/// * `total_homonyms` - Number of homonyms the search produced
/// * `show_all` - Show every form instead of the curated subset
pub fn build_display_model(
    word: &str,
    details: &WordDetails,
    homonym_index: usize,
    total_homonyms: usize,
    show_all: bool,
) -> DisplayModel {
    if details.paradigms.is_empty() {
        return DisplayModel {
            header: NO_DATA_HEADER.to_string(),
            ..DisplayModel::default()
        };
    }

    let (pos_label, is_verb) = determine_part_of_speech(details);
    let types = inflection_types(&details.paradigms);

    let mut header = if types.is_empty() {
        format!("{} ({})", word, pos_label)
    } else {
        format!("{} ({}, type {})", word, pos_label, types.join(", "))
    };
    if total_homonyms > 1 {
        header.push_str(&format!(
            "  [{} of {}, use --homonym=N for others]",
            homonym_index, total_homonyms
        ));
    }

    let merged = merge_forms(&details.paradigms);

    let lines = if show_all {
        merged
            .iter()
            .map(|m| form_line(&m.code, m.values.join(VALUE_SEPARATOR)))
            .collect()
    } else {
        select_display_codes(is_verb)
            .iter()
            .map(|code| {
                let value = merged
                    .iter()
                    .find(|m| m.code == *code)
                    .map_or_else(|| MISSING_FORM.to_string(), |m| m.values.join(VALUE_SEPARATOR));
                form_line(code, value)
            })
            .collect()
    };

    DisplayModel {
        header,
        translations: extract_translations(details),
        lines,
    }
}
