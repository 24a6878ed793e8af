//! Per-document metadata source: newline-delimited JSON where each line is a
//! document descriptor `{id, lemmas: [...]}`.
//!
//! Lemma elements come in two shapes:
//! - a bare string, which is its own single expansion
//! - an object with a term-like field (`term`/`word`/`lemma`/`name`) and an
//!   expansions-like field (`expansions`/`synonyms`/`meanings`, falling back
//!   to `translation`/`meaning`/`definition`, then to the term itself)
//!
//! Malformed lines and lemmas are skipped and counted, never fatal.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use super::{Lexicon, LexiconEntry, LexiconSource};

const TERM_FIELDS: [&str; 4] = ["term", "word", "lemma", "name"];
const EXPANSION_FIELDS: [&str; 3] = ["expansions", "synonyms", "meanings"];
const TRANSLATION_FIELDS: [&str; 3] = ["translation", "meaning", "definition"];

/// Load the metadata file into the lexicon. Returns (inserted, skipped).
pub fn load_metadata(path: &Path, lexicon: &mut Lexicon) -> Result<(usize, usize)> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata file {}", path.display()))?;

    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for (line_no, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let doc: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("Skipping malformed metadata line {}: {e}", line_no + 1);
                skipped += 1;
                continue;
            }
        };

        let Some(lemmas) = doc.get("lemmas").and_then(Value::as_array) else {
            skipped += 1;
            continue;
        };

        for lemma in lemmas {
            match parse_lemma(lemma) {
                Some((term, expansions)) => {
                    lexicon.insert(
                        &term,
                        LexiconEntry {
                            frequency: expansions.len() as u32,
                            expansions,
                            section: None,
                            verse_reference: None,
                            relevance_base: None,
                            source: LexiconSource::Metadata,
                        },
                    );
                    inserted += 1;
                }
                None => skipped += 1,
            }
        }
    }

    Ok((inserted, skipped))
}

fn parse_lemma(lemma: &Value) -> Option<(String, Vec<String>)> {
    match lemma {
        // Bare string: self-referential synonym
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            Some((s.to_string(), vec![s.to_string()]))
        }
        Value::Object(obj) => {
            let term = TERM_FIELDS
                .iter()
                .find_map(|f| obj.get(*f).and_then(Value::as_str))
                .map(str::trim)
                .filter(|t| !t.is_empty())?;

            let expansions = extract_expansions(obj, term);
            Some((term.to_string(), expansions))
        }
        _ => None,
    }
}

fn extract_expansions(obj: &serde_json::Map<String, Value>, term: &str) -> Vec<String> {
    // Preferred: an array-of-strings field
    for field in EXPANSION_FIELDS {
        if let Some(arr) = obj.get(field).and_then(Value::as_array) {
            let list: Vec<String> = arr
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !list.is_empty() {
                return list;
            }
        }
    }

    // Fallback: a single translation-like string
    for field in TRANSLATION_FIELDS {
        if let Some(s) = obj.get(field).and_then(Value::as_str) {
            let s = s.trim();
            if !s.is_empty() {
                return vec![s.to_string()];
            }
        }
    }

    // Last resort: the term itself
    vec![term.to_string()]
}
