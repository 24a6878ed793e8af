//! Raw collaborator payload and its shape classification.
//!
//! The service answers in one of two shapes: a nested
//! `answer → steps → actions → observation → searchResults` structure, or a
//! flat answer-text string. Classification is a structural check; each shape
//! then gets its own parser in the extractor.

use serde_json::Value;

/// The collaborator's response, untouched.
#[derive(Debug, Clone)]
pub struct RawPayload(pub Value);

/// Structural classification of a payload.
#[derive(Debug)]
pub enum PayloadShape<'a> {
    /// Nested step/action/observation structure; holds the steps array.
    Steps(&'a [Value]),
    /// Flat final-answer text block.
    AnswerText(&'a str),
    /// Nothing parsable.
    Empty,
}

impl RawPayload {
    pub fn classify(&self) -> PayloadShape<'_> {
        let answer = match self.0.get("answer") {
            Some(a) => a,
            None => return PayloadShape::Empty,
        };

        if let Some(steps) = answer.get("steps").and_then(Value::as_array) {
            if !steps.is_empty() {
                return PayloadShape::Steps(steps);
            }
        }

        if let Some(text) = answer.get("answerText").and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return PayloadShape::AnswerText(text);
            }
        }

        // Legacy: the answer itself is the text
        if let Some(text) = answer.as_str() {
            if !text.trim().is_empty() {
                return PayloadShape::AnswerText(text);
            }
        }

        PayloadShape::Empty
    }
}
