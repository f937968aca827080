//! TAXON-GRAMMAR: Message Synthesis Primitives
//!
//! Turns a sparse bag of optional fields into a grammatically correct
//! sentence. A variant declares a [`RuleTable`]: an ordered list of
//! `(required fields, template)` pairs evaluated top to bottom, where the
//! first rule whose fields are all present wins.
//!
//! Templates are Handlebars strings rendered against the fields' JSON form,
//! with two helpers:
//! - `article`: "An" or "A" for the noun that follows
//! - `plural`: "" when a count is exactly 1, "s" otherwise
//!
//! # Example
//!
//! ```
//! use serde::Serialize;
//! use taxon_grammar::{Present, RuleTable};
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Wait {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     task_type: Option<String>,
//! }
//!
//! impl Present for Wait {
//!     fn present(&self, field: &str) -> bool {
//!         field == "taskType" && self.task_type.is_some()
//!     }
//! }
//!
//! let table = RuleTable::new("wait")
//!     .rule(&["taskType"], "{{article taskType}} {{taskType}} stalled.");
//!
//! let fields = Wait { task_type: Some("upload".to_string()) };
//! assert_eq!(table.render(&fields, "A task stalled."), "An upload stalled.");
//! ```
//!
//! The heuristics are English-only on purpose: downstream fixtures assert on
//! their exact output, loan words included.

pub mod helpers;
pub mod rule;

pub use rule::{Present, Rule, RuleTable};

use thiserror::Error;

/// Errors raised while compiling or rendering rule templates
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("Template compile failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Fields are not a JSON object: {0}")]
    Context(String),
}

/// Whether the first character of `noun` is an English vowel (case-insensitive).
pub fn starts_with_vowel(noun: &str) -> bool {
    noun.chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .unwrap_or(false)
}

/// Indefinite article for `noun`, capitalized for sentence starts.
pub fn article(noun: &str) -> &'static str {
    if starts_with_vowel(noun) {
        "An"
    } else {
        "A"
    }
}

/// Plural suffix for `count`: empty for exactly one, `"s"` otherwise.
pub fn plural_suffix(count: u64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
