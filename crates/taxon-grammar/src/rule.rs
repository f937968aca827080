//! Ordered rule tables
//!
//! A table is a priority list, not a set of exclusive conditions: rules are
//! checked in insertion order and the first one whose required fields are
//! all present renders the message.

use std::marker::PhantomData;

use handlebars::Handlebars;
use serde::Serialize;

use crate::helpers::engine;
use crate::GrammarError;

/// Field presence as seen by message synthesis.
///
/// Presence is decided per field by the schema owner, so it can differ from
/// `Option::is_some` (an empty name, for instance, counts as absent).
pub trait Present {
    /// Whether `field` (the serialized key) counts as supplied.
    fn present(&self, field: &str) -> bool;
}

/// A single synthesis rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Serialized field names that must all be present
    pub requires: &'static [&'static str],
    /// Handlebars template rendered against the fields
    pub template: &'static str,
}

impl Rule {
    /// Check the rule against a set of fields
    pub fn matches<F: Present>(&self, fields: &F) -> bool {
        self.requires.iter().all(|field| fields.present(field))
    }
}

/// Priority-ordered list of rules for one schema
pub struct RuleTable<F> {
    name: &'static str,
    rules: Vec<Rule>,
    handlebars: Handlebars<'static>,
    _fields: PhantomData<fn(&F)>,
}

impl<F> std::fmt::Debug for RuleTable<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleTable")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .finish()
    }
}

impl<F: Present + Serialize> RuleTable<F> {
    /// Create an empty table
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
            handlebars: engine(),
            _fields: PhantomData,
        }
    }

    /// Append a rule with lower priority than every rule added before it
    pub fn rule(mut self, requires: &'static [&'static str], template: &'static str) -> Self {
        let key = self.template_key(self.rules.len());

        // A rule that fails to compile stays in place so priorities don't
        // shift; rendering it reports the error instead.
        if let Err(e) = self.handlebars.register_template_string(&key, template) {
            tracing::error!(
                table = self.name,
                template,
                error = %e,
                "rule template failed to compile"
            );
        }

        self.rules.push(Rule { requires, template });
        self
    }

    /// Table name, used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Index of the first matching rule
    pub fn select(&self, fields: &F) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(fields))
    }

    /// Render the first matching rule, or `None` when no rule applies
    pub fn try_render(&self, fields: &F) -> Result<Option<String>, GrammarError> {
        let Some(index) = self.select(fields) else {
            return Ok(None);
        };

        tracing::trace!(table = self.name, rule = index, "rule matched");

        let data = serde_json::to_value(fields)
            .map_err(|e| GrammarError::Context(e.to_string()))?;

        if !self.handlebars.has_template(&self.template_key(index)) {
            return Err(GrammarError::Template(self.rules[index].template.to_string()));
        }

        self.handlebars
            .render(&self.template_key(index), &data)
            .map(Some)
            .map_err(|e| GrammarError::Render(e.to_string()))
    }

    /// Render the first matching rule, or `fallback` when no rule applies
    pub fn render(&self, fields: &F, fallback: &str) -> String {
        match self.try_render(fields) {
            Ok(Some(message)) => message,
            Ok(None) => fallback.to_string(),
            Err(e) => {
                tracing::warn!(table = self.name, error = %e, "falling back to default message");
                fallback.to_string()
            }
        }
    }

    fn template_key(&self, index: usize) -> String {
        format!("{}#{}", self.name, index)
    }
}
