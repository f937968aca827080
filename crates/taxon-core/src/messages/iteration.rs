//! Iteration messages are composed from two tables:
//! `<subject> exceeded the maximum iteration count<qualifier>.`

use once_cell::sync::Lazy;
use taxon_grammar::RuleTable;

use crate::fields::IterationFields;

pub static SUBJECT_RULES: Lazy<RuleTable<IterationFields>> = Lazy::new(|| {
    RuleTable::new("iteration.subject")
        .rule(&["operationType", "operationName"], "The {{operationType}} \"{{operationName}}\"")
        .rule(&["operationName"], "The operation \"{{operationName}}\"")
        .rule(&["operationType"], "{{article operationType}} {{operationType}}")
});

pub static QUALIFIER_RULES: Lazy<RuleTable<IterationFields>> = Lazy::new(|| {
    RuleTable::new("iteration.qualifier")
        .rule(
            &["iterationCount", "repeatingValue"],
            " of {{iterationCount}} for consecutive repeating values",
        )
        .rule(&["iterationCount"], " of {{iterationCount}} iteration{{plural iterationCount}}")
        .rule(&["repeatingValue"], " for consecutive repeating values")
});

const DEFAULT_SUBJECT: &str = "An operation";

/// Compose the full sentence
pub fn compose(fields: &IterationFields) -> String {
    let subject = SUBJECT_RULES.render(fields, DEFAULT_SUBJECT);
    let qualifier = QUALIFIER_RULES.render(fields, "");

    format!("{subject} exceeded the maximum iteration count{qualifier}.")
}
