use once_cell::sync::Lazy;
use taxon_grammar::RuleTable;

use crate::fields::TimeoutFields;

// "timed after" is kept verbatim; downstream fixtures match on it.
pub static TIMEOUT_RULES: Lazy<RuleTable<TimeoutFields>> = Lazy::new(|| {
    RuleTable::new("timeout")
        .rule(
            &["operationType", "operationName", "operationTimeout"],
            "The {{operationType}} \"{{operationName}}\" timed after {{operationTimeout}} second{{plural operationTimeout}}.",
        )
        .rule(
            &["operationName", "operationTimeout"],
            "The operation \"{{operationName}}\" timed after {{operationTimeout}} second{{plural operationTimeout}}.",
        )
        .rule(
            &["operationType", "operationTimeout"],
            "{{article operationType}} {{operationType}} timed after {{operationTimeout}} second{{plural operationTimeout}}.",
        )
        .rule(
            &["operationType", "operationName"],
            "The {{operationType}} \"{{operationName}}\" timed out.",
        )
        .rule(
            &["operationTimeout"],
            "An operation timed after {{operationTimeout}} second{{plural operationTimeout}}.",
        )
        .rule(&["operationName"], "The operation \"{{operationName}}\" timed out.")
        .rule(&["operationType"], "{{article operationType}} {{operationType}} timed out.")
});
