use once_cell::sync::Lazy;
use taxon_grammar::RuleTable;

use crate::fields::InterruptFields;

pub static INTERRUPT_RULES: Lazy<RuleTable<InterruptFields>> = Lazy::new(|| {
    RuleTable::new("interrupt")
        .rule(
            &["operationType", "operationName"],
            "The {{operationType}} \"{{operationName}}\" was interrupted.",
        )
        .rule(&["operationName"], "The operation \"{{operationName}}\" was interrupted.")
        .rule(&["operationType"], "{{article operationType}} {{operationType}} was interrupted.")
});
