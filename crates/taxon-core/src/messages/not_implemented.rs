use once_cell::sync::Lazy;
use taxon_grammar::RuleTable;

use crate::fields::NotImplementedFields;

pub static NOT_IMPLEMENTED_RULES: Lazy<RuleTable<NotImplementedFields>> = Lazy::new(|| {
    RuleTable::new("not_implemented")
        .rule(&["methodName"], "The method \"{{methodName}}\" has not been implemented.")
});
