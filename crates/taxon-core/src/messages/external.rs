use once_cell::sync::Lazy;
use taxon_grammar::RuleTable;

use crate::fields::ExternalFields;

pub static EXTERNAL_RULES: Lazy<RuleTable<ExternalFields>> = Lazy::new(|| {
    RuleTable::new("external")
        .rule(
            &["dependencyType", "dependencyName"],
            "The external {{dependencyType}} \"{{dependencyName}}\" failed.",
        )
        .rule(&["dependencyName"], "The external dependency \"{{dependencyName}}\" failed.")
        .rule(&["dependencyType"], "An external {{dependencyType}} failed.")
});
