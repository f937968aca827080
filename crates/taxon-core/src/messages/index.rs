use once_cell::sync::Lazy;
use taxon_grammar::RuleTable;

use crate::fields::IndexFields;

pub static INDEX_RULES: Lazy<RuleTable<IndexFields>> = Lazy::new(|| {
    RuleTable::new("index")
        .rule(
            &["index", "valueName", "upperBound"],
            "The index {{index}} is outside the bounds of the array \"{{valueName}}\". It must be 0, {{upperBound}}, or between them.",
        )
        .rule(
            &["valueName", "upperBound"],
            "An index is outside the bounds of the array \"{{valueName}}\". It must be 0, {{upperBound}}, or between them.",
        )
        .rule(
            &["index", "upperBound"],
            "The index {{index}} is outside the bounds of an array. It must be 0, {{upperBound}}, or between them.",
        )
        .rule(
            &["index", "valueName"],
            "The index {{index}} is outside the bounds of the array \"{{valueName}}\".",
        )
        .rule(
            &["upperBound"],
            "An index is outside the bounds of an array. It must be 0, {{upperBound}}, or between them.",
        )
        // "outside of" is the established wording for this case
        .rule(
            &["valueName"],
            "An index is outside of the bounds of the array \"{{valueName}}\".",
        )
        .rule(&["index"], "The index {{index}} is outside the bounds of an array.")
});
