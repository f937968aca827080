use once_cell::sync::Lazy;
use taxon_grammar::RuleTable;

use crate::fields::DecoratorFields;

pub static DECORATOR_RULES: Lazy<RuleTable<DecoratorFields>> = Lazy::new(|| {
    RuleTable::new("decorator")
        .rule(
            &["decoratorType", "decoratorName"],
            "The {{decoratorType}} decorator \"{{decoratorName}}\" failed to apply.",
        )
        .rule(
            &["decoratorType"],
            "{{article decoratorType}} {{decoratorType}} decorator failed to apply.",
        )
        .rule(&["decoratorName"], "The decorator \"{{decoratorName}}\" failed to apply.")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::DecoratorType;

    const FALLBACK: &str = "A decorator failed to apply.";

    #[test]
    fn test_type_and_name() {
        let fields = DecoratorFields::default()
            .decorator_type(DecoratorType::Method)
            .decorator_name("memoize");
        assert_eq!(
            DECORATOR_RULES.render(&fields, FALLBACK),
            "The method decorator \"memoize\" failed to apply."
        );
    }

    #[test]
    fn test_accessor_takes_an() {
        let fields = DecoratorFields::default().decorator_type(DecoratorType::Accessor);
        assert_eq!(
            DECORATOR_RULES.render(&fields, FALLBACK),
            "An accessor decorator failed to apply."
        );
    }

    #[test]
    fn test_empty_name_falls_back() {
        let fields = DecoratorFields::default().decorator_name("");
        assert_eq!(DECORATOR_RULES.render(&fields, FALLBACK), FALLBACK);
    }
}
