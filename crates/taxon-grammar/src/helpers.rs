//! Handlebars helpers for rule templates.
//!
//! - article: "An"/"A" for the noun given as the first parameter
//! - plural: "" or "s" for the count given as the first parameter

use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};

use crate::{article, plural_suffix};

/// Build a Handlebars registry configured for message synthesis.
///
/// Escaping is disabled: messages are plain text and quote field values
/// verbatim.
pub fn engine() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars.set_strict_mode(false);
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars.register_helper("article", Box::new(ArticleHelper));
    handlebars.register_helper("plural", Box::new(PluralHelper));

    handlebars
}

/// Indefinite article for the noun that follows
struct ArticleHelper;

impl HelperDef for ArticleHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let noun = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");

        out.write(article(noun))?;
        Ok(())
    }
}

/// Plural suffix for a count
struct PluralHelper;

impl HelperDef for PluralHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        // Non-integer counts are never exactly one
        let suffix = match h.param(0).and_then(|v| v.value().as_u64()) {
            Some(count) => plural_suffix(count),
            None => "s",
        };

        out.write(suffix)?;
        Ok(())
    }
}
