//! Binding between field structs and the variants that accept them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::bounds::validate_bounds;
use crate::error::ConstructError;
use crate::fields::{
    DecoratorFields, ExternalFields, IndexFields, InterruptFields, IterationFields,
    NotImplementedFields, TimeoutFields,
};
use crate::kind::ExceptionKind;
use crate::messages::{decorator, external, index, interrupt, iteration, not_implemented, timeout};

mod sealed {
    pub trait Sealed {}
}

/// A set of contextual fields
///
/// Implemented by the typed field structs and by free-form
/// `Map<String, Value>` data, which every variant accepts. Free-form data
/// given to a variant with a rule table is read through that table's
/// fields, so it is validated and synthesized exactly like typed input.
pub trait Schema: Serialize + sealed::Sealed {
    /// The variant whose rule table reads these fields; `None` for free-form data
    const OWNER: Option<ExceptionKind>;

    /// Message for `kind` built from these fields
    fn synthesize(&self, kind: ExceptionKind) -> String {
        kind.default_message().to_string()
    }

    /// Reject field combinations that must never produce a `kind`
    fn validate(&self, _kind: ExceptionKind) -> Result<(), ConstructError> {
        Ok(())
    }
}

impl sealed::Sealed for Map<String, Value> {}

impl Schema for Map<String, Value> {
    const OWNER: Option<ExceptionKind> = None;

    fn synthesize(&self, kind: ExceptionKind) -> String {
        match interpret(kind, self) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(kind = %kind, error = %e, "free-form data does not fit rule table");
                kind.default_message().to_string()
            }
        }
    }

    fn validate(&self, kind: ExceptionKind) -> Result<(), ConstructError> {
        interpret(kind, self).map(drop)
    }
}

/// Read free-form data as the typed fields of `kind`'s rule owner, then
/// validate and synthesize. Keys the owner does not know are ignored.
fn interpret(kind: ExceptionKind, data: &Map<String, Value>) -> Result<String, ConstructError> {
    match kind.rule_owner() {
        Some(ExceptionKind::Index) => through::<IndexFields>(kind, data),
        Some(ExceptionKind::Timeout) => through::<TimeoutFields>(kind, data),
        Some(ExceptionKind::Iteration) => through::<IterationFields>(kind, data),
        Some(ExceptionKind::Decorator) => through::<DecoratorFields>(kind, data),
        Some(ExceptionKind::NotImplemented) => through::<NotImplementedFields>(kind, data),
        Some(ExceptionKind::External) => through::<ExternalFields>(kind, data),
        Some(ExceptionKind::Interrupt) => through::<InterruptFields>(kind, data),
        _ => Ok(kind.default_message().to_string()),
    }
}

fn through<F: Schema + DeserializeOwned>(
    kind: ExceptionKind,
    data: &Map<String, Value>,
) -> Result<String, ConstructError> {
    let fields: F = serde_json::from_value(Value::Object(data.clone())).map_err(|e| {
        ConstructError::Fields {
            kind,
            reason: e.to_string(),
        }
    })?;

    fields.validate(kind)?;
    Ok(fields.synthesize(kind))
}

impl sealed::Sealed for IndexFields {}

impl Schema for IndexFields {
    const OWNER: Option<ExceptionKind> = Some(ExceptionKind::Index);

    fn synthesize(&self, kind: ExceptionKind) -> String {
        index::INDEX_RULES.render(self, kind.default_message())
    }

    fn validate(&self, _kind: ExceptionKind) -> Result<(), ConstructError> {
        match self.upper_bound {
            Some(upper) => Ok(validate_bounds(0, upper)?),
            None => Ok(()),
        }
    }
}

impl sealed::Sealed for TimeoutFields {}

impl Schema for TimeoutFields {
    const OWNER: Option<ExceptionKind> = Some(ExceptionKind::Timeout);

    fn synthesize(&self, kind: ExceptionKind) -> String {
        timeout::TIMEOUT_RULES.render(self, kind.default_message())
    }
}

impl sealed::Sealed for IterationFields {}

impl Schema for IterationFields {
    const OWNER: Option<ExceptionKind> = Some(ExceptionKind::Iteration);

    fn synthesize(&self, _kind: ExceptionKind) -> String {
        iteration::compose(self)
    }
}

impl sealed::Sealed for DecoratorFields {}

impl Schema for DecoratorFields {
    const OWNER: Option<ExceptionKind> = Some(ExceptionKind::Decorator);

    fn synthesize(&self, kind: ExceptionKind) -> String {
        decorator::DECORATOR_RULES.render(self, kind.default_message())
    }
}

impl sealed::Sealed for NotImplementedFields {}

impl Schema for NotImplementedFields {
    const OWNER: Option<ExceptionKind> = Some(ExceptionKind::NotImplemented);

    fn synthesize(&self, kind: ExceptionKind) -> String {
        not_implemented::NOT_IMPLEMENTED_RULES.render(self, kind.default_message())
    }
}

impl sealed::Sealed for ExternalFields {}

impl Schema for ExternalFields {
    const OWNER: Option<ExceptionKind> = Some(ExceptionKind::External);

    fn synthesize(&self, kind: ExceptionKind) -> String {
        external::EXTERNAL_RULES.render(self, kind.default_message())
    }
}

impl sealed::Sealed for InterruptFields {}

impl Schema for InterruptFields {
    const OWNER: Option<ExceptionKind> = Some(ExceptionKind::Interrupt);

    fn synthesize(&self, kind: ExceptionKind) -> String {
        interrupt::INTERRUPT_RULES.render(self, kind.default_message())
    }
}

/// Whether fields of schema `S` may construct `kind`
pub fn accepts<S: Schema>(kind: ExceptionKind) -> bool {
    match S::OWNER {
        None => true,
        Some(owner) => kind.rule_owner() == Some(owner),
    }
}
