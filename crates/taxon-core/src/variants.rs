//! Typed constructors, one per variant family.
//!
//! The schema-bearing constructors synthesize the message from their
//! fields. Use [`Exception::build`] for an explicit message alongside
//! typed fields.

use serde_json::{Map, Value};

use crate::bounds::{validate_bounds, BoundsError};
use crate::error::ConstructError;
use crate::exception::Exception;
use crate::fields::{
    DecoratorFields, ExternalFields, IndexFields, InterruptFields, IterationFields,
    NotImplementedFields, TimeoutFields,
};
use crate::init::{Construct, Init};
use crate::kind::ExceptionKind;

impl Exception {
    /// `kind` with its default message
    pub fn new(kind: ExceptionKind) -> Self {
        Self::assemble::<Map<String, Value>>(kind, kind.default_message().to_string(), None)
    }

    /// `kind` with an explicit message; empty falls back to the default
    pub fn from_message(kind: ExceptionKind, message: impl Into<String>) -> Self {
        let message = Self::explicit_message(kind, message.into());
        Self::assemble::<Map<String, Value>>(kind, message, None)
    }

    /// `kind` with free-form data.
    ///
    /// Kinds with a rule table read the data through their fields, so this
    /// fails where the typed constructor would, e.g. a negative `upperBound`
    /// for an `IndexException`.
    pub fn with_data(
        kind: ExceptionKind,
        init: impl Into<Init<Map<String, Value>>>,
    ) -> Result<Self, ConstructError> {
        Self::build(kind, Construct::init(init.into()))
    }

    /// Fails when `upperBound` is negative
    pub fn index(init: impl Into<Init<IndexFields>>) -> Result<Self, BoundsError> {
        let init = init.into();
        if let Some(upper) = init.fields.upper_bound {
            validate_bounds(0, upper).map_err(|e| {
                tracing::debug!(error = %e, "rejecting index exception");
                e
            })?;
        }
        Ok(Self::from_init(ExceptionKind::Index, init))
    }

    pub fn timeout(init: impl Into<Init<TimeoutFields>>) -> Self {
        Self::from_init(ExceptionKind::Timeout, init.into())
    }

    pub fn iteration(init: impl Into<Init<IterationFields>>) -> Self {
        Self::from_init(ExceptionKind::Iteration, init.into())
    }

    pub fn decorator(init: impl Into<Init<DecoratorFields>>) -> Self {
        Self::from_init(ExceptionKind::Decorator, init.into())
    }

    pub fn not_implemented(init: impl Into<Init<NotImplementedFields>>) -> Self {
        Self::from_init(ExceptionKind::NotImplemented, init.into())
    }

    pub fn external(init: impl Into<Init<ExternalFields>>) -> Self {
        Self::from_init(ExceptionKind::External, init.into())
    }

    pub fn interrupt(init: impl Into<Init<InterruptFields>>) -> Self {
        Self::from_init(ExceptionKind::Interrupt, init.into())
    }

    /// Shares the interrupt wording but keeps its own default message
    pub fn aborted(init: impl Into<Init<InterruptFields>>) -> Self {
        Self::from_init(ExceptionKind::Aborted, init.into())
    }
}
