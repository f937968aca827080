//! Construction inputs

use crate::cause::Cause;

/// Contextual fields plus an optional upstream cause.
///
/// The cause never shows up in the exception's `data`.
#[derive(Debug, Clone, Default)]
pub struct Init<F> {
    pub fields: F,
    pub cause: Option<Cause>,
}

impl<F> Init<F> {
    pub fn new(fields: F) -> Self {
        Self { fields, cause: None }
    }

    /// Attach the error that led to this one
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

impl<F> From<F> for Init<F> {
    fn from(fields: F) -> Self {
        Self::new(fields)
    }
}

/// The three ways to construct an exception
#[derive(Debug, Clone)]
pub enum Construct<F> {
    /// Default message, no data, no cause
    FromDefault,
    /// Message synthesized from the fields
    FromInit(Init<F>),
    /// Explicit message; an empty one falls back to the default
    FromMessage(String, Option<Init<F>>),
}

impl<F> Construct<F> {
    pub fn init(init: Init<F>) -> Self {
        Self::FromInit(init)
    }

    /// Fields without a cause
    pub fn from_fields(fields: F) -> Self {
        Self::FromInit(Init::new(fields))
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::FromMessage(message.into(), None)
    }

    pub fn message_with(message: impl Into<String>, init: Init<F>) -> Self {
        Self::FromMessage(message.into(), Some(init))
    }

    /// The init carried by this shape, if any
    pub fn fields(&self) -> Option<&F> {
        match self {
            Self::FromDefault => None,
            Self::FromInit(init) | Self::FromMessage(_, Some(init)) => Some(&init.fields),
            Self::FromMessage(_, None) => None,
        }
    }
}

impl<F> Default for Construct<F> {
    fn default() -> Self {
        Self::FromDefault
    }
}
