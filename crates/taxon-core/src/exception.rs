//! The exception value shared by every variant

use std::error::Error;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use taxon_help::{compose_help_url, HelpConfig, Helpful};

use crate::cause::Cause;
use crate::error::ConstructError;
use crate::init::{Construct, Init};
use crate::kind::ExceptionKind;
use crate::schema::{accepts, Schema};

/// A member of the exception taxonomy.
///
/// Immutable once built. The help URL is derived on demand from the
/// current state and a [`HelpConfig`].
#[derive(Debug, Clone)]
pub struct Exception {
    kind: ExceptionKind,
    message: String,
    data: Option<Map<String, Value>>,
    cause: Option<Cause>,
}

impl Exception {
    /// Construct `kind` from any of the three construction shapes.
    ///
    /// Typed fields must belong to the kind's rule owner. Free-form data is
    /// accepted by every kind but is read through the owner's fields when
    /// there is one. Either way the fields validate before anything is built.
    pub fn build<F: Schema>(
        kind: ExceptionKind,
        construct: Construct<F>,
    ) -> Result<Self, ConstructError> {
        if !accepts::<F>(kind) {
            let owner = F::OWNER.unwrap_or(ExceptionKind::Exception);
            return Err(ConstructError::Schema { kind, owner });
        }

        if let Some(fields) = construct.fields() {
            fields.validate(kind).map_err(|e| {
                tracing::debug!(kind = %kind, error = %e, "field validation rejected construction");
                e
            })?;
        }

        let exception = match construct {
            Construct::FromDefault => Self::new(kind),
            Construct::FromInit(init) => Self::from_init(kind, init),
            Construct::FromMessage(message, init) => {
                Self::assemble(kind, Self::explicit_message(kind, message), init)
            }
        };

        Ok(exception)
    }

    /// Message synthesized from the fields; no validation
    pub(crate) fn from_init<F: Schema>(kind: ExceptionKind, init: Init<F>) -> Self {
        let message = init.fields.synthesize(kind);
        Self::assemble(kind, message, Some(init))
    }

    pub(crate) fn explicit_message(kind: ExceptionKind, message: String) -> String {
        if message.is_empty() {
            kind.default_message().to_string()
        } else {
            message
        }
    }

    pub(crate) fn assemble<F: Serialize>(
        kind: ExceptionKind,
        message: String,
        init: Option<Init<F>>,
    ) -> Self {
        let (data, cause) = match init {
            Some(Init { fields, cause }) => (to_data(kind, &fields), cause),
            None => (None, None),
        };

        tracing::trace!(kind = %kind, code = kind.code(), "exception constructed");

        Self {
            kind,
            message,
            data,
            cause,
        }
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The supplied fields, without the cause; `None` when nothing was supplied
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Numeric representation; always the code
    pub fn value_of(&self) -> u32 {
        self.code()
    }

    /// Whether this exception's variant is `base` or descends from it
    pub fn is_a(&self, base: ExceptionKind) -> bool {
        self.kind.is_a(base)
    }

    /// Explainer URL for the current state
    pub fn help_url(&self, config: &HelpConfig) -> String {
        let cause = self.cause.as_ref().map(|cause| cause.summary(config));
        compose_help_url(config, self.code(), &self.message, self.data.as_ref(), cause.as_ref())
    }
}

fn to_data<F: Serialize>(kind: ExceptionKind, fields: &F) -> Option<Map<String, Value>> {
    match serde_json::to_value(fields) {
        Ok(Value::Object(map)) => {
            let map: Map<String, Value> = map
                .into_iter()
                .filter(|(key, _)| key.as_str() != "cause")
                .collect();
            (!map.is_empty()).then_some(map)
        }
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(kind = %kind, error = %e, "dropping unserializable exception data");
            None
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [0x{:x}]: {}", self.name(), self.code(), self.message)
    }
}

impl Error for Exception {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }
}

impl Helpful for Exception {
    fn help_url(&self, config: &HelpConfig) -> String {
        Exception::help_url(self, config)
    }
}

impl From<&Exception> for u32 {
    fn from(ex: &Exception) -> Self {
        ex.value_of()
    }
}
