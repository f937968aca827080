use serde_json::{Map, Value};
use thiserror::Error;

use crate::bounds::BoundsError;
use crate::exception::Exception;
use crate::init::Init;
use crate::kind::ExceptionKind;

/// Errors that prevent an exception from being constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error("{owner} fields cannot construct {kind}")]
    Schema {
        kind: ExceptionKind,
        owner: ExceptionKind,
    },
    #[error("Free-form data does not fit the {kind} fields: {reason}")]
    Fields { kind: ExceptionKind, reason: String },
    #[error("Invalid bounds: {0}")]
    Bounds(#[from] BoundsError),
}

impl From<ConstructError> for Exception {
    fn from(err: ConstructError) -> Self {
        let message = err.to_string();

        let data = match err {
            ConstructError::Bounds(bounds) => return bounds.into(),
            ConstructError::Schema { kind, owner } => {
                let mut data = Map::new();
                data.insert("kind".to_string(), Value::from(kind.name()));
                data.insert("schema".to_string(), Value::from(owner.name()));
                data
            }
            ConstructError::Fields { kind, reason } => {
                let mut data = Map::new();
                data.insert("kind".to_string(), Value::from(kind.name()));
                data.insert("reason".to_string(), Value::from(reason));
                data
            }
        };

        Exception::assemble(ExceptionKind::Invalid, message, Some(Init::new(data)))
    }
}
