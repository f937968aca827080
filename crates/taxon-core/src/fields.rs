//! Contextual fields accepted by each schema-bearing variant.
//!
//! Every field is optional. Serialized keys are camelCase and unset fields
//! are skipped, so the serialized form doubles as the exception's `data`.
//!
//! Presence for message synthesis is stricter than `Option::is_some`:
//! strings must be non-empty, timeouts and iteration counts non-zero and
//! `repeatingValue` true. Index positions and bounds count whenever set,
//! zero included.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use taxon_grammar::Present;

fn text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

fn nonzero(value: Option<u64>) -> bool {
    value.is_some_and(|n| n != 0)
}

/// Fields for an `IndexException`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexFields {
    /// The offending index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,

    /// Name of the indexed collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_name: Option<String>,

    /// Highest valid index; must not be negative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<i64>,
}

impl IndexFields {
    pub fn index(mut self, index: i64) -> Self {
        self.index = Some(index);
        self
    }

    pub fn value_name(mut self, name: impl Into<String>) -> Self {
        self.value_name = Some(name.into());
        self
    }

    pub fn upper_bound(mut self, upper_bound: i64) -> Self {
        self.upper_bound = Some(upper_bound);
        self
    }
}

impl Present for IndexFields {
    fn present(&self, field: &str) -> bool {
        match field {
            "index" => self.index.is_some(),
            "valueName" => text(&self.value_name),
            "upperBound" => self.upper_bound.is_some(),
            _ => false,
        }
    }
}

/// Fields for a `TimeoutException`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutFields {
    /// Kind of operation, e.g. "request"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    /// Timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_timeout: Option<u64>,
}

impl TimeoutFields {
    pub fn operation_type(mut self, operation_type: impl Into<String>) -> Self {
        self.operation_type = Some(operation_type.into());
        self
    }

    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn operation_timeout(mut self, seconds: u64) -> Self {
        self.operation_timeout = Some(seconds);
        self
    }
}

impl Present for TimeoutFields {
    fn present(&self, field: &str) -> bool {
        match field {
            "operationType" => text(&self.operation_type),
            "operationName" => text(&self.operation_name),
            "operationTimeout" => nonzero(self.operation_timeout),
            _ => false,
        }
    }
}

/// Fields for an `IterationException`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    /// The limit that was exceeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_count: Option<u64>,

    /// Set when the loop stopped on consecutive identical values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeating_value: Option<bool>,
}

impl IterationFields {
    pub fn operation_type(mut self, operation_type: impl Into<String>) -> Self {
        self.operation_type = Some(operation_type.into());
        self
    }

    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn iteration_count(mut self, count: u64) -> Self {
        self.iteration_count = Some(count);
        self
    }

    pub fn repeating_value(mut self, repeating: bool) -> Self {
        self.repeating_value = Some(repeating);
        self
    }
}

impl Present for IterationFields {
    fn present(&self, field: &str) -> bool {
        match field {
            "operationType" => text(&self.operation_type),
            "operationName" => text(&self.operation_name),
            "iterationCount" => nonzero(self.iteration_count),
            "repeatingValue" => self.repeating_value == Some(true),
            _ => false,
        }
    }
}

/// What a failing decorator was attached to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DecoratorType {
    Class,
    Method,
    Accessor,
    Property,
    Parameter,
}

/// Fields for a `DecoratorException`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratorFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorator_type: Option<DecoratorType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorator_name: Option<String>,
}

impl DecoratorFields {
    pub fn decorator_type(mut self, decorator_type: DecoratorType) -> Self {
        self.decorator_type = Some(decorator_type);
        self
    }

    pub fn decorator_name(mut self, name: impl Into<String>) -> Self {
        self.decorator_name = Some(name.into());
        self
    }
}

impl Present for DecoratorFields {
    fn present(&self, field: &str) -> bool {
        match field {
            "decoratorType" => self.decorator_type.is_some(),
            "decoratorName" => text(&self.decorator_name),
            _ => false,
        }
    }
}

/// Fields for a `NotImplementedException`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotImplementedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
}

impl NotImplementedFields {
    pub fn method_name(mut self, name: impl Into<String>) -> Self {
        self.method_name = Some(name.into());
        self
    }
}

impl Present for NotImplementedFields {
    fn present(&self, field: &str) -> bool {
        field == "methodName" && text(&self.method_name)
    }
}

/// Fields for an `ExternalException`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalFields {
    /// Kind of dependency, e.g. "service" or "database"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_name: Option<String>,
}

impl ExternalFields {
    pub fn dependency_type(mut self, dependency_type: impl Into<String>) -> Self {
        self.dependency_type = Some(dependency_type.into());
        self
    }

    pub fn dependency_name(mut self, name: impl Into<String>) -> Self {
        self.dependency_name = Some(name.into());
        self
    }
}

impl Present for ExternalFields {
    fn present(&self, field: &str) -> bool {
        match field {
            "dependencyType" => text(&self.dependency_type),
            "dependencyName" => text(&self.dependency_name),
            _ => false,
        }
    }
}

/// Fields for an `InterruptException` or `AbortedException`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterruptFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl InterruptFields {
    pub fn operation_type(mut self, operation_type: impl Into<String>) -> Self {
        self.operation_type = Some(operation_type.into());
        self
    }

    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }
}

impl Present for InterruptFields {
    fn present(&self, field: &str) -> bool {
        match field {
            "operationType" => text(&self.operation_type),
            "operationName" => text(&self.operation_name),
            _ => false,
        }
    }
}
