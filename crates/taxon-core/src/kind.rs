//! Exception variant identifiers.
//!
//! The taxonomy is a tree rooted at `Exception`. Instead of a subtype
//! relation, every kind names its parent; `is_a` walks that chain.
//!
//! # Codes
//!
//! Codes are sparse lookup keys for the explainer service, not a dense
//! enum. Gaps are intentional and only meaningful to that service.
//!
//! | Kind | Code | Parent |
//! |------|------|--------|
//! | `Exception` | `0x0` | - |
//! | `AssertionException` | `0x1` | `Exception` |
//! | `ExternalException` | `0x2` | `Exception` |
//! | `ValueException` | `0x3` | `Exception` |
//! | `InvalidException` | `0x4` | `ValueException` |
//! | `OSException` | `0x5` | `Exception` |
//! | `MemoryException` | `0x6` | `OSException` |
//! | `InterruptException` | `0x7` | `OSException` |
//! | `AbortedException` | `0x8` | `InterruptException` |
//! | `NotImplementedException` | `0xb` | `InvalidException` |
//! | `FormatException` | `0xd` | `InvalidException` |
//! | `DecoratorException` | `0xf` | `ValueException` |
//! | `RangeException` | `0x11` | `Exception` |
//! | `IndexException` | `0x12` | `RangeException` |
//! | `IterationException` | `0x18` | `Exception` |
//! | `TimeoutException` | `0x19` | `AbortedException` |

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A concrete variant of the exception tree
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum ExceptionKind {
    /// Root of the tree; also instantiable on its own.
    #[strum(serialize = "Exception")]
    #[serde(rename = "Exception")]
    Exception,

    /// An assertion did not hold.
    #[strum(serialize = "AssertionException")]
    #[serde(rename = "AssertionException")]
    Assertion,

    /// A dependency outside the caller's control failed.
    #[strum(serialize = "ExternalException")]
    #[serde(rename = "ExternalException")]
    External,

    /// A value was unexpected.
    #[strum(serialize = "ValueException")]
    #[serde(rename = "ValueException")]
    Value,

    /// A value or state is invalid.
    #[strum(serialize = "InvalidException")]
    #[serde(rename = "InvalidException")]
    Invalid,

    /// The operating system reported a failure.
    #[strum(serialize = "OSException")]
    #[serde(rename = "OSException")]
    OS,

    /// Memory could not be allocated or accessed.
    #[strum(serialize = "MemoryException")]
    #[serde(rename = "MemoryException")]
    Memory,

    /// An operation was interrupted.
    #[strum(serialize = "InterruptException")]
    #[serde(rename = "InterruptException")]
    Interrupt,

    /// An operation was aborted.
    #[strum(serialize = "AbortedException")]
    #[serde(rename = "AbortedException")]
    Aborted,

    /// A method has no implementation.
    #[strum(serialize = "NotImplementedException")]
    #[serde(rename = "NotImplementedException")]
    NotImplemented,

    /// A value is not in the expected format.
    #[strum(serialize = "FormatException")]
    #[serde(rename = "FormatException")]
    Format,

    /// A decorator failed to apply.
    #[strum(serialize = "DecoratorException")]
    #[serde(rename = "DecoratorException")]
    Decorator,

    /// A value is outside of its allowed range.
    #[strum(serialize = "RangeException")]
    #[serde(rename = "RangeException")]
    Range,

    /// An index is outside the bounds of an array.
    #[strum(serialize = "IndexException")]
    #[serde(rename = "IndexException")]
    Index,

    /// An operation exceeded its iteration limit.
    #[strum(serialize = "IterationException")]
    #[serde(rename = "IterationException")]
    Iteration,

    /// An operation exceeded its timeout.
    #[strum(serialize = "TimeoutException")]
    #[serde(rename = "TimeoutException")]
    Timeout,
}

impl ExceptionKind {
    /// The variant identifier, e.g. `"IndexException"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The explainer code for this variant.
    pub const fn code(self) -> u32 {
        match self {
            Self::Exception => 0x0,
            Self::Assertion => 0x1,
            Self::External => 0x2,
            Self::Value => 0x3,
            Self::Invalid => 0x4,
            Self::OS => 0x5,
            Self::Memory => 0x6,
            Self::Interrupt => 0x7,
            Self::Aborted => 0x8,
            Self::NotImplemented => 0xB,
            Self::Format => 0xD,
            Self::Decorator => 0xF,
            Self::Range => 0x11,
            Self::Index => 0x12,
            Self::Iteration => 0x18,
            Self::Timeout => 0x19,
        }
    }

    /// Look a variant up by its code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::iter().find(|kind| kind.code() == code)
    }

    /// The is-a parent; `None` only for the root.
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Exception => None,

            Self::Assertion
            | Self::External
            | Self::Value
            | Self::OS
            | Self::Range
            | Self::Iteration => Some(Self::Exception),

            // Value hierarchy
            Self::Invalid | Self::Decorator => Some(Self::Value),
            Self::NotImplemented | Self::Format => Some(Self::Invalid),

            // Range hierarchy
            Self::Index => Some(Self::Range),

            // OS hierarchy
            Self::Memory | Self::Interrupt => Some(Self::OS),
            Self::Aborted => Some(Self::Interrupt),
            Self::Timeout => Some(Self::Aborted),
        }
    }

    /// Whether this variant is `base` or one of its descendants.
    pub fn is_a(self, base: Self) -> bool {
        self == base || self.ancestors().any(|ancestor| ancestor == base)
    }

    /// Parents from the closest up to the root.
    pub fn ancestors(self) -> Ancestors {
        Ancestors { next: self.parent() }
    }

    /// Distance from the root; `Exception` has depth 0.
    pub fn depth(self) -> usize {
        self.ancestors().count()
    }

    /// Message used when no explicit message is given and no rule applies.
    ///
    /// The root has none: an `Exception` built without a message has an
    /// empty one.
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Exception => "",
            Self::Assertion => "An assertion failed.",
            Self::External => "An external dependency failed.",
            Self::Value => "An unexpected value was encountered.",
            Self::Invalid => "A value is invalid.",
            Self::OS => "An operating system error occurred.",
            Self::Memory => "A memory operation failed.",
            Self::Interrupt => "An operation was interrupted.",
            Self::Aborted => "An operation was aborted.",
            Self::NotImplemented => "This method has not been implemented.",
            Self::Format => "A value is not in the expected format.",
            Self::Decorator => "A decorator failed to apply.",
            Self::Range => "A value is outside of the expected range.",
            Self::Index => "An index is outside the bounds of an array.",
            Self::Iteration => "An operation exceeded the maximum iteration count.",
            Self::Timeout => "An operation timed out.",
        }
    }

    /// Whether this variant declares its own rule table.
    pub const fn has_rules(self) -> bool {
        matches!(
            self,
            Self::External
                | Self::Interrupt
                | Self::NotImplemented
                | Self::Decorator
                | Self::Index
                | Self::Iteration
                | Self::Timeout
        )
    }

    /// The closest variant (itself included) whose rule table renders
    /// messages for this one; `None` when no ancestor synthesizes messages.
    pub fn rule_owner(self) -> Option<Self> {
        std::iter::once(self)
            .chain(self.ancestors())
            .find(|kind| kind.has_rules())
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over a variant's ancestors
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<ExceptionKind>,
}

impl Iterator for Ancestors {
    type Item = ExceptionKind;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_root_has_no_parent() {
        assert_eq!(ExceptionKind::Exception.parent(), None);
        assert_eq!(ExceptionKind::Exception.depth(), 0);
    }

    #[test]
    fn test_every_chain_ends_at_root() {
        for kind in ExceptionKind::iter() {
            let last = kind.ancestors().last().unwrap_or(kind);
            assert_eq!(last, ExceptionKind::Exception, "chain for {}", kind);
            assert!(kind.depth() < 6, "suspiciously deep chain for {}", kind);
        }
    }

    #[test]
    fn test_timeout_chain() {
        let chain: Vec<_> = ExceptionKind::Timeout.ancestors().collect();
        assert_eq!(
            chain,
            vec![
                ExceptionKind::Aborted,
                ExceptionKind::Interrupt,
                ExceptionKind::OS,
                ExceptionKind::Exception,
            ]
        );
        assert_eq!(ExceptionKind::Timeout.depth(), 4);
    }

    #[test]
    fn test_is_a() {
        assert!(ExceptionKind::Timeout.is_a(ExceptionKind::Timeout));
        assert!(ExceptionKind::Timeout.is_a(ExceptionKind::Interrupt));
        assert!(ExceptionKind::Format.is_a(ExceptionKind::Value));
        assert!(ExceptionKind::Index.is_a(ExceptionKind::Range));
        assert!(ExceptionKind::Memory.is_a(ExceptionKind::Exception));

        assert!(!ExceptionKind::Interrupt.is_a(ExceptionKind::Timeout));
        assert!(!ExceptionKind::Index.is_a(ExceptionKind::Value));
        assert!(!ExceptionKind::Decorator.is_a(ExceptionKind::Invalid));
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<u32> = ExceptionKind::iter().map(ExceptionKind::code).collect();
        assert_eq!(codes.len(), ExceptionKind::iter().count());
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(ExceptionKind::Exception.code(), 0x0);
        assert_eq!(ExceptionKind::NotImplemented.code(), 0xB);
        assert_eq!(ExceptionKind::Format.code(), 0xD);
        assert_eq!(ExceptionKind::Decorator.code(), 0xF);
        assert_eq!(ExceptionKind::Index.code(), 0x12);
        assert_eq!(ExceptionKind::Iteration.code(), 0x18);
        assert_eq!(ExceptionKind::Timeout.code(), 0x19);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ExceptionKind::from_code(0x19), Some(ExceptionKind::Timeout));
        assert_eq!(ExceptionKind::from_code(0x9), None);
    }

    #[test]
    fn test_names_round_trip() {
        for kind in ExceptionKind::iter() {
            assert!(kind.name().ends_with("Exception"));
            assert_eq!(ExceptionKind::from_str(kind.name()).unwrap(), kind);
        }
        assert_eq!(ExceptionKind::OS.to_string(), "OSException");
    }

    #[test]
    fn test_rule_owner() {
        assert_eq!(ExceptionKind::Index.rule_owner(), Some(ExceptionKind::Index));
        assert_eq!(ExceptionKind::Aborted.rule_owner(), Some(ExceptionKind::Interrupt));
        assert_eq!(ExceptionKind::Timeout.rule_owner(), Some(ExceptionKind::Timeout));
        assert_eq!(ExceptionKind::Format.rule_owner(), None);
        assert_eq!(ExceptionKind::Memory.rule_owner(), None);
    }

    #[test]
    fn test_only_root_has_empty_default() {
        for kind in ExceptionKind::iter() {
            assert_eq!(kind.default_message().is_empty(), kind == ExceptionKind::Exception);
        }
    }
}
