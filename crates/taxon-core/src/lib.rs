//! TAXON-CORE: Shared Exception Taxonomy
//!
//! One [`Exception`] type covers every variant of the tree; its
//! [`ExceptionKind`] fixes the name, the explainer code and the default
//! message, and answers `is_a` questions by walking parent links.
//!
//! Variants that know what went wrong accept typed fields and turn them
//! into a sentence:
//!
//! ```
//! use taxon_core::{Exception, ExceptionKind, TimeoutFields};
//!
//! let ex = Exception::timeout(
//!     TimeoutFields::default()
//!         .operation_type("request")
//!         .operation_timeout(30),
//! );
//!
//! assert_eq!(ex.message(), "A request timed after 30 seconds.");
//! assert_eq!(ex.to_string(), "TimeoutException [0x19]: A request timed after 30 seconds.");
//! assert!(ex.is_a(ExceptionKind::Interrupt));
//! ```
//!
//! Every exception can also point at its page on the explainer service,
//! see [`Exception::help_url`] and [`taxon_help::HelpConfig`].

pub mod bounds;
pub mod cause;
pub mod error;
pub mod exception;
pub mod fields;
pub mod init;
pub mod kind;
pub mod messages;
pub mod schema;
mod variants;

pub use bounds::{validate_bounds, BoundsError};
pub use cause::Cause;
pub use error::ConstructError;
pub use exception::Exception;
pub use fields::{
    DecoratorFields, DecoratorType, ExternalFields, IndexFields, InterruptFields,
    IterationFields, NotImplementedFields, TimeoutFields,
};
pub use init::{Construct, Init};
pub use kind::ExceptionKind;
pub use schema::Schema;

pub use taxon_help::{HelpConfig, Helpful};
