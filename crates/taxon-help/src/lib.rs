//! TAXON-HELP: Diagnostic URLs for the Exception Explainer
//!
//! Builds the GET-style URL that points an exception at the external
//! explainer service. Nothing here performs I/O; the service is only named.
//!
//! ```text
//! <host><path>/0x<code>?message=<msg>[&data=<json>][&cause=<json>]
//! ```
//!
//! # Example
//!
//! ```
//! use taxon_help::{compose_help_url, HelpConfig};
//!
//! let config = HelpConfig::new("https://explain.example.com", "/ex");
//! let url = compose_help_url(&config, 0x19, "An operation timed out.", None, None);
//!
//! assert_eq!(
//!     url,
//!     "https://explain.example.com/ex/0x19?message=An%20operation%20timed%20out."
//! );
//! ```

pub mod config;
pub mod encode;
pub mod url;

pub use config::{ConfigError, HelpConfig, DEFAULT_CONFIG_PATH};
pub use encode::{encode_component, encode_json};
pub use url::{compose_help_url, CauseSummary, Helpful};
