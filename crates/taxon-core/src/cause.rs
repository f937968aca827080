//! Upstream errors wrapped by an exception

use std::error::Error;
use std::sync::Arc;

use taxon_help::{CauseSummary, HelpConfig};

use crate::exception::Exception;

/// The error an exception was raised in response to
#[derive(Debug, Clone)]
pub enum Cause {
    /// Another member of the taxonomy
    Exception(Arc<Exception>),
    /// Any other error, with the name it reports as
    Native {
        name: String,
        error: Arc<dyn Error + Send + Sync>,
    },
}

impl Cause {
    /// Wrap a foreign error, named after its type
    pub fn native<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Native {
            name: short_type_name::<E>().to_string(),
            error: Arc::new(error),
        }
    }

    /// Wrap a foreign error under an explicit name
    pub fn named<E>(name: impl Into<String>, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Native {
            name: name.into(),
            error: Arc::new(error),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Exception(ex) => ex.name(),
            Self::Native { name, .. } => name,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Exception(ex) => ex.message().to_string(),
            Self::Native { error, .. } => error.to_string(),
        }
    }

    /// The wrapped exception, if the cause belongs to the taxonomy
    pub fn as_exception(&self) -> Option<&Exception> {
        match self {
            Self::Exception(ex) => Some(&**ex),
            Self::Native { .. } => None,
        }
    }

    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Exception(ex) => &**ex,
            Self::Native { error, .. } => &**error,
        }
    }

    /// The `cause` payload of a help URL; only taxonomy members link their
    /// own explainer page.
    pub fn summary(&self, config: &HelpConfig) -> CauseSummary {
        let summary = CauseSummary::new(self.name(), self.message());
        match self {
            Self::Exception(ex) => summary.with_help_url(ex.help_url(config)),
            Self::Native { .. } => summary,
        }
    }
}

impl From<Exception> for Cause {
    fn from(ex: Exception) -> Self {
        Self::Exception(Arc::new(ex))
    }
}

impl From<Arc<Exception>> for Cause {
    fn from(ex: Arc<Exception>) -> Self {
        Self::Exception(ex)
    }
}

// `std::io::error::Error` -> `Error`, `Wrapper<inner::Thing>` -> `Wrapper`
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ExceptionKind;

    #[test]
    fn test_native_name_from_type() {
        let cause = Cause::native(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(cause.name(), "Error");
        assert_eq!(cause.message(), "disk full");
        assert!(cause.as_exception().is_none());
    }

    #[test]
    fn test_parse_error_name() {
        let err = "x".parse::<i32>().unwrap_err();
        assert_eq!(Cause::native(err).name(), "ParseIntError");
    }

    #[test]
    fn test_named() {
        let err = std::fmt::Error;
        assert_eq!(Cause::named("TypeError", err).name(), "TypeError");
    }

    #[test]
    fn test_exception_cause() {
        let cause = Cause::from(Exception::new(ExceptionKind::Memory));
        assert_eq!(cause.name(), "MemoryException");
        assert_eq!(cause.message(), "A memory operation failed.");
        assert!(cause.as_exception().is_some());
    }

    #[test]
    fn test_summary_links_only_exceptions() {
        let config = HelpConfig::new("https://h", "/e");

        let native = Cause::named("Error", std::fmt::Error).summary(&config);
        assert_eq!(native.help_url, None);

        let inner = Cause::from(Exception::new(ExceptionKind::Aborted)).summary(&config);
        assert_eq!(
            inner.help_url.as_deref(),
            Some("https://h/e/0x8?message=An%20operation%20was%20aborted.")
        );
    }
}
