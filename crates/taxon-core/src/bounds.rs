//! Bounds validation

use serde_json::{Map, Value};
use thiserror::Error;

use crate::exception::Exception;
use crate::init::Init;
use crate::kind::ExceptionKind;

/// An upper bound below its lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The upper bound {upper} is less than the lower bound {lower}.")]
pub struct BoundsError {
    pub lower: i64,
    pub upper: i64,
}

/// Check that `upper` is not below `lower`
pub fn validate_bounds(lower: i64, upper: i64) -> Result<(), BoundsError> {
    if upper < lower {
        return Err(BoundsError { lower, upper });
    }
    Ok(())
}

impl From<BoundsError> for Exception {
    /// A `RangeException` carrying both bounds as data
    fn from(err: BoundsError) -> Self {
        let mut data = Map::new();
        data.insert("lowerBound".to_string(), Value::from(err.lower));
        data.insert("upperBound".to_string(), Value::from(err.upper));

        Exception::assemble(ExceptionKind::Range, err.to_string(), Some(Init::new(data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_bounds_pass() {
        assert!(validate_bounds(0, 0).is_ok());
        assert!(validate_bounds(-5, 10).is_ok());
    }

    #[test]
    fn test_inverted_bounds_fail() {
        let err = validate_bounds(0, -1).unwrap_err();
        assert_eq!(err, BoundsError { lower: 0, upper: -1 });
        assert_eq!(err.to_string(), "The upper bound -1 is less than the lower bound 0.");
    }

    #[test]
    fn test_into_range_exception() {
        let ex = Exception::from(BoundsError { lower: 0, upper: -3 });
        assert_eq!(ex.kind(), ExceptionKind::Range);
        assert_eq!(ex.code(), 0x11);
        assert_eq!(ex.message(), "The upper bound -3 is less than the lower bound 0.");
        assert_eq!(
            Value::Object(ex.data().cloned().unwrap()),
            json!({ "lowerBound": 0, "upperBound": -3 })
        );
    }
}
