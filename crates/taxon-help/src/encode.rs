//! Query-component encoding.
//!
//! Matches ECMAScript `encodeURIComponent`: ASCII alphanumerics and
//! `- _ . ! ~ * ' ( )` pass through, every other UTF-8 byte becomes `%XX`
//! with uppercase hex.

use serde::Serialize;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encode a string for use as a single query value.
pub fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for &b in text.as_bytes() {
        if is_unreserved(b) {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(b >> 4)]));
            out.push(char::from(HEX[usize::from(b & 0x0f)]));
        }
    }

    out
}

/// Serialize `value` as compact JSON and percent-encode the result.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(encode_component(&json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unreserved_pass_through() {
        assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_spaces_and_quotes() {
        assert_eq!(
            encode_component("The operation \"example\" timed out."),
            "The%20operation%20%22example%22%20timed%20out."
        );
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(encode_component("a/b?c=d&e#f"), "a%2Fb%3Fc%3Dd%26e%23f");
        assert_eq!(encode_component("{\"k\":1}"), "%7B%22k%22%3A1%7D");
    }

    #[test]
    fn test_multibyte_utf8() {
        assert_eq!(encode_component("é"), "%C3%A9");
        assert_eq!(encode_component("→"), "%E2%86%92");
    }

    #[test]
    fn test_encode_json_keeps_key_order() {
        let value = json!({ "operationType": "request", "iterationCount": 5 });
        assert_eq!(
            encode_json(&value).unwrap(),
            "%7B%22operationType%22%3A%22request%22%2C%22iterationCount%22%3A5%7D"
        );
    }
}
