use crate::compat::String;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Encode sets only cover bytes that would change how the output re-parses.
// Existing `%XX` sequences pass through untouched.

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET.add(b' ');

/// Query percent-encode set
/// Fragment + #
pub const QUERY_SET: &AsciiSet = &FRAGMENT_SET.add(b'#');

/// Path percent-encode set
/// Query + ?
pub const PATH_SET: &AsciiSet = &QUERY_SET.add(b'?');

/// Userinfo percent-encode set
/// Path + /, :, @
pub const USERINFO_SET: &AsciiSet = &PATH_SET.add(b'/').add(b':').add(b'@');

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode path directly into buffer
pub fn percent_encode_path_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, PATH_SET);
}

/// Percent-encode query directly into buffer
pub fn percent_encode_query_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, QUERY_SET);
}

/// Percent-encode fragment directly into buffer
pub fn percent_encode_fragment_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, FRAGMENT_SET);
}

/// Percent-encode userinfo directly into buffer
pub fn percent_encode_userinfo_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, USERINFO_SET);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(input: &str, set: &'static AsciiSet) -> String {
        let mut buffer = String::new();
        percent_encode_into(&mut buffer, input, set);
        buffer
    }

    #[test]
    fn test_path_set() {
        assert_eq!(encode("/a b?c#d", PATH_SET), "/a%20b%3Fc%23d");
        assert_eq!(encode("/already%20encoded", PATH_SET), "/already%20encoded");
        assert_eq!(encode("/wp-json/v2/", PATH_SET), "/wp-json/v2/");
    }

    #[test]
    fn test_query_set_keeps_delimiters() {
        assert_eq!(encode("a=1&b=?x", QUERY_SET), "a=1&b=?x");
        assert_eq!(encode("a=#1", QUERY_SET), "a=%231");
    }

    #[test]
    fn test_userinfo_set() {
        assert_eq!(encode("us:er@x", USERINFO_SET), "us%3Aer%40x");
    }
}
