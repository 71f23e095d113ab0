use crate::character_sets::is_c0_control_or_space;

/// Trim leading/trailing C0 controls and spaces
pub fn trim_control_and_space(input: &str) -> &str {
    input.trim_matches(is_c0_control_or_space)
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from URL string that no longer has a fragment
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split at the first `/`, keeping the slash with the second half
pub fn split_at_slash(input: &str) -> (&str, &str) {
    memchr::memchr(b'/', input.as_bytes()).map_or((input, ""), |pos| input.split_at(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_control_and_space() {
        assert_eq!(trim_control_and_space("\t\nhello\r\n"), "hello");
        assert_eq!(trim_control_and_space("  foo.com  "), "foo.com");
        assert_eq!(trim_control_and_space("hel lo"), "hel lo");
        assert_eq!(trim_control_and_space(" \t "), "");
    }

    #[test]
    fn test_prune() {
        assert_eq!(prune_fragment("/a?b#c#d"), ("/a?b", Some("c#d")));
        assert_eq!(prune_fragment("/a"), ("/a", None));
        assert_eq!(prune_query("/a?b?c"), ("/a", Some("b?c")));
        assert_eq!(prune_query("/a?"), ("/a", Some("")));
    }

    #[test]
    fn test_split_at_slash() {
        assert_eq!(split_at_slash("host:80/p/q"), ("host:80", "/p/q"));
        assert_eq!(split_at_slash("host"), ("host", ""));
    }
}
