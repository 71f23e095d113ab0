/// Check if a byte is a C0 control or DEL
pub fn is_c0_control_or_del(b: u8) -> bool {
    b < 0x20 || b == 0x7F
}

/// Check if a byte is a C0 control or space (trimmed from input edges)
pub fn is_c0_control_or_space(c: char) -> bool {
    c <= ' '
}

/// Scheme character classification
/// Returns: 0=invalid, 1=valid anywhere, 2=valid after the first character
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 2;
        i += 1;
    }
    table[b'+' as usize] = 2;
    table[b'-' as usize] = 2;
    table[b'.' as usize] = 2;

    table
};

/// Check if the whole string is a syntactically valid scheme
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    match bytes.next() {
        Some(first) if SCHEME_CHAR_TABLE[first as usize] == 1 => {}
        _ => return false,
    }
    bytes.all(|b| SCHEME_CHAR_TABLE[b as usize] != 0)
}

/// Bytes that can never appear in a host
const FORBIDDEN_HOST_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    table[b' ' as usize] = true;
    table[b'"' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'\\' as usize] = true;
    table[b'^' as usize] = true;
    table[b'`' as usize] = true;
    table[b'{' as usize] = true;
    table[b'|' as usize] = true;
    table[b'}' as usize] = true;

    table
};

/// Check if a host contains a forbidden byte
pub fn has_forbidden_host_byte(host: &str) -> bool {
    host.bytes().any(|b| FORBIDDEN_HOST_TABLE[b as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_scheme() {
        assert!(is_valid_scheme("http"));
        assert!(is_valid_scheme("svn+ssh"));
        assert!(is_valid_scheme("x-custom.v1"));
        assert!(!is_valid_scheme(""));
        assert!(!is_valid_scheme("1http"));
        assert!(!is_valid_scheme("+http"));
        assert!(!is_valid_scheme("ht tp"));
    }

    #[test]
    fn test_forbidden_host_bytes() {
        assert!(!has_forbidden_host_byte("example.com"));
        assert!(!has_forbidden_host_byte("[::1]"));
        assert!(has_forbidden_host_byte("exa mple.com"));
        assert!(has_forbidden_host_byte("a|b"));
    }
}
