/// Largest array index, `2^32 - 2`. Larger integers address named
/// properties.
pub const MAX_INDEX: usize = 4_294_967_294;

/// Check if a string represents a canonical non-negative integer index.
///
/// # Example
///
/// ```
/// use pathcopy_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("01"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a canonical index no larger than [`MAX_INDEX`].
///
/// # Example
///
/// ```
/// use pathcopy_path::parse_index;
///
/// assert_eq!(parse_index("42"), Some(42));
/// assert_eq!(parse_index("4294967294"), Some(4_294_967_294));
/// assert_eq!(parse_index("4294967295"), None);
/// assert_eq!(parse_index("007"), None);
/// ```
pub fn parse_index(text: &str) -> Option<usize> {
    if !is_valid_index(text) {
        return None;
    }
    text.parse().ok().filter(|&index| index <= MAX_INDEX)
}

/// Check if a name can be written with dot notation.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Quote a name for bracket notation, escaping quotes and backslashes.
pub fn quote_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for c in name.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
