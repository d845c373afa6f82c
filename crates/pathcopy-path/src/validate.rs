//! Strict validation of path strings.

use crate::parser::{ParseError, ParseMode};
use crate::types::{Key, Path};

/// Maximum allowed path depth.
pub const MAX_PATH_DEPTH: usize = 256;

/// Validate a path string and return its keys.
///
/// Normalizes exactly like [`Path::parse`] in strict mode: a string with no
/// path syntax is one key, so `""` is the key `""` rather than the root.
///
/// # Errors
///
/// Returns an error if:
/// - The string is malformed (see [`ParseMode::Strict`])
/// - The path has more than [`MAX_PATH_DEPTH`] keys
///
/// # Example
///
/// ```
/// use pathcopy_path::validate_path_string;
///
/// validate_path_string("a[0].b").unwrap();
/// validate_path_string("a[0").unwrap_err();
/// ```
pub fn validate_path_string(text: &str) -> Result<Vec<Key>, ParseError> {
    Path::parse(text, ParseMode::Strict).map(Path::into_keys)
}

/// Validate the depth of an already normalized key sequence.
pub fn validate_keys(keys: &[Key]) -> Result<(), ParseError> {
    if keys.len() > MAX_PATH_DEPTH {
        return Err(ParseError::PathTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_well_formed() {
        assert_eq!(
            validate_path_string("a.b").unwrap(),
            vec![Key::name("a"), Key::name("b")]
        );
        assert_eq!(validate_path_string("").unwrap(), vec![Key::name("")]);
        assert_eq!(validate_path_string("7").unwrap(), vec![Key::Index(7)]);
    }

    #[test]
    fn test_validate_agrees_with_strict_parse() {
        for text in ["", "a", "a]", "a.b", "a..b", "[0]x", "x y", "4294967295"] {
            assert_eq!(
                validate_path_string(text),
                Path::parse(text, ParseMode::Strict).map(Path::into_keys),
                "{text:?}"
            );
        }
        assert_eq!(validate_path_string("a]"), Err(ParseError::UnexpectedChar(']')));
    }

    #[test]
    fn test_validate_malformed() {
        assert!(validate_path_string("a..b").is_err());
        assert!(validate_path_string("a['b").is_err());
    }

    #[test]
    fn test_validate_long_path() {
        let text = vec!["a"; 300].join(".");
        assert_eq!(validate_path_string(&text), Err(ParseError::PathTooLong));
    }

    #[test]
    fn test_validate_max_depth_path() {
        let keys: Vec<Key> = (0..MAX_PATH_DEPTH).map(Key::Index).collect();
        assert!(validate_keys(&keys).is_ok());
    }
}
