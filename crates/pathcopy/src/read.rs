//! Read traversal. Walks by plain property access, never clones.

use pathcopy_path::Key;

use crate::value::Value;

/// Get the value at `keys`, or `None` as soon as a link is missing.
///
/// A link is missing when the value being walked into is falsy or the
/// property read from it is `undefined`. An empty key sequence reads the
/// root itself.
///
/// # Example
///
/// ```
/// use pathcopy::{read_at_path, Key, Value};
///
/// let doc = Value::object([("a", Value::array([Value::from(0), Value::from(42)]))]);
/// assert_eq!(read_at_path(&[Key::name("a"), Key::Index(1)], &doc), Some(Value::from(42)));
/// assert_eq!(read_at_path(&[Key::name("b"), Key::Index(1)], &doc), None);
/// ```
pub fn read_at_path(keys: &[Key], object: &Value) -> Option<Value> {
    let Some((last, parents)) = keys.split_last() else {
        return defined(object.clone());
    };

    let mut current = object.clone();
    for key in parents {
        if !current.is_truthy() {
            return None;
        }
        current = defined(current.property(key))?;
    }

    if !current.is_truthy() {
        return None;
    }
    defined(current.property(last))
}

/// `read_at_path` with a fallback for missing values.
pub fn read_at_path_or(keys: &[Key], object: &Value, fallback: Value) -> Value {
    read_at_path(keys, object).unwrap_or(fallback)
}

/// Whether a defined value exists at `keys`.
pub fn has_at_path(keys: &[Key], object: &Value) -> bool {
    read_at_path(keys, object).is_some()
}

fn defined(value: Value) -> Option<Value> {
    if value.is_undefined() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathcopy_path::parse_path;

    fn doc() -> Value {
        Value::object([
            ("zero", Value::from(0)),
            ("empty", Value::from("")),
            ("nothing", Value::Null),
            ("text", Value::from("abc")),
            (
                "list",
                Value::array([Value::object([("name", Value::from("first"))])]),
            ),
        ])
    }

    #[test]
    fn test_single_key() {
        assert_eq!(read_at_path(&parse_path("zero"), &doc()), Some(Value::from(0)));
        assert_eq!(read_at_path(&parse_path("nothing"), &doc()), Some(Value::Null));
        assert_eq!(read_at_path(&parse_path("missing"), &doc()), None);
        assert_eq!(read_at_path(&[Key::name("a")], &Value::Null), None);
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            read_at_path(&parse_path("list[0].name"), &doc()),
            Some(Value::from("first"))
        );
        assert_eq!(read_at_path(&parse_path("list[1].name"), &doc()), None);
        assert_eq!(read_at_path(&parse_path("list.length"), &doc()), Some(Value::from(1)));
    }

    #[test]
    fn test_falsy_links_short_circuit() {
        assert_eq!(read_at_path(&parse_path("zero.a"), &doc()), None);
        assert_eq!(read_at_path(&parse_path("empty.length"), &doc()), None);
        assert_eq!(read_at_path(&parse_path("nothing.a"), &doc()), None);
    }

    #[test]
    fn test_reads_into_strings() {
        assert_eq!(read_at_path(&parse_path("text[1]"), &doc()), Some(Value::from("b")));
        assert_eq!(read_at_path(&parse_path("text.length"), &doc()), Some(Value::from(3)));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            read_at_path_or(&parse_path("missing.deep"), &doc(), Value::from("fallback")),
            Value::from("fallback")
        );
        assert_eq!(
            read_at_path_or(&parse_path("zero"), &doc(), Value::from("fallback")),
            Value::from(0)
        );
    }

    #[test]
    fn test_has_at_path() {
        assert!(has_at_path(&parse_path("nothing"), &doc()));
        assert!(!has_at_path(&parse_path("list[3]"), &doc()));
        assert!(has_at_path(&[], &doc()));
        assert!(!has_at_path(&[], &Value::Undefined));
    }
}
