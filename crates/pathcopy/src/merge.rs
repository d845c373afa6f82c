//! Merge engine.

use crate::clone::{clone_if_possible, is_cloneable};
use crate::value::{Array, Builtin, Object, Props, Proto, Value};

/// Combine `left` and `right` into a new value.
///
/// - Exactly one side is an array, or `left` is not cloneable: a clone of
///   `right`.
/// - Both arrays: `left` followed by `right`. `deep` has no effect.
/// - `left` an object: a copy of `left` with every own property of `right`
///   laid over it. With `deep`, cloneable properties of `right` are merged
///   recursively into the matching property of `left`.
///
/// # Example
///
/// ```
/// use pathcopy::{merge_values, Value};
///
/// let left = Value::object([("a", Value::object([("x", Value::from(1))]))]);
/// let right = Value::object([("a", Value::object([("y", Value::from(2))]))]);
///
/// assert_eq!(
///     merge_values(&left, &right, true),
///     Value::object([("a", Value::object([("x", Value::from(1)), ("y", Value::from(2))]))]),
/// );
/// assert_eq!(
///     merge_values(&left, &right, false),
///     right,
/// );
/// ```
pub fn merge_values(left: &Value, right: &Value, deep: bool) -> Value {
    if left.is_array() != right.is_array() || !is_cloneable(left) {
        if is_cloneable(left) {
            log::trace!(
                "discarding {} merge target in favour of {}",
                left.type_name(),
                right.type_name()
            );
        }
        return clone_if_possible(right);
    }

    match (left, right) {
        (Value::Array(l), Value::Array(r)) => concat(l, r),
        (Value::Object(l), _) => merge_into_object(l, own_props(right), deep),
        _ => clone_if_possible(right),
    }
}

fn concat(left: &Array, right: &Array) -> Value {
    let mut merged = left.empty_like();
    merged.extend(left.items().iter().cloned());
    merged.extend(right.items().iter().cloned());
    Value::from(merged)
}

fn merge_into_object(left: &Object, right: Option<&Props>, deep: bool) -> Value {
    let proto = match left.proto() {
        Proto::Class(class) => Proto::Class(class.clone()),
        Proto::Plain | Proto::Global(_) => Proto::Plain,
    };
    let mut target = Object::new(proto, left.props().clone());

    for (key, value) in right.into_iter().flatten() {
        let merged = if deep && is_cloneable(value) {
            merge_values(&left.get_prop(key), value, deep)
        } else {
            value.clone()
        };
        target.set_prop(key.clone(), merged);
    }

    Value::from(target)
}

/// Own enumerable properties of a non-array value, if it has any.
fn own_props(value: &Value) -> Option<&Props> {
    match value {
        Value::Object(object) => Some(object.props()),
        Value::Builtin(builtin) => match &**builtin {
            Builtin::Element(element) => Some(&element.props),
            _ => None,
        },
        _ => None,
    }
}
