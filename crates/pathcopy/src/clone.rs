//! Shallow cloning primitives.
//!
//! Every clone copies exactly one level: child values are shared with the
//! source, never copied.

use pathcopy_path::Key;

use crate::container::Container;
use crate::value::{Array, Object, Proto, Value};

/// How a cloneable value is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    PlainObject,
    /// Instance of a builtin constructor. Clones to an empty plain object.
    GlobalInstance,
    /// Instance of a user-defined class. Clones keep the class.
    CustomInstance,
}

/// Classify a value for cloning. `None` for anything that is not cloneable:
/// scalars, functions, dates, regexes and element markers.
pub fn classify(value: &Value) -> Option<ContainerKind> {
    match value {
        Value::Array(_) => Some(ContainerKind::Array),
        Value::Object(object) => Some(match object.proto() {
            Proto::Plain => ContainerKind::PlainObject,
            Proto::Global(_) => ContainerKind::GlobalInstance,
            Proto::Class(_) => ContainerKind::CustomInstance,
        }),
        _ => None,
    }
}

pub fn is_cloneable(value: &Value) -> bool {
    classify(value).is_some()
}

/// Copy one level of a container, preserving its effective type.
///
/// Returns `None` when the value is not cloneable.
///
/// # Example
///
/// ```
/// use pathcopy::{shallow_clone, Value};
///
/// let child = Value::array([Value::from(1)]);
/// let parent = Value::object([("child", child.clone())]);
///
/// let copy = shallow_clone(&parent).unwrap().into_value();
/// assert_eq!(copy, parent);
/// assert!(!copy.ptr_eq(&parent));
/// assert!(copy.as_object().unwrap().get_prop(&"child".into()).ptr_eq(&child));
/// ```
pub fn shallow_clone(value: &Value) -> Option<Container> {
    let cloned = match (classify(value)?, value) {
        (ContainerKind::Array, Value::Array(array)) => Container::Array(Array::clone(array)),
        (ContainerKind::GlobalInstance, _) => Container::Object(Object::default()),
        (_, Value::Object(object)) => Container::Object(Object::clone(object)),
        _ => return None,
    };
    Some(cloned)
}

/// An empty container shaped for `key`: an array for index keys, an object
/// otherwise.
pub fn empty_child_for(key: &Key) -> Container {
    if key.is_index() {
        Container::Array(Array::default())
    } else {
        Container::Object(Object::default())
    }
}

/// Clone `value`, or start an empty container shaped for `next_key` when
/// `value` cannot be cloned.
pub fn clone_or_empty(value: &Value, next_key: &Key) -> Container {
    shallow_clone(value).unwrap_or_else(|| {
        if !value.is_undefined() {
            log::trace!(
                "replacing non-cloneable {} with an empty container for key {next_key}",
                value.type_name()
            );
        }
        empty_child_for(next_key)
    })
}

/// Clone `value` if it is cloneable, else return it as is.
pub fn clone_if_possible(value: &Value) -> Value {
    match shallow_clone(value) {
        Some(container) => container.into_value(),
        None => value.clone(),
    }
}

/// An empty container of the same kind: `[]` for arrays, `{}` otherwise.
pub fn empty_like(value: &Value) -> Value {
    if value.is_array() {
        Value::empty_array()
    } else {
        Value::empty_object()
    }
}
