//! Path-walking clone engine.

use pathcopy_path::Key;

use crate::clone::clone_or_empty;
use crate::container::Container;
use crate::value::Value;

/// Clone every container from the root down to the parent of the last key
/// and run `on_match` once on that freshly cloned parent.
///
/// Branches off the path are shared with `object`. Missing or non-cloneable
/// branches on the path are replaced by empty containers shaped for the key
/// that follows them: an array before an index key, an object otherwise.
///
/// An empty key sequence leaves `object` untouched.
///
/// # Example
///
/// ```
/// use pathcopy::{clone_along_path, Key, Value};
///
/// let sibling = Value::object([("keep", Value::from(true))]);
/// let root = Value::object([("sibling", sibling.clone())]);
///
/// let keys = [Key::name("a"), Key::Index(0)];
/// let updated = clone_along_path(&keys, &root, |parent, key| parent.set(key, Value::from("v")));
///
/// assert_eq!(updated.property(&Key::name("a")), Value::array([Value::from("v")]));
/// assert!(updated.property(&Key::name("sibling")).ptr_eq(&sibling));
/// ```
pub fn clone_along_path<F>(keys: &[Key], object: &Value, on_match: F) -> Value
where
    F: FnOnce(&mut Container, &Key),
{
    let Some(first) = keys.first() else {
        return object.clone();
    };
    let root = clone_or_empty(object, first);
    walk(keys, root, on_match).into_value()
}

fn walk<F>(keys: &[Key], mut node: Container, on_match: F) -> Container
where
    F: FnOnce(&mut Container, &Key),
{
    match keys {
        [] => node,
        [key] => {
            on_match(&mut node, key);
            node
        }
        [key, rest @ ..] => {
            let child = clone_or_empty(&node.get(key), &rest[0]);
            let child = walk(rest, child, on_match);
            node.set(key, child.into_value());
            node
        }
    }
}
