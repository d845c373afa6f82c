//! Path-addressed operations.
//!
//! Every operation takes the path first and the root value last, and never
//! mutates its input: writes return a new root that shares every branch off
//! the path with the old one. Paths are anything convertible into a
//! [`Path`]: strings in path syntax, indices, keys, key slices or `()` for the
//! root.
//!
//! # Example
//!
//! ```
//! use pathcopy::{ops, Value};
//!
//! let doc = Value::object([("users", Value::empty_array())]);
//! let doc = ops::add("users", Value::object([("name", Value::from("ada"))]), &doc);
//! let doc = ops::set("users[0].admin", true, &doc);
//!
//! assert_eq!(ops::get("users[0].name", &doc), Value::from("ada"));
//! assert!(ops::has("users[0].admin", &doc));
//! assert!(!ops::has("users[1]", &doc));
//! ```

use pathcopy_path::{Key, Path};

use crate::clone::{empty_like, is_cloneable};
use crate::merge::merge_values;
use crate::read::{has_at_path, read_at_path};
use crate::value::{Array, Value};
use crate::walk::clone_along_path;

// ── Reads ─────────────────────────────────────────────────────────────────

/// The value at `path`, or `undefined`. The root path returns `object`.
pub fn get<'p>(path: impl Into<Path<'p>>, object: &Value) -> Value {
    get_or(Value::Undefined, path, object)
}

/// The value at `path`, or `fallback` when nothing defined is there.
pub fn get_or<'p>(fallback: Value, path: impl Into<Path<'p>>, object: &Value) -> Value {
    read_at_path(path.into().keys(), object).unwrap_or(fallback)
}

/// `transform` applied to the value at `path`, or `undefined` when nothing
/// defined is there.
pub fn get_with<'p, F>(transform: F, path: impl Into<Path<'p>>, object: &Value) -> Value
where
    F: FnOnce(&Value) -> Value,
{
    get_with_or(transform, Value::Undefined, path, object)
}

/// `transform` applied to the value at `path`, or `fallback` when nothing
/// defined is there. The transform does not run on a miss.
pub fn get_with_or<'p, F>(
    transform: F,
    fallback: Value,
    path: impl Into<Path<'p>>,
    object: &Value,
) -> Value
where
    F: FnOnce(&Value) -> Value,
{
    match read_at_path(path.into().keys(), object) {
        Some(current) => transform(&current),
        None => fallback,
    }
}

/// Whether a defined value is at `path`. For the root: whether `object` is
/// neither `null` nor `undefined`.
pub fn has<'p>(path: impl Into<Path<'p>>, object: &Value) -> bool {
    let path = path.into();
    if path.is_empty() {
        return !object.is_nullish();
    }
    has_at_path(path.keys(), object)
}

/// Whether a defined value is at `path` and `guard` accepts it. On the root
/// the guard decides alone.
pub fn has_with<'p, F>(guard: F, path: impl Into<Path<'p>>, object: &Value) -> bool
where
    F: FnOnce(&Value) -> bool,
{
    let path = path.into();
    if path.is_empty() {
        return guard(object);
    }
    read_at_path(path.keys(), object).is_some_and(|current| guard(&current))
}

/// SameValueZero comparison of the value at `path` with `value`.
pub fn is<'p>(path: impl Into<Path<'p>>, value: impl Into<Value>, object: &Value) -> bool {
    get(path, object).same_value_zero(&value.into())
}

/// SameValueZero comparison of `transform(current)` with `value`. The
/// transform also runs when nothing is at `path`, on `undefined`.
pub fn is_with<'p, F>(
    transform: F,
    path: impl Into<Path<'p>>,
    value: impl Into<Value>,
    object: &Value,
) -> bool
where
    F: FnOnce(&Value) -> Value,
{
    transform(&get(path, object)).same_value_zero(&value.into())
}

// ── Writes ────────────────────────────────────────────────────────────────

/// Replace the value at `path`. Setting the root returns `value` itself.
///
/// Missing branches are created: arrays before index keys, objects before
/// any other key.
pub fn set<'p>(path: impl Into<Path<'p>>, value: impl Into<Value>, object: &Value) -> Value {
    set_at(&path.into(), value.into(), object)
}

/// Replace the value at `path` with `transform(current)`.
pub fn set_with<'p, F>(transform: F, path: impl Into<Path<'p>>, object: &Value) -> Value
where
    F: FnOnce(&Value) -> Value,
{
    let path = path.into();
    let value = transform(&get(&path, object));
    set_at(&path, value, object)
}

/// Append `value` to the array at `path`, or set it when the value at
/// `path` is not an array.
///
/// On the root, an array `object` gets `value` appended and any other root is
/// replaced by `value`.
pub fn add<'p>(path: impl Into<Path<'p>>, value: impl Into<Value>, object: &Value) -> Value {
    append_or_set(&path.into(), value.into(), object)
}

/// [`add`] with `transform(current)` as the value.
pub fn add_with<'p, F>(transform: F, path: impl Into<Path<'p>>, object: &Value) -> Value
where
    F: FnOnce(&Value) -> Value,
{
    let path = path.into();
    let value = transform(&get(&path, object));
    append_or_set(&path, value, object)
}

/// Delete the value at `path`. Array slots are spliced out.
///
/// Returns `object` itself when nothing is at `path`. Removing the root
/// yields an empty container of the same kind.
pub fn remove<'p>(path: impl Into<Path<'p>>, object: &Value) -> Value {
    remove_at(&path.into(), object)
}

/// [`remove`], but only when `guard` accepts the current value.
pub fn remove_with<'p, F>(guard: F, path: impl Into<Path<'p>>, object: &Value) -> Value
where
    F: FnOnce(&Value) -> bool,
{
    let path = path.into();
    if guard(&get(&path, object)) {
        remove_at(&path, object)
    } else {
        object.clone()
    }
}

/// Deep-merge `value` into the value at `path`.
///
/// Arrays concatenate, objects merge key by key and recurse into cloneable
/// values. A type mismatch replaces the target with a clone of `value`.
pub fn merge<'p>(path: impl Into<Path<'p>>, value: impl Into<Value>, object: &Value) -> Value {
    merge_at(&path.into(), &value.into(), object, true)
}

/// [`merge`] with `transform(current)` as the value.
pub fn merge_with<'p, F>(transform: F, path: impl Into<Path<'p>>, object: &Value) -> Value
where
    F: FnOnce(&Value) -> Value,
{
    let path = path.into();
    let value = transform(&get(&path, object));
    merge_at(&path, &value, object, true)
}

/// Shallow merge: like [`merge`] but properties of `value` overwrite rather
/// than recurse.
pub fn assign<'p>(path: impl Into<Path<'p>>, value: impl Into<Value>, object: &Value) -> Value {
    merge_at(&path.into(), &value.into(), object, false)
}

/// [`assign`] with `transform(current)` as the value.
pub fn assign_with<'p, F>(transform: F, path: impl Into<Path<'p>>, object: &Value) -> Value
where
    F: FnOnce(&Value) -> Value,
{
    let path = path.into();
    let value = transform(&get(&path, object));
    merge_at(&path, &value, object, false)
}

// ── Calls ─────────────────────────────────────────────────────────────────

/// Call the function at `path` with `object` as its context. Anything that
/// is not a function yields `undefined`.
pub fn call<'p>(path: impl Into<Path<'p>>, args: &[Value], object: &Value) -> Value {
    call_on(path, args, object, object)
}

/// Call the function at `path` with an explicit context.
pub fn call_on<'p>(
    path: impl Into<Path<'p>>,
    args: &[Value],
    object: &Value,
    context: &Value,
) -> Value {
    invoke(&get(path, object), args, context)
}

/// [`call`], but only when `guard` accepts the value at `path`. The guard
/// runs even when that value is not callable.
pub fn call_with<'p, F>(
    guard: F,
    path: impl Into<Path<'p>>,
    args: &[Value],
    object: &Value,
) -> Value
where
    F: FnOnce(&Value) -> bool,
{
    call_with_on(guard, path, args, object, object)
}

/// [`call_with`] with an explicit context.
pub fn call_with_on<'p, F>(
    guard: F,
    path: impl Into<Path<'p>>,
    args: &[Value],
    object: &Value,
    context: &Value,
) -> Value
where
    F: FnOnce(&Value) -> bool,
{
    let current = get(path, object);
    if guard(&current) {
        invoke(&current, args, context)
    } else {
        Value::Undefined
    }
}

// ── Shared steps ──────────────────────────────────────────────────────────

fn set_at(path: &Path<'_>, value: Value, object: &Value) -> Value {
    if path.is_empty() {
        return value;
    }
    clone_along_path(path.keys(), object, |parent, key| parent.set(key, value))
}

fn append_or_set(path: &Path<'_>, value: Value, object: &Value) -> Value {
    if path.is_empty() {
        return match object {
            Value::Array(array) => {
                let mut appended = Array::clone(array);
                appended.push(value);
                Value::from(appended)
            }
            _ => value,
        };
    }
    match read_at_path(path.keys(), object) {
        Some(Value::Array(array)) => {
            set_at(&path.with_key(Key::Index(array.len())), value, object)
        }
        _ => set_at(path, value, object),
    }
}

fn remove_at(path: &Path<'_>, object: &Value) -> Value {
    if path.is_empty() {
        return empty_like(object);
    }
    if !has_at_path(path.keys(), object) {
        return object.clone();
    }
    clone_along_path(path.keys(), object, |parent, key| parent.delete(key))
}

fn merge_at(path: &Path<'_>, value: &Value, object: &Value, deep: bool) -> Value {
    if path.is_empty() {
        if !is_cloneable(object) {
            return value.clone();
        }
        return merge_values(object, value, deep);
    }
    clone_along_path(path.keys(), object, |parent, key| {
        let merged = merge_values(&parent.get(key), value, deep);
        parent.set(key, merged);
    })
}

fn invoke(target: &Value, args: &[Value], context: &Value) -> Value {
    match target {
        Value::Function(function) => function.call(context, args),
        _ => Value::Undefined,
    }
}
