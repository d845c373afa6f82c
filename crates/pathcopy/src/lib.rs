//! Non-mutating, path-addressed reads and writes on nested data.
//!
//! Every write returns a new root that shares all branches off the written
//! path with the original; only the containers on the path are copied, one
//! level each. Missing branches are created on the way: an array before an
//! index key, an object before any other key.
//!
//! The crate is layered:
//!
//! - [`value`]: the dynamic [`Value`] model with reference-counted containers.
//! - [`clone`], [`walk`], [`read`], [`merge`]: cloning primitives and the
//!   engines built on them.
//! - [`ops`]: the typed operation surface (`get`, `set`, `merge`, ...).
//! - [`curry`]: curried dispatch with placeholders over dynamic arguments.
//!
//! # Example
//!
//! ```
//! use pathcopy::{ops, Key, Value};
//!
//! let settings = Value::object([("theme", Value::from("dark"))]);
//! let state = Value::object([("settings", settings.clone())]);
//!
//! let next = ops::set("users[0].name", "ada", &state);
//!
//! assert_eq!(ops::get("users[0].name", &next), Value::from("ada"));
//! assert!(ops::get("settings", &next).ptr_eq(&settings));
//! assert!(!ops::has("users", &state));
//! assert_eq!(next.property(&Key::name("users")).as_array().map(|a| a.len()), Some(1));
//! ```

pub mod clone;
pub mod container;
pub mod curry;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod merge;
pub mod ops;
pub mod read;
pub mod value;
pub mod walk;

pub use clone::{classify, clone_if_possible, is_cloneable, shallow_clone, ContainerKind};
pub use container::Container;
pub use curry::{Applied, Arg, Curried, Verb, __};
pub use error::Error;
pub use merge::merge_values;
pub use ops::{
    add, add_with, assign, assign_with, call, call_on, call_with, call_with_on, get, get_or,
    get_with, get_with_or, has, has_with, is, is_with, merge, merge_with, remove, remove_with,
    set, set_with,
};
pub use pathcopy_path::{parse_path, Key, ParseError, ParseMode, Path, Symbol};
pub use read::{has_at_path, read_at_path, read_at_path_or};
pub use value::{Array, Builtin, Class, Element, Function, GlobalCtor, Object, PropKey, Proto, Value};
pub use walk::clone_along_path;
