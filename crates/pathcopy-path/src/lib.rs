//! Path keys and parsing for `pathcopy`.
//!
//! A path addresses a location inside nested arrays and objects. It is
//! written either as a string such as `deeply[0].nested["key"]` or as an
//! ordered sequence of [`Key`]s.
//!
//! # Example
//!
//! ```
//! use pathcopy_path::{Key, Path};
//!
//! let path = Path::from("deeply[0].nested[\"key\"]");
//! assert_eq!(
//!     path.keys(),
//!     &[Key::name("deeply"), Key::Index(0), Key::name("nested"), Key::name("key")],
//! );
//!
//! // A single key is never the root path, not even `0` or `""`.
//! assert!(!Path::from("").is_empty());
//! assert!(Path::root().is_empty());
//! ```

pub mod parser;
pub mod types;
pub mod util;
pub mod validate;

pub use parser::{parse_path, ParseError, ParseMode, Parser};
pub use types::{Key, Path, Symbol};
pub use util::{is_identifier, is_valid_index, parse_index, quote_name, MAX_INDEX};
pub use validate::{validate_keys, validate_path_string, MAX_PATH_DEPTH};
