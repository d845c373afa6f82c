//! Type definitions for paths.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::parser::{ParseError, ParseMode, Parser};
use crate::util::{is_identifier, parse_index, quote_name, MAX_INDEX};
use crate::validate::validate_keys;

/// A unique property key.
///
/// Symbols are compared by identity: two symbols are equal only when one was
/// cloned from the other, regardless of their descriptions.
#[derive(Clone)]
pub struct Symbol(Rc<Option<String>>);

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Symbol(Rc::new(Some(description.into())))
    }

    pub fn anonymous() -> Self {
        Symbol(Rc::new(None))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(desc) => write!(f, "Symbol({desc})"),
            None => f.write_str("Symbol()"),
        }
    }
}

/// A single step in a path.
///
/// `Index` addresses array slots, `Name` and `Symbol` address properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(usize),
    Name(Rc<str>),
    Symbol(Symbol),
}

impl Key {
    pub fn name(name: &str) -> Self {
        Key::Name(Rc::from(name))
    }

    /// True for index keys. Decides whether a missing branch becomes an
    /// array or an object.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(i) if *i <= MAX_INDEX)
    }

    /// Index addressed by this key, accepting canonical decimal names such
    /// as `"3"` the way array property access does. Integers past
    /// [`MAX_INDEX`] are not indices.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) if *i <= MAX_INDEX => Some(*i),
            Key::Name(name) => parse_index(name),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::name(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(Rc::from(name))
    }
}

impl From<Symbol> for Key {
    fn from(symbol: Symbol) -> Self {
        Key::Symbol(symbol)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
            Key::Symbol(symbol) => write!(f, "{symbol:?}"),
        }
    }
}

/// A normalized path: an ordered sequence of keys.
///
/// Key sequences handed in by reference are borrowed, never copied. A path
/// with no keys addresses the root value itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path<'a>(Cow<'a, [Key]>);

impl<'a> Path<'a> {
    pub fn root() -> Self {
        Path(Cow::Borrowed(&[]))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub fn first(&self) -> Option<&Key> {
        self.0.first()
    }

    /// Whether the keys are borrowed from the caller.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.0, Cow::Borrowed(_))
    }

    /// A new path with `key` appended.
    pub fn with_key(&self, key: Key) -> Path<'static> {
        let mut keys = self.0.to_vec();
        keys.push(key);
        Path(Cow::Owned(keys))
    }

    pub fn into_keys(self) -> Vec<Key> {
        self.0.into_owned()
    }

    pub fn into_owned(self) -> Path<'static> {
        Path(Cow::Owned(self.0.into_owned()))
    }

    /// Normalize a path string with an explicit parse mode.
    ///
    /// In strict mode malformed syntax and over-deep paths are errors.
    pub fn parse(text: &str, mode: ParseMode) -> Result<Path<'static>, ParseError> {
        let keys = normalize_str(text, mode)?;
        if mode == ParseMode::Strict {
            validate_keys(&keys)?;
        }
        Ok(Path(Cow::Owned(keys)))
    }
}

/// Normalize a path string.
///
/// Strings without path syntax are a single key: the empty string is the key
/// `""`, not the root. Strict mode sends any string holding a bracket through
/// the parser, so a stray `]` is an error there.
fn normalize_str(text: &str, mode: ParseMode) -> Result<Vec<Key>, ParseError> {
    let syntax: &[char] = match mode {
        ParseMode::Lenient => &['.', '['],
        ParseMode::Strict => &['.', '[', ']'],
    };
    if text.contains(syntax) {
        return Parser::parse(text, mode);
    }
    match parse_index(text) {
        Some(index) => Ok(vec![Key::Index(index)]),
        None => Ok(vec![Key::name(text)]),
    }
}

impl From<()> for Path<'_> {
    fn from(_: ()) -> Self {
        Path::root()
    }
}

impl<'a, T: Into<Path<'a>>> From<Option<T>> for Path<'a> {
    fn from(path: Option<T>) -> Self {
        path.map(Into::into).unwrap_or_default()
    }
}

impl From<usize> for Path<'_> {
    fn from(index: usize) -> Self {
        Path(Cow::Owned(vec![Key::Index(index)]))
    }
}

impl From<Key> for Path<'_> {
    fn from(key: Key) -> Self {
        Path(Cow::Owned(vec![key]))
    }
}

impl From<Symbol> for Path<'_> {
    fn from(symbol: Symbol) -> Self {
        Path(Cow::Owned(vec![Key::Symbol(symbol)]))
    }
}

impl From<&str> for Path<'_> {
    fn from(text: &str) -> Self {
        Path(Cow::Owned(
            normalize_str(text, ParseMode::Lenient).unwrap_or_default(),
        ))
    }
}

impl From<String> for Path<'_> {
    fn from(text: String) -> Self {
        Path::from(text.as_str())
    }
}

impl From<&String> for Path<'_> {
    fn from(text: &String) -> Self {
        Path::from(text.as_str())
    }
}

impl<'a> From<&'a [Key]> for Path<'a> {
    fn from(keys: &'a [Key]) -> Self {
        Path(Cow::Borrowed(keys))
    }
}

impl<'a> From<&'a Vec<Key>> for Path<'a> {
    fn from(keys: &'a Vec<Key>) -> Self {
        Path(Cow::Borrowed(keys.as_slice()))
    }
}

impl From<Vec<Key>> for Path<'_> {
    fn from(keys: Vec<Key>) -> Self {
        Path(Cow::Owned(keys))
    }
}

impl<const N: usize> From<[Key; N]> for Path<'_> {
    fn from(keys: [Key; N]) -> Self {
        Path(Cow::Owned(keys.into()))
    }
}

impl<'a> From<&'a Path<'_>> for Path<'a> {
    fn from(path: &'a Path<'_>) -> Self {
        Path(Cow::Borrowed(path.keys()))
    }
}

impl fmt::Display for Path<'_> {
    /// Formats the path back into path syntax, e.g. `a[0].b["c d"]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            match key {
                Key::Index(index) => write!(f, "[{index}]")?,
                Key::Name(name) if is_identifier(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Key::Name(name) => write!(f, "[{}]", quote_name(name))?,
                Key::Symbol(symbol) => write!(f, "[{symbol:?}]")?,
            }
        }
        Ok(())
    }
}
