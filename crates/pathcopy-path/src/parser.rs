//! Path string parser.
//!
//! Accepts dot-separated identifiers, bracketed indices (`[0]`) and
//! bracketed quoted names (`["c d"]`, `['c d']`) in any order, e.g.
//! `a[0].b["c d"]`.

use thiserror::Error;

use crate::types::Key;
use crate::util::parse_index;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unclosed bracket at position {0}")]
    UnclosedBracket(usize),
    #[error("Unclosed string at position {0}")]
    UnclosedString(usize),
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("Invalid escape sequence")]
    InvalidEscape,
    #[error("Empty key at position {0}")]
    EmptyKey(usize),
    #[error("Path too long")]
    PathTooLong,
}

/// How the parser treats malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Never fails. Unterminated brackets and strings run to the end of the
    /// input, stray characters are kept as part of a key and empty segments
    /// are dropped.
    #[default]
    Lenient,
    /// Reports the first malformed construct.
    Strict,
}

/// Path string parser.
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    mode: ParseMode,
}

impl<'a> Parser<'a> {
    /// Parse a path string into its keys.
    pub fn parse(input: &'a str, mode: ParseMode) -> Result<Vec<Key>, ParseError> {
        let mut parser = Self {
            input,
            pos: 0,
            mode,
        };
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<Vec<Key>, ParseError> {
        let mut keys = Vec::new();
        let mut after_bracket = false;

        while let Some(c) = self.peek() {
            match c {
                '.' => {
                    let dot = self.pos;
                    self.advance();
                    if matches!(self.peek(), None | Some('.') | Some('[')) || dot == 0 {
                        self.fail(ParseError::EmptyKey(dot))?;
                    }
                    after_bracket = false;
                }
                '[' => {
                    if let Some(key) = self.parse_bracket()? {
                        keys.push(key);
                    }
                    after_bracket = true;
                }
                _ => {
                    if after_bracket {
                        self.fail(ParseError::UnexpectedChar(c))?;
                    }
                    keys.push(self.parse_bare()?);
                    after_bracket = false;
                }
            }
        }

        Ok(keys)
    }

    /// A dot-notation segment, up to the next `.` or `[`.
    fn parse_bare(&mut self) -> Result<Key, ParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            match c {
                '.' | '[' => break,
                ']' => {
                    self.fail(ParseError::UnexpectedChar(c))?;
                    self.advance();
                }
                _ => self.advance(),
            }
        }
        Ok(bare_key(&self.input[start..self.pos]))
    }

    /// A bracketed segment. Returns `None` for an empty `[]` in lenient mode.
    fn parse_bracket(&mut self) -> Result<Option<Key>, ParseError> {
        let open = self.pos;
        self.advance();
        self.skip_whitespace();

        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let name = self.parse_string(quote)?;
                self.skip_whitespace();
                match self.peek() {
                    Some(']') => self.advance(),
                    None => self.fail(ParseError::UnclosedBracket(open))?,
                    Some(c) => {
                        self.fail(ParseError::UnexpectedChar(c))?;
                        self.skip_past(']');
                    }
                }
                Ok(Some(Key::from(name)))
            }
            _ => {
                let start = self.pos;
                let end = match self.input[start..].find(']') {
                    Some(offset) => start + offset,
                    None => {
                        self.fail(ParseError::UnclosedBracket(open))?;
                        self.input.len()
                    }
                };
                self.pos = end;
                self.advance();

                let raw = self.input[start..end].trim();
                if raw.is_empty() {
                    self.fail(ParseError::EmptyKey(open))?;
                    return Ok(None);
                }
                Ok(Some(bare_key(raw)))
            }
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, ParseError> {
        let start = self.pos;
        self.advance();

        let mut result = String::new();

        loop {
            match self.peek() {
                None => {
                    self.fail(ParseError::UnclosedString(start))?;
                    break;
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some(c) => result.push(c),
                        None => {
                            self.fail(ParseError::InvalidEscape)?;
                            break;
                        }
                    }
                    self.advance();
                }
                Some(c) => {
                    result.push(c);
                    self.advance();
                }
            }
        }

        Ok(result)
    }

    fn fail(&self, err: ParseError) -> Result<(), ParseError> {
        match self.mode {
            ParseMode::Strict => Err(err),
            ParseMode::Lenient => Ok(()),
        }
    }

    fn skip_past(&mut self, stop: char) {
        while let Some(c) = self.peek() {
            self.advance();
            if c == stop {
                break;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }
}

/// Unquoted segments that spell a canonical index become index keys.
fn bare_key(raw: &str) -> Key {
    match parse_index(raw) {
        Some(index) => Key::Index(index),
        None => Key::name(raw),
    }
}

/// Parse a path string leniently. Never fails.
///
/// # Example
///
/// ```
/// use pathcopy_path::{parse_path, Key};
///
/// assert_eq!(
///     parse_path("a[0].b[\"c d\"]"),
///     vec![Key::name("a"), Key::Index(0), Key::name("b"), Key::name("c d")],
/// );
/// ```
pub fn parse_path(input: &str) -> Vec<Key> {
    Parser::parse(input, ParseMode::Lenient).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(input: &str) -> Result<Vec<Key>, ParseError> {
        Parser::parse(input, ParseMode::Strict)
    }

    #[test]
    fn test_parse_dot_notation() {
        assert_eq!(
            parse_path("foo.bar.baz"),
            vec![Key::name("foo"), Key::name("bar"), Key::name("baz")]
        );
    }

    #[test]
    fn test_parse_bracket_index() {
        assert_eq!(parse_path("[0]"), vec![Key::Index(0)]);
        assert_eq!(parse_path("a[12]"), vec![Key::name("a"), Key::Index(12)]);
        assert_eq!(parse_path("a[ 3 ]"), vec![Key::name("a"), Key::Index(3)]);
    }

    #[test]
    fn test_parse_dotted_index() {
        assert_eq!(parse_path("a.0.b"), vec![Key::name("a"), Key::Index(0), Key::name("b")]);
        assert_eq!(parse_path("a.01"), vec![Key::name("a"), Key::name("01")]);
    }

    #[test]
    fn test_parse_quoted_keys() {
        assert_eq!(parse_path("a[\"c d\"]"), vec![Key::name("a"), Key::name("c d")]);
        assert_eq!(parse_path("a['c.d']"), vec![Key::name("a"), Key::name("c.d")]);
        assert_eq!(parse_path("['0']"), vec![Key::name("0")]);
        assert_eq!(parse_path("[\"\"]"), vec![Key::name("")]);
    }

    #[test]
    fn test_parse_escapes() {
        assert_eq!(parse_path("['it\\'s']"), vec![Key::name("it's")]);
        assert_eq!(parse_path("[\"a\\\\b\"]"), vec![Key::name("a\\b")]);
        assert_eq!(parse_path("[\"line\\n\"]"), vec![Key::name("line\n")]);
    }

    #[test]
    fn test_parse_mixed() {
        assert_eq!(
            parse_path("deeply[0].nested[\"key\"]"),
            vec![
                Key::name("deeply"),
                Key::Index(0),
                Key::name("nested"),
                Key::name("key")
            ]
        );
        assert_eq!(
            parse_path("[0][1][\"x\"]"),
            vec![Key::Index(0), Key::Index(1), Key::name("x")]
        );
    }

    #[test]
    fn test_parse_out_of_range_index_is_name() {
        assert_eq!(
            parse_path("a[4294967294]"),
            vec![Key::name("a"), Key::Index(4_294_967_294)]
        );
        assert_eq!(
            parse_path("a[4294967295]"),
            vec![Key::name("a"), Key::name("4294967295")]
        );
        assert_eq!(
            parse_path("list.18446744073709551615"),
            vec![Key::name("list"), Key::name("18446744073709551615")]
        );
    }

    #[test]
    fn test_parse_unquoted_bracket_name() {
        assert_eq!(parse_path("a[b]"), vec![Key::name("a"), Key::name("b")]);
        assert_eq!(parse_path("a[-1]"), vec![Key::name("a"), Key::name("-1")]);
    }

    #[test]
    fn test_lenient_recovery() {
        assert_eq!(parse_path("a..b"), vec![Key::name("a"), Key::name("b")]);
        assert_eq!(parse_path(".a"), vec![Key::name("a")]);
        assert_eq!(parse_path("a."), vec![Key::name("a")]);
        assert_eq!(parse_path("a[0"), vec![Key::name("a"), Key::Index(0)]);
        assert_eq!(parse_path("a[\"open"), vec![Key::name("a"), Key::name("open")]);
        assert_eq!(parse_path("a[]"), vec![Key::name("a")]);
        assert_eq!(parse_path("a[0]b"), vec![Key::name("a"), Key::Index(0), Key::name("b")]);
    }

    #[test]
    fn test_strict_errors() {
        assert_eq!(strict("a..b"), Err(ParseError::EmptyKey(1)));
        assert_eq!(strict(".a"), Err(ParseError::EmptyKey(0)));
        assert_eq!(strict("a."), Err(ParseError::EmptyKey(1)));
        assert_eq!(strict("a[0"), Err(ParseError::UnclosedBracket(1)));
        assert_eq!(strict("a[\"open"), Err(ParseError::UnclosedString(2)));
        assert_eq!(strict("a[]"), Err(ParseError::EmptyKey(1)));
        assert_eq!(strict("a[0]b"), Err(ParseError::UnexpectedChar('b')));
        assert_eq!(strict("a]"), Err(ParseError::UnexpectedChar(']')));
        assert_eq!(strict("['x' y]"), Err(ParseError::UnexpectedChar('y')));
    }

    #[test]
    fn test_strict_accepts_well_formed() {
        assert_eq!(
            strict("a[0].b['c d']").unwrap(),
            vec![Key::name("a"), Key::Index(0), Key::name("b"), Key::name("c d")]
        );
        assert_eq!(strict("").unwrap(), Vec::<Key>::new());
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(parse_path("café.größe"), vec![Key::name("café"), Key::name("größe")]);
    }
}
