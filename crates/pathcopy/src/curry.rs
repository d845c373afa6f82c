//! Curried, dynamically typed dispatch of the operations.
//!
//! A [`Curried`] operation accumulates [`Arg`]s until the first
//! [`Verb::arity`] positions are all concrete, then runs. The placeholder
//! [`__`] reserves a position to be filled by a later application.
//!
//! Arguments here are plain [`Value`]s: paths are converted from values,
//! transforms must be [`Value::Function`]s and receive any extra arguments
//! after the current value.
//!
//! # Example
//!
//! ```
//! use pathcopy::curry::{Applied, Arg, Curried, Verb, __};
//! use pathcopy::Value;
//!
//! // set(__, 1) leaves the path open.
//! let set_one = match Curried::new(Verb::Set).apply([__, Arg::value(1)]).unwrap() {
//!     Applied::Partial(curried) => curried,
//!     Applied::Done(_) => unreachable!(),
//! };
//!
//! let updated = set_one
//!     .apply([Arg::value("a.b"), Arg::value(Value::empty_object())])
//!     .unwrap()
//!     .value()
//!     .unwrap();
//! assert_eq!(updated, Value::object([("a", Value::object([("b", Value::from(1))]))]));
//! ```

use std::fmt;

use pathcopy_path::{validate_keys, ParseMode, Path};

use crate::error::Error;
use crate::ops;
use crate::value::Value;

// ── Verbs ─────────────────────────────────────────────────────────────────

/// Every curryable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    GetOr,
    GetWith,
    GetWithOr,
    Has,
    HasWith,
    Is,
    IsWith,
    Set,
    SetWith,
    Add,
    AddWith,
    Remove,
    RemoveWith,
    Merge,
    MergeWith,
    Assign,
    AssignWith,
    Call,
    CallWith,
}

impl Verb {
    pub const ALL: [Verb; 20] = [
        Verb::Get,
        Verb::GetOr,
        Verb::GetWith,
        Verb::GetWithOr,
        Verb::Has,
        Verb::HasWith,
        Verb::Is,
        Verb::IsWith,
        Verb::Set,
        Verb::SetWith,
        Verb::Add,
        Verb::AddWith,
        Verb::Remove,
        Verb::RemoveWith,
        Verb::Merge,
        Verb::MergeWith,
        Verb::Assign,
        Verb::AssignWith,
        Verb::Call,
        Verb::CallWith,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::GetOr => "get_or",
            Verb::GetWith => "get_with",
            Verb::GetWithOr => "get_with_or",
            Verb::Has => "has",
            Verb::HasWith => "has_with",
            Verb::Is => "is",
            Verb::IsWith => "is_with",
            Verb::Set => "set",
            Verb::SetWith => "set_with",
            Verb::Add => "add",
            Verb::AddWith => "add_with",
            Verb::Remove => "remove",
            Verb::RemoveWith => "remove_with",
            Verb::Merge => "merge",
            Verb::MergeWith => "merge_with",
            Verb::Assign => "assign",
            Verb::AssignWith => "assign_with",
            Verb::Call => "call",
            Verb::CallWith => "call_with",
        }
    }

    pub fn from_name(name: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.name() == name)
    }

    /// Number of arguments needed before the operation runs.
    pub fn arity(self) -> usize {
        match self {
            Verb::Get | Verb::Has | Verb::Remove => 2,
            Verb::GetOr
            | Verb::GetWith
            | Verb::HasWith
            | Verb::Is
            | Verb::Set
            | Verb::SetWith
            | Verb::Add
            | Verb::AddWith
            | Verb::RemoveWith
            | Verb::Merge
            | Verb::MergeWith
            | Verb::Assign
            | Verb::AssignWith
            | Verb::Call => 3,
            Verb::GetWithOr | Verb::IsWith | Verb::CallWith => 4,
        }
    }

    /// Whether the first argument is a transform function.
    pub fn takes_transform(self) -> bool {
        matches!(
            self,
            Verb::GetWith
                | Verb::GetWithOr
                | Verb::HasWith
                | Verb::IsWith
                | Verb::SetWith
                | Verb::AddWith
                | Verb::RemoveWith
                | Verb::MergeWith
                | Verb::AssignWith
                | Verb::CallWith
        )
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Placeholder,
}

/// The placeholder argument.
#[allow(non_upper_case_globals)]
pub const __: Arg = Arg::Placeholder;

impl Arg {
    pub fn value(value: impl Into<Value>) -> Self {
        Arg::Value(value.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Arg::Placeholder)
    }

    /// The concrete value; an unfilled placeholder reads as `undefined`.
    fn to_value(&self) -> Value {
        match self {
            Arg::Value(value) => value.clone(),
            Arg::Placeholder => Value::Undefined,
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

// ── Partial application ───────────────────────────────────────────────────

/// Result of applying arguments to a [`Curried`] operation.
#[derive(Debug, Clone)]
pub enum Applied {
    Done(Value),
    Partial(Curried),
}

impl Applied {
    pub fn value(self) -> Option<Value> {
        match self {
            Applied::Done(value) => Some(value),
            Applied::Partial(_) => None,
        }
    }

    pub fn curried(self) -> Option<Curried> {
        match self {
            Applied::Done(_) => None,
            Applied::Partial(curried) => Some(curried),
        }
    }
}

/// An operation with the arguments collected so far.
#[derive(Debug, Clone)]
pub struct Curried {
    verb: Verb,
    args: Vec<Arg>,
    mode: ParseMode,
}

impl Curried {
    pub fn new(verb: Verb) -> Self {
        Curried {
            verb,
            args: Vec::new(),
            mode: ParseMode::default(),
        }
    }

    /// Parse string paths in `mode`. In strict mode malformed paths fail the
    /// application with [`Error::InvalidPath`].
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Positions still missing before the operation can run.
    pub fn pending(&self) -> usize {
        let arity = self.verb.arity();
        let filled = self
            .args
            .iter()
            .take(arity)
            .filter(|arg| !arg.is_placeholder())
            .count();
        arity - filled
    }

    /// Apply more arguments. They fill pending placeholders first, left to
    /// right, then append.
    ///
    /// # Errors
    ///
    /// When the operation runs: [`Error::InvalidTransform`] for a
    /// non-function transform, [`Error::InvalidPath`] for a malformed path in
    /// strict mode.
    pub fn apply(&self, args: impl IntoIterator<Item = Arg>) -> Result<Applied, Error> {
        let mut collected = self.args.clone();
        let mut holes = collected
            .iter()
            .enumerate()
            .filter(|(_, arg)| arg.is_placeholder())
            .map(|(i, _)| i)
            .collect::<Vec<_>>()
            .into_iter();
        for arg in args {
            match holes.next() {
                Some(i) => collected[i] = arg,
                None => collected.push(arg),
            }
        }

        let next = Curried {
            verb: self.verb,
            args: collected,
            mode: self.mode,
        };
        let pending = next.pending();
        if pending > 0 {
            log::trace!("{}: {pending} argument(s) pending", self.verb);
            return Ok(Applied::Partial(next));
        }
        next.dispatch().map(Applied::Done)
    }

    fn dispatch(&self) -> Result<Value, Error> {
        let values: Vec<Value> = self.args.iter().map(Arg::to_value).collect();
        let (args, extras) = values.split_at(self.verb.arity());
        log::debug!(
            "dispatching {} with {} extra argument(s)",
            self.verb,
            extras.len()
        );

        let verb = self.verb;
        let result = match verb {
            Verb::Get => ops::get(self.path(&args[0])?, &args[1]),
            Verb::GetOr => ops::get_or(args[0].clone(), self.path(&args[1])?, &args[2]),
            Verb::GetWith => {
                let transform = transform(verb, &args[0], extras)?;
                ops::get_with(transform, self.path(&args[1])?, &args[2])
            }
            Verb::GetWithOr => {
                let transform = transform(verb, &args[0], extras)?;
                ops::get_with_or(transform, args[1].clone(), self.path(&args[2])?, &args[3])
            }
            Verb::Has => Value::Bool(ops::has(self.path(&args[0])?, &args[1])),
            Verb::HasWith => {
                let guard = guard(verb, &args[0], extras)?;
                Value::Bool(ops::has_with(guard, self.path(&args[1])?, &args[2]))
            }
            Verb::Is => Value::Bool(ops::is(self.path(&args[0])?, args[1].clone(), &args[2])),
            Verb::IsWith => {
                let transform = transform(verb, &args[0], extras)?;
                Value::Bool(ops::is_with(
                    transform,
                    self.path(&args[1])?,
                    args[2].clone(),
                    &args[3],
                ))
            }
            Verb::Set => ops::set(self.path(&args[0])?, args[1].clone(), &args[2]),
            Verb::SetWith => {
                let transform = transform(verb, &args[0], extras)?;
                ops::set_with(transform, self.path(&args[1])?, &args[2])
            }
            Verb::Add => ops::add(self.path(&args[0])?, args[1].clone(), &args[2]),
            Verb::AddWith => {
                let transform = transform(verb, &args[0], extras)?;
                ops::add_with(transform, self.path(&args[1])?, &args[2])
            }
            Verb::Remove => ops::remove(self.path(&args[0])?, &args[1]),
            Verb::RemoveWith => {
                let guard = guard(verb, &args[0], extras)?;
                ops::remove_with(guard, self.path(&args[1])?, &args[2])
            }
            Verb::Merge => ops::merge(self.path(&args[0])?, args[1].clone(), &args[2]),
            Verb::MergeWith => {
                let transform = transform(verb, &args[0], extras)?;
                ops::merge_with(transform, self.path(&args[1])?, &args[2])
            }
            Verb::Assign => ops::assign(self.path(&args[0])?, args[1].clone(), &args[2]),
            Verb::AssignWith => {
                let transform = transform(verb, &args[0], extras)?;
                ops::assign_with(transform, self.path(&args[1])?, &args[2])
            }
            Verb::Call => {
                let context = extras.first().unwrap_or(&args[2]);
                ops::call_on(self.path(&args[0])?, &call_args(&args[1]), &args[2], context)
            }
            Verb::CallWith => {
                let (context, rest) = match extras.split_first() {
                    Some((context, rest)) => (context, rest),
                    None => (&args[3], extras),
                };
                let guard = guard(verb, &args[0], rest)?;
                ops::call_with_on(
                    guard,
                    self.path(&args[1])?,
                    &call_args(&args[2]),
                    &args[3],
                    context,
                )
            }
        };
        Ok(result)
    }

    /// Convert a dynamic value into a path.
    ///
    /// `null` and `undefined` are the root, numbers are index keys when
    /// they are non-negative integers, strings are parsed and arrays list
    /// their keys without re-parsing.
    fn path(&self, value: &Value) -> Result<Path<'static>, Error> {
        let path = match value {
            Value::Undefined | Value::Null => Path::root(),
            Value::String(text) => Path::parse(text, self.mode)?,
            Value::Array(array) => {
                let keys: Vec<_> = array.items().iter().map(Value::to_key).collect();
                if self.mode == ParseMode::Strict {
                    validate_keys(&keys)?;
                }
                Path::from(keys)
            }
            other => Path::from(other.to_key()),
        };
        Ok(path)
    }
}

fn transform<'a>(
    verb: Verb,
    candidate: &Value,
    extras: &'a [Value],
) -> Result<impl Fn(&Value) -> Value + 'a, Error> {
    let Value::Function(function) = candidate else {
        return Err(Error::InvalidTransform {
            verb: verb.name(),
            found: candidate.type_name(),
        });
    };
    let function = function.clone();
    Ok(move |current: &Value| {
        let mut args = Vec::with_capacity(extras.len() + 1);
        args.push(current.clone());
        args.extend_from_slice(extras);
        function.call(&Value::Undefined, &args)
    })
}

fn guard<'a>(
    verb: Verb,
    candidate: &Value,
    extras: &'a [Value],
) -> Result<impl Fn(&Value) -> bool + 'a, Error> {
    let transform = transform(verb, candidate, extras)?;
    Ok(move |current: &Value| transform(current).is_truthy())
}

/// Arrays spread into the argument list, `null` and `undefined` mean no
/// arguments, anything else is the single argument.
fn call_args(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(array) => array.items().to_vec(),
        Value::Undefined | Value::Null => Vec::new(),
        other => vec![other.clone()],
    }
}
