//! Dynamic values addressed by paths.
//!
//! Containers are reference counted so that an updated value can share every
//! untouched branch with the value it was derived from. Containers are never
//! mutated once they are wrapped in a [`Value`]; only the freshly cloned,
//! owned [`Container`](crate::Container) handed out by the clone engine is.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use pathcopy_path::{Key, Symbol, MAX_INDEX};
use regex::Regex;

/// Own properties of an object, in insertion order.
pub type Props = IndexMap<PropKey, Value>;

// ── Property keys ─────────────────────────────────────────────────────────

/// Key of an object property. Index keys address objects by their decimal
/// name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PropKey {
    Name(Rc<str>),
    Symbol(Symbol),
}

impl PropKey {
    pub fn name(name: &str) -> Self {
        PropKey::Name(Rc::from(name))
    }

    pub fn to_key(&self) -> Key {
        match self {
            PropKey::Name(name) => Key::Name(name.clone()),
            PropKey::Symbol(symbol) => Key::Symbol(symbol.clone()),
        }
    }
}

impl From<&Key> for PropKey {
    fn from(key: &Key) -> Self {
        match key {
            Key::Index(i) => PropKey::Name(Rc::from(i.to_string())),
            Key::Name(name) => PropKey::Name(name.clone()),
            Key::Symbol(symbol) => PropKey::Symbol(symbol.clone()),
        }
    }
}

impl From<&str> for PropKey {
    fn from(name: &str) -> Self {
        PropKey::name(name)
    }
}

impl From<String> for PropKey {
    fn from(name: String) -> Self {
        PropKey::Name(Rc::from(name))
    }
}

impl From<Symbol> for PropKey {
    fn from(symbol: Symbol) -> Self {
        PropKey::Symbol(symbol)
    }
}

impl fmt::Debug for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropKey::Name(name) => write!(f, "{name:?}"),
            PropKey::Symbol(symbol) => write!(f, "{symbol:?}"),
        }
    }
}

// ── Classes ───────────────────────────────────────────────────────────────

/// A user-defined prototype: a named set of members with an optional parent.
///
/// Property reads on instances fall through to the class chain.
#[derive(Debug, Clone, Default)]
pub struct Class {
    name: String,
    parent: Option<Rc<Class>>,
    members: Props,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Class {
            name: name.into(),
            parent: None,
            members: Props::new(),
        }
    }

    pub fn extends(mut self, parent: &Rc<Class>) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    pub fn member(mut self, key: impl Into<PropKey>, value: impl Into<Value>) -> Self {
        self.members.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Rc<Class> {
        Rc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Rc<Class>> {
        self.parent.as_ref()
    }

    pub fn lookup(&self, key: &PropKey) -> Option<&Value> {
        let mut class = self;
        loop {
            if let Some(value) = class.members.get(key) {
                return Some(value);
            }
            class = class.parent.as_deref()?;
        }
    }
}

fn same_class(a: Option<&Rc<Class>>, b: Option<&Rc<Class>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// Builtin constructors whose instances carry internal state that is never
/// copied. A clone of such an instance is an empty plain object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalCtor {
    Map,
    Set,
    WeakMap,
    WeakSet,
    Error,
    Promise,
    ArrayBuffer,
    DataView,
    Boolean,
    Number,
    String,
}

impl GlobalCtor {
    pub fn name(self) -> &'static str {
        match self {
            GlobalCtor::Map => "Map",
            GlobalCtor::Set => "Set",
            GlobalCtor::WeakMap => "WeakMap",
            GlobalCtor::WeakSet => "WeakSet",
            GlobalCtor::Error => "Error",
            GlobalCtor::Promise => "Promise",
            GlobalCtor::ArrayBuffer => "ArrayBuffer",
            GlobalCtor::DataView => "DataView",
            GlobalCtor::Boolean => "Boolean",
            GlobalCtor::Number => "Number",
            GlobalCtor::String => "String",
        }
    }
}

/// The prototype of an object.
#[derive(Debug, Clone, Default)]
pub enum Proto {
    #[default]
    Plain,
    Global(GlobalCtor),
    Class(Rc<Class>),
}

impl PartialEq for Proto {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Proto::Plain, Proto::Plain) => true,
            (Proto::Global(a), Proto::Global(b)) => a == b,
            (Proto::Class(a), Proto::Class(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// ── Containers ────────────────────────────────────────────────────────────

/// An array, optionally of a user-defined array class.
#[derive(Debug, Clone, Default)]
pub struct Array {
    class: Option<Rc<Class>>,
    items: Vec<Value>,
    props: Props,
}

impl Array {
    pub fn new(items: Vec<Value>) -> Self {
        Array {
            class: None,
            items,
            props: Props::new(),
        }
    }

    /// An empty array of the same array class.
    pub fn empty_like(&self) -> Self {
        Array {
            class: self.class.clone(),
            items: Vec::new(),
            props: Props::new(),
        }
    }

    pub fn with_class(class: &Rc<Class>, items: Vec<Value>) -> Self {
        Array {
            class: Some(class.clone()),
            items,
            props: Props::new(),
        }
    }

    pub fn class(&self) -> Option<&Rc<Class>> {
        self.class.as_ref()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &Key) -> Value {
        if let Some(index) = key.as_index() {
            return self.items.get(index).cloned().unwrap_or_default();
        }
        if key.as_name() == Some("length") {
            return Value::Number(self.items.len() as f64);
        }
        let prop = PropKey::from(key);
        self.props
            .get(&prop)
            .or_else(|| self.class.as_ref().and_then(|c| c.lookup(&prop)))
            .cloned()
            .unwrap_or_default()
    }

    /// Writing past the end pads the gap with `undefined`. Integer keys past
    /// [`MAX_INDEX`] are named properties.
    pub fn set(&mut self, key: &Key, value: Value) {
        if let Some(index) = key.as_index() {
            let fits = index < self.items.len()
                || index.checked_add(1).is_some_and(|len| self.resize(len));
            if !fits {
                return;
            }
            self.items[index] = value;
            return;
        }
        if key.as_name() == Some("length") {
            match value.as_index() {
                Some(len) => {
                    self.resize(len);
                }
                None => log::trace!("ignoring invalid array length {value:?}"),
            }
            return;
        }
        self.props.insert(PropKey::from(key), value);
    }

    /// Truncate or pad with `undefined`. False when the slots cannot be
    /// allocated, leaving the items untouched.
    fn resize(&mut self, len: usize) -> bool {
        if let Some(additional) = len.checked_sub(self.items.len()) {
            if let Err(err) = self.items.try_reserve_exact(additional) {
                log::trace!("cannot grow array to {len} items: {err}");
                return false;
            }
        }
        self.items.resize(len, Value::Undefined);
        true
    }

    /// Index keys are spliced out, shifting later items left.
    pub fn delete(&mut self, key: &Key) {
        match key.as_index() {
            Some(index) if index < self.items.len() => {
                self.items.remove(index);
            }
            Some(_) => {}
            None => {
                self.props.shift_remove(&PropKey::from(key));
            }
        }
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.items.extend(values);
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        same_class(self.class.as_ref(), other.class.as_ref())
            && self.items == other.items
            && self.props == other.props
    }
}

/// An object: own properties plus a prototype.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    proto: Proto,
    props: Props,
}

impl Object {
    pub fn new(proto: Proto, props: Props) -> Self {
        Object { proto, props }
    }

    pub fn plain(props: Props) -> Self {
        Object {
            proto: Proto::Plain,
            props,
        }
    }

    pub fn proto(&self) -> &Proto {
        &self.proto
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn get(&self, key: &Key) -> Value {
        self.get_prop(&PropKey::from(key))
    }

    /// Own property, falling back to the class chain.
    pub fn get_prop(&self, key: &PropKey) -> Value {
        if let Some(value) = self.props.get(key) {
            return value.clone();
        }
        match &self.proto {
            Proto::Class(class) => class.lookup(key).cloned().unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    pub fn set(&mut self, key: &Key, value: Value) {
        self.props.insert(PropKey::from(key), value);
    }

    pub fn set_prop(&mut self, key: PropKey, value: Value) {
        self.props.insert(key, value);
    }

    pub fn delete(&mut self, key: &Key) {
        self.props.shift_remove(&PropKey::from(key));
    }
}

// ── Non-cloneable builtins ────────────────────────────────────────────────

/// A foreign element marker, e.g. a UI framework's element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub props: Props,
}

/// Objects the clone engine treats as opaque leaves.
#[derive(Debug, Clone)]
pub enum Builtin {
    /// Milliseconds since the Unix epoch.
    Date(f64),
    RegExp(Regex),
    Element(Element),
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Builtin::Date(a), Builtin::Date(b)) => a == b,
            (Builtin::RegExp(a), Builtin::RegExp(b)) => a.as_str() == b.as_str(),
            (Builtin::Element(a), Builtin::Element(b)) => a == b,
            _ => false,
        }
    }
}

// ── Functions ─────────────────────────────────────────────────────────────

pub type NativeFn = dyn Fn(&Value, &[Value]) -> Value;

/// A callable value. Receives the call context and the arguments.
#[derive(Clone)]
pub struct Function(Rc<NativeFn>);

impl Function {
    pub fn new(f: impl Fn(&Value, &[Value]) -> Value + 'static) -> Self {
        Function(Rc::new(f))
    }

    pub fn call(&self, context: &Value, args: &[Value]) -> Value {
        (self.0)(context, args)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

// ── Value ─────────────────────────────────────────────────────────────────

/// Any value: scalars, containers, opaque builtins and functions.
///
/// Cloning a `Value` never copies a container; it shares it.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Symbol(Symbol),
    Array(Rc<Array>),
    Object(Rc<Object>),
    Builtin(Rc<Builtin>),
    Function(Function),
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::String(Rc::from(s))
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Rc::new(Array::new(items.into_iter().collect())))
    }

    /// An array of a user-defined array class.
    pub fn array_of(class: &Rc<Class>, items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Rc::new(Array::with_class(
            class,
            items.into_iter().collect(),
        )))
    }

    pub fn object<K: Into<PropKey>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Rc::new(Object::plain(collect_props(entries))))
    }

    pub fn empty_object() -> Self {
        Value::Object(Rc::new(Object::default()))
    }

    pub fn empty_array() -> Self {
        Value::Array(Rc::new(Array::default()))
    }

    /// An instance of a user-defined class. No constructor runs.
    pub fn instance<K: Into<PropKey>>(
        class: &Rc<Class>,
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Object(Rc::new(Object::new(
            Proto::Class(class.clone()),
            collect_props(entries),
        )))
    }

    /// An instance of a builtin constructor such as `Map` or `Error`.
    pub fn global<K: Into<PropKey>>(
        ctor: GlobalCtor,
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Object(Rc::new(Object::new(
            Proto::Global(ctor),
            collect_props(entries),
        )))
    }

    pub fn date(millis: f64) -> Self {
        Value::Builtin(Rc::new(Builtin::Date(millis)))
    }

    pub fn regexp(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Value::Builtin(Rc::new(Builtin::RegExp(Regex::new(pattern)?))))
    }

    pub fn element<K: Into<PropKey>>(
        tag: impl Into<String>,
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Builtin(Rc::new(Builtin::Element(Element {
            tag: tag.into(),
            props: collect_props(entries),
        })))
    }

    pub fn function(f: impl Fn(&Value, &[Value]) -> Value + 'static) -> Self {
        Value::Function(Function::new(f))
    }

    // ── Classification ────────────────────────────────────────────────────

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""` are
    /// falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// A non-negative integral number no larger than [`MAX_INDEX`] as an
    /// index.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Value::Number(n)
                if *n >= 0.0 && *n <= MAX_INDEX as f64 && n.fract() == 0.0 =>
            {
                Some(*n as usize)
            }
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Builtin(builtin) => match **builtin {
                Builtin::Date(_) => "date",
                Builtin::RegExp(_) => "regexp",
                Builtin::Element(_) => "element",
            },
            Value::Function(_) => "function",
        }
    }

    // ── Identity ──────────────────────────────────────────────────────────

    /// Same allocation. Always false for scalars.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// SameValueZero: `NaN` equals itself and `+0` equals `-0`; strings
    /// compare by content; containers, builtins and functions by identity.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            _ => self.ptr_eq(other),
        }
    }

    // ── Property access ───────────────────────────────────────────────────

    /// `value[key]`: own properties first, then the class chain. Strings
    /// expose their characters and `length`. Missing properties and
    /// properties of scalars are `undefined`.
    pub fn property(&self, key: &Key) -> Value {
        match self {
            Value::Array(array) => array.get(key),
            Value::Object(object) => object.get(key),
            Value::String(s) => string_property(s, key),
            Value::Builtin(builtin) => match &**builtin {
                Builtin::Element(element) => element
                    .props
                    .get(&PropKey::from(key))
                    .cloned()
                    .unwrap_or_default(),
                _ => Value::Undefined,
            },
            _ => Value::Undefined,
        }
    }

    /// The property key this value names when used as a key.
    pub fn to_key(&self) -> Key {
        match self {
            Value::Symbol(symbol) => Key::Symbol(symbol.clone()),
            Value::String(s) => Key::Name(s.clone()),
            Value::Number(_) => match self.as_index() {
                Some(index) => Key::Index(index),
                None => Key::from(self.to_display_string()),
            },
            other => Key::from(other.to_display_string()),
        }
    }

    /// String conversion of scalars; containers render as a type tag.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::String(s) => s.to_string(),
            Value::Symbol(symbol) => format!("{symbol:?}"),
            Value::Array(array) => array
                .items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    item => item.to_display_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Builtin(builtin) => match &**builtin {
                Builtin::Date(ms) => number_to_string(*ms),
                Builtin::RegExp(re) => format!("/{}/", re.as_str()),
                Builtin::Element(element) => format!("<{}>", element.tag),
            },
            Value::Function(_) => "[Function]".to_string(),
        }
    }
}

fn collect_props<K: Into<PropKey>>(entries: impl IntoIterator<Item = (K, Value)>) -> Props {
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect()
}

fn string_property(s: &str, key: &Key) -> Value {
    if let Some(index) = key.as_index() {
        return match s.chars().nth(index) {
            Some(c) => Value::String(Rc::from(c.to_string())),
            None => Value::Undefined,
        };
    }
    if key.as_name() == Some("length") {
        return Value::Number(s.chars().count() as f64);
    }
    Value::Undefined
}

pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

/// Deep structural equality. Containers compare by content, functions and
/// symbols by identity. Use [`Value::ptr_eq`] for identity of containers.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b) || a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b) || a == b,
            (Value::Builtin(a), Value::Builtin(b)) => Rc::ptr_eq(a, b) || a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&number_to_string(*n)),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(symbol) => write!(f, "{symbol:?}"),
            Value::Array(array) => {
                if let Some(class) = &array.class {
                    write!(f, "{} ", class.name())?;
                }
                f.debug_list().entries(array.items.iter()).finish()
            }
            Value::Object(object) => {
                match &object.proto {
                    Proto::Plain => {}
                    Proto::Global(ctor) => write!(f, "{} ", ctor.name())?,
                    Proto::Class(class) => write!(f, "{} ", class.name())?,
                }
                f.debug_map().entries(object.props.iter()).finish()
            }
            Value::Builtin(builtin) => match &**builtin {
                Builtin::Date(ms) => write!(f, "Date({})", number_to_string(*ms)),
                Builtin::RegExp(re) => write!(f, "/{}/", re.as_str()),
                Builtin::Element(element) => {
                    write!(f, "<{}> ", element.tag)?;
                    f.debug_map().entries(element.props.iter()).finish()
                }
            },
            Value::Function(func) => write!(f, "{func:?}"),
        }
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(Rc::new(array))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(Rc::new(object))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(Array::new(items)))
    }
}
