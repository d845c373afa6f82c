//! Conversions between [`Value`] and `serde_json::Value`.

use serde_json::{Map, Number, Value as JsonValue};

use crate::value::{Array, Builtin, Object, PropKey, Props, Value};

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::string(s),
            JsonValue::Array(items) => {
                Value::from(Array::new(items.iter().map(Value::from).collect()))
            }
            JsonValue::Object(map) => Value::from(Object::plain(
                map.iter()
                    .map(|(key, value)| (PropKey::name(key), Value::from(value)))
                    .collect(),
            )),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        Value::from(&json)
    }
}

impl Value {
    /// Convert to JSON.
    ///
    /// `undefined` properties are skipped and `undefined` array slots become
    /// `null`. Integral numbers become JSON integers; `NaN` and infinities,
    /// symbols and functions become `null`. Dates become their millisecond
    /// timestamp, elements their properties, regexes an empty object. Symbol
    /// keyed properties are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use pathcopy::Value;
    /// use serde_json::json;
    ///
    /// let value = Value::from(json!({"a": [1, 2.5, null]}));
    /// assert_eq!(value.to_json(), json!({"a": [1, 2.5, null]}));
    /// ```
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Undefined | Value::Null | Value::Symbol(_) | Value::Function(_) => {
                JsonValue::Null
            }
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => JsonValue::String(s.to_string()),
            Value::Array(array) => {
                JsonValue::Array(array.items().iter().map(Value::to_json).collect())
            }
            Value::Object(object) => props_to_json(object.props()),
            Value::Builtin(builtin) => match &**builtin {
                Builtin::Date(ms) => number_to_json(*ms),
                Builtin::RegExp(_) => JsonValue::Object(Map::new()),
                Builtin::Element(element) => props_to_json(&element.props),
            },
        }
    }
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return JsonValue::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}

fn props_to_json(props: &Props) -> JsonValue {
    let map = props
        .iter()
        .filter(|(_, value)| !value.is_undefined())
        .filter_map(|(key, value)| match key {
            PropKey::Name(name) => Some((name.to_string(), value.to_json())),
            PropKey::Symbol(_) => None,
        })
        .collect::<Map<_, _>>();
    JsonValue::Object(map)
}
