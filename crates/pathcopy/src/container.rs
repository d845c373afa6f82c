//! Owned, mutable containers.
//!
//! A [`Container`] is the freshly allocated copy the clone engine writes into.
//! It becomes shared (and immutable) again through [`Container::into_value`].

use pathcopy_path::Key;

use crate::value::{Array, Object, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    Array(Array),
    Object(Object),
}

impl Container {
    pub fn is_array(&self) -> bool {
        matches!(self, Container::Array(_))
    }

    /// `container[key]`, including inherited class members.
    pub fn get(&self, key: &Key) -> Value {
        match self {
            Container::Array(array) => array.get(key),
            Container::Object(object) => object.get(key),
        }
    }

    /// `container[key] = value`.
    pub fn set(&mut self, key: &Key, value: Value) {
        match self {
            Container::Array(array) => array.set(key, value),
            Container::Object(object) => object.set(key, value),
        }
    }

    /// Splices an index out of an array; deletes a property from an object.
    pub fn delete(&mut self, key: &Key) {
        match self {
            Container::Array(array) => array.delete(key),
            Container::Object(object) => object.delete(key),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Container::Array(array) => Value::from(array),
            Container::Object(object) => Value::from(object),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_container_roundtrip() {
        let mut container = Container::Object(Object::default());
        container.set(&Key::name("a"), Value::from(1));
        container.set(&Key::Index(0), Value::from("zero"));
        assert_eq!(container.get(&Key::name("0")), Value::from("zero"));

        container.delete(&Key::name("a"));
        assert!(container.get(&Key::name("a")).is_undefined());
        assert_eq!(
            container.into_value(),
            Value::object([("0", Value::from("zero"))])
        );
    }

    #[test]
    fn test_array_container_delete() {
        let mut container = Container::Array(Array::new(vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
        ]));
        assert!(container.is_array());
        container.delete(&Key::Index(1));
        assert_eq!(
            container.into_value(),
            Value::array([Value::from(1), Value::from(3)])
        );
    }
}
