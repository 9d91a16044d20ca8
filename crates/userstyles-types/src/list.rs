//! Lists with a minimum length.
//!
//! The catalog contract has several tuple-shaped fields (`[T, ...T[]]`,
//! `[T, T, ...T[]]`). They are modelled as a `Vec<T>` whose length is checked at
//! construction and again on deserialization, so a value of these types always
//! satisfies its bound.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::ops::Deref;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected at least {min} item(s), found {actual}")]
pub struct ListLengthError {
    pub min: usize,
    pub actual: usize,
}

/// A `Vec<T>` holding at least `N` items.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MinItems<T, const N: usize>(Vec<T>);

/// `[T, ...T[]]`
pub type NonEmpty<T> = MinItems<T, 1>;

/// `[T, T, ...T[]]`
pub type AtLeastTwo<T> = MinItems<T, 2>;

impl<T, const N: usize> MinItems<T, N> {
    pub const MIN: usize = N;

    /// Every value is built here, so `MinItems<T, 0>` fails to compile.
    pub fn new(items: Vec<T>) -> Result<Self, ListLengthError> {
        const { assert!(N >= 1, "MinItems needs a minimum of at least one item") };
        if items.len() < N {
            return Err(ListLengthError {
                min: N,
                actual: items.len(),
            });
        }
        Ok(Self(items))
    }

    /// The first item.
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// Everything after the first item.
    pub fn rest(&self) -> &[T] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }
}

impl<T, const N: usize> Deref for MinItems<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for MinItems<T, N> {
    type Error = ListLengthError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<T, const N: usize> From<MinItems<T, N>> for Vec<T> {
    fn from(value: MinItems<T, N>) -> Self {
        value.0
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a MinItems<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> IntoIterator for MinItems<T, N> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Serialize, const N: usize> Serialize for MinItems<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for MinItems<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}

impl<T: JsonSchema, const N: usize> JsonSchema for MinItems<T, N> {
    fn schema_name() -> Cow<'static, str> {
        format!("MinItems{}_{}", N, T::schema_name()).into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "array",
            "items": generator.subschema_for::<T>(),
            "minItems": N,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_lists() {
        let err = AtLeastTwo::new(vec!["only".to_string()]).unwrap_err();
        assert_eq!(err, ListLengthError { min: 2, actual: 1 });
        assert!(NonEmpty::<u8>::new(Vec::new()).is_err());
    }

    #[test]
    fn first_and_rest_split_the_list() {
        let list = AtLeastTwo::new(vec!["a", "b", "c"]).expect("three items");
        assert_eq!(*list.first(), "a");
        assert_eq!(list.rest(), &["b", "c"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn single_item_list_has_empty_rest() {
        let list = NonEmpty::new(vec![7u8]).expect("one item");
        assert_eq!(*list.first(), 7);
        assert!(list.rest().is_empty());
        assert_eq!(NonEmpty::<u8>::MIN, 1);
    }

    #[test]
    fn deserialization_enforces_minimum() {
        let ok: NonEmpty<u32> = serde_json::from_str("[1]").expect("one item");
        assert_eq!(ok.as_slice(), &[1]);

        let err = serde_json::from_str::<NonEmpty<u32>>("[]").unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn schema_carries_min_items() {
        let schema = schemars::schema_for!(AtLeastTwo<String>);
        let value = serde_json::to_value(&schema).expect("schema json");
        assert_eq!(value["type"], "array");
        assert_eq!(value["minItems"], 2);
    }
}
