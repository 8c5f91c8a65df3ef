use crate::error::AttributeError;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// The value-type tag of an attribute. Values are only ever compared against values of the same
/// key, and therefore of the same type.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AttributeType {
    String,
    Boolean,
    Integer,
    /// Enum-like named values, e.g. `java-api`
    Named,
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttributeType::String => "string",
            AttributeType::Boolean => "boolean",
            AttributeType::Integer => "integer",
            AttributeType::Named => "named",
        };
        f.write_str(name)
    }
}

/// Identifies an attribute by its name and value type. Ordering is by name first, which is the
/// order used for all rendered output.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AttributeKey {
    name: String,
    value_type: AttributeType,
}

impl AttributeKey {
    pub fn new(name: impl Into<String>, value_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Named)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> AttributeType {
        self.value_type
    }
}

impl Display for AttributeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.name, self.value_type)
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Integer(i64),
    Named(String),
}

impl Value {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            Value::String(_) => AttributeType::String,
            Value::Boolean(_) => AttributeType::Boolean,
            Value::Integer(_) => AttributeType::Integer,
            Value::Named(_) => AttributeType::Named,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Named(s) => Some(s),
            Value::Boolean(_) | Value::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) | Value::Named(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
        }
    }
}

/// A typed key/value pair. The value is guaranteed to match the key's type.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct AttributeValue {
    key: AttributeKey,
    value: Value,
}

impl AttributeValue {
    pub fn new(key: AttributeKey, value: Value) -> Result<Self, AttributeError> {
        if key.value_type != value.attribute_type() {
            return Err(AttributeError::TypeMismatch {
                key: key.name,
                expected: key.value_type,
                actual: value.attribute_type(),
            });
        }

        Ok(Self { key, value })
    }

    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: AttributeKey::new(name, AttributeType::Named),
            value: Value::Named(value.into()),
        }
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: AttributeKey::new(name, AttributeType::String),
            value: Value::String(value.into()),
        }
    }

    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self {
            key: AttributeKey::new(name, AttributeType::Boolean),
            value: Value::Boolean(value),
        }
    }

    pub fn integer(name: impl Into<String>, value: i64) -> Self {
        Self {
            key: AttributeKey::new(name, AttributeType::Integer),
            value: Value::Integer(value),
        }
    }

    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key.name, self.value)
    }
}

/// An insertion-ordered set of attribute values, at most one per key.
///
/// Insertion order only makes output reproducible; two sets holding the same values compare equal
/// regardless of the order they were built in.
#[derive(Clone, Debug, Default)]
pub struct AttributeSet {
    values: Vec<AttributeValue>,
}

/// The attributes a consumer asked for, shared by every candidate assessed against them.
pub type RequestedAttributes = Arc<AttributeSet>;

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(
        values: impl IntoIterator<Item = AttributeValue>,
    ) -> Result<Self, AttributeError> {
        let mut set = Self::new();
        for value in values {
            set.insert(value)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, value: AttributeValue) -> Result<(), AttributeError> {
        if self.contains_key(value.key()) {
            return Err(AttributeError::DuplicateKey(value.key));
        }

        self.values.push(value);
        Ok(())
    }

    /// Builder-style [`AttributeSet::insert`]
    pub fn with(mut self, value: AttributeValue) -> Result<Self, AttributeError> {
        self.insert(value)?;
        Ok(self)
    }

    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.values.iter().find(|v| v.key() == key)
    }

    pub fn contains_key(&self, key: &AttributeKey) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &AttributeKey> + '_ {
        self.values.iter().map(|v| v.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeValue> + '_ {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values of this set sorted by key name
    pub fn sorted(&self) -> Vec<&AttributeValue> {
        self.values.iter().sorted_by(|a, b| a.key().cmp(b.key())).collect()
    }
}

impl PartialEq for AttributeSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .all(|v| other.get(v.key()).map_or(false, |o| o == v))
    }
}

impl Eq for AttributeSet {}

impl FromIterator<AttributeValue> for AttributeSet {
    /// Collects values, keeping the last value seen for a repeated key.
    fn from_iter<T: IntoIterator<Item = AttributeValue>>(iter: T) -> Self {
        let mut set = Self::new();
        for value in iter {
            match set.values.iter_mut().find(|v| v.key() == value.key()) {
                Some(existing) => *existing = value,
                None => set.values.push(value),
            }
        }
        set
    }
}
