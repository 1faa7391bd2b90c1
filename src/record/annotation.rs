//! Annotations attached to an alignment record.

/// The annotation key under which the sample name is stored.
pub const SAMPLE_KEY: &str = "sample";

/// The annotation key under which the haplotype frequency is stored.
pub const FREQUENCY_KEY: &str = "frequency";

/// An annotation value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// A free-text value.
    Text(String),

    /// An integer value.
    Integer(u64),
}

impl Value {
    /// Returns the inner text if the value is free-text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Integer(_) => None,
        }
    }

    /// Returns the inner integer if the value is an integer.
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Value::Text(_) => None,
            Value::Integer(n) => Some(*n),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text}"),
            Value::Integer(n) => write!(f, "{n}"),
        }
    }
}
