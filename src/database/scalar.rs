use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed request or result value.
///
/// Request bodies send ids and amounts as numbers or strings; the procedure
/// decides how to coerce them, so the value is passed through as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// A field counts as filled when it is present, not null and not `""`.
pub fn is_filled(field: &Option<Scalar>) -> bool {
    field.as_ref().is_some_and(|v| !v.is_blank())
}

pub fn all_filled(fields: &[&Option<Scalar>]) -> bool {
    fields.iter().all(|field| is_filled(field))
}
