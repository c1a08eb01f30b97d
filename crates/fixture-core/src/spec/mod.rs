//! The field spec language.
//!
//! A field spec is a short string describing how to generate one field:
//!
//! | Spec                  | Meaning                                  |
//! |-----------------------|------------------------------------------|
//! | `boolean`             | fair coin                                |
//! | `string`              | alphanumeric string of default length    |
//! | `string[N]`           | alphanumeric string of exactly N chars   |
//! | `number` / `integer`  | unconstrained value of that kind         |
//! | `number > X`          | at least X                               |
//! | `number < X`          | at most X                                |
//! | `number in <A,B>`     | between A and B, both ends included      |
//!
//! The same bound forms apply to `integer`, whose literals must be whole.
//! Whitespace between tokens is ignored.
//!
//! Parsing happens in two stages: [`lexer`] turns the raw string into tokens
//! and [`parser`] turns the tokens into a [`FieldSpec`]. Checking a spec
//! against the type of the field it is bound to is a separate concern handled
//! through [`SpecKind`], which only looks at the leading keyword.

pub mod lexer;
pub mod parser;

use crate::values::ValueKind;
use std::fmt;
use std::str::FromStr;

/// Error type for field spec parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecError {
    /// Spec does not start with a known kind keyword
    #[error("Unknown autofixture spec kind: '{0}'")]
    UnknownKind(String),

    #[error("Invalid boolean autofixture spec: '{0}'")]
    InvalidBoolean(String),

    #[error("Invalid string autofixture spec: '{0}'")]
    InvalidString(String),

    /// Malformed `number` or `integer` spec
    #[error("Invalid number autofixture spec: '{0}'")]
    InvalidNumber(String),

    /// An `integer` spec carrying a literal with a fractional part
    #[error("Invalid integer autofixture spec contains real value: {0}")]
    IntegerRealValue(String),
}

/// The kind of value a spec generates, read from its leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecKind {
    Boolean,
    String,
    Number,
    Integer,
}

impl SpecKind {
    /// Classify a raw spec by its keyword prefix, ignoring surrounding whitespace.
    pub fn classify(raw: &str) -> Option<SpecKind> {
        let trimmed = raw.trim();
        [
            SpecKind::Boolean,
            SpecKind::String,
            SpecKind::Number,
            SpecKind::Integer,
        ]
        .into_iter()
        .find(|kind| trimmed.starts_with(kind.keyword()))
    }

    /// The keyword that introduces a spec of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            SpecKind::Boolean => "boolean",
            SpecKind::String => "string",
            SpecKind::Number => "number",
            SpecKind::Integer => "integer",
        }
    }

    /// Whether values of this spec kind can be assigned to a field of `kind`.
    pub fn is_compatible_with(&self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (SpecKind::Boolean, ValueKind::Boolean)
                | (SpecKind::String, ValueKind::String)
                | (SpecKind::Number | SpecKind::Integer, ValueKind::Number)
        )
    }

    /// The general format error for a malformed spec of this kind.
    pub(crate) fn format_error(&self, raw: &str) -> SpecError {
        let raw = raw.to_string();
        match self {
            SpecKind::Boolean => SpecError::InvalidBoolean(raw),
            SpecKind::String => SpecError::InvalidString(raw),
            SpecKind::Number | SpecKind::Integer => SpecError::InvalidNumber(raw),
        }
    }
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Numeric constraint of a `number` or `integer` spec. All bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds<T> {
    Unbounded,
    /// `> X`
    AtLeast(T),
    /// `< X`
    AtMost(T),
    /// `in <A,B>`
    Between(T, T),
}

impl<T> Bounds<T> {
    /// Convert every bound with a fallible function.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<Bounds<U>, E> {
        Ok(match self {
            Bounds::Unbounded => Bounds::Unbounded,
            Bounds::AtLeast(x) => Bounds::AtLeast(f(x)?),
            Bounds::AtMost(x) => Bounds::AtMost(f(x)?),
            Bounds::Between(a, b) => {
                let a = f(a)?;
                Bounds::Between(a, f(b)?)
            }
        })
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bounds::Unbounded => Ok(()),
            Bounds::AtLeast(x) => write!(f, " > {x}"),
            Bounds::AtMost(x) => write!(f, " < {x}"),
            Bounds::Between(a, b) => write!(f, " in <{a},{b}>"),
        }
    }
}

/// Parsed field spec.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    Boolean,
    /// `None` means the default length
    String { length: Option<usize> },
    Number(Bounds<f64>),
    Integer(Bounds<i64>),
}

impl FieldSpec {
    /// Parse a raw spec string.
    pub fn parse(raw: &str) -> Result<FieldSpec, SpecError> {
        parser::parse(raw)
    }

    pub fn kind(&self) -> SpecKind {
        match self {
            FieldSpec::Boolean => SpecKind::Boolean,
            FieldSpec::String { .. } => SpecKind::String,
            FieldSpec::Number(_) => SpecKind::Number,
            FieldSpec::Integer(_) => SpecKind::Integer,
        }
    }

    /// The unconstrained spec used for an unspecified field of the given kind.
    ///
    /// Returns `None` for kinds without a primitive generation rule.
    pub fn default_for(kind: ValueKind) -> Option<FieldSpec> {
        match kind {
            ValueKind::Boolean => Some(FieldSpec::Boolean),
            ValueKind::String => Some(FieldSpec::String { length: None }),
            ValueKind::Number => Some(FieldSpec::Number(Bounds::Unbounded)),
            _ => None,
        }
    }
}

impl FromStr for FieldSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldSpec::parse(s)
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpec::Boolean => f.write_str("boolean"),
            FieldSpec::String { length: None } => f.write_str("string"),
            FieldSpec::String { length: Some(n) } => write!(f, "string[{n}]"),
            FieldSpec::Number(bounds) => write!(f, "number{bounds}"),
            FieldSpec::Integer(bounds) => write!(f, "integer{bounds}"),
        }
    }
}
