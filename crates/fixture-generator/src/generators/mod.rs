//! Individual value generators for the primitive spec kinds.
//!
//! This module provides the generation logic for each [`FieldSpec`] once the
//! spec has been parsed and checked against its field.

pub mod numeric;
pub mod text;

use fixture_core::{FieldSpec, Value};
use rand::Rng;

/// Trait for generating values.
pub trait ValueGenerator {
    /// Generate a value using the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> Value;
}

impl ValueGenerator for FieldSpec {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        generate_value(self, rng)
    }
}

/// Generate a value based on a parsed field spec.
pub fn generate_value<R: Rng>(spec: &FieldSpec, rng: &mut R) -> Value {
    match spec {
        FieldSpec::Boolean => Value::Bool(rng.gen_bool(0.5)),

        FieldSpec::String { length } => {
            text::generate_string(rng, length.unwrap_or(text::DEFAULT_STRING_LENGTH))
        }

        FieldSpec::Number(bounds) => numeric::generate_number(rng, bounds),

        FieldSpec::Integer(bounds) => numeric::generate_integer(rng, bounds),
    }
}
