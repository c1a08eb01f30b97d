//! String value generator.

use fixture_core::Value;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of strings generated from a bare `string` spec.
pub const DEFAULT_STRING_LENGTH: usize = 10;

/// Generate an alphanumeric string of exactly `length` characters.
pub fn generate_string<R: Rng>(rng: &mut R, length: usize) -> Value {
    let s: String = (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    Value::String(s)
}
