//! Autofixture
//!
//! Spec-driven test data generation. Given a template record and a spec map
//! such as
//!
//! ```yaml
//! id: integer in <1, 100000>
//! firstName: string[10]
//! address:
//!   number: integer > 0
//! ```
//!
//! the generator produces records of the same shape whose values honor every
//! spec.
//!
//! # Crates
//!
//! - `fixture_core` - value model, field spec parser, spec maps
//! - `fixture_generator` - the [`Autofixture`] generator
//! - `contacts` - contact records, repository and service built on top
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate three records from a JSON template
//! autofixture generate --template contact.json --spec contact.yaml --seed 42
//!
//! # Check a field spec
//! autofixture check "integer in <4, 8>"
//!
//! # Populate an in-memory contact store and dump it
//! autofixture contacts --count 5
//! ```

pub mod commands;

// Re-export the workspace crates for convenience
pub use contacts;
pub use fixture_core;
pub use fixture_generator;
pub use fixture_generator::Autofixture;
