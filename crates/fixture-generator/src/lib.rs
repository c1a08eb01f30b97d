//! Spec-driven test data generator.
//!
//! This crate provides the [`Autofixture`] generator, which populates copies
//! of a template record with random values honoring a [`SpecMap`]. The
//! generator uses an injectable RNG, so a seeded generator produces the same
//! records on every run.
//!
//! # Architecture
//!
//! ```text
//! SpecMap + template Record
//!        │
//!        ▼  compile (all validation happens here)
//! ┌─────────────────┐
//! │   RecordPlan    │
//! │                 │
//! │  - Primitive    │
//! │  - Nested       │
//! │  - RecordArray  │
//! └────────┬────────┘
//!          │  generate (infallible)
//!          ▼
//!       Record
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Record, SpecMap, Value};
//! use fixture_generator::Autofixture;
//!
//! let template = Record::new()
//!     .with_field("label", "fixed")
//!     .with_field("nested", Record::new().with_field("value", 0.0));
//! let specs = SpecMap::new()
//!     .nested("nested", SpecMap::new().field("value", "integer in <4,6>"));
//!
//! let mut fixture = Autofixture::seeded(specs, 42);
//! let record = fixture.generate(&template).unwrap();
//!
//! let value = record.get("nested").and_then(Value::as_object)
//!     .and_then(|nested| nested.get("value")).and_then(Value::as_i64).unwrap();
//! assert!((4..=6).contains(&value));
//! ```
//!
//! # Generators
//!
//! - `boolean` - fair coin
//! - `string` / `string[N]` - alphanumeric, default length 10
//! - `number` - reals, inclusive bounds, default window of 1000
//! - `integer` - whole numbers, inclusive bounds, default window of 1000

pub mod generator;
pub mod generators;
pub mod plan;

// Re-exports for convenience
pub use generator::{Autofixture, FixtureError, RecordIterator, DEFAULT_REPEAT_COUNT};
pub use plan::{FieldPlan, RecordPlan};
