//! Core types for the autofixture framework.
//!
//! This crate provides the foundational types shared by the generator and
//! its callers:
//!
//! - [`Value`] / [`Record`] - Template and instance representation
//! - [`FieldSpec`] - Typed AST of the field spec language (`"integer in <4,8>"`)
//! - [`SpecMap`] - Per-field specs bound to a generator, loadable from YAML
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-generator  (compiles SpecMap + template into a plan)
//!    │
//!    └─── contacts           (domain records built through the generator)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Bounds, FieldSpec};
//!
//! let spec: FieldSpec = "integer in <4, 8>".parse().unwrap();
//! assert_eq!(spec, FieldSpec::Integer(Bounds::Between(4, 8)));
//! ```

pub mod spec;
pub mod spec_map;
pub mod values;

// Re-exports for convenience
pub use spec::{Bounds, FieldSpec, SpecError, SpecKind};
pub use spec_map::{SpecEntry, SpecMap, SpecMapError};
pub use values::{Record, Value, ValueKind};
