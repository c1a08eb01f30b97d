//! Contact records and the layers that manage them.
//!
//! - [`Contact`] - validated contact value type
//! - [`ContactRepository`] - storage capability, with [`InMemoryContactRepository`]
//! - [`ContactService`] - business layer, with [`RepositoryContactService`]
//! - [`ContactFixture`] - random valid contacts for tests and demos, built
//!   through the autofixture generator
//!
//! ```text
//! ContactService ──▶ ContactRepository ──▶ BTreeMap<u64, Contact>
//! ```

pub mod contact;
pub mod error;
pub mod fixture;
pub mod repository;
pub mod service;

pub use contact::Contact;
pub use error::{ContactError, Result, ValidationError};
pub use fixture::ContactFixture;
pub use repository::{ContactRepository, InMemoryContactRepository};
pub use service::{ContactService, RepositoryContactService};
