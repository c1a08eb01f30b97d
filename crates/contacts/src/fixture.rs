//! Random contacts for tests and demos.

use crate::contact::Contact;
use crate::error::Result;
use fixture_core::SpecMap;
use fixture_generator::{Autofixture, DEFAULT_REPEAT_COUNT};
use rand::rngs::StdRng;
use rand::Rng;

/// Builds random, valid contacts.
///
/// Every [`build`](ContactFixture::build) draws fresh values. Values set with
/// the `with_*` methods replace the random ones for the next build only.
pub struct ContactFixture<R = StdRng> {
    fixture: Autofixture<R>,
    id: Option<u64>,
    first_name: Option<String>,
    last_name: Option<String>,
    star: Option<bool>,
}

impl ContactFixture<StdRng> {
    pub fn new() -> Self {
        Self::from_fixture(Autofixture::with_specs(contact_specs()))
    }

    /// Create a deterministic fixture.
    pub fn seeded(seed: u64) -> Self {
        Self::from_fixture(Autofixture::seeded(contact_specs(), seed))
    }
}

impl Default for ContactFixture<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids are positive, names have ten characters.
fn contact_specs() -> SpecMap {
    SpecMap::new()
        .field("id", "integer in <1,100000>")
        .field("firstName", "string[10]")
        .field("lastName", "string[10]")
        .field("star", "boolean")
}

fn template() -> Contact {
    Contact {
        id: 0,
        first_name: "first".to_string(),
        last_name: "last".to_string(),
        star: false,
    }
}

impl<R: Rng> ContactFixture<R> {
    /// Create a fixture drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self::from_fixture(Autofixture::with_rng(contact_specs(), rng))
    }

    fn from_fixture(fixture: Autofixture<R>) -> Self {
        Self {
            fixture,
            id: None,
            first_name: None,
            last_name: None,
            star: None,
        }
    }

    pub fn with_id(&mut self, id: u64) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn with_first_name(&mut self, first_name: impl Into<String>) -> &mut Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(&mut self, last_name: impl Into<String>) -> &mut Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_star(&mut self, star: bool) -> &mut Self {
        self.star = Some(star);
        self
    }

    /// Build one contact, consuming any pending overrides.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` if an override makes the contact
    /// invalid (an empty name).
    pub fn build(&mut self) -> Result<Contact> {
        let id = self.id.take();
        let first_name = self.first_name.take();
        let last_name = self.last_name.take();
        let star = self.star.take();

        let generated = self.fixture.create(&template())?;

        let contact = Contact::new(
            id.unwrap_or(generated.id),
            first_name.unwrap_or(generated.first_name),
            last_name.unwrap_or(generated.last_name),
            star.unwrap_or(generated.star),
        )?;
        Ok(contact)
    }

    /// Build three contacts.
    pub fn build_many(&mut self) -> Result<Vec<Contact>> {
        (0..DEFAULT_REPEAT_COUNT).map(|_| self.build()).collect()
    }
}
