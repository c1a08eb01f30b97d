//! Main autofixture generator.

use crate::plan::RecordPlan;
use fixture_core::{Record, SpecError, SpecMap, Value, ValueKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Number of elements generated for an array-of-records field, and the
/// conventional count for [`Autofixture::generate_many`].
pub const DEFAULT_REPEAT_COUNT: usize = 3;

/// Error type for generator operations.
///
/// Every variant aborts the whole generation call; no partially generated
/// record is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Spec map names a field the template does not have
    #[error("Autofixture specifies field '{field}' that is not in the type")]
    Configuration { field: String },

    /// Spec kind does not match the field's runtime type
    #[error("AutoFixture spec '{spec}' not compatible with type '{value_type}'")]
    Compatibility { spec: String, value_type: ValueKind },

    /// Spec string could not be parsed
    #[error(transparent)]
    Format(#[from] SpecError),

    /// Field of a type with no generation rule and no spec
    #[error("Autofixture cannot generate values of type '{value_type}' for field '{field}'")]
    UnsupportedType { field: String, value_type: ValueKind },

    /// Typed template did not serialize to a record
    #[error("Autofixture template must be a record, got '{0}'")]
    NotARecord(ValueKind),

    /// Converting a typed template to or from a record failed
    #[error("Failed to convert generated record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Generator that populates copies of a template with random values.
///
/// The generator holds the spec map bound at construction and its RNG; it
/// keeps no other state between calls. Seed it (or pass your own RNG) for
/// reproducible output.
pub struct Autofixture<R = StdRng> {
    /// Specs bound to this generator
    specs: SpecMap,
    /// Random source for every generated value
    rng: R,
}

impl Autofixture<StdRng> {
    /// Create a generator without specs: every field is unconstrained.
    pub fn new() -> Self {
        Self::with_specs(SpecMap::new())
    }

    /// Create a generator for the given specs, seeded from OS entropy.
    pub fn with_specs(specs: SpecMap) -> Self {
        Self::with_rng(specs, StdRng::from_entropy())
    }

    /// Create a deterministic generator for the given specs and seed.
    pub fn seeded(specs: SpecMap, seed: u64) -> Self {
        Self::with_rng(specs, StdRng::seed_from_u64(seed))
    }
}

impl Default for Autofixture<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Autofixture<R> {
    /// Create a generator using the given random source.
    pub fn with_rng(specs: SpecMap, rng: R) -> Self {
        Self { specs, rng }
    }

    /// Get a reference to the bound specs.
    pub fn specs(&self) -> &SpecMap {
        &self.specs
    }

    /// Validate the bound specs against `template` and build a generation plan.
    pub fn compile(&self, template: &Record) -> Result<RecordPlan, FixtureError> {
        let plan = RecordPlan::compile(template, &self.specs)?;
        tracing::debug!(
            fields = plan.len(),
            specs = self.specs.len(),
            "Compiled autofixture plan"
        );
        Ok(plan)
    }

    /// Generate a new record with the same shape as `template`.
    ///
    /// The template is only read; the result is an independent copy.
    pub fn generate(&mut self, template: &Record) -> Result<Record, FixtureError> {
        let plan = self.compile(template)?;
        Ok(plan.generate(&mut self.rng))
    }

    /// Generate `count` independent records from `template`.
    pub fn generate_many(
        &mut self,
        template: &Record,
        count: usize,
    ) -> Result<Vec<Record>, FixtureError> {
        Ok(self.records(template, count)?.collect())
    }

    /// Compile once and lazily generate `count` records.
    pub fn records(
        &mut self,
        template: &Record,
        count: usize,
    ) -> Result<RecordIterator<'_, R>, FixtureError> {
        let plan = self.compile(template)?;
        Ok(RecordIterator {
            plan,
            rng: &mut self.rng,
            remaining: count,
        })
    }

    /// Generate a new value of a serde type, using `template` for its shape.
    ///
    /// Field names in the spec map are the serialized names (so a
    /// `#[serde(rename_all = "camelCase")]` struct uses camelCase specs).
    pub fn create<T>(&mut self, template: &T) -> Result<T, FixtureError>
    where
        T: Serialize + DeserializeOwned,
    {
        let record = to_record(template)?;
        let generated = self.generate(&record)?;
        from_record(generated)
    }

    /// Generate `count` new values of a serde type.
    pub fn create_many<T>(&mut self, template: &T, count: usize) -> Result<Vec<T>, FixtureError>
    where
        T: Serialize + DeserializeOwned,
    {
        let record = to_record(template)?;
        self.records(&record, count)?.map(from_record).collect()
    }
}

fn to_record<T: Serialize>(template: &T) -> Result<Record, FixtureError> {
    match Value::from(serde_json::to_value(template)?) {
        Value::Object(record) => Ok(record),
        other => Err(FixtureError::NotARecord(other.kind())),
    }
}

fn from_record<T: DeserializeOwned>(record: Record) -> Result<T, FixtureError> {
    let json: serde_json::Value = Value::Object(record).into();
    Ok(serde_json::from_value(json)?)
}

/// Iterator that lazily generates records from a compiled plan.
pub struct RecordIterator<'a, R> {
    plan: RecordPlan,
    rng: &'a mut R,
    remaining: usize,
}

impl<R: Rng> Iterator for RecordIterator<'_, R> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let record = self.plan.generate(&mut *self.rng);
        tracing::trace!(remaining = self.remaining, "Generated record");
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RecordIterator<'_, R> {}
