//! Generation plans.
//!
//! A [`RecordPlan`] is a template and a spec map checked against each other
//! and resolved into one rule per field. Every error a generation call can
//! raise is raised while compiling the plan, so generating from a plan
//! cannot fail and never leaves a half-populated record behind.

use crate::generator::{FixtureError, DEFAULT_REPEAT_COUNT};
use crate::generators::ValueGenerator;
use fixture_core::{Bounds, FieldSpec, Record, SpecEntry, SpecKind, SpecMap, Value};
use rand::Rng;

/// Generation rule for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPlan {
    /// Boolean, number or string field
    Primitive(FieldSpec),

    /// Nested record
    Nested(RecordPlan),

    /// Array of records, regenerated with `count` fresh elements
    RecordArray { element: RecordPlan, count: usize },
}

impl FieldPlan {
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        match self {
            FieldPlan::Primitive(spec) => spec.generate(rng),
            FieldPlan::Nested(plan) => Value::Object(plan.generate(rng)),
            FieldPlan::RecordArray { element, count } => Value::Array(
                (0..*count)
                    .map(|_| Value::Object(element.generate(rng)))
                    .collect(),
            ),
        }
    }
}

/// Compiled rules for every field of a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPlan {
    fields: Vec<(String, FieldPlan)>,
}

impl RecordPlan {
    /// Check `specs` against `template` and resolve a rule for every field.
    ///
    /// Field names are checked across the whole spec map first, so a
    /// misspelled field is reported even if another spec is also malformed.
    pub fn compile(template: &Record, specs: &SpecMap) -> Result<Self, FixtureError> {
        check_field_names(template, specs, "")?;
        compile_record(template, specs, "")
    }

    /// Generate a new record following this plan.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Record {
        self.fields
            .iter()
            .map(|(name, plan)| (name.clone(), plan.generate(rng)))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&FieldPlan> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, plan)| plan)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// The record whose fields a nested spec map applies to, if any.
fn nested_template(value: &Value) -> Option<&Record> {
    match value {
        Value::Object(record) => Some(record),
        Value::Array(items) => items.first().and_then(Value::as_object),
        _ => None,
    }
}

fn check_field_names(template: &Record, specs: &SpecMap, path: &str) -> Result<(), FixtureError> {
    for (name, entry) in specs.iter() {
        let field = child_path(path, name);
        let Some(value) = template.get(name) else {
            return Err(FixtureError::Configuration { field });
        };
        // A nested map on a primitive is a compatibility error, reported later.
        if let (SpecEntry::Nested(nested), Some(record)) = (entry, nested_template(value)) {
            check_field_names(record, nested, &field)?;
        }
    }
    Ok(())
}

fn compile_record(
    template: &Record,
    specs: &SpecMap,
    path: &str,
) -> Result<RecordPlan, FixtureError> {
    let fields = template
        .iter()
        .map(|(name, value)| {
            let field = child_path(path, name);
            let plan = compile_field(&field, value, specs.get(name))?;
            Ok((name.to_string(), plan))
        })
        .collect::<Result<Vec<_>, FixtureError>>()?;

    Ok(RecordPlan { fields })
}

fn compile_field(
    field: &str,
    value: &Value,
    entry: Option<&SpecEntry>,
) -> Result<FieldPlan, FixtureError> {
    let empty = SpecMap::new();

    match (value, entry) {
        (Value::Object(nested), None) => {
            Ok(FieldPlan::Nested(compile_record(nested, &empty, field)?))
        }
        (Value::Object(nested), Some(SpecEntry::Nested(specs))) => {
            Ok(FieldPlan::Nested(compile_record(nested, specs, field)?))
        }

        (Value::Array(items), None | Some(SpecEntry::Nested(_))) => {
            let Some(Value::Object(element)) = items.first() else {
                return Err(FixtureError::UnsupportedType {
                    field: field.to_string(),
                    value_type: value.kind(),
                });
            };
            let specs = match entry {
                Some(SpecEntry::Nested(specs)) => specs,
                _ => &empty,
            };
            Ok(FieldPlan::RecordArray {
                element: compile_record(element, specs, field)?,
                count: DEFAULT_REPEAT_COUNT,
            })
        }

        (_, Some(SpecEntry::Field(raw))) => {
            let kind = value.kind();
            let compatible =
                SpecKind::classify(raw).is_some_and(|spec| spec.is_compatible_with(kind));
            if !compatible {
                return Err(FixtureError::Compatibility {
                    spec: raw.clone(),
                    value_type: kind,
                });
            }
            Ok(FieldPlan::Primitive(FieldSpec::parse(raw)?))
        }

        (_, Some(SpecEntry::Nested(specs))) => Err(FixtureError::Compatibility {
            spec: specs.to_string(),
            value_type: value.kind(),
        }),

        // Whole-number fields stay whole so typed templates round-trip.
        (Value::Integer(_), None) => {
            Ok(FieldPlan::Primitive(FieldSpec::Integer(Bounds::Unbounded)))
        }

        (_, None) => FieldSpec::default_for(value.kind())
            .map(FieldPlan::Primitive)
            .ok_or_else(|| FixtureError::UnsupportedType {
                field: field.to_string(),
                value_type: value.kind(),
            }),
    }
}
