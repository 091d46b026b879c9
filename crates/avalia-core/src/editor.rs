//! Field editing over [`AssessmentRecord`].
//!
//! Edits never mutate the input: they return a new record in which only the
//! targeted group is copied. Every other group is the same `Arc` as before.

use std::sync::Arc;

use crate::error::CoreError;
use crate::models::record::{AssessmentRecord, FieldRef};

/// Return a copy of `record` with `field` set to `value`.
pub fn set_field(
    record: &AssessmentRecord,
    field: impl Into<FieldRef>,
    value: impl Into<String>,
) -> AssessmentRecord {
    let mut next = record.clone();
    let value = value.into();

    match field.into() {
        FieldRef::Identification(f) => Arc::make_mut(&mut next.identification).set(f, value),
        FieldRef::Anthropometrics(f) => Arc::make_mut(&mut next.anthropometrics).set(f, value),
        FieldRef::Perimeters(f) => Arc::make_mut(&mut next.perimeters).set(f, value),
        FieldRef::Skinfolds(f) => Arc::make_mut(&mut next.skinfolds).set(f, value),
        FieldRef::Cardio(f) => Arc::make_mut(&mut next.cardio).set(f, value),
        FieldRef::Neuromuscular(f) => Arc::make_mut(&mut next.neuromuscular).set(f, value),
        FieldRef::BodyCompAssessment(f) => {
            Arc::make_mut(&mut next.body_comp_assessment).set(f, value)
        }
        FieldRef::BodyComposition(f) => Arc::make_mut(&mut next.body_composition).set(f, value),
        FieldRef::Postural(f) => Arc::make_mut(&mut next.postural).set(f, value),
    }

    next
}

/// [`set_field`] addressed by wire names, for callers that receive them as
/// strings (the HTTP host). Unknown names are an error, never a no-op.
pub fn set_field_by_name(
    record: &AssessmentRecord,
    group: &str,
    field: &str,
    value: impl Into<String>,
) -> Result<AssessmentRecord, CoreError> {
    let field = FieldRef::parse(group, field)?;
    Ok(set_field(record, field, value))
}
