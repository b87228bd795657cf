//! Mapper - the field-mapping engine.
//!
//! A `Mapper` binds one source record to one destination record and copies
//! values between like-named fields:
//! 1. Configure exclusions, overrides and visibility (fluent calls)
//! 2. Build a [`MappingPlan`] from both descriptor tables
//! 3. Apply the plan to the destination
//!
//! Selectors are validated against the destination's descriptor table as
//! soon as they are given; type mismatches surface when `execute()` writes.

use std::collections::HashSet;
use tracing::{debug, instrument, trace, warn};

use crate::{
    application::{
        options::MapperOptions,
        plan::{MappingPlan, PlanAction},
    },
    domain::{FieldValue, Record, VisibilityScope},
    error::MicromapResult,
};

/// One mapping session between `source` and `destination`.
///
/// # Example
///
/// ```rust
/// use micromap_core::{application::Mapper, record};
///
/// record! {
///     #[derive(Default)]
///     pub struct Customer {
///         pub first_name: String,
///         pub last_name: String,
///         pub age_in_years: i32,
///     }
/// }
///
/// record! {
///     #[derive(Default)]
///     pub struct PersonView {
///         pub first_name: String,
///         pub full_name: String,
///         pub age_in_years: i32,
///     }
/// }
///
/// let customer = Customer {
///     first_name: "Ada".into(),
///     last_name: "Lovelace".into(),
///     age_in_years: 36,
/// };
/// let mut view = PersonView::default();
///
/// Mapper::new(&customer, &mut view)
///     .exclude("age_in_years")?
///     .map_field("full_name", |c| format!("{} {}", c.first_name, c.last_name))?
///     .execute()?;
///
/// assert_eq!(view.first_name, "Ada");
/// assert_eq!(view.full_name, "Ada Lovelace");
/// assert_eq!(view.age_in_years, 0);
/// # Ok::<(), micromap_core::error::MicromapError>(())
/// ```
pub struct Mapper<'a, S, D> {
    source: &'a S,
    destination: &'a mut D,
    options: MapperOptions,
}

impl<'a, S: Record, D: Record> Mapper<'a, S, D> {
    pub fn new(source: &'a S, destination: &'a mut D) -> Self {
        Self {
            source,
            destination,
            options: MapperOptions::new(),
        }
    }

    /// Skip `field` on the destination; it keeps its current value.
    pub fn exclude(mut self, field: &str) -> MicromapResult<Self> {
        let descriptor = D::descriptor(field)?;

        if self.options.override_for(descriptor.name).is_some() {
            warn!(
                field = descriptor.name,
                "Field is both excluded and overridden; exclusion wins"
            );
        }

        debug!(field = descriptor.name, "Excluding destination field");
        self.options.exclude(descriptor.name);
        Ok(self)
    }

    /// Evaluate `value` against the source now and write the result into
    /// `field` on execute, in place of any name-matched copy.
    ///
    /// The closure runs exactly once, here. Calling again for the same field
    /// replaces the earlier value.
    pub fn map_field<V, F>(mut self, field: &str, value: F) -> MicromapResult<Self>
    where
        F: FnOnce(&S) -> V,
        V: Into<FieldValue>,
    {
        let descriptor = D::descriptor(field)?;
        let value = value(self.source).into();

        trace!(field = descriptor.name, kind = %value.kind(), "Captured override");

        if self.options.set_override(descriptor.name, value).is_some() {
            debug!(field = descriptor.name, "Replacing earlier override");
        }
        if self.options.is_excluded(descriptor.name) {
            warn!(
                field = descriptor.name,
                "Field is both excluded and overridden; exclusion wins"
            );
        }

        Ok(self)
    }

    /// Only read public source fields.
    pub fn restrict_source_to_public(mut self) -> Self {
        debug!("Restricting source fields to public");
        self.options.set_source_scope(VisibilityScope::PublicOnly);
        self
    }

    /// Only write public destination fields.
    pub fn restrict_destination_to_public(mut self) -> Self {
        debug!("Restricting destination fields to public");
        self.options.set_destination_scope(VisibilityScope::PublicOnly);
        self
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// The decisions `execute()` would apply, without touching the destination.
    pub fn plan(&self) -> MappingPlan {
        build_plan::<S, D>(&self.options)
    }

    /// Copy values into the destination.
    ///
    /// Stops at the first [`IncompatibleAssignment`](crate::domain::DomainError::IncompatibleAssignment);
    /// fields written before it keep their new values.
    #[instrument(
        skip_all,
        fields(source = S::type_name(), destination = D::type_name())
    )]
    pub fn execute(&mut self) -> MicromapResult<()> {
        let plan = self.plan();

        for assignment in plan.writes() {
            let value = match assignment.action {
                PlanAction::Override => self.options.override_for(assignment.field).cloned(),
                PlanAction::Copy => self.source.read_field(assignment.field),
                _ => None,
            };

            // A hand-written Record may list a field it cannot read.
            let Some(value) = value else {
                trace!(field = assignment.field, "Source returned no value");
                continue;
            };

            trace!(field = assignment.field, action = %assignment.action, "Writing field");
            self.destination.write_field(assignment.field, value)?;
        }

        debug!(
            copied = plan.count(PlanAction::Copy),
            overridden = plan.count(PlanAction::Override),
            untouched = plan.count(PlanAction::Untouched),
            excluded = plan.count(PlanAction::Excluded),
            hidden = plan.count(PlanAction::Hidden),
            "Mapping completed"
        );
        Ok(())
    }
}

fn build_plan<S: Record, D: Record>(options: &MapperOptions) -> MappingPlan {
    let readable: HashSet<&str> = S::visible_fields(options.source_scope())
        .map(|field| field.name)
        .collect();

    let mut plan = MappingPlan::default();
    for field in D::fields() {
        let action = if !options.destination_scope().admits(field.visibility) {
            PlanAction::Hidden
        } else if options.is_excluded(field.name) {
            PlanAction::Excluded
        } else if options.override_for(field.name).is_some() {
            PlanAction::Override
        } else if readable.contains(field.name) {
            PlanAction::Copy
        } else {
            PlanAction::Untouched
        };
        plan.push(field.name, action);
    }
    plan
}
