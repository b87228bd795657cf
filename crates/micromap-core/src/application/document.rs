//! DocumentMapper - writes name-keyed values into a record.
//!
//! Same destination rules as [`Mapper`](crate::application::Mapper):
//! visibility scope first, then exclusions, then a case-sensitive lookup of
//! each remaining field in the [`FieldSource`]. Fields the source has no
//! value for keep their current value.

use tracing::{debug, instrument, trace};

use crate::{
    application::{
        options::MapperOptions,
        plan::{MappingPlan, PlanAction},
        ports::FieldSource,
    },
    domain::{Record, VisibilityScope},
    error::MicromapResult,
};

pub struct DocumentMapper<'a, F: ?Sized, D> {
    source: &'a F,
    destination: &'a mut D,
    options: MapperOptions,
}

impl<'a, F: FieldSource + ?Sized, D: Record> DocumentMapper<'a, F, D> {
    pub fn new(source: &'a F, destination: &'a mut D) -> Self {
        Self {
            source,
            destination,
            options: MapperOptions::new(),
        }
    }

    pub fn exclude(mut self, field: &str) -> MicromapResult<Self> {
        let descriptor = D::descriptor(field)?;
        debug!(field = descriptor.name, "Excluding destination field");
        self.options.exclude(descriptor.name);
        Ok(self)
    }

    pub fn restrict_destination_to_public(mut self) -> Self {
        debug!("Restricting destination fields to public");
        self.options.set_destination_scope(VisibilityScope::PublicOnly);
        self
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Resolve and write every eligible field.
    ///
    /// The returned plan records what actually happened: `Copy` for fields
    /// the source supplied, `Untouched` for the rest.
    #[instrument(skip_all, fields(destination = D::type_name()))]
    pub fn execute(&mut self) -> MicromapResult<MappingPlan> {
        let mut plan = MappingPlan::default();

        for field in D::fields() {
            if !self.options.destination_scope().admits(field.visibility) {
                plan.push(field.name, PlanAction::Hidden);
                continue;
            }
            if self.options.is_excluded(field.name) {
                plan.push(field.name, PlanAction::Excluded);
                continue;
            }

            match self.source.resolve(field) {
                Some(value) => {
                    trace!(field = field.name, kind = %value.kind(), "Writing field");
                    self.destination.write_field(field.name, value)?;
                    plan.push(field.name, PlanAction::Copy);
                }
                None => {
                    trace!(field = field.name, "No value in source");
                    plan.push(field.name, PlanAction::Untouched);
                }
            }
        }

        debug!(
            copied = plan.count(PlanAction::Copy),
            untouched = plan.count(PlanAction::Untouched),
            "Document mapping completed"
        );
        Ok(plan)
    }
}

/// Write each value of `source` into the like-named field of `destination`.
pub fn assign_fields<F, D>(
    source: &F,
    destination: &mut D,
    scope: VisibilityScope,
) -> MicromapResult<MappingPlan>
where
    F: FieldSource + ?Sized,
    D: Record,
{
    let mut mapper = DocumentMapper::new(source, destination);
    mapper.options.set_destination_scope(scope);
    mapper.execute()
}
