//! Mapping plans: the ordered per-field decisions of one `execute()`.

use serde::Serialize;
use std::fmt;

/// What happens to a single destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanAction {
    /// Written from a `map_field` override.
    Override,
    /// Written from the same-named source field.
    Copy,
    /// Visible and not excluded, but nothing to copy from.
    Untouched,
    /// Skipped by `exclude`.
    Excluded,
    /// Outside the destination visibility scope.
    Hidden,
}

impl PlanAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::Copy => "copy",
            Self::Untouched => "untouched",
            Self::Excluded => "excluded",
            Self::Hidden => "hidden",
        }
    }

    /// Whether this action writes to the destination.
    pub const fn writes(self) -> bool {
        matches!(self, Self::Override | Self::Copy)
    }
}

impl fmt::Display for PlanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedAssignment {
    pub field: &'static str,
    pub action: PlanAction,
}

/// Decisions for every destination field, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingPlan {
    assignments: Vec<PlannedAssignment>,
}

impl MappingPlan {
    pub(crate) fn push(&mut self, field: &'static str, action: PlanAction) {
        self.assignments.push(PlannedAssignment { field, action });
    }

    pub fn assignments(&self) -> &[PlannedAssignment] {
        &self.assignments
    }

    pub fn action_for(&self, field: &str) -> Option<PlanAction> {
        self.assignments
            .iter()
            .find(|a| a.field == field)
            .map(|a| a.action)
    }

    /// Fields that will be written, in order.
    pub fn writes(&self) -> impl Iterator<Item = &PlannedAssignment> {
        self.assignments.iter().filter(|a| a.action.writes())
    }

    pub fn count(&self, action: PlanAction) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.action == action)
            .count()
    }
}

impl fmt::Display for MappingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in &self.assignments {
            writeln!(f, "{:<10} {}", a.action, a.field)?;
        }
        Ok(())
    }
}
