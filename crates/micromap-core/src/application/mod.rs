//! Application layer for micromap.
//!
//! This layer contains:
//! - **Mapper**: the record-to-record mapping session
//! - **DocumentMapper**: the name-keyed source to record session
//! - **Ports**: the [`FieldSource`] trait implemented by adapters
//! - **Errors**: application-specific error types
//!
//! The application layer orchestrates the domain layer. What a field is and
//! how a value is stored lives in `crate::domain`.

pub mod document;
pub mod error;
pub mod mapper;
pub mod options;
pub mod plan;
pub mod ports;

// Re-export main sessions
pub use document::{DocumentMapper, assign_fields};
pub use mapper::Mapper;
pub use options::MapperOptions;
pub use plan::{MappingPlan, PlanAction, PlannedAssignment};

// Re-export port traits (for adapter implementation)
pub use ports::FieldSource;

pub use error::ApplicationError;
