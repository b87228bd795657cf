//! micromap core - field-mapping engine.
//!
//! This crate copies values between two records that share field names,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        micromap-adapters                │
//! │   (JsonDocument, TomlDocument)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implements
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (FieldSource)               │
//! └──────────────────┬──────────────────────┘
//!                    │ consumed by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Sessions            │
//! │      (Mapper, DocumentMapper)           │
//! │   Exclusions, overrides, visibility     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Record, FieldDescriptor, FieldValue)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use micromap_core::prelude::*;
//!
//! record! {
//!     #[derive(Default)]
//!     pub struct Customer {
//!         pub first_name: String,
//!         pub age_in_years: i32,
//!     }
//! }
//!
//! record! {
//!     #[derive(Default)]
//!     pub struct CustomerView {
//!         pub first_name: String,
//!         pub how_old: i32,
//!     }
//! }
//!
//! let customer = Customer { first_name: "Ada".into(), age_in_years: 36 };
//! let mut view = CustomerView::default();
//!
//! // 1. Bind source and destination
//! // 2. Configure, then execute
//! Mapper::new(&customer, &mut view)
//!     .map_field("how_old", |c| c.age_in_years)?
//!     .execute()?;
//!
//! assert_eq!(view.first_name, "Ada");
//! assert_eq!(view.how_old, 36);
//! # Ok::<(), MicromapError>(())
//! ```

mod macros;

// Re-export domain layer (records, fields, values)
pub mod domain;

// Re-export application layer (mapping sessions)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DocumentMapper, FieldSource, Mapper, MapperOptions, MappingPlan, PlanAction,
        assign_fields,
    };
    pub use crate::domain::{
        DomainError, FieldDescriptor, FieldValue, MapValue, Record, ValueKind, Visibility,
        VisibilityScope,
    };
    pub use crate::error::{MicromapError, MicromapResult};
    pub use crate::record;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
