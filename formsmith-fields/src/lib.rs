//! Field descriptor registry for formsmith
//!
//! `formsmith-fields` is a standalone, schema-only crate that owns the static
//! field table of one form instance. It knows nothing about values, requests,
//! or rendering; consumers pass descriptors to `formsmith-resolve` for that.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field descriptors and form-level options, not field values
//! - **Ordered**: The field table preserves insertion order, and that order is display order
//! - **Defaults-oriented**: Missing fields, types, and attributes resolve to documented
//!   defaults instead of errors; only malformed definition input is a hard failure

pub mod error;
pub mod registry;
pub mod types;

pub use error::{FieldsError, Result};
pub use registry::FieldRegistry;
pub use types::{FieldDef, FieldType, FormDefinition, FormOptions};
