//! Value resolution for formsmith forms
//!
//! Given a field descriptor from `formsmith-fields` and a set of candidate
//! value sources, this crate computes the final render-ready value and the
//! filtered attribute string for each field.
//!
//! # Architecture
//!
//! - **Precedence chain**: redaction check → transient resubmitted input
//!   (optionally through a mutator) → lookup-aliased stored value → explicit
//!   default
//! - **Snapshot inputs**: the resolver borrows read-only snapshots for one
//!   resolution pass; nothing is mutated, every operation is a pure function
//! - **Host contract**: a form is any value implementing [`Form`], with
//!   composition replacing inheritance and no ambient state

pub mod form;
pub mod resolver;
pub mod values;

pub use form::Form;
pub use resolver::ValueResolver;
pub use values::{Mutator, MutatorSet, TransientInputs, ValueMap};
