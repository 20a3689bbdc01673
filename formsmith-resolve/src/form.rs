//! The host-facing form contract.
//!
//! A form is any value providing a method, an action, and a field registry.
//! Values, mutators, and the cosmetic accessors all have defaults, so a
//! minimal form implements three methods.

use once_cell::sync::Lazy;
use ulid::Ulid;

use formsmith_fields::FieldRegistry;

use crate::values::{MutatorSet, ValueMap};

static EMPTY_VALUES: Lazy<ValueMap> = Lazy::new(ValueMap::new);
static EMPTY_MUTATORS: Lazy<MutatorSet> = Lazy::new(MutatorSet::new);

/// A form definition as seen by the resolution and rendering layers.
pub trait Form {
    /// The form's HTTP method.
    fn method(&self) -> &str;

    /// The form's action URL.
    fn action(&self) -> &str;

    /// The field table and form-level options.
    fn registry(&self) -> &FieldRegistry;

    /// Persisted/editing values. Empty by default.
    fn values(&self) -> &ValueMap {
        &EMPTY_VALUES
    }

    /// Per-field display mutators. Empty by default.
    fn mutators(&self) -> &MutatorSet {
        &EMPTY_MUTATORS
    }

    /// Submit button label.
    fn submit_label(&self) -> &str {
        "Submit"
    }

    /// Whether the form carries file fields and needs multipart transport
    /// upstream.
    fn with_uploads(&self) -> bool {
        false
    }

    /// Form element id. The default is a fresh placeholder per call;
    /// concrete forms that render the id are expected to override this with
    /// a stable value. Field input ids come from
    /// [`FieldRegistry::input_id`], which is deterministic.
    fn id(&self) -> String {
        format!("form-{}", Ulid::new())
    }
}
