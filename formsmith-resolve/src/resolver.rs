//! ValueResolver — the precedence chain and attribute filtering.
//!
//! One resolver serves one resolution pass over borrowed, read-only
//! snapshots. Each field resolves independently of every other field; no
//! operation here mutates anything or returns an error, and absence always
//! resolves to a documented default.

use indexmap::IndexMap;
use tracing::debug;

use formsmith_fields::{FieldDef, FormOptions};

use crate::form::Form;
use crate::values::{MutatorSet, TransientInputs, ValueMap};

/// Attribute keys reserved for the form element itself, never passed through
/// to a field's rendered attribute string.
const RESERVED_ATTRIBUTES: [&str; 4] = ["method", "action", "class", "enctype"];

/// Computes render-ready values and attribute strings for single fields.
pub struct ValueResolver<'a> {
    options: &'a FormOptions,
    values: &'a ValueMap,
    transient: &'a TransientInputs,
    mutators: &'a MutatorSet,
}

impl<'a> ValueResolver<'a> {
    pub fn new(
        options: &'a FormOptions,
        values: &'a ValueMap,
        transient: &'a TransientInputs,
        mutators: &'a MutatorSet,
    ) -> Self {
        Self {
            options,
            values,
            transient,
            mutators,
        }
    }

    /// Resolver over a form's own snapshots plus the request's transient
    /// input.
    pub fn for_form(form: &'a dyn Form, transient: &'a TransientInputs) -> Self {
        Self::new(
            form.registry().options(),
            form.values(),
            transient,
            form.mutators(),
        )
    }

    /// True iff the field is password-classified: `attributes.type` is
    /// `password`. Distinct from the descriptor's own type, which is usually
    /// a generic `text`.
    pub fn is_password_field(&self, field: &FieldDef) -> bool {
        field.attribute("type") == Some("password")
    }

    /// True iff the field's value must be redacted: password-classified and
    /// the form-level `truncate_passwords` flag (default true) is enabled.
    pub fn should_truncate_value(&self, field: &FieldDef) -> bool {
        self.is_password_field(field) && self.options.truncate_passwords
    }

    /// Resolve the final display value for a field.
    ///
    /// Precedence: redaction → transient resubmitted input (through the
    /// field's mutator when one is registered) → stored value under the
    /// descriptor's lookup alias or the field's own name → `default`.
    ///
    /// The transient source is keyed by the field's own name; the alias only
    /// redirects the stored-value lookup. A transient entry wins by presence,
    /// even when it holds an empty string, and only transient values pass
    /// through the mutator.
    pub fn field_value(&self, name: &str, field: &FieldDef, default: Option<&str>) -> String {
        if self.should_truncate_value(field) {
            debug!(field = %name, "password field value suppressed");
            return String::new();
        }

        let lookup_name = field.value_lookup.as_deref().unwrap_or(name);
        let stored = self.values.get(lookup_name).or(default);

        match self.transient.get(name) {
            Some(raw) => match self.mutators.get(name) {
                Some(mutator) => mutator(raw),
                None => raw.to_string(),
            },
            None => stored.unwrap_or_default().to_string(),
        }
    }

    /// Filter an attribute map down to the keys that pass through to markup.
    ///
    /// An empty input map falls back to the form-level `options.attributes`.
    /// The reserved set {method, action, class, enctype} is removed; the rest
    /// comes back unchanged, order preserved.
    pub fn only_extra_attributes(
        &self,
        attributes: &IndexMap<String, String>,
    ) -> IndexMap<String, String> {
        let source = if attributes.is_empty() {
            &self.options.attributes
        } else {
            attributes
        };
        source
            .iter()
            .filter(|(key, _)| !RESERVED_ATTRIBUTES.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Format the filtered attribute map as `key="value"` pairs joined by
    /// single spaces, in map iteration order.
    ///
    /// Values are wrapped in literal double quotes and nothing is escaped:
    /// this is a formatting function, not a security boundary, so callers
    /// pre-sanitize.
    pub fn extra_attributes(&self, attributes: &IndexMap<String, String>) -> String {
        self.only_extra_attributes(attributes)
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The field's own attributes, filtered and formatted. Empty string when
    /// the descriptor declares none; the form-level fallback never applies
    /// through this path.
    pub fn field_attributes(&self, field: &FieldDef) -> String {
        if field.attributes.is_empty() {
            return String::new();
        }
        self.extra_attributes(&field.attributes)
    }
}
