//! FieldRegistry — structural API over one form's field table.
//!
//! The registry owns the ordered descriptor table and the form-level options
//! and answers structural questions (lookup, type classification, validity,
//! markup disposition) purely from the descriptors. It never touches a value
//! source.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{FieldsError, Result};
use crate::types::{FieldDef, FieldType, FormDefinition, FormOptions};

/// The static field table and options of one form instance.
///
/// Iteration order over fields is insertion order, which is display order.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: IndexMap<String, FieldDef>,
    options: FormOptions,
}

impl FieldRegistry {
    /// An empty registry with the given options.
    pub fn new(options: FormOptions) -> Self {
        Self {
            fields: IndexMap::new(),
            options,
        }
    }

    /// Build from an ordered list of (name, descriptor) pairs.
    ///
    /// Unlike [`FieldRegistry::insert`], a repeated name is rejected here:
    /// a programmatic build declaring the same field twice is a bug in the
    /// caller, not a customization.
    pub fn from_fields<I, N>(options: FormOptions, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, FieldDef)>,
        N: Into<String>,
    {
        let mut registry = Self::new(options);
        for (name, def) in fields {
            let name = name.into();
            if registry.fields.contains_key(&name) {
                return Err(FieldsError::DuplicateField { name });
            }
            registry.fields.insert(name, def);
        }
        Ok(registry)
    }

    /// Build from a parsed definition document.
    ///
    /// Descriptors declaring a type outside the whitelist are kept (they
    /// still round-trip and render their attributes), but a warning is
    /// logged and `is_valid_field` will reject them.
    pub fn from_definition(definition: FormDefinition) -> Self {
        let registry = Self {
            fields: definition.fields,
            options: definition.options,
        };
        for (name, field) in &registry.fields {
            if let Some(declared) = field.type_.as_deref() {
                if FieldType::parse(&declared.to_lowercase()).is_none() {
                    warn!(name = %name, declared = %declared, "field declares unknown type");
                }
            }
        }
        debug!(fields = registry.fields.len(), "form definition loaded");
        registry
    }

    /// Parse a YAML definition document and build a registry from it.
    pub fn from_yaml(doc: &str) -> Result<Self> {
        let definition: FormDefinition = serde_yaml_ng::from_str(doc)?;
        Ok(Self::from_definition(definition))
    }

    /// Insert (create or replace) a field descriptor.
    pub fn insert(&mut self, name: impl Into<String>, def: FieldDef) {
        self.fields.insert(name.into(), def);
    }

    /// Get a field descriptor by name. Absence is not an error.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// The full field table, in display order.
    pub fn fields(&self) -> &IndexMap<String, FieldDef> {
        &self.fields
    }

    /// Form-level options.
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// The descriptor's type, normalized to lower case, falling back to the
    /// configured default type when absent.
    pub fn field_type(&self, field: &FieldDef) -> String {
        field
            .type_
            .as_deref()
            .unwrap_or(&self.options.default_type)
            .to_lowercase()
    }

    /// Whitelist classification of the normalized type.
    pub fn field_kind(&self, field: &FieldDef) -> Option<FieldType> {
        FieldType::parse(&self.field_type(field))
    }

    /// True iff the descriptor's normalized type is in the valid-type
    /// whitelist. Callers decide whether to skip or reject invalid fields.
    pub fn is_valid_field(&self, field: &FieldDef) -> bool {
        self.field_kind(field).is_some()
    }

    /// True iff the field is rendered by its own dedicated markup path
    /// (hidden, checkbox), bypassing the generic value/attribute machinery.
    pub fn field_should_use_own_markup(&self, field: &FieldDef) -> bool {
        self.field_kind(field)
            .is_some_and(FieldType::uses_own_markup)
    }

    /// Deterministic id for a field's input element.
    ///
    /// The name is lowercased, camel-cased on `_`/`-`/space boundaries, and
    /// prefixed with `input`, so the same id comes back regardless of input
    /// casing: `email` and `EMAIL` both yield `inputEmail`.
    pub fn input_id(name: &str) -> String {
        let mut id = String::with_capacity(name.len() + 5);
        id.push_str("input");
        let mut boundary = true;
        for ch in name.chars().flat_map(char::to_lowercase) {
            if matches!(ch, '_' | '-' | ' ') {
                boundary = true;
                continue;
            }
            if boundary {
                id.extend(ch.to_uppercase());
                boundary = false;
            } else {
                id.push(ch);
            }
        }
        id
    }

    /// Nested lookup into the descriptor's `attributes.<key>`.
    pub fn field_attribute_value<'f>(&self, field: &'f FieldDef, key: &str) -> Option<&'f str> {
        field.attribute(key)
    }

    /// The descriptor's `class` attribute, empty string when absent.
    ///
    /// With `prepend_space` a single leading space is added for direct
    /// interpolation into markup, never on the empty result.
    pub fn field_classes(&self, field: &FieldDef, prepend_space: bool) -> String {
        match field.attribute("class") {
            Some(classes) if !classes.is_empty() => {
                if prepend_space {
                    format!(" {classes}")
                } else {
                    classes.to_string()
                }
            }
            _ => String::new(),
        }
    }
}
