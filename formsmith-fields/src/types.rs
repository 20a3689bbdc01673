//! Core descriptor types for the field registry.
//!
//! All types serialize to/from YAML via serde. A form definition is an ordered
//! mapping of field name to descriptor plus form-level options; descriptor
//! order is display order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The fixed whitelist of valid field types.
///
/// A descriptor may declare any type string; unknown types are tolerated
/// structurally but fail the registry's validity check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Hidden,
    Text,
    Textarea,
    File,
    Select,
    Checkbox,
    Radio,
}

impl FieldType {
    /// Parse a normalized (lower-case) type string against the whitelist.
    pub fn parse(s: &str) -> Option<FieldType> {
        match s {
            "hidden" => Some(FieldType::Hidden),
            "text" => Some(FieldType::Text),
            "textarea" => Some(FieldType::Textarea),
            "file" => Some(FieldType::File),
            "select" => Some(FieldType::Select),
            "checkbox" => Some(FieldType::Checkbox),
            "radio" => Some(FieldType::Radio),
            _ => None,
        }
    }

    /// The canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Hidden => "hidden",
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::File => "file",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
        }
    }

    /// Whether this type is rendered by its own dedicated markup path,
    /// bypassing the generic value/attribute machinery.
    pub fn uses_own_markup(self) -> bool {
        matches!(self, FieldType::Hidden | FieldType::Checkbox)
    }
}

/// A field descriptor — static metadata for a single named form field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    /// Declared type string. Compared case-insensitively; when absent, the
    /// registry falls back to the configured default type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Arbitrary key/value attributes. The `type` sub-key here is distinct
    /// from the descriptor's own `type` (it marks password-classified
    /// fields); the `class` sub-key carries CSS classes.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    /// When present, the name used to look up this field's value in the
    /// values source instead of the field's own name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_lookup: Option<String>,

    /// Display label. Not interpreted by the resolver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FieldDef {
    /// Nested lookup into `attributes.<key>`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Form-level options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormOptions {
    /// Form-level attribute map: the fallback input for attribute filtering
    /// when a call-site map is empty.
    pub attributes: IndexMap<String, String>,

    /// When true (the default), password-classified field values are never
    /// echoed back, regardless of what the value sources hold.
    pub truncate_passwords: bool,

    /// Type classification fallback for descriptors with no declared type.
    pub default_type: String,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            attributes: IndexMap::new(),
            truncate_passwords: true,
            default_type: "text".to_string(),
        }
    }
}

/// A complete form definition document: the ordered field table plus options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormDefinition {
    #[serde(default)]
    pub fields: IndexMap<String, FieldDef>,
    #[serde(default)]
    pub options: FormOptions,
}
