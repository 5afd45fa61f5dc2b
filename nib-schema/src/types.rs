//! The abstract schema type tree.

use serde::{Deserialize, Serialize};

/// An abstract schema type as produced by the schema loader.
///
/// Composite variants (`Array`, `Map`) carry their inner type boxed. A
/// missing inner type is a declared error condition, not a silent default:
/// the binding layer resolves it to an empty declaration and emits a
/// warning diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaType {
    /// A primitive schema type, e.g. `integer` with format `int64`.
    Primitive {
        /// Schema type token (e.g. "integer", "string", "DateTime").
        kind: String,
        /// Optional format refinement (e.g. "float", "date-time").
        format: Option<String>,
    },
    /// An ordered collection of one inner type.
    Array {
        /// Inner type; `None` means the schema omitted it.
        items: Option<Box<SchemaType>>,
    },
    /// A string-keyed mapping to one inner value type.
    Map {
        /// Value type; `None` means the schema omitted it.
        values: Option<Box<SchemaType>>,
    },
    /// A reference to a named model defined elsewhere in the schema.
    ObjectRef {
        /// Raw model name as it appears in the schema.
        name: String,
    },
    /// An enumeration over a fixed set of raw values.
    Enum {
        /// Raw enum values, in schema order.
        values: Vec<String>,
        /// Schema type token of the values (e.g. "string", "int").
        datatype: String,
    },
}

impl SchemaType {
    /// Create a primitive type without a format refinement.
    pub fn primitive(kind: impl Into<String>) -> Self {
        Self::Primitive {
            kind: kind.into(),
            format: None,
        }
    }

    /// Create a primitive type with a format refinement.
    pub fn primitive_with_format(kind: impl Into<String>, format: impl Into<String>) -> Self {
        Self::Primitive {
            kind: kind.into(),
            format: Some(format.into()),
        }
    }

    /// Create an array type with a known inner type.
    pub fn array(items: SchemaType) -> Self {
        Self::Array {
            items: Some(Box::new(items)),
        }
    }

    /// Create an array type whose inner type is missing from the schema.
    pub fn array_unknown() -> Self {
        Self::Array { items: None }
    }

    /// Create a map type with a known value type. Keys are always strings.
    pub fn map(values: SchemaType) -> Self {
        Self::Map {
            values: Some(Box::new(values)),
        }
    }

    /// Create a map type whose value type is missing from the schema.
    pub fn map_unknown() -> Self {
        Self::Map { values: None }
    }

    /// Create a reference to a named model.
    pub fn object_ref(name: impl Into<String>) -> Self {
        Self::ObjectRef { name: name.into() }
    }

    /// Create an enumeration type.
    pub fn enumeration(values: Vec<String>, datatype: impl Into<String>) -> Self {
        Self::Enum {
            values,
            datatype: datatype.into(),
        }
    }

    /// Whether this is an array or map type.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array { .. } | Self::Map { .. })
    }

    /// Inner type of a container, if present.
    ///
    /// Returns `None` both for non-container types and for containers whose
    /// inner type is missing from the schema.
    pub fn inner_type(&self) -> Option<&SchemaType> {
        match self {
            Self::Array { items: Some(inner) } | Self::Map { values: Some(inner) } => Some(inner),
            _ => None,
        }
    }
}
