//! Property and operation descriptors.

use serde::{Deserialize, Serialize};

use crate::SchemaType;

/// A named schema element: a model property or an operation parameter.
///
/// Raw default/example values are carried as [`serde_json::Value`] exactly
/// as the schema loader read them; the binding layer decides how they are
/// rendered as target-language literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Raw name as it appears in the schema.
    pub name: String,
    /// Abstract type of the property.
    pub schema: SchemaType,
    /// Declared default value, if any.
    pub default_value: Option<serde_json::Value>,
    /// Declared example value, if any.
    pub example_value: Option<serde_json::Value>,
    /// Whether the schema marks this property required.
    pub required: bool,
    /// Whether the property is wrapped in a list container.
    pub is_list_container: bool,
    /// Whether the property is wrapped in a string-keyed map container.
    pub is_map_container: bool,
}

impl PropertyDescriptor {
    /// Create a descriptor with no default/example and no container wrapping.
    pub fn new(name: impl Into<String>, schema: SchemaType) -> Self {
        Self {
            name: name.into(),
            schema,
            default_value: None,
            example_value: None,
            required: false,
            is_list_container: false,
            is_map_container: false,
        }
    }
}

/// An operation and its ordered parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    /// Operation identifier. Must be non-empty; the binding layer treats an
    /// empty id as a fatal error.
    pub operation_id: String,
    /// Parameters in declaration order.
    pub parameters: Vec<PropertyDescriptor>,
}

impl OperationDescriptor {
    /// Create an operation descriptor.
    pub fn new(operation_id: impl Into<String>, parameters: Vec<PropertyDescriptor>) -> Self {
        Self {
            operation_id: operation_id.into(),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_descriptor_new() {
        let prop = PropertyDescriptor::new("status", SchemaType::primitive("string"));
        assert_eq!(prop.name, "status");
        assert!(prop.default_value.is_none());
        assert!(prop.example_value.is_none());
        assert!(!prop.required);
        assert!(!prop.is_list_container);
        assert!(!prop.is_map_container);
    }

    #[test]
    fn test_operation_descriptor_new() {
        let op = OperationDescriptor::new(
            "getPetById",
            vec![PropertyDescriptor::new(
                "petId",
                SchemaType::primitive("integer"),
            )],
        );
        assert_eq!(op.operation_id, "getPetById");
        assert_eq!(op.parameters.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut prop = PropertyDescriptor::new("tags", SchemaType::array_unknown());
        prop.default_value = Some(serde_json::json!("none"));
        prop.is_list_container = true;
        let op = OperationDescriptor::new("updatePet", vec![prop]);
        let json = serde_json::to_string(&op).unwrap();
        let back: OperationDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
}
