//! Type mapping: abstract schema types to target-language declarations.

use nib_schema::SchemaType;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::naming::to_model_name;
use crate::profile::BindingProfile;

const COMPONENT: &str = "mapper";

/// Resolve an abstract schema type into a target-language type declaration.
///
/// Composite types recurse through the profile's container syntax; maps are
/// always string-keyed. A container with a missing inner type degrades to an
/// empty declaration with one warning — callers treat `""` as "undeclared
/// type".
pub fn resolve(ty: &SchemaType, profile: &BindingProfile, sink: &dyn DiagnosticSink) -> String {
    match ty {
        SchemaType::Primitive { kind, .. } => get_schema_type(kind, profile, sink),
        SchemaType::Array { items: Some(inner) } => {
            (profile.array_syntax)(&resolve(inner, profile, sink))
        }
        SchemaType::Array { items: None } => {
            sink.emit(Diagnostic::warning(
                COMPONENT,
                "array property does not have a proper inner type defined",
            ));
            String::new()
        }
        SchemaType::Map { values: Some(inner) } => {
            (profile.map_syntax)(&resolve(inner, profile, sink))
        }
        SchemaType::Map { values: None } => {
            sink.emit(Diagnostic::warning(
                COMPONENT,
                "map property does not have a proper inner type defined",
            ));
            String::new()
        }
        SchemaType::ObjectRef { name } => {
            let model = to_model_name(name, profile, sink);
            if profile.qualify_model_refs {
                format!(
                    "{sep}{package}{sep}{model}",
                    sep = profile.namespace_separator,
                    package = profile.model_package()
                )
            } else {
                model
            }
        }
        SchemaType::Enum { datatype, .. } => get_schema_type(datatype, profile, sink),
    }
}

/// Resolve a raw schema type token into a target type token.
///
/// A mapped token is returned verbatim when it names a language primitive or
/// an instantiation-type key; any other token gets model-name treatment. An
/// unmapped token additionally emits a warning before passing through.
pub fn get_schema_type(token: &str, profile: &BindingProfile, sink: &dyn DiagnosticSink) -> String {
    match profile.type_mapping.get(token) {
        Some(mapped) => {
            if profile.language_primitives.contains(mapped.as_str())
                || profile.instantiation_types.contains_key(mapped.as_str())
            {
                mapped.clone()
            } else {
                to_model_name(mapped, profile, sink)
            }
        }
        None => {
            sink.emit(
                Diagnostic::warning(
                    COMPONENT,
                    format!("schema type '{token}' has no mapping, treated as a model reference"),
                )
                .at(token.to_string()),
            );
            to_model_name(token, profile, sink)
        }
    }
}

/// Concrete container type used to materialize an abstract array/map.
///
/// Composed from the profile's `instantiation_types` table; `None` for
/// non-container types or when the table has no entry for the container.
pub fn to_instantiation_type(
    ty: &SchemaType,
    profile: &BindingProfile,
    sink: &dyn DiagnosticSink,
) -> Option<String> {
    match ty {
        SchemaType::Array { items: Some(inner) } => profile
            .instantiation_types
            .get("array")
            .map(|token| format!("{token}[{}]", resolve(inner, profile, sink))),
        SchemaType::Map { values: Some(inner) } => profile
            .instantiation_types
            .get("map")
            .map(|token| format!("{token}[String, {}]", resolve(inner, profile, sink))),
        _ => None,
    }
}
