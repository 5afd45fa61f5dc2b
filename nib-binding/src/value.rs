//! Literal synthesis for default and example values.

use nib_schema::{PropertyDescriptor, SchemaType};
use serde_json::Value;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::mapper;
use crate::naming::to_variable_name;
use crate::profile::BindingProfile;

const COMPONENT: &str = "value";

/// Semantic kind of a schema type, driving literal-rendering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SemanticKind {
    String,
    Integer,
    Float,
    Boolean,
    File,
    Date,
    DateTime,
    Model,
    Unknown,
}

fn classify_token(kind: &str, format: Option<&str>) -> SemanticKind {
    match kind {
        "string" => match format {
            Some("date") => SemanticKind::Date,
            Some("date-time") => SemanticKind::DateTime,
            Some("binary") => SemanticKind::File,
            _ => SemanticKind::String,
        },
        "integer" | "int" | "long" | "short" | "byte" => SemanticKind::Integer,
        "number" | "float" | "double" => SemanticKind::Float,
        "boolean" | "bool" => SemanticKind::Boolean,
        "file" | "binary" => SemanticKind::File,
        "date" | "Date" => SemanticKind::Date,
        "DateTime" | "dateTime" | "date-time" => SemanticKind::DateTime,
        _ => SemanticKind::Unknown,
    }
}

fn classify(ty: &SchemaType) -> SemanticKind {
    match ty {
        SchemaType::Primitive { kind, format } => classify_token(kind, format.as_deref()),
        SchemaType::ObjectRef { .. } => SemanticKind::Model,
        SchemaType::Enum { datatype, .. } => classify_token(datatype, None),
        SchemaType::Array { .. } | SchemaType::Map { .. } => SemanticKind::Unknown,
    }
}

/// Whether the type names a floating-point number explicitly, either by its
/// schema token or by its format refinement.
fn is_explicit_float(ty: &SchemaType) -> bool {
    match ty {
        SchemaType::Primitive { kind, format } => {
            matches!(kind.as_str(), "float" | "double")
                || matches!(format.as_deref(), Some("float") | Some("double"))
        }
        _ => false,
    }
}

/// Raw text of a declared value: strings unquoted, everything else in its
/// JSON rendering.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn quote_example(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Render a declared default value as a target-language literal.
///
/// Returns `None` when no default is declared, when the value does not fit
/// the declared kind, and for kinds the profile does not render defaults for
/// (dates in both shipped profiles; format-less `number` defaults unless the
/// profile honors them).
pub fn to_default_value(
    ty: &SchemaType,
    declared: Option<&Value>,
    profile: &BindingProfile,
) -> Option<String> {
    let value = declared?;
    match classify(ty) {
        SemanticKind::String => Some((profile.quote_default)(&raw_text(value))),
        SemanticKind::Boolean => {
            let flag = value.as_bool()?;
            Some(
                if flag {
                    profile.true_literal
                } else {
                    profile.false_literal
                }
                .to_string(),
            )
        }
        SemanticKind::Integer => Some(raw_text(value)),
        SemanticKind::Float => {
            if is_explicit_float(ty) || profile.honors_integer_defaults {
                Some(raw_text(value))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Synthesize an example literal for a parameter.
///
/// Never fails: every kind either has a canned placeholder or falls back to
/// the profile's null literal (with a warning). Container parameters wrap
/// the literal in the profile's sequence/map literal syntax.
pub fn synthesize_example(
    param: &PropertyDescriptor,
    profile: &BindingProfile,
    sink: &dyn DiagnosticSink,
) -> String {
    let source = param
        .example_value
        .as_ref()
        .or(param.default_value.as_ref())
        .map(raw_text);

    // Container parameters carry the container flags on the descriptor; the
    // base literal is synthesized from the inner type.
    let base = match &param.schema {
        SchemaType::Array { items: Some(inner) } => inner.as_ref(),
        SchemaType::Map { values: Some(inner) } => inner.as_ref(),
        other => other,
    };

    let literal = match classify(base) {
        SemanticKind::String => {
            let text = source
                .unwrap_or_else(|| format!("{}_example", to_variable_name(&param.name, profile)));
            quote_example(&(profile.escape_quotation_mark)(&text))
        }
        SemanticKind::Integer => source.unwrap_or_else(|| "56".to_string()),
        SemanticKind::Float => source.unwrap_or_else(|| "3.4".to_string()),
        SemanticKind::Boolean => source.unwrap_or_else(|| profile.true_literal.to_string()),
        SemanticKind::File => {
            let text = source.unwrap_or_else(|| profile.file_placeholder.to_string());
            quote_example(&(profile.escape_quotation_mark)(&text))
        }
        SemanticKind::Date => {
            let text = source.unwrap_or_else(|| "2013-10-20".to_string());
            (profile.date_ctor)(&(profile.escape_quotation_mark)(&text))
        }
        SemanticKind::DateTime => {
            let text = source.unwrap_or_else(|| "2013-10-20T19:20:30+01:00".to_string());
            (profile.datetime_ctor)(&(profile.escape_quotation_mark)(&text))
        }
        SemanticKind::Model => {
            let declaration = mapper::resolve(base, profile, sink);
            (profile.model_ctor)(&declaration)
        }
        SemanticKind::Unknown => {
            sink.emit(
                Diagnostic::warning(
                    COMPONENT,
                    format!(
                        "type of parameter '{}' not handled in example synthesis",
                        param.name
                    ),
                )
                .at(param.name.clone()),
            );
            return profile.null_literal.to_string();
        }
    };

    if param.is_list_container {
        (profile.seq_literal)(&literal)
    } else if param.is_map_container {
        (profile.map_literal)(&literal)
    } else {
        literal
    }
}
