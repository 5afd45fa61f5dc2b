//! Naming-convention engine: raw schema names to target-language identifiers.

use crate::casing::{to_camel_case, to_pascal_case, to_snake_case};
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::{Error, Result};
use crate::profile::{BindingProfile, NamingConvention};

const COMPONENT: &str = "naming";

/// Replace every character outside `[A-Za-z0-9_\]` with `_`.
///
/// The backslash survives so namespace-qualified references (e.g.
/// `\DateTime`) pass through; `]` array markers are stripped outright.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ']')
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive a variable name: sanitize, apply the profile's casing, and guard
/// against a leading digit. Idempotent.
pub fn to_variable_name(raw: &str, profile: &BindingProfile) -> String {
    let name = sanitize_name(raw);
    let name = match profile.naming_convention {
        NamingConvention::SnakeCase => to_snake_case(&name),
        NamingConvention::CamelCase => to_camel_case(&name),
    };

    // A name starting with a digit would not compile; escape it by
    // prefixing an underscore.
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

/// Parameter names follow the same rules as variable names.
pub fn to_param_name(raw: &str, profile: &BindingProfile) -> String {
    to_variable_name(raw, profile)
}

/// Derive a model (type) name.
///
/// Check order is fixed: reserved-word prefixing runs before the
/// leading-digit check, and the digit check's output is not re-validated.
pub fn to_model_name(raw: &str, profile: &BindingProfile, sink: &dyn DiagnosticSink) -> String {
    let mut name = sanitize_name(raw);

    if profile.is_reserved(&name) {
        sink.emit(
            Diagnostic::warning(
                COMPONENT,
                format!("'{name}' (reserved word) cannot be used as a model name, renamed to 'model_{name}'"),
            )
            .at(raw.to_string()),
        );
        name = format!("model_{name}");
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        sink.emit(
            Diagnostic::warning(
                COMPONENT,
                format!("'{name}' (model name starts with a digit) renamed to 'model_{name}'"),
            )
            .at(raw.to_string()),
        );
        name = format!("model_{name}");
    }

    // Prefix/suffix apply only to names that are not namespace-qualified
    // (e.g. `\DateTime` stays as-is).
    if !name.starts_with('\\') {
        name = format!(
            "{}{}{}",
            profile.model_name_prefix, name, profile.model_name_suffix
        );
    }

    to_pascal_case(&name)
}

/// Model filenames are the same as model names.
pub fn to_model_filename(raw: &str, profile: &BindingProfile, sink: &dyn DiagnosticSink) -> String {
    to_model_name(raw, profile, sink)
}

/// Model test filenames append `Test` to the model name.
pub fn to_model_test_filename(
    raw: &str,
    profile: &BindingProfile,
    sink: &dyn DiagnosticSink,
) -> String {
    format!("{}Test", to_model_name(raw, profile, sink))
}

/// Derive a method name from an operation id.
///
/// An empty id is the layer's one fatal error; a reserved id is degraded to
/// a `call_`-prefixed name with a warning.
pub fn to_operation_id(
    raw: &str,
    profile: &BindingProfile,
    sink: &dyn DiagnosticSink,
) -> Result<String> {
    if raw.is_empty() {
        return Err(Box::new(Error::EmptyOperationId));
    }

    let mut id = raw.to_string();
    if profile.is_reserved(&id) {
        sink.emit(
            Diagnostic::warning(
                COMPONENT,
                format!("'{id}' (reserved word) cannot be used as a method name, renamed to 'call_{id}'"),
            )
            .at(raw.to_string()),
        );
        id = format!("call_{id}");
    }

    Ok(to_camel_case(&sanitize_name(&id)))
}

/// Escape a reserved word into a distinct, valid identifier.
///
/// The profile's explicit mapping wins; otherwise the profile's fallback
/// escaping applies (e.g. a leading underscore, or backtick wrapping).
pub fn escape_reserved_word(name: &str, profile: &BindingProfile) -> String {
    if let Some(mapped) = profile.reserved_word_mapping.get(name) {
        return mapped.clone();
    }
    (profile.escape_reserved_fallback)(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticBuffer;
    use crate::testing::fixture_profile;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("phone number"), "phone_number");
        assert_eq!(sanitize_name("pet.id"), "pet_id");
        assert_eq!(sanitize_name("\\DateTime"), "\\DateTime");
        assert_eq!(sanitize_name("Pet[]"), "Pet_");
        assert_eq!(sanitize_name("a  b"), "a__b");
    }

    #[test]
    fn test_variable_name_snake() {
        let profile = fixture_profile();
        assert_eq!(to_variable_name("PhoneNumber", &profile), "phone_number");
        assert_eq!(to_variable_name("petId", &profile), "pet_id");
    }

    #[test]
    fn test_variable_name_camel() {
        let mut profile = fixture_profile();
        profile.naming_convention = NamingConvention::CamelCase;
        assert_eq!(to_variable_name("phone_number", &profile), "phoneNumber");
    }

    #[test]
    fn test_variable_name_leading_digit() {
        let profile = fixture_profile();
        assert_eq!(to_variable_name("1st_place", &profile), "_1st_place");
    }

    #[test]
    fn test_variable_name_is_idempotent() {
        let snake = fixture_profile();
        let mut camel = fixture_profile();
        camel.naming_convention = NamingConvention::CamelCase;
        for raw in ["PhoneNumber", "petId", "1st_place", "already_snake"] {
            let once = to_variable_name(raw, &snake);
            assert_eq!(to_variable_name(&once, &snake), once);
            let once = to_variable_name(raw, &camel);
            assert_eq!(to_variable_name(&once, &camel), once);
        }
    }

    #[test]
    fn test_model_name_plain() {
        let profile = fixture_profile();
        let sink = DiagnosticBuffer::new();
        assert_eq!(to_model_name("phone_number", &profile, &sink), "PhoneNumber");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_model_name_leading_digit() {
        let profile = fixture_profile();
        let sink = DiagnosticBuffer::new();
        assert_eq!(
            to_model_name("200Response", &profile, &sink),
            "Model200Response"
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn model_name_reserved_then_digit_order() {
        // Reserved-word prefixing runs first; the digit check then sees the
        // prefixed name and its own output is not re-validated.
        let profile = fixture_profile();
        let sink = DiagnosticBuffer::new();
        assert_eq!(to_model_name("return", &profile, &sink), "ModelReturn");
        assert_eq!(sink.len(), 1);

        let sink = DiagnosticBuffer::new();
        assert_eq!(
            to_model_name("200return", &profile, &sink),
            "Model200return"
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_model_name_namespace_qualified_passthrough() {
        let mut profile = fixture_profile();
        profile.model_name_prefix = "Api".to_string();
        let sink = DiagnosticBuffer::new();
        assert_eq!(to_model_name("\\DateTime", &profile, &sink), "\\DateTime");
        // The prefix glues on without a separator, so camelization leaves
        // the raw name's first letter alone.
        assert_eq!(to_model_name("pet", &profile, &sink), "Apipet");
    }

    #[test]
    fn test_model_filenames() {
        let profile = fixture_profile();
        let sink = DiagnosticBuffer::new();
        assert_eq!(to_model_filename("pet_tag", &profile, &sink), "PetTag");
        assert_eq!(
            to_model_test_filename("pet_tag", &profile, &sink),
            "PetTagTest"
        );
    }

    #[test]
    fn test_operation_id() {
        let profile = fixture_profile();
        let sink = DiagnosticBuffer::new();
        assert_eq!(
            to_operation_id("get_pet_by_id", &profile, &sink).unwrap(),
            "getPetById"
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_operation_id_reserved() {
        let profile = fixture_profile();
        let sink = DiagnosticBuffer::new();
        assert_eq!(
            to_operation_id("return", &profile, &sink).unwrap(),
            "callReturn"
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_operation_id_empty_is_fatal() {
        let profile = fixture_profile();
        let sink = DiagnosticBuffer::new();
        let err = to_operation_id("", &profile, &sink).unwrap_err();
        assert!(matches!(*err, Error::EmptyOperationId));
    }

    #[test]
    fn test_escape_reserved_word() {
        let mut profile = fixture_profile();
        assert_eq!(escape_reserved_word("class", &profile), "_class");
        profile
            .reserved_word_mapping
            .insert("class".to_string(), "klass".to_string());
        assert_eq!(escape_reserved_word("class", &profile), "klass");
    }

    #[test]
    fn test_escaped_reserved_words_are_distinct() {
        let profile = fixture_profile();
        for word in &profile.reserved_words {
            let escaped = escape_reserved_word(word, &profile);
            assert_ne!(&escaped, word);
        }
    }
}
