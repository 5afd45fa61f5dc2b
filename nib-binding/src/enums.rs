//! Enum constant and default-value naming.

use crate::casing::to_snake_case;
use crate::naming::sanitize_name;
use crate::profile::BindingProfile;

fn is_numeric_datatype(datatype: &str) -> bool {
    matches!(
        datatype.to_lowercase().as_str(),
        "int" | "integer" | "long" | "double" | "float" | "number"
    )
}

/// Derive an enum constant name from a raw enum value.
pub fn to_enum_var_name(value: &str, datatype: &str, profile: &BindingProfile) -> String {
    if value.is_empty() {
        return "EMPTY".to_string();
    }

    // Single symbols map through the profile's symbol table, e.g. `$`.
    if let Some(word) = profile.symbol_name(value) {
        return word.to_uppercase();
    }

    if is_numeric_datatype(datatype) {
        return value
            .replace('-', "MINUS_")
            .replace('+', "PLUS_")
            .replace('.', "_DOT_");
    }

    let name = sanitize_name(&to_snake_case(value).to_uppercase());
    let trimmed = name.strip_prefix('_').unwrap_or(&name);
    let trimmed = trimmed.strip_suffix('_').unwrap_or(trimmed);

    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// Derive the enum type name from its owner model name.
pub fn to_enum_name(owner_model_name: &str) -> String {
    let name = to_snake_case(owner_model_name).to_uppercase();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

/// Token selecting the generated constant for a declared enum default.
///
/// Purely a naming convention used by the template layer, not a computed
/// value.
pub fn to_enum_default_value(value: &str, datatype: &str) -> String {
    format!("{datatype}_{value}")
}

/// Render a raw enum value as a target-language literal.
pub fn to_enum_value(value: &str, datatype: &str, profile: &BindingProfile) -> String {
    if is_numeric_datatype(datatype) {
        value.to_string()
    } else {
        (profile.quote_default)(&(profile.escape_quotation_mark)(value))
    }
}
