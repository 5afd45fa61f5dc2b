//! The PHP binding profile.

use indexmap::{IndexMap, IndexSet};
use nib_binding::profile::{BindingProfile, DEFAULT_SYMBOL_NAMES, NamingConvention};

use crate::naming::{RESERVED_WORDS, escape_php_reserved};

/// PHP type tokens that need no model-name treatment.
const PRIMITIVES: &[&str] = &[
    "bool", "boolean", "int", "integer", "double", "float", "string", "object", "DateTime",
    "mixed", "number", "void", "byte",
];

/// Schema type token -> PHP type token.
const TYPE_MAPPING: &[(&str, &str)] = &[
    ("integer", "int"),
    ("long", "int"),
    ("number", "float"),
    ("float", "float"),
    ("double", "double"),
    ("string", "string"),
    ("byte", "int"),
    ("boolean", "bool"),
    ("Date", "\\DateTime"),
    ("DateTime", "\\DateTime"),
    ("file", "\\SplFileObject"),
    ("map", "map"),
    ("array", "array"),
    ("list", "array"),
    ("object", "object"),
    ("binary", "string"),
    ("ByteArray", "string"),
    ("UUID", "string"),
];

/// Build the PHP binding profile.
pub fn profile() -> BindingProfile {
    BindingProfile {
        language: "php",
        naming_convention: NamingConvention::SnakeCase,
        reserved_words: RESERVED_WORDS
            .iter()
            .map(|w| w.to_string())
            .collect::<IndexSet<_>>(),
        reserved_word_mapping: IndexMap::new(),
        language_primitives: PRIMITIVES
            .iter()
            .map(|p| p.to_string())
            .collect::<IndexSet<_>>(),
        type_mapping: TYPE_MAPPING
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<IndexMap<_, _>>(),
        instantiation_types: [("array", "array"), ("map", "map")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<IndexMap<_, _>>(),
        symbol_names: DEFAULT_SYMBOL_NAMES,
        model_name_prefix: String::new(),
        model_name_suffix: String::new(),
        invoker_package: "php".to_string(),
        package_path: "php-base".to_string(),
        src_base_path: "lib".to_string(),
        test_base_path: "test".to_string(),
        docs_base_path: "docs".to_string(),
        api_dir: "Api",
        model_dir: "Model",
        namespace_separator: "\\",
        qualify_model_refs: true,
        array_syntax: |inner| format!("{inner}[]"),
        map_syntax: |inner| format!("map[string,{inner}]"),
        true_literal: "True",
        false_literal: "False",
        null_literal: "NULL",
        file_placeholder: "/path/to/file",
        quote_default: |s| format!("'{s}'"),
        date_ctor: |s| format!("new \\DateTime(\"{s}\")"),
        datetime_ctor: |s| format!("new \\DateTime(\"{s}\")"),
        model_ctor: |declaration| format!("new {declaration}()"),
        seq_literal: |inner| format!("array({inner})"),
        map_literal: |inner| format!("array('key' => {inner})"),
        escape_reserved_fallback: escape_php_reserved,
        // remove single quotes to avoid code injection in literals
        escape_quotation_mark: |s| s.replace('\'', ""),
        honors_integer_defaults: false,
        artifact_version: None,
        git_user_id: None,
        git_repo_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tables() {
        let profile = profile();
        assert_eq!(profile.language, "php");
        assert!(profile.is_reserved("foreach"));
        assert!(profile.is_reserved("Return"));
        assert!(profile.language_primitives.contains("DateTime"));
        assert_eq!(
            profile.type_mapping.get("long").map(String::as_str),
            Some("int")
        );
        assert_eq!(
            profile.instantiation_types.get("map").map(String::as_str),
            Some("map")
        );
    }

    #[test]
    fn test_profile_packages() {
        let profile = profile();
        assert_eq!(profile.model_package(), "php\\Model");
        assert_eq!(profile.api_package(), "php\\Api");
    }

    #[test]
    fn test_container_syntax() {
        let profile = profile();
        assert_eq!((profile.array_syntax)("string"), "string[]");
        assert_eq!((profile.map_syntax)("int"), "map[string,int]");
    }

    #[test]
    fn test_literal_syntax() {
        let profile = profile();
        assert_eq!((profile.quote_default)("abc"), "'abc'");
        assert_eq!(
            (profile.date_ctor)("2013-10-20"),
            "new \\DateTime(\"2013-10-20\")"
        );
        assert_eq!((profile.seq_literal)("56"), "array(56)");
        assert_eq!((profile.map_literal)("56"), "array('key' => 56)");
        assert_eq!((profile.escape_quotation_mark)("it's"), "its");
    }
}
