//! The Scala binding profile.

use indexmap::{IndexMap, IndexSet};
use nib_binding::profile::{BindingProfile, DEFAULT_SYMBOL_NAMES, NamingConvention};

use crate::naming::{RESERVED_WORDS, escape_scala_reserved};

/// Scala type tokens that need no model-name treatment.
const PRIMITIVES: &[&str] = &[
    "String", "boolean", "Boolean", "Double", "Int", "Long", "Float", "Object", "Any", "List",
    "Seq", "Map", "Array",
];

/// Schema type token -> Scala type token.
const TYPE_MAPPING: &[(&str, &str)] = &[
    ("string", "String"),
    ("boolean", "Boolean"),
    ("integer", "Int"),
    ("int", "Int"),
    ("long", "Long"),
    ("float", "Float"),
    ("double", "Double"),
    ("number", "Double"),
    ("date", "Date"),
    ("Date", "Date"),
    ("DateTime", "Date"),
    ("file", "Path"),
    ("binary", "String"),
    ("ByteArray", "String"),
    ("UUID", "String"),
    ("array", "Seq"),
    ("list", "Seq"),
    ("map", "Map"),
    ("object", "Any"),
];

/// Build the Scala binding profile.
pub fn profile() -> BindingProfile {
    BindingProfile {
        language: "scala",
        naming_convention: NamingConvention::CamelCase,
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
        instantiation_types: [("array", "Seq"), ("map", "Map")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<IndexMap<_, _>>(),
        symbol_names: DEFAULT_SYMBOL_NAMES,
        model_name_prefix: String::new(),
        model_name_suffix: String::new(),
        invoker_package: "nib.client".to_string(),
        package_path: String::new(),
        src_base_path: "src/main/scala".to_string(),
        test_base_path: "src/test/scala".to_string(),
        docs_base_path: "docs".to_string(),
        api_dir: "api",
        model_dir: "model",
        namespace_separator: ".",
        qualify_model_refs: false,
        array_syntax: |inner| format!("Seq[{inner}]"),
        map_syntax: |inner| format!("Map[String, {inner}]"),
        true_literal: "true",
        false_literal: "false",
        null_literal: "null",
        file_placeholder: "/path/to/file",
        quote_default: |s| format!("\"{s}\""),
        date_ctor: |s| format!("LocalDate.parse(\"{s}\")"),
        datetime_ctor: |s| format!("OffsetDateTime.parse(\"{s}\")"),
        model_ctor: |declaration| format!("new {declaration}()"),
        seq_literal: |inner| format!("Seq({inner})"),
        map_literal: |inner| format!("Map(\"key\" -> {inner})"),
        escape_reserved_fallback: escape_scala_reserved,
        // remove double quotes to avoid code injection in literals
        escape_quotation_mark: |s| s.replace('"', ""),
        honors_integer_defaults: true,
        artifact_version: None,
        git_user_id: None,
        git_repo_id: None,
    }
}
