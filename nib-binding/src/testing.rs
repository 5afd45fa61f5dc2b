//! Test utilities for the binding engine.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use indexmap::{IndexMap, IndexSet};

use crate::profile::{BindingProfile, DEFAULT_SYMBOL_NAMES, NamingConvention};

/// A minimal generic-container profile for engine unit tests.
///
/// The shipped language profiles live in their own crates; this fixture
/// exists so engine tests do not depend on them. It models a small
/// dot-namespaced language with `List[T]` / `Map[string, T]` containers.
pub fn fixture_profile() -> BindingProfile {
    BindingProfile {
        language: "fixture",
        naming_convention: NamingConvention::SnakeCase,
        reserved_words: ["class", "return", "type"]
            .into_iter()
            .map(str::to_string)
            .collect::<IndexSet<_>>(),
        reserved_word_mapping: IndexMap::new(),
        language_primitives: ["string", "int", "float", "bool", "List", "Map"]
            .into_iter()
            .map(str::to_string)
            .collect::<IndexSet<_>>(),
        type_mapping: [
            ("string", "string"),
            ("integer", "int"),
            ("long", "int"),
            ("number", "float"),
            ("float", "float"),
            ("double", "float"),
            ("boolean", "bool"),
            ("file", "File"),
            ("array", "List"),
            ("map", "Map"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<IndexMap<_, _>>(),
        instantiation_types: [("array", "List"), ("map", "Map")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<IndexMap<_, _>>(),
        symbol_names: DEFAULT_SYMBOL_NAMES,
        model_name_prefix: String::new(),
        model_name_suffix: String::new(),
        invoker_package: "acme".to_string(),
        package_path: "acme-client".to_string(),
        src_base_path: "src".to_string(),
        test_base_path: "test".to_string(),
        docs_base_path: "docs".to_string(),
        api_dir: "api",
        model_dir: "model",
        namespace_separator: ".",
        qualify_model_refs: false,
        array_syntax: |inner| format!("List[{inner}]"),
        map_syntax: |inner| format!("Map[string, {inner}]"),
        true_literal: "true",
        false_literal: "false",
        null_literal: "null",
        file_placeholder: "/path/to/file",
        quote_default: |s| format!("\"{s}\""),
        date_ctor: |s| format!("date(\"{s}\")"),
        datetime_ctor: |s| format!("datetime(\"{s}\")"),
        model_ctor: |decl| format!("new {decl}()"),
        seq_literal: |inner| format!("[{inner}]"),
        map_literal: |inner| format!("{{\"key\": {inner}}}"),
        escape_reserved_fallback: |name| format!("_{name}"),
        escape_quotation_mark: |s| s.replace('"', ""),
        honors_integer_defaults: true,
        artifact_version: None,
        git_user_id: None,
        git_repo_id: None,
    }
}
