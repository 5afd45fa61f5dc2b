//! The per-target-language binding profile.
//!
//! A [`BindingProfile`] is a capability-set configuration value, not a
//! virtual-dispatch chain: each target language is a profile instance built
//! by its profile crate (e.g. `nib-binding-php`), applied read-only by every
//! engine operation. Profiles are constructed once per generation run and
//! never mutated afterwards.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Identifier casing applied to variable and parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingConvention {
    /// `PhoneNumber` -> `phone_number`
    SnakeCase,
    /// `phone_number` -> `phoneNumber`
    CamelCase,
}

/// Per-profile syntax hook: compose or rewrite one string.
pub type SyntaxFn = fn(&str) -> String;

/// Enum symbol substitutions shared by the shipped profiles
/// (e.g. a raw enum value `$` becomes the constant `DOLLAR`).
pub const DEFAULT_SYMBOL_NAMES: &[(&str, &str)] = &[
    ("$", "Dollar"),
    ("^", "Caret"),
    ("|", "Pipe"),
    ("=", "Equal"),
    ("*", "Star"),
    ("-", "Minus"),
    ("+", "Plus"),
    ("&", "Ampersand"),
    ("%", "Percent"),
    ("#", "Hash"),
    ("@", "At"),
    ("!", "Exclamation"),
    (":", "Colon"),
    (">", "Greater_Than"),
    ("<", "Less_Than"),
    (".", "Period"),
    ("_", "Underscore"),
    ("?", "Question_Mark"),
    (",", "Comma"),
    ("/", "Slash"),
    ("\\", "Back_Slash"),
];

/// Immutable configuration driving every naming, typing, literal and layout
/// decision for one target language.
#[derive(Debug, Clone)]
pub struct BindingProfile {
    /// Language identifier (e.g. "php", "scala").
    pub language: &'static str,
    /// Casing applied to variable/parameter names.
    pub naming_convention: NamingConvention,

    /// Reserved words, stored lowercased; lookups lowercase the probe.
    pub reserved_words: IndexSet<String>,
    /// Explicit reserved-word replacements, consulted before the fallback.
    pub reserved_word_mapping: IndexMap<String, String>,
    /// Target-language primitive tokens returned verbatim by type mapping.
    pub language_primitives: IndexSet<String>,
    /// Schema type token -> target type token.
    pub type_mapping: IndexMap<String, String>,
    /// Abstract container ("array"/"map") -> concrete container token.
    pub instantiation_types: IndexMap<String, String>,
    /// Raw enum symbol -> word (e.g. `$` -> `Dollar`).
    pub symbol_names: &'static [(&'static str, &'static str)],

    /// Wrapped around generated model names (unless namespace-qualified).
    pub model_name_prefix: String,
    /// See `model_name_prefix`.
    pub model_name_suffix: String,

    /// Root namespace stripped from package paths.
    pub invoker_package: String,
    /// Top-level output folder for the package ("" for none).
    pub package_path: String,
    /// Source root under the package path.
    pub src_base_path: String,
    /// Test root under the package path.
    pub test_base_path: String,
    /// Documentation root under the package path.
    pub docs_base_path: String,
    /// Namespace/folder segment for API classes.
    pub api_dir: &'static str,
    /// Namespace/folder segment for model classes.
    pub model_dir: &'static str,
    /// Namespace separator in package strings (e.g. `\` or `.`).
    pub namespace_separator: &'static str,
    /// Whether model references are emitted fully qualified.
    pub qualify_model_refs: bool,

    /// Compose an array type declaration from the inner declaration.
    pub array_syntax: SyntaxFn,
    /// Compose a (string-keyed) map type declaration from the inner declaration.
    pub map_syntax: SyntaxFn,

    /// Boolean true literal.
    pub true_literal: &'static str,
    /// Boolean false literal.
    pub false_literal: &'static str,
    /// Null literal used as the example-synthesis fallback.
    pub null_literal: &'static str,
    /// Placeholder path for file parameters without an example.
    pub file_placeholder: &'static str,
    /// Quote a string default value.
    pub quote_default: SyntaxFn,
    /// Wrap an ISO date string in the profile's date construction expression.
    pub date_ctor: SyntaxFn,
    /// Wrap an ISO timestamp in the profile's date-time construction expression.
    pub datetime_ctor: SyntaxFn,
    /// Build an empty-instance construction expression for a model type.
    pub model_ctor: SyntaxFn,
    /// Wrap a literal in the profile's sequence-literal syntax.
    pub seq_literal: SyntaxFn,
    /// Wrap a literal in the profile's single-entry map-literal syntax.
    pub map_literal: SyntaxFn,
    /// Escape a reserved word not covered by `reserved_word_mapping`.
    pub escape_reserved_fallback: SyntaxFn,
    /// Strip the profile's quotation mark from raw text (code-injection guard).
    pub escape_quotation_mark: SyntaxFn,

    /// Whether `number` defaults without a float/double format are honored.
    pub honors_integer_defaults: bool,

    /// Passthrough metadata with no effect on binding logic.
    pub artifact_version: Option<String>,
    /// Passthrough metadata with no effect on binding logic.
    pub git_user_id: Option<String>,
    /// Passthrough metadata with no effect on binding logic.
    pub git_repo_id: Option<String>,
}

impl BindingProfile {
    /// Check if a name is a reserved word (case-insensitive).
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(name.to_lowercase().as_str())
    }

    /// Word substitution for a raw enum symbol, if the profile knows one.
    pub fn symbol_name(&self, value: &str) -> Option<&'static str> {
        self.symbol_names
            .iter()
            .find(|(symbol, _)| *symbol == value)
            .map(|(_, word)| *word)
    }

    /// Namespace of generated model classes.
    pub fn model_package(&self) -> String {
        format!(
            "{}{}{}",
            self.invoker_package, self.namespace_separator, self.model_dir
        )
    }

    /// Namespace of generated API classes.
    pub fn api_package(&self) -> String {
        format!(
            "{}{}{}",
            self.invoker_package, self.namespace_separator, self.api_dir
        )
    }
}
