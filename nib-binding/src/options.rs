//! Run-level configuration applied on top of a profile's built-ins.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::profile::{BindingProfile, NamingConvention};

/// Options recognized by the binding layer.
///
/// Every field is optional; a missing field keeps the profile's built-in
/// value. Unknown keys are rejected at parse time rather than silently
/// stored. `artifact_version` / `git_user_id` / `git_repo_id` are
/// passthrough metadata with no effect on binding decisions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationOptions {
    /// Root namespace stripped from package paths.
    pub invoker_namespace: Option<String>,
    /// Output subfolder for source code.
    pub source_base_path: Option<String>,
    /// Identifier casing override.
    pub naming_convention: Option<NamingConvention>,
    /// Prefix wrapped around generated model names.
    pub model_name_prefix: Option<String>,
    /// Suffix wrapped around generated model names.
    pub model_name_suffix: Option<String>,
    /// Extra reserved-word replacements merged into the profile's mapping.
    #[serde(default)]
    pub reserved_word_overrides: IndexMap<String, String>,
    /// Passthrough metadata.
    pub artifact_version: Option<String>,
    /// Passthrough metadata.
    pub git_user_id: Option<String>,
    /// Passthrough metadata.
    pub git_repo_id: Option<String>,
}

impl FromStr for GenerationOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|source| Error::parse_options(source, s, "options.toml"))
    }
}

impl BindingProfile {
    /// Apply run-level options, returning the configured profile.
    ///
    /// Never fails: options only override what they name.
    pub fn apply(mut self, options: &GenerationOptions) -> Self {
        if let Some(namespace) = &options.invoker_namespace {
            self.invoker_package = namespace.clone();
        }
        if let Some(base) = &options.source_base_path {
            self.src_base_path = base.clone();
        }
        if let Some(convention) = options.naming_convention {
            self.naming_convention = convention;
        }
        if let Some(prefix) = &options.model_name_prefix {
            self.model_name_prefix = prefix.clone();
        }
        if let Some(suffix) = &options.model_name_suffix {
            self.model_name_suffix = suffix.clone();
        }
        for (word, replacement) in &options.reserved_word_overrides {
            self.reserved_word_mapping
                .insert(word.clone(), replacement.clone());
        }
        if options.artifact_version.is_some() {
            self.artifact_version = options.artifact_version.clone();
        }
        if options.git_user_id.is_some() {
            self.git_user_id = options.git_user_id.clone();
        }
        if options.git_repo_id.is_some() {
            self.git_repo_id = options.git_repo_id.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_profile;

    #[test]
    fn test_empty_options_keep_builtins() {
        let profile = fixture_profile().apply(&GenerationOptions::default());
        assert_eq!(profile.invoker_package, "acme");
        assert_eq!(profile.src_base_path, "src");
        assert_eq!(profile.naming_convention, NamingConvention::SnakeCase);
    }

    #[test]
    fn test_options_from_toml() {
        let options: GenerationOptions = r#"
            invoker_namespace = "Yay.Pets"
            naming_convention = "camelCase"
            model_name_prefix = "Api"

            [reserved_word_overrides]
            list = "list_"
        "#
        .parse()
        .unwrap();

        let profile = fixture_profile().apply(&options);
        assert_eq!(profile.invoker_package, "Yay.Pets");
        assert_eq!(profile.naming_convention, NamingConvention::CamelCase);
        assert_eq!(profile.model_name_prefix, "Api");
        assert_eq!(
            profile.reserved_word_mapping.get("list").map(String::as_str),
            Some("list_")
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = "composer_vendor_name = \"yaypets\"".parse::<GenerationOptions>();
        assert!(result.is_err());
    }

    #[test]
    fn test_passthrough_metadata() {
        let options: GenerationOptions = r#"
            artifact_version = "1.2.3"
            git_user_id = "acme"
            git_repo_id = "petstore"
        "#
        .parse()
        .unwrap();
        let profile = fixture_profile().apply(&options);
        assert_eq!(profile.artifact_version.as_deref(), Some("1.2.3"));
        assert_eq!(profile.git_user_id.as_deref(), Some("acme"));
        assert_eq!(profile.git_repo_id.as_deref(), Some("petstore"));
    }
}
