//! Output-relative path layout.
//!
//! Pure string composition: nothing here touches the filesystem. All paths
//! are relative to the generator's output folder, which is owned by the
//! external emission layer.

use std::path::MAIN_SEPARATOR;

use crate::profile::BindingProfile;

/// Compute the source path for a package under a base path.
///
/// The profile's invoker namespace is stripped from the package, path
/// delimiters (`.`, `\`, `/`) become the host separator, one leading and one
/// trailing separator are trimmed, and the base path is normalized to end
/// with exactly one separator.
pub fn to_source_path(package_name: &str, base_path: &str, profile: &BindingProfile) -> String {
    let sep = MAIN_SEPARATOR;

    let package = if profile.invoker_package.is_empty() {
        package_name.to_string()
    } else {
        package_name.replace(&profile.invoker_package, "")
    };

    let mut base = base_path.trim_end_matches(['\\', '/']).to_string();
    if !base.is_empty() {
        base.push(sep);
    }

    let mapped: String = package
        .chars()
        .map(|c| if matches!(c, '.' | '\\' | '/') { sep } else { c })
        .collect();
    let mapped = mapped.strip_prefix(sep).unwrap_or(&mapped);

    let joined = format!("{base}{mapped}");
    joined.strip_suffix(sep).unwrap_or(&joined).to_string()
}

/// Source path prefixed with the profile's package path.
pub fn to_package_path(package_name: &str, base_path: &str, profile: &BindingProfile) -> String {
    let source = to_source_path(package_name, base_path, profile);
    if profile.package_path.is_empty() {
        source
    } else {
        format!("{}{}{}", profile.package_path, MAIN_SEPARATOR, source)
    }
}

fn under_package(profile: &BindingProfile, parts: &[&str]) -> String {
    let sep = MAIN_SEPARATOR.to_string();
    let mut segments: Vec<&str> = Vec::new();
    if !profile.package_path.is_empty() {
        segments.push(&profile.package_path);
    }
    segments.extend_from_slice(parts);
    segments.join(&sep)
}

/// Output folder for generated API classes.
pub fn api_folder(profile: &BindingProfile) -> String {
    to_package_path(&profile.api_package(), &profile.src_base_path, profile)
}

/// Output folder for generated model classes.
pub fn model_folder(profile: &BindingProfile) -> String {
    to_package_path(&profile.model_package(), &profile.src_base_path, profile)
}

/// Output folder for generated API tests.
pub fn api_test_folder(profile: &BindingProfile) -> String {
    under_package(profile, &[&profile.test_base_path, profile.api_dir])
}

/// Output folder for generated model tests.
pub fn model_test_folder(profile: &BindingProfile) -> String {
    under_package(profile, &[&profile.test_base_path, profile.model_dir])
}

/// Output folder for generated API documentation.
pub fn api_doc_folder(profile: &BindingProfile) -> String {
    under_package(profile, &[&profile.docs_base_path, profile.api_dir])
}

/// Output folder for generated model documentation.
pub fn model_doc_folder(profile: &BindingProfile) -> String {
    under_package(profile, &[&profile.docs_base_path, profile.model_dir])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_profile;

    fn sep() -> String {
        MAIN_SEPARATOR.to_string()
    }

    #[test]
    fn test_source_path_strips_invoker_and_maps_delimiters() {
        let profile = fixture_profile();
        let s = sep();
        assert_eq!(
            to_source_path("acme.api", "src", &profile),
            format!("src{s}api")
        );
        assert_eq!(
            to_source_path("acme.model", "src", &profile),
            format!("src{s}model")
        );
    }

    #[test]
    fn test_source_path_normalizes_base() {
        let profile = fixture_profile();
        let s = sep();
        assert_eq!(
            to_source_path("acme.api", "src/", &profile),
            format!("src{s}api")
        );
        assert_eq!(to_source_path("acme.api", "", &profile), "api");
    }

    #[test]
    fn test_package_path_prefix() {
        let mut profile = fixture_profile();
        let s = sep();
        assert_eq!(
            to_package_path("acme.api", "src", &profile),
            format!("acme-client{s}src{s}api")
        );
        profile.package_path = String::new();
        assert_eq!(
            to_package_path("acme.api", "src", &profile),
            format!("src{s}api")
        );
    }

    #[test]
    fn test_folder_accessors() {
        let profile = fixture_profile();
        let s = sep();
        assert_eq!(api_folder(&profile), format!("acme-client{s}src{s}api"));
        assert_eq!(model_folder(&profile), format!("acme-client{s}src{s}model"));
        assert_eq!(api_test_folder(&profile), format!("acme-client{s}test{s}api"));
        assert_eq!(
            model_test_folder(&profile),
            format!("acme-client{s}test{s}model")
        );
        assert_eq!(api_doc_folder(&profile), format!("acme-client{s}docs{s}api"));
        assert_eq!(
            model_doc_folder(&profile),
            format!("acme-client{s}docs{s}model")
        );
    }
}
