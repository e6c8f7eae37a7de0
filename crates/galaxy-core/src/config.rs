//! Galaxy application configuration
//!
//! Only the settings the masthead reads are modelled. Every field is
//! optional: an unset value is `None`, and consumers decide the default.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "GALAXY_CONFIG_";

/// Section name used when settings are nested (`galaxy:` in galaxy.yml)
const SECTION: &str = "galaxy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PropertyKind {
    Str,
    Bool,
}

/// Typed schema of every known property
const SCHEMA: &[(&str, PropertyKind)] = &[
    ("brand", PropertyKind::Str),
    ("display_galaxy_brand", PropertyKind::Bool),
    ("nginx_upload_path", PropertyKind::Str),
    ("use_remote_user", PropertyKind::Bool),
    ("remote_user_logout_href", PropertyKind::Str),
    ("enable_cloud_launch", PropertyKind::Bool),
    ("lims_doc_url", PropertyKind::Str),
    ("default_locale", PropertyKind::Str),
    ("support_url", PropertyKind::Str),
    ("search_url", PropertyKind::Str),
    ("mailing_lists", PropertyKind::Str),
    ("screencasts_url", PropertyKind::Str),
    ("wiki_url", PropertyKind::Str),
    ("citation_url", PropertyKind::Str),
    ("terms_url", PropertyKind::Str),
    ("allow_user_creation", PropertyKind::Bool),
    ("logo_url", PropertyKind::Str),
    ("logo_src", PropertyKind::Str),
    ("ftp_upload_site", PropertyKind::Str),
    ("datatypes_disable_auto", PropertyKind::Bool),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand: Option<String>,
    pub display_galaxy_brand: Option<bool>,
    pub nginx_upload_path: Option<String>,
    pub use_remote_user: Option<bool>,
    pub remote_user_logout_href: Option<String>,
    pub enable_cloud_launch: Option<bool>,
    pub lims_doc_url: Option<String>,
    pub default_locale: Option<String>,
    pub support_url: Option<String>,
    pub search_url: Option<String>,
    pub mailing_lists: Option<String>,
    pub screencasts_url: Option<String>,
    pub wiki_url: Option<String>,
    pub citation_url: Option<String>,
    pub terms_url: Option<String>,
    pub allow_user_creation: Option<bool>,
    pub logo_url: Option<String>,
    pub logo_src: Option<String>,
    pub ftp_upload_site: Option<String>,
    pub datatypes_disable_auto: Option<bool>,
}

impl AppConfig {
    /// Load from a YAML or TOML file (chosen by extension, YAML by default).
    ///
    /// Settings may sit at the top level or inside a `galaxy` section.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            let mut table: toml::Table = toml::from_str(&contents)?;
            match table.remove(SECTION) {
                Some(section) => section.try_into()?,
                None => toml::Value::Table(table).try_into()?,
            }
        } else {
            let mut value: serde_yaml::Value = serde_yaml::from_str(&contents)?;
            if let Some(section) = value.get(SECTION).cloned() {
                value = section;
            }
            serde_yaml::from_value(value)?
        };

        debug!("Loaded application config from {}", path.display());
        Ok(config)
    }

    /// Apply a string override to a known property.
    ///
    /// The value is converted to the property's type, so `"false"` sets a
    /// boolean and `"0"` stays the string `"0"` on a string property.
    /// Returns `Ok(false)` for unknown keys, which are left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<bool> {
        let Some(kind) = property_kind(key) else {
            return Ok(false);
        };

        let typed = match kind {
            PropertyKind::Str => Value::String(value.to_string()),
            PropertyKind::Bool => Value::Bool(parse_bool(value).ok_or_else(|| {
                Error::ConfigValidation(format!(
                    "'{}' expects a boolean, got '{}'",
                    key, value
                ))
            })?),
        };

        let mut raw = serde_json::to_value(&*self)?;
        if let Value::Object(map) = &mut raw {
            map.insert(key.to_string(), typed);
        }
        *self = serde_json::from_value(raw)?;
        Ok(true)
    }

    /// Merge `GALAXY_CONFIG_<KEY>` environment variables (env vars take precedence)
    pub fn merge_env(&mut self) {
        self.merge_vars(std::env::vars());
    }

    fn merge_vars(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        for (name, value) in vars {
            let Some(key) = name.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let key = key.to_lowercase();
            match self.apply_override(&key, &value) {
                Ok(true) => debug!("Applied {} from environment", key),
                Ok(false) => {}
                Err(e) => warn!("Ignoring {}: {}", name, e),
            }
        }
    }
}

fn property_kind(key: &str) -> Option<PropertyKind> {
    SCHEMA
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, kind)| *kind)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_is_all_unset() {
        let config = AppConfig::default();
        assert!(config.brand.is_none());
        assert!(config.enable_cloud_launch.is_none());
        assert!(config.logo_src.is_none());
    }

    #[test]
    fn test_schema_covers_every_field() {
        let raw = serde_json::to_value(AppConfig::default()).unwrap();
        let fields = raw.as_object().unwrap();
        assert_eq!(fields.len(), SCHEMA.len());
        for (name, _) in SCHEMA {
            assert!(fields.contains_key(*name), "missing field {}", name);
        }
    }

    #[test]
    fn test_from_yaml_with_galaxy_section() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(
            file,
            "galaxy:\n  brand: MyLab\n  enable_cloud_launch: true\n  terms_url: null"
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.brand.as_deref(), Some("MyLab"));
        assert_eq!(config.enable_cloud_launch, Some(true));
        assert!(config.terms_url.is_none());
    }

    #[test]
    fn test_from_yaml_top_level() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "wiki_url: https://galaxyproject.org/").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.wiki_url.as_deref(), Some("https://galaxyproject.org/"));
    }

    #[test]
    fn test_from_empty_yaml() {
        let file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[galaxy]\nbrand = \"MyLab\"\nallow_user_creation = false"
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.brand.as_deref(), Some("MyLab"));
        assert_eq!(config.allow_user_creation, Some(false));
    }

    #[test]
    fn test_override_keeps_property_types() {
        let mut config = AppConfig::default();
        assert!(config.apply_override("brand", "b").unwrap());
        assert!(config.apply_override("use_remote_user", "false").unwrap());
        assert!(config.apply_override("enable_cloud_launch", "yes").unwrap());

        assert_eq!(config.brand.as_deref(), Some("b"));
        assert_eq!(config.use_remote_user, Some(false));
        assert_eq!(config.enable_cloud_launch, Some(true));
    }

    #[test]
    fn test_override_falsy_string_is_not_unset() {
        let mut config = AppConfig::default();
        config.apply_override("brand", "0").unwrap();
        config.apply_override("terms_url", "").unwrap();

        assert_eq!(config.brand.as_deref(), Some("0"));
        assert_eq!(config.terms_url.as_deref(), Some(""));
    }

    #[test]
    fn test_override_unknown_key_is_ignored() {
        let mut config = AppConfig::default();
        assert!(!config.apply_override("another_key", "66").unwrap());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_override_invalid_bool() {
        let mut config = AppConfig::default();
        let err = config.apply_override("use_remote_user", "maybe").unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(_)));
        assert!(config.use_remote_user.is_none());
    }

    #[test]
    fn test_merge_vars_filters_prefix() {
        let mut config = AppConfig::default();
        config.merge_vars(vec![
            ("GALAXY_CONFIG_BRAND".to_string(), "EnvLab".to_string()),
            ("GALAXY_CONFIG_ALLOW_USER_CREATION".to_string(), "off".to_string()),
            ("GALAXY_CONFIG_USE_REMOTE_USER".to_string(), "bogus".to_string()),
            ("BRAND".to_string(), "ignored".to_string()),
        ]);

        assert_eq!(config.brand.as_deref(), Some("EnvLab"));
        assert_eq!(config.allow_user_creation, Some(false));
        assert!(config.use_remote_user.is_none());
    }

    #[test]
    #[serial]
    fn test_merge_env() {
        unsafe {
            std::env::set_var("GALAXY_CONFIG_SUPPORT_URL", "https://help.example.org");
        }

        let mut config = AppConfig::default();
        config.merge_env();

        unsafe {
            std::env::remove_var("GALAXY_CONFIG_SUPPORT_URL");
        }

        assert_eq!(config.support_url.as_deref(), Some("https://help.example.org"));
    }
}
