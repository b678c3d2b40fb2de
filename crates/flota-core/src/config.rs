use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::error::Error;
use super::error::Result;
use super::state::UserProfile;

pub const APP_DIR_NAME: &str = "flota";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub layout: LayoutConfig,
    pub appearance: AppearanceConfig,
    pub session: SessionConfig,
    pub profile: ProfileConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub preferences_path: Option<PathBuf>,
    pub in_memory: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Terminal widths (in columns) below this are laid out as mobile.
    pub mobile_breakpoint: u16,
    pub sidebar_width: u16,
    pub resize_debounce_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 100,
            sidebar_width: 32,
            resize_debounce_ms: 150,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppearanceConfig {
    pub system_prefers_dark: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Gate the shell behind the login screen until a login is persisted.
    /// Off by default; `--route /login` shows the screen regardless.
    pub require_login: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Admin Usuario".to_string(),
            role: "Administrador del Sistema".to_string(),
            email: "admin@flotaadmin.com".to_string(),
            phone: "+507 6000-0000".to_string(),
            department: "Administración".to_string(),
        }
    }
}

impl ProfileConfig {
    pub fn to_user_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.as_str().into(),
            role: self.role.as_str().into(),
            email: self.email.as_str().into(),
            phone: self.phone.as_str().into(),
            department: self.department.as_str().into(),
        }
    }
}

impl Config {
    /// Loads the config at `path`. A missing file is the default config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.mobile_breakpoint == 0 {
            return Err(Error::config_invalid("layout.mobile_breakpoint must be > 0"));
        }
        if self.layout.sidebar_width < 16 {
            return Err(Error::config_invalid(
                "layout.sidebar_width must be at least 16 columns",
            ));
        }
        Ok(())
    }

    /// Where the preference file lives unless overridden on the command line.
    pub fn preferences_path(&self) -> PathBuf {
        self.storage
            .preferences_path
            .clone()
            .unwrap_or_else(default_preferences_path)
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

pub fn default_preferences_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(PREFERENCES_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tmpdir");
        let config = Config::load(dir.path().join("absent.toml")).expect("load");
        assert_eq!(config, Config::default());
        assert!(!config.session.require_login);
        assert_eq!(config.layout.mobile_breakpoint, 100);
    }

    #[test]
    fn partial_file_keeps_defaults_for_other_sections() {
        let config = Config::from_toml_str(
            r#"
            [layout]
            mobile_breakpoint = 80

            [profile]
            name = "Ana López"
            "#,
        )
        .expect("parse");
        assert_eq!(config.layout.mobile_breakpoint, 80);
        assert_eq!(config.layout.sidebar_width, 32);
        assert_eq!(config.profile.name, "Ana López");
        assert_eq!(config.profile.email, "admin@flotaadmin.com");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = Config::from_toml_str("[layout\nmobile_breakpoint = ").unwrap_err();
        assert!(matches!(err, Error::TomlDe(_)));
    }

    #[test]
    fn zero_breakpoint_is_rejected() {
        let err = Config::from_toml_str("[layout]\nmobile_breakpoint = 0").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn login_gate_is_opt_in() {
        let config = Config::from_toml_str("[session]\nrequire_login = true").expect("parse");
        assert!(config.session.require_login);
    }

    #[test]
    fn explicit_storage_path_wins() {
        let config = Config::from_toml_str("[storage]\npreferences_path = \"/tmp/p.json\"")
            .expect("parse");
        assert_eq!(config.preferences_path(), PathBuf::from("/tmp/p.json"));
    }
}
