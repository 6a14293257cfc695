//! Runtime configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, an optional
//! TOML file (`--config`), and individual command line flags.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [database]
//! path = "localization.sqlite"
//!
//! [ui]
//! root_url = "/localization-admin"
//! authorized_admin_roles = ["Administrators", "LocalizationAdmins"]
//! show_invariant_culture = true
//!
//! [ui.language_names]
//! sv = "Swedish"
//! ```

use clap::Parser;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "localization-admin")]
#[command(about = "Admin API for database-backed localization resources", long_about = None)]
pub struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "LOCALIZATION_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database file
    #[arg(long, env = "LOCALIZATION_ADMIN_DB")]
    pub db: Option<PathBuf>,

    /// Host to bind the web server to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to run the web server on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Open the admin page in the default browser once the server is up
    #[arg(long)]
    pub open_browser: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("localization.sqlite"),
        }
    }
}

/// Settings that shape the admin UI and who may use it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Mount point of the admin pages; the JSON API lives under `{root_url}/api/service`.
    pub root_url: String,
    /// Members may edit and get `adminMode` in responses.
    pub authorized_admin_roles: Vec<String>,
    /// Members may edit translations.
    pub authorized_editor_roles: Vec<String>,
    pub show_invariant_culture: bool,
    pub show_hidden_resources: bool,
    pub max_resource_key_display_length: usize,
    pub max_resource_key_popup_title_length: usize,
    /// Display names by language code. Unlisted languages are shown by code.
    pub language_names: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            root_url: "/localization-admin".to_string(),
            authorized_admin_roles: vec![
                "Administrators".to_string(),
                "LocalizationAdmins".to_string(),
            ],
            authorized_editor_roles: vec!["LocalizationEditors".to_string()],
            show_invariant_culture: false,
            show_hidden_resources: false,
            max_resource_key_display_length: 80,
            max_resource_key_popup_title_length: 80,
            language_names: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Builds the effective configuration for the given command line.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };

        if let Some(db) = &args.db {
            config.database.path = db.clone();
        }
        if let Some(host) = &args.host {
            config.server.host = host.clone();
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if args.open_browser {
            config.server.open_browser = true;
        }

        config.ui.root_url = normalize_root_url(&config.ui.root_url);
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// `localization-admin/` and `/localization-admin` both become `/localization-admin`.
/// An empty value mounts at the site root.
fn normalize_root_url(root_url: &str) -> String {
    let trimmed = root_url.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_admin_ui_conventions() {
        let config = AppConfig::load(&Args::default()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ui.root_url, "/localization-admin");
        assert_eq!(config.ui.max_resource_key_display_length, 80);
        assert!(config.ui.authorized_admin_roles.contains(&"LocalizationAdmins".to_string()));
        assert!(!config.ui.show_hidden_resources);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [ui]
            authorized_admin_roles = ["Admin"]
            show_invariant_culture = true

            [ui.language_names]
            sv = "Swedish"
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.authorized_admin_roles, vec!["Admin"]);
        assert!(config.ui.show_invariant_culture);
        assert_eq!(config.ui.language_names.get("sv").map(String::as_str), Some("Swedish"));
        assert_eq!(config.ui.max_resource_key_popup_title_length, 80);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin.toml");
        fs::write(
            &path,
            "[server]\nport = 9000\n[database]\npath = \"from-file.sqlite\"\n[ui]\nroot_url = \"translations/\"\n",
        )
        .unwrap();

        let args = Args {
            config: Some(path),
            db: Some(PathBuf::from("override.sqlite")),
            port: Some(9100),
            ..Args::default()
        };
        let config = AppConfig::load(&args).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.database.path, PathBuf::from("override.sqlite"));
        assert_eq!(config.ui.root_url, "/translations");
    }

    #[test]
    fn missing_file_is_reported() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/admin.toml")),
            ..Args::default()
        };

        assert!(matches!(AppConfig::load(&args), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn root_url_normalization() {
        assert_eq!(normalize_root_url("/"), "");
        assert_eq!(normalize_root_url(" /admin/ "), "/admin");
    }
}
