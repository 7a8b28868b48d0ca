use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the key-value storage slots.
    pub storage: String,
    /// Location stamped on punches when none is given.
    pub default_location: String,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_history_limit() -> usize {
    20
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_location() -> String {
    "Escritório Principal".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: Self::storage_dir().to_string_lossy().to_string(),
            default_location: default_location(),
            history_limit: default_history_limit(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ponto")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ponto")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ponto.conf")
    }

    /// Return the default storage directory for the key-value slots
    pub fn storage_dir() -> PathBuf {
        Self::config_dir().join("storage")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unreadable. A corrupt config never blocks a command.
    pub fn load() -> Self {
        let path = Self::config_file();

        fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_yaml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Initialize configuration and storage directories
    pub fn init_all(custom_storage: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Storage dir: user provided or default
        let storage_path = if let Some(name) = custom_storage {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::storage_dir()
        };

        let config = Config {
            storage: storage_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        fs::create_dir_all(&storage_path)?;

        Ok(storage_path)
    }
}
