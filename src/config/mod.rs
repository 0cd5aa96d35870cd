use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the CSV session log.
    pub store: String,
    /// How many recent tasks to suggest before a session starts.
    #[serde(default = "default_recent_tasks")]
    pub recent_tasks: usize,
    /// Show totals with second precision instead of whole minutes.
    #[serde(default)]
    pub show_seconds: bool,
}

fn default_recent_tasks() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            recent_tasks: default_recent_tasks(),
            show_seconds: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tasktimer")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tasktimer")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tasktimer.conf")
    }

    /// Return the full path of the session store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("task_log.csv")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that cannot be read or parsed degrades to defaults with a
    /// warning rather than aborting the command.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!("Ignoring malformed config file: {}", e));
                Config::default()
            }),
            Err(e) => {
                warning(format!("Could not read config file: {}", e));
                Config::default()
            }
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty store file if not exists
        if let Some(parent) = store_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !store_path.exists() {
            fs::File::create(&store_path)?;
        }

        println!("✅ Store:       {:?}", store_path);

        Ok(())
    }
}
