use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Workbook directory holding one CSV sheet per activity kind
    pub workbook: String,
    /// Kind assumed by commands when none is given
    #[serde(default = "default_kind")]
    pub default_kind: String,
}

fn default_kind() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: Self::workbook_dir().to_string_lossy().to_string(),
            default_kind: default_kind(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("promptbank")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".promptbank")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("promptbank.conf")
    }

    /// Return the default workbook directory
    pub fn workbook_dir() -> PathBuf {
        Self::config_dir().join("workbook")
    }

    /// Workbook directory as a path
    pub fn workbook_path(&self) -> &Path {
        Path::new(&self.workbook)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration file and return the resolved workbook
    /// directory. With `is_test` the config file is left alone so test runs
    /// never touch the user's real setup.
    pub fn init_all(custom_workbook: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // workbook dir: user provided or default
        let wb_path = if let Some(name) = custom_workbook {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::workbook_dir()
        };

        let config = Config {
            workbook: wb_path.to_string_lossy().to_string(),
            default_kind: default_kind(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(wb_path)
    }
}
