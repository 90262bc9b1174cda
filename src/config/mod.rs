use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::{ExplorerError, Result};

const DEFAULT_DIR_NAME: &str = ".bikeshare_explorer";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Environment variable overriding the application home directory.
pub const HOME_ENV: &str = "BIKESHARE_HOME";
/// Environment variable overriding [`Config::data_dir`].
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Rows revealed per page while browsing raw data.
    pub page_size: usize,
    /// Wait for Enter before each statistics section.
    pub pause_between_reports: bool,
    /// Disable colours and unicode decorations.
    pub plain_output: bool,
    /// Suppress separator lines.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            page_size: DEFAULT_PAGE_SIZE,
            pause_between_reports: true,
            plain_output: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Data directory after applying the environment override, falling back
    /// to the working directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(custom) = env::var_os(DATA_DIR_ENV) {
            return PathBuf::from(custom);
        }
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(ExplorerError::Config(
                "page_size must be greater than zero".into(),
            ));
        }
        Ok(self)
    }
}

/// Returns the application home directory, defaulting to `~/.bikeshare_explorer`.
pub fn app_home_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_home_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_DIR).join(CONFIG_FILE),
        }
    }

    /// Reads the config file, returning defaults when it does not exist yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
