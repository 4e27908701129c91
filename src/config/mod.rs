use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::catalog::Catalog;
use crate::errors::SignupError;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Frontend preferences persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
    /// Optional JSON file overriding the built-in plan/add-on catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, SignupError> {
        Self::from_base(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, SignupError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, SignupError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, SignupError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), SignupError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Loads the catalog override if configured, the built-in one otherwise.
    pub fn load_catalog(&self, config: &Config) -> Result<Catalog, SignupError> {
        match &config.catalog_path {
            Some(path) => {
                let data = fs::read_to_string(path)?;
                Catalog::from_json(&data)
            }
            None => Ok(Catalog::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn base_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("signup_core")
}

fn ensure_dir(path: &Path) -> Result<(), SignupError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
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

fn write_atomic(path: &Path, data: &str) -> Result<(), SignupError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert!(!config.quiet_mode);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn config_round_trips() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            quiet_mode: true,
            high_contrast_mode: true,
            ..Config::default()
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert!(loaded.quiet_mode);
        assert!(loaded.high_contrast_mode);
        assert!(!loaded.screen_reader_mode);
    }

    #[test]
    fn catalog_override_is_loaded_and_validated() {
        let dir = TempDir::new().unwrap();
        let catalog_file = dir.path().join("catalog.json");
        let json = serde_json::to_string(&Catalog::default()).unwrap();
        fs::write(&catalog_file, json).unwrap();

        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            catalog_path: Some(catalog_file),
            ..Config::default()
        };
        let catalog = manager.load_catalog(&config).unwrap();
        assert_eq!(catalog.plans().len(), 3);

        let bad_file = dir.path().join("bad.json");
        fs::write(&bad_file, "{\"plans\": [], \"addons\": []}").unwrap();
        let bad_config = Config {
            catalog_path: Some(bad_file),
            ..Config::default()
        };
        assert!(manager.load_catalog(&bad_config).is_err());
    }
}
