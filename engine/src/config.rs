use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{
    Result,
    eyre::{WrapErr as _, eyre},
};
use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{APP_NAME, Credential};

/// What the desktop app persists between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
}

impl Config {
    pub fn credential(&self) -> Credential {
        Credential::new(self.api_key.clone())
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(dirs::config_local_dir()
        .ok_or(eyre!("Couldn't get config dir"))?
        .join(APP_NAME)
        .join("config.json"))
}

/// Returns `None` if there is no config file yet.
pub fn load_config(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        debug!("No config at {path:?}");
        Ok(None)
    } else {
        load_json_file(path)
            .wrap_err_with(|| format!("Couldn't read config {path:?}"))
            .map(Some)
    }
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    save_json_file(path, cfg)
}

pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let src = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&src)?)
}

pub fn save_json_file<T: Serialize>(path: &Path, x: &T) -> Result<()> {
    Ok(fs::write(path, serde_json::to_string(x)?)?)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_is_none() -> Result<()> {
        let dir = TempDir::new()?;
        assert_eq!(load_config(&dir.path().join("config.json"))?, None);
        Ok(())
    }

    #[test]
    fn save_and_reload() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("config.json");

        save_config(&path, &Config { api_key: "hf_one".into() })?;
        assert_eq!(fs::read_to_string(&path)?, r#"{"api_key":"hf_one"}"#);

        save_config(&path, &Config { api_key: "hf_two".into() })?;
        let cfg = load_config(&path)?.unwrap();
        assert_eq!(cfg.api_key, "hf_two");
        assert_eq!(cfg.credential().expose(), "hf_two");
        Ok(())
    }

    #[test]
    fn missing_key_field_defaults_to_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.json");
        fs::write(&path, "{}")?;
        assert!(!load_config(&path)?.unwrap().credential().is_present());
        Ok(())
    }

    #[test]
    fn broken_file_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.json");
        fs::write(&path, "api_key = nope")?;
        assert!(load_config(&path).is_err());
        Ok(())
    }
}
