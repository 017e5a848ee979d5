//! Persisted generation settings (radius, bias votes, lava flag).
//!
//! The world itself is never persisted; only the user's tuning survives a
//! restart.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wander_core::GenConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format_version: u32,
    pub config: GenConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self { format_version: 1, config: GenConfig::default() }
    }
}

impl Settings {
    pub fn with_config(config: GenConfig) -> Self {
        Self { format_version: 1, config }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("settings.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        Ok(settings)
    }
}
