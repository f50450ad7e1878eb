//! User settings stored as settings.json in the app data directory

use crate::constants::*;
use crate::types::Operator;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub backend_url: String,

    // Register identity
    pub emp_cd: String,
    pub store_cd: String,
    pub pos_no: String,

    // Font with Japanese glyphs; falls back to known system fonts
    pub font_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            emp_cd: DEFAULT_EMP_CD.to_string(),
            store_cd: DEFAULT_STORE_CD.to_string(),
            pos_no: DEFAULT_POS_NO.to_string(),
            font_path: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fields: [(&str, &mut String); 4] = [
            (ENV_BACKEND_URL, &mut self.backend_url),
            (ENV_EMP_CD, &mut self.emp_cd),
            (ENV_STORE_CD, &mut self.store_cd),
            (ENV_POS_NO, &mut self.pos_no),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                info!(key, value = %value, "Setting overridden from environment");
                *field = value;
            }
        }
        self
    }

    pub fn operator(&self) -> Operator {
        Operator {
            emp_cd: self.emp_cd.clone(),
            store_cd: self.store_cd.clone(),
            pos_no: self.pos_no.clone(),
        }
    }
}
