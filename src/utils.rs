//! Utility functions

use crate::constants::{APP_NAME, CJK_FONT_CANDIDATES};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Get the app data directory path (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Load a font able to render the Japanese labels: the configured path first,
/// then well-known system fonts.
pub fn load_cjk_font(configured: Option<&str>) -> Option<(String, Vec<u8>)> {
    if let Some(path) = configured {
        match std::fs::read(path) {
            Ok(bytes) => return Some((path.to_string(), bytes)),
            Err(e) => warn!(error = %e, path, "Configured font unreadable, trying system fonts"),
        }
    }
    first_readable(CJK_FONT_CANDIDATES.iter().copied())
}

fn first_readable<'a>(paths: impl IntoIterator<Item = &'a str>) -> Option<(String, Vec<u8>)> {
    paths.into_iter().find_map(|path| match std::fs::read(path) {
        Ok(bytes) => {
            debug!(path, "Using font");
            Some((path.to_string(), bytes))
        }
        Err(_) => None,
    })
}
