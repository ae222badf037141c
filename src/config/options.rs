// src/config/options.rs
use std::env;

use super::consts::*;
use crate::view::SortMode;

/// Which published sheet/tab to read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetSource {
    pub sheet_id: String,
    pub gid: String,
}

impl Default for SheetSource {
    fn default() -> Self {
        Self {
            sheet_id: s!(SHEET_ID),
            gid: s!(DEFAULT_GID),
        }
    }
}

impl SheetSource {
    pub fn new(sheet_id: impl Into<String>, gid: impl Into<String>) -> Self {
        Self { sheet_id: sheet_id.into(), gid: gid.into() }
    }

    /// Compiled-in defaults, each overridable by its environment variable.
    /// Blank overrides are ignored.
    pub fn from_env() -> Self {
        let pick = |key: &str, fallback: &str| {
            env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| s!(fallback))
        };
        Self {
            sheet_id: pick(ENV_SHEET_ID, SHEET_ID),
            gid: pick(ENV_GID, DEFAULT_GID),
        }
    }

    /// CSV export URL for this sheet/tab.
    pub fn export_url(&self) -> String {
        format!(
            "{}{}/export?format=csv&gid={}",
            EXPORT_URL_PREFIX, self.sheet_id, self.gid
        )
    }
}

/// Search box + sort selector contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub search: String,
    pub sort: SortMode,
}
