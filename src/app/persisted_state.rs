// SPDX-License-Identifier: MPL-2.0
//! Local state kept across sessions in CBOR.
//!
//! Unlike `settings.toml`, nothing here is meant to be edited by hand. The
//! file lives in the data directory (see [`paths::get_app_data_dir`]).

use super::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Loyalty points shown at startup. Nothing in the app changes them.
    #[serde(default)]
    pub loyalty_points: u32,

    /// Gallery directory of the previous session, used when neither the
    /// command line nor the settings file name one.
    #[serde(default)]
    pub last_gallery_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns the state and an optional i18n key for a warning. Missing
    /// files are not an error.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(&path) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read persisted state");
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location. Returns a warning key on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        match self.write(&path) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to write persisted state");
                Some("notification-state-write-error".to_string())
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let state = ciborium::from_reader(BufReader::new(file))?;
        Ok(state)
    }

    fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        ciborium::into_writer(self, BufWriter::new(file))?;
        Ok(())
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the gallery directory for the next session.
    pub fn remember_gallery_directory(&mut self, directory: &Path) -> bool {
        if self.last_gallery_directory.as_deref() == Some(directory) {
            return false;
        }
        self.last_gallery_directory = Some(directory.to_path_buf());
        true
    }
}
