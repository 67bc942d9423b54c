// ABOUTME: Profile store persisting the single training profile as a JSON record
// ABOUTME: Loads never fail; saves go through a temporary file and an atomic rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mai_coach_core::models::Profile;
use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::errors::{AppError, AppResult};

/// Why no profile could be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    /// No record has been saved yet
    NeverSaved,
    /// The record exists but is not a valid profile object
    Malformed(String),
    /// The record could not be read
    Unreadable(String),
}

/// Result of loading the profile record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredProfile {
    /// The last saved profile
    Present(Profile),
    /// Nothing usable on disk
    Absent(Absence),
}

impl StoredProfile {
    /// The profile, if one was loaded
    #[must_use]
    pub fn into_profile(self) -> Option<Profile> {
        match self {
            Self::Present(profile) => Some(profile),
            Self::Absent(_) => None,
        }
    }

    /// Whether a profile was loaded
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Store for the singleton training profile
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured profile location
    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.profile_path())
    }

    /// Location of the record
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last saved profile
    ///
    /// Missing, unreadable and unparsable records all come back as
    /// [`StoredProfile::Absent`] with the reason attached.
    #[must_use]
    pub fn load(&self) -> StoredProfile {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No profile saved yet");
                return StoredProfile::Absent(Absence::NeverSaved);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Profile record is unreadable");
                return StoredProfile::Absent(Absence::Unreadable(e.to_string()));
            }
        };

        match serde_json::from_str::<Profile>(&raw) {
            Ok(profile) => StoredProfile::Present(profile),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Profile record is malformed");
                StoredProfile::Absent(Absence::Malformed(e.to_string()))
            }
        }
    }

    /// Replace the stored profile
    ///
    /// # Errors
    ///
    /// Returns a storage error if the data directory cannot be created or the
    /// record cannot be written. The previous record is left intact in that case.
    pub fn save(&self, profile: &Profile) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!(
                    "Cannot create data directory {}: {e}",
                    parent.display()
                ))
                .with_source(e)
            })?;
        }

        let body = serde_json::to_vec_pretty(profile)?;
        let tmp_path = self.tmp_path();

        let written = write_synced(&tmp_path, &body).and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            // Best effort cleanup
            let _ = fs::remove_file(&tmp_path);
            return Err(AppError::storage(format!(
                "Failed to save profile to {}: {e}",
                self.path.display()
            ))
            .with_source(e));
        }

        info!(path = %self.path.display(), "Profile saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_synced(path: &Path, body: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(body)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmp_path_is_sibling_of_record() {
        let store = ProfileStore::new("/data/coach/user_data.json");
        assert_eq!(store.tmp_path(), PathBuf::from("/data/coach/user_data.json.tmp"));
    }

    #[test]
    fn test_missing_keys_read_as_empty_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        fs::write(&path, r#"{"goal": "get stronger"}"#).unwrap();

        let loaded = ProfileStore::new(&path).load().into_profile().unwrap();
        assert_eq!(loaded.goal, "get stronger");
        assert_eq!(loaded.experience_level, "");
    }

    #[test]
    fn test_non_object_record_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            ProfileStore::new(&path).load(),
            StoredProfile::Absent(Absence::Malformed(_))
        ));
    }
}
