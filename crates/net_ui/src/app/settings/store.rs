use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use net_core::params::WorkspaceParams;

use super::model::SettingsFileV1;
use super::{SettingsStoreError, SETTINGS_FILE_NAME, SETTINGS_FILE_VERSION};

pub(crate) fn settings_file_path() -> Result<PathBuf, SettingsStoreError> {
    let cwd = std::env::current_dir().map_err(|error| {
        SettingsStoreError::Io(format!("failed to read current directory: {error}"))
    })?;
    Ok(cwd.join(SETTINGS_FILE_NAME))
}

/// Load workspace params; `Ok(None)` when the file does not exist.
pub(crate) fn load_settings(path: &Path) -> Result<Option<WorkspaceParams>, SettingsStoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(SettingsStoreError::Io(format!(
                "failed to read settings file '{}': {error}",
                path.display()
            )))
        }
    };

    let file: SettingsFileV1 = serde_json::from_str(&contents).map_err(|error| {
        SettingsStoreError::InvalidFormat(format!(
            "invalid settings file '{}': {error}",
            path.display()
        ))
    })?;

    if file.version != SETTINGS_FILE_VERSION {
        return Err(SettingsStoreError::InvalidFormat(format!(
            "unsupported settings file version {} in '{}'",
            file.version,
            path.display()
        )));
    }

    Ok(Some(file.workspace.normalized()))
}

pub(crate) fn save_settings(path: &Path, params: &WorkspaceParams) -> Result<(), SettingsStoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            SettingsStoreError::Io(format!(
                "failed to create settings directory '{}': {error}",
                parent.display()
            ))
        })?;
    }

    let serialized = serde_json::to_string_pretty(&SettingsFileV1::new(params.clone()))
        .map_err(|error| {
            SettingsStoreError::Io(format!("failed to serialize settings to json: {error}"))
        })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let temp_path = path.with_extension(format!("json.tmp.{nanos}"));
    let mut temp_file = File::create(&temp_path).map_err(|error| {
        SettingsStoreError::Io(format!(
            "failed to create temp settings file '{}': {error}",
            temp_path.display()
        ))
    })?;
    temp_file
        .write_all(serialized.as_bytes())
        .and_then(|()| temp_file.sync_all())
        .map_err(|error| {
            let _ = fs::remove_file(&temp_path);
            SettingsStoreError::Io(format!(
                "failed to write temp settings file '{}': {error}",
                temp_path.display()
            ))
        })?;

    fs::rename(&temp_path, path).map_err(|error| {
        let _ = fs::remove_file(&temp_path);
        SettingsStoreError::Io(format!(
            "failed to move temp settings file '{}' to '{}': {error}",
            temp_path.display(),
            path.display()
        ))
    })
}
