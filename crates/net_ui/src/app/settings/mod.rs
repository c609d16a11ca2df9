mod model;
mod store;


use std::fmt;

pub(crate) const SETTINGS_FILE_NAME: &str = "netsim_settings.json";
pub(super) const SETTINGS_FILE_VERSION: u32 = 1;

#[derive(Debug)]
pub(crate) enum SettingsStoreError {
    Io(String),
    InvalidFormat(String),
}

impl fmt::Display for SettingsStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsStoreError::Io(message) => write!(f, "{message}"),
            SettingsStoreError::InvalidFormat(message) => write!(f, "{message}"),
        }
    }
}

pub(crate) use store::{load_settings, save_settings, settings_file_path};
