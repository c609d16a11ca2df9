use net_core::params::WorkspaceParams;
use serde::{Deserialize, Serialize};

use super::SETTINGS_FILE_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct SettingsFileV1 {
    pub(super) version: u32,
    pub(super) workspace: WorkspaceParams,
}

impl SettingsFileV1 {
    pub(super) fn new(workspace: WorkspaceParams) -> Self {
        Self {
            version: SETTINGS_FILE_VERSION,
            workspace,
        }
    }
}
