//! Application state for the UI. All workspace logic lives in
//! [NetworkWorkspace]; this layer holds form buffers and modal state.

mod settings;

use std::path::PathBuf;

use net_core::cabling::CableDrop;
use net_core::ecs::DragPayload;
use net_core::params::WorkspaceParams;
use net_core::placement::Placement;
use net_core::spatial::Point;
use net_core::workspace::{DropOutcome, NetworkWorkspace};
use tracing::{info, warn};

use self::settings::{load_settings, save_settings, settings_file_path};

/// Message shown in the blocking notice modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalMessage {
    pub title: &'static str,
    pub text: String,
}

impl ModalMessage {
    fn notice(text: impl Into<String>) -> Self {
        Self {
            title: "Notice",
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            title: "Error",
            text: text.into(),
        }
    }
}

pub struct NetUiApp {
    pub workspace: NetworkWorkspace,
    /// Edited copy of the params; applied on demand.
    pub settings_draft: WorkspaceParams,
    pub settings_path: Option<PathBuf>,
    pub router_ip_input: String,
    pub router_mask_input: String,
    pub modal: Option<ModalMessage>,
    /// Result of the most recent drop, shown in the top bar.
    pub status_line: String,
}

impl NetUiApp {
    /// Create the app, loading params from the settings file when present.
    pub fn new() -> Self {
        let settings_path = match settings_file_path() {
            Ok(path) => Some(path),
            Err(error) => {
                warn!(%error, "settings file location unavailable");
                None
            }
        };
        let mut startup_modal = None;
        let params = match settings_path.as_deref().map(load_settings) {
            Some(Ok(Some(params))) => {
                info!("loaded workspace settings");
                params
            }
            Some(Ok(None)) | None => WorkspaceParams::default(),
            Some(Err(error)) => {
                warn!(%error, "ignoring settings file");
                startup_modal = Some(ModalMessage::error(format!(
                    "Settings file ignored: {error}"
                )));
                WorkspaceParams::default()
            }
        };
        let mut app = Self::with_params(params);
        app.settings_path = settings_path;
        app.modal = startup_modal;
        app
    }

    pub fn with_params(params: WorkspaceParams) -> Self {
        let workspace = NetworkWorkspace::new(params);
        Self {
            settings_draft: workspace.params().clone(),
            workspace,
            settings_path: None,
            router_ip_input: String::new(),
            router_mask_input: String::new(),
            modal: None,
            status_line: String::new(),
        }
    }

    /// True while a notice is showing; workspace actions wait for it to close.
    pub fn is_blocked(&self) -> bool {
        self.modal.is_some()
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    pub fn handle_drop(&mut self, payload: DragPayload, at: Point) {
        if self.is_blocked() {
            return;
        }
        match self.workspace.handle_drop(payload, at) {
            Ok(outcome) => self.status_line = describe_drop(&outcome),
            Err(error) => self.modal = Some(ModalMessage::error(error.to_string())),
        }
    }

    pub fn confirm_router_config(&mut self) {
        match self
            .workspace
            .confirm_router_config(&self.router_ip_input, &self.router_mask_input)
        {
            Ok(notice) => {
                self.router_ip_input.clear();
                self.router_mask_input.clear();
                self.modal = Some(ModalMessage::notice(notice.to_string()));
            }
            Err(error) => self.modal = Some(ModalMessage::error(error.to_string())),
        }
    }

    pub fn cancel_router_config(&mut self) {
        self.workspace.cancel_router_config();
        self.router_ip_input.clear();
        self.router_mask_input.clear();
    }

    /// Reopen the configuration dialog for the placed router.
    pub fn configure_router(&mut self) {
        if self.is_blocked() {
            return;
        }
        if let Err(error) = self.workspace.reopen_router_config() {
            self.modal = Some(ModalMessage::error(error.to_string()));
        }
    }

    pub fn play(&mut self) {
        if self.is_blocked() {
            return;
        }
        match self.workspace.start_simulation() {
            Ok(count) => self.status_line = format!("Simulation started with {count} packets"),
            Err(error) => self.modal = Some(ModalMessage::error(error.to_string())),
        }
    }

    pub fn stop(&mut self) {
        let notice = self.workspace.stop_simulation();
        self.modal = Some(ModalMessage::notice(notice.to_string()));
    }

    pub fn reset(&mut self) {
        if self.is_blocked() {
            return;
        }
        self.workspace.reset();
        self.router_ip_input.clear();
        self.router_mask_input.clear();
        self.status_line.clear();
    }

    /// Step one animation frame. Returns whether another repaint is needed.
    pub fn tick(&mut self) -> bool {
        self.workspace.advance_frame()
    }

    /// Whether the frame loop wants another repaint without user input.
    pub fn needs_repaint(&self) -> bool {
        self.workspace.is_running()
    }

    pub fn apply_settings(&mut self) {
        self.workspace.set_params(self.settings_draft.clone());
        self.settings_draft = self.workspace.params().clone();
    }

    pub fn save_settings(&mut self) {
        self.apply_settings();
        let Some(path) = self.settings_path.as_deref() else {
            self.modal = Some(ModalMessage::error("No location to save settings to"));
            return;
        };
        match save_settings(path, self.workspace.params()) {
            Ok(()) => {
                info!(path = %path.display(), "settings saved");
                self.status_line = format!("Settings saved to {}", path.display());
            }
            Err(error) => self.modal = Some(ModalMessage::error(error.to_string())),
        }
    }
}

fn describe_drop(outcome: &DropOutcome) -> String {
    match outcome {
        DropOutcome::Placed(Placement::Addressed { device, address }) => {
            format!("Placed device {device} with IP {address}")
        }
        DropOutcome::Placed(Placement::AwaitingRouterConfig { device }) => {
            format!("Placed router {device}, waiting for configuration")
        }
        DropOutcome::Cable(CableDrop::NoDevice) => "No device to connect".to_string(),
        DropOutcome::Cable(CableDrop::Repeated { device }) => {
            format!("Device {device} already selected, pick another one")
        }
        DropOutcome::Cable(CableDrop::Selected { device }) => {
            format!("Cable attached to {device}, drop again on the other end")
        }
        DropOutcome::Cable(CableDrop::Drawn { .. }) => "Cable drawn".to_string(),
    }
}
