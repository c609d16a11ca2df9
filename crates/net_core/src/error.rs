use std::fmt;

/// Errors surfaced by workspace operations. The UI shows them in the notice modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// Drag payload identity that names neither a device template nor the cable.
    UnknownPayload(String),
    /// A router is already on the workspace; addressing assumes a single one.
    RouterAlreadyPlaced,
    /// Router configuration confirmed while no router is waiting for it.
    NoPendingRouter,
    /// Router configuration requested with no router on the workspace.
    NoRouter,
    /// Simulation started without a server to send packets to.
    NoServer,
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::UnknownPayload(identity) => {
                write!(f, "unknown device template '{identity}'")
            }
            WorkspaceError::RouterAlreadyPlaced => {
                write!(f, "a router is already placed on the workspace")
            }
            WorkspaceError::NoPendingRouter => write!(f, "no router is waiting for configuration"),
            WorkspaceError::NoRouter => write!(f, "no router is placed on the workspace"),
            WorkspaceError::NoServer => write!(f, "place a server before starting the simulation"),
        }
    }
}

impl std::error::Error for WorkspaceError {}
