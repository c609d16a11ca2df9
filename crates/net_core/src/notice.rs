//! Blocking informational messages returned by workspace operations.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    RouterConfigured { ip: String },
    SimulationStopped,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::RouterConfigured { ip } => write!(f, "Router configured with IP {ip}"),
            Notice::SimulationStopped => write!(f, "Simulation stopped."),
        }
    }
}
