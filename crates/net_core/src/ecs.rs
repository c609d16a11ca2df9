use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Component;

use crate::spatial::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceRole {
    Router,
    Server,
    Host,
}

impl DeviceRole {
    pub const ALL: [DeviceRole; 3] = [DeviceRole::Router, DeviceRole::Server, DeviceRole::Host];

    /// Template identity carried by the drag payload.
    pub fn identity(self) -> &'static str {
        match self {
            DeviceRole::Router => "router",
            DeviceRole::Server => "server",
            DeviceRole::Host => "host",
        }
    }
}

impl fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identity())
    }
}

/// Identity string reserved for the cable gesture.
pub const CABLE_IDENTITY: &str = "cable";

/// What a drag from the palette carries onto the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    Device(DeviceRole),
    Cable,
}

impl FromStr for DragPayload {
    type Err = crate::error::WorkspaceError;

    fn from_str(identity: &str) -> Result<Self, Self::Err> {
        if identity == CABLE_IDENTITY {
            return Ok(DragPayload::Cable);
        }
        DeviceRole::ALL
            .into_iter()
            .find(|role| role.identity() == identity)
            .map(DragPayload::Device)
            .ok_or_else(|| crate::error::WorkspaceError::UnknownPayload(identity.to_string()))
    }
}

/// Placement sequence number. Scans over devices follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Component)]
pub struct DeviceId(pub u64);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct Device {
    pub role: DeviceRole,
    /// Dotted-quad address; `None` for a router until it is configured.
    pub ip: Option<String>,
    /// Subnet mask, only ever set on the router.
    pub mask: Option<String>,
}

impl Device {
    pub fn new(role: DeviceRole) -> Self {
        Self {
            role,
            ip: None,
            mask: None,
        }
    }
}

/// Top-left corner of the device icon, workspace-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Position(pub Point);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketPhase {
    /// Heading to the server.
    Outbound,
    /// Heading back to the device that owns the source address.
    Returning,
    Delivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketColor {
    Blue,
    Red,
    Green,
}

impl PacketPhase {
    pub fn color(self) -> PacketColor {
        match self {
            PacketPhase::Outbound => PacketColor::Blue,
            PacketPhase::Returning => PacketColor::Red,
            PacketPhase::Delivered => PacketColor::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Component)]
pub struct Packet {
    /// Creation order within one simulation run.
    pub seq: u64,
    pub position: Point,
    pub target: Point,
    pub phase: PacketPhase,
    pub source_ip: String,
}

impl Packet {
    pub fn outbound(seq: u64, origin: Point, server: Point, source_ip: String) -> Self {
        Self {
            seq,
            position: origin,
            target: server,
            phase: PacketPhase::Outbound,
            source_ip,
        }
    }

    pub fn color(&self) -> PacketColor {
        self.phase.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkspaceError;

    #[test]
    fn payload_parses_reserved_cable_identity() {
        assert_eq!("cable".parse::<DragPayload>(), Ok(DragPayload::Cable));
        assert_eq!(
            "router".parse::<DragPayload>(),
            Ok(DragPayload::Device(DeviceRole::Router))
        );
        assert_eq!(
            "host".parse::<DragPayload>(),
            Ok(DragPayload::Device(DeviceRole::Host))
        );
    }

    #[test]
    fn payload_rejects_unknown_identity() {
        assert_eq!(
            "switch".parse::<DragPayload>(),
            Err(WorkspaceError::UnknownPayload("switch".to_string()))
        );
    }

    #[test]
    fn phase_colors_follow_direction() {
        assert_eq!(PacketPhase::Outbound.color(), PacketColor::Blue);
        assert_eq!(PacketPhase::Returning.color(), PacketColor::Red);
        assert_eq!(PacketPhase::Delivered.color(), PacketColor::Green);
    }
}
