//! Read-only projections of the world for rendering.

use bevy_ecs::prelude::World;

use crate::ecs::{Device, DeviceId, DeviceRole, Packet, PacketPhase, Position};
use crate::spatial::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceView {
    pub id: DeviceId,
    pub role: DeviceRole,
    pub position: Point,
    pub ip: Option<String>,
    pub mask: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PacketView {
    pub position: Point,
    pub target: Point,
    pub phase: PacketPhase,
    pub source_ip: String,
}

/// Devices in placement order.
pub fn device_views(world: &World) -> Vec<DeviceView> {
    let mut views: Vec<DeviceView> = world
        .iter_entities()
        .filter_map(|entity| {
            let device = entity.get::<Device>()?;
            let id = entity.get::<DeviceId>()?;
            let position = entity.get::<Position>()?;
            Some(DeviceView {
                id: *id,
                role: device.role,
                position: position.0,
                ip: device.ip.clone(),
                mask: device.mask.clone(),
            })
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}

/// Packets in creation order.
pub fn packet_views(world: &World) -> Vec<PacketView> {
    let mut packets: Vec<&Packet> = world
        .iter_entities()
        .filter_map(|entity| entity.get::<Packet>())
        .collect();
    packets.sort_by_key(|packet| packet.seq);
    packets
        .into_iter()
        .map(|packet| PacketView {
            position: packet.position,
            target: packet.target,
            phase: packet.phase,
            source_ip: packet.source_ip.clone(),
        })
        .collect()
}
