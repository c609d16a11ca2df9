use bevy_ecs::prelude::{Entity, With, World};
use tracing::info;

use crate::cabling::Canvas;
use crate::ecs::{Device, DeviceId, DeviceRole, Packet, Position};
use crate::error::WorkspaceError;
use crate::notice::Notice;
use crate::runner::SimulationStatus;
use crate::spatial::Point;

fn first_server_position(world: &mut World) -> Option<Point> {
    let mut devices = world.query::<(&Device, &DeviceId, &Position)>();
    devices
        .iter(world)
        .filter(|(device, _, _)| device.role == DeviceRole::Server)
        .min_by_key(|(_, id, _)| **id)
        .map(|(_, _, position)| position.0)
}

fn despawn_packets(world: &mut World) {
    let packets: Vec<Entity> = world
        .query_filtered::<Entity, With<Packet>>()
        .iter(world)
        .collect();
    for entity in packets {
        world.despawn(entity);
    }
}

/// Rebuild the packet list, one outbound packet per non-router device, and
/// start the frame loop. Returns the number of packets created.
pub fn start_simulation(world: &mut World) -> Result<usize, WorkspaceError> {
    despawn_packets(world);

    let Some(server) = first_server_position(world) else {
        world.resource_mut::<SimulationStatus>().running = false;
        return Err(WorkspaceError::NoServer);
    };

    let mut devices: Vec<(DeviceId, Point, String)> = world
        .query::<(&Device, &DeviceId, &Position)>()
        .iter(world)
        .filter(|(device, _, _)| device.role != DeviceRole::Router)
        .map(|(device, id, position)| (*id, position.0, device.ip.clone().unwrap_or_default()))
        .collect();
    devices.sort_by_key(|(id, _, _)| *id);

    let count = devices.len();
    for (seq, (_, origin, source_ip)) in devices.into_iter().enumerate() {
        world.spawn(Packet::outbound(seq as u64, origin, server, source_ip));
    }

    *world.resource_mut::<SimulationStatus>() = SimulationStatus {
        running: true,
        frame: 0,
    };
    info!(packets = count, "simulation started");
    Ok(count)
}

/// Empty the packet list, clear the canvas and halt the frame loop.
pub fn stop_simulation(world: &mut World) -> Notice {
    despawn_packets(world);
    world.resource_mut::<Canvas>().clear();
    world.resource_mut::<SimulationStatus>().running = false;
    info!("simulation stopped");
    Notice::SimulationStopped
}
