//! Test helpers for common test setup and utilities.

use bevy_ecs::prelude::{Entity, World};

use crate::ecs::{Device, DeviceRole, Position};
use crate::params::WorkspaceParams;
use crate::placement::DeviceSequence;
use crate::spatial::Point;
use crate::workspace::build_workspace;

/// Seed used by every test world so generated addresses are reproducible.
pub const TEST_SEED: u64 = 42;

/// World with all workspace resources, default params and a fixed seed.
pub fn create_test_world() -> World {
    let mut world = World::new();
    build_workspace(&mut world, WorkspaceParams::default().with_seed(TEST_SEED));
    world
}

/// Spawn a device directly, bypassing placement rules and address generation.
pub fn spawn_device(world: &mut World, role: DeviceRole, at: Point, ip: Option<&str>) -> Entity {
    let id = world.resource_mut::<DeviceSequence>().next_id();
    let mut device = Device::new(role);
    device.ip = ip.map(str::to_string);
    world.spawn((device, id, Position(at))).id()
}

/// Last dot-separated segment of `address` as a number.
pub fn last_octet(address: &str) -> Option<u32> {
    address.rsplit('.').next()?.parse().ok()
}
