//! Device placement from a palette drop.

use bevy_ecs::prelude::{Entity, Resource, World};
use tracing::info;

use crate::addressing::generate_address;
use crate::ecs::{Device, DeviceId, DeviceRole, Position};
use crate::error::WorkspaceError;
use crate::router_config::{reopen_router_config, PendingRouterConfig};
use crate::spatial::Point;

/// Next placement sequence number.
#[derive(Debug, Default, Resource)]
pub struct DeviceSequence(pub u64);

impl DeviceSequence {
    pub fn next_id(&mut self) -> DeviceId {
        let id = DeviceId(self.0);
        self.0 += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Host or server placed with a freshly generated address.
    Addressed { device: DeviceId, address: String },
    /// Router placed without an address; the configuration dialog is open for it.
    AwaitingRouterConfig { device: DeviceId },
}

pub fn router_entity(world: &mut World) -> Option<Entity> {
    let mut devices = world.query::<(Entity, &Device)>();
    devices
        .iter(world)
        .find(|(_, device)| device.role == DeviceRole::Router)
        .map(|(entity, _)| entity)
}

/// Place a device with its icon's top-left corner at `at`.
///
/// Coordinates are not validated; icons may overlap or sit outside the canvas.
/// Dropping a router while an unconfigured one is placed reopens its dialog
/// instead of adding a second router.
pub fn place_device(
    world: &mut World,
    role: DeviceRole,
    at: Point,
) -> Result<Placement, WorkspaceError> {
    if role == DeviceRole::Router {
        if let Some(entity) = router_entity(world) {
            let configured = world
                .get::<Device>(entity)
                .is_some_and(|router| router.ip.is_some());
            if configured {
                return Err(WorkspaceError::RouterAlreadyPlaced);
            }
            let device = reopen_router_config(world)?;
            return Ok(Placement::AwaitingRouterConfig { device });
        }
    }

    let id = world.resource_mut::<DeviceSequence>().next_id();
    let mut device = Device::new(role);

    if role == DeviceRole::Router {
        let entity = world.spawn((device, id, Position(at))).id();
        world.resource_mut::<PendingRouterConfig>().0 = Some(entity);
        info!(device = %id, x = at.x, y = at.y, "router placed, awaiting configuration");
        return Ok(Placement::AwaitingRouterConfig { device: id });
    }

    let address = generate_address(world);
    device.ip = Some(address.clone());
    world.spawn((device, id, Position(at)));
    info!(device = %id, %role, %address, x = at.x, y = at.y, "device placed");
    Ok(Placement::Addressed {
        device: id,
        address,
    })
}
