//! Router configuration dialog state.

use std::net::Ipv4Addr;

use bevy_ecs::prelude::{Entity, Resource, World};
use tracing::{info, warn};

use crate::ecs::{Device, DeviceId};
use crate::error::WorkspaceError;
use crate::notice::Notice;
use crate::placement::router_entity;

/// Router waiting for the configuration dialog to be confirmed.
#[derive(Debug, Default, Resource)]
pub struct PendingRouterConfig(pub Option<Entity>);

pub fn pending_router(world: &World) -> Option<DeviceId> {
    let entity = world.resource::<PendingRouterConfig>().0?;
    world.get::<DeviceId>(entity).copied()
}

/// Store `ip` and `mask` on the pending router verbatim and close the dialog.
///
/// Malformed input is accepted as typed.
pub fn confirm_router_config(
    world: &mut World,
    ip: &str,
    mask: &str,
) -> Result<Notice, WorkspaceError> {
    let entity = world
        .resource_mut::<PendingRouterConfig>()
        .0
        .take()
        .ok_or(WorkspaceError::NoPendingRouter)?;
    let mut device = world
        .get_mut::<Device>(entity)
        .ok_or(WorkspaceError::NoPendingRouter)?;

    if ip.parse::<Ipv4Addr>().is_err() {
        warn!(ip, "router address is not a dotted-quad IPv4 address");
    }
    if mask.parse::<Ipv4Addr>().is_err() {
        warn!(mask, "router mask is not a dotted-quad IPv4 mask");
    }

    device.ip = Some(ip.to_string());
    device.mask = Some(mask.to_string());
    info!(ip, mask, "router configured");
    Ok(Notice::RouterConfigured { ip: ip.to_string() })
}

/// Close the dialog; the router stays on the workspace unconfigured until the
/// dialog is reopened and confirmed.
pub fn cancel_router_config(world: &mut World) {
    if world.resource_mut::<PendingRouterConfig>().0.take().is_some() {
        info!("router configuration cancelled");
    }
}

/// Point the configuration dialog at the placed router, configured or not.
pub fn reopen_router_config(world: &mut World) -> Result<DeviceId, WorkspaceError> {
    let entity = router_entity(world).ok_or(WorkspaceError::NoRouter)?;
    let id = world
        .get::<DeviceId>(entity)
        .copied()
        .ok_or(WorkspaceError::NoRouter)?;
    world.resource_mut::<PendingRouterConfig>().0 = Some(entity);
    info!(device = %id, "router configuration reopened");
    Ok(id)
}
