use net_core::ecs::{DeviceId, DeviceRole};
use net_core::params::WorkspaceParams;
use net_core::placement::Placement;
use net_core::spatial::Point;
use net_core::workspace::NetworkWorkspace;

pub use net_core::test_helpers::TEST_SEED;

/// Seeded workspace with default animation constants.
pub fn seeded_workspace() -> NetworkWorkspace {
    NetworkWorkspace::new(WorkspaceParams::default().with_seed(TEST_SEED))
}

/// Place a device and return its id, panicking on rejection.
pub fn place(workspace: &mut NetworkWorkspace, role: DeviceRole, x: f32, y: f32) -> DeviceId {
    match workspace
        .place_device(role, Point::new(x, y))
        .expect("placement should succeed")
    {
        Placement::Addressed { device, .. } => device,
        Placement::AwaitingRouterConfig { device } => device,
    }
}

/// Place a router and confirm its configuration in one go.
pub fn configured_router(workspace: &mut NetworkWorkspace, ip: &str, x: f32, y: f32) -> DeviceId {
    let id = place(workspace, DeviceRole::Router, x, y);
    workspace
        .confirm_router_config(ip, "255.255.255.0")
        .expect("router should be pending");
    id
}
