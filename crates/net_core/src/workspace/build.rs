use bevy_ecs::prelude::World;

use crate::addressing::AddressRng;
use crate::cabling::{CableSelection, Canvas};
use crate::params::WorkspaceParams;
use crate::placement::DeviceSequence;
use crate::router_config::PendingRouterConfig;
use crate::runner::SimulationStatus;

/// Insert every resource the workspace operations and frame systems expect.
pub fn build_workspace(world: &mut World, params: WorkspaceParams) {
    let params = params.normalized();
    world.insert_resource(AddressRng::new(params.seed));
    world.insert_resource(params);
    world.insert_resource(DeviceSequence::default());
    world.insert_resource(CableSelection::default());
    world.insert_resource(Canvas::default());
    world.insert_resource(PendingRouterConfig::default());
    world.insert_resource(SimulationStatus::default());
}
