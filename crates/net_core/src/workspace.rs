//! The workspace controller.
//!
//! [NetworkWorkspace] owns the ECS world and the frame schedule. Every UI
//! event goes through one of its methods; the UI never touches the world.

mod build;
mod simulation;
mod views;

use bevy_ecs::prelude::{Schedule, World};
use tracing::debug;

pub use build::build_workspace;
pub use simulation::{start_simulation, stop_simulation};
pub use views::{device_views, packet_views, DeviceView, PacketView};

use crate::addressing::{generate_address, AddressRng};
use crate::cabling::{drop_cable, CableDrop, CableLine, CableSelection, Canvas};
use crate::ecs::{DeviceId, DeviceRole, DragPayload};
use crate::error::WorkspaceError;
use crate::params::WorkspaceParams;
use crate::placement::{place_device, Placement};
use crate::notice::Notice;
use crate::router_config::{
    cancel_router_config, confirm_router_config, pending_router, reopen_router_config,
};
use crate::runner::{frame_schedule, run_frame, SimulationStatus};
use crate::spatial::Point;

/// What a drop onto the workspace did.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Placed(Placement),
    Cable(CableDrop),
}

pub struct NetworkWorkspace {
    world: World,
    schedule: Schedule,
}

impl Default for NetworkWorkspace {
    fn default() -> Self {
        Self::new(WorkspaceParams::default())
    }
}

impl NetworkWorkspace {
    pub fn new(params: WorkspaceParams) -> Self {
        let mut world = World::new();
        build_workspace(&mut world, params);
        Self {
            world,
            schedule: frame_schedule(),
        }
    }

    pub fn params(&self) -> &WorkspaceParams {
        self.world.resource::<WorkspaceParams>()
    }

    /// Replace the configuration. A changed seed reseeds address generation.
    pub fn set_params(&mut self, params: WorkspaceParams) {
        let params = params.normalized();
        if params.seed != self.params().seed {
            self.world.insert_resource(AddressRng::new(params.seed));
        }
        self.world.insert_resource(params);
    }

    /// Handle a palette drop at a workspace-relative point.
    pub fn handle_drop(
        &mut self,
        payload: DragPayload,
        at: Point,
    ) -> Result<DropOutcome, WorkspaceError> {
        debug!(?payload, x = at.x, y = at.y, "drop on workspace");
        match payload {
            DragPayload::Cable => Ok(DropOutcome::Cable(drop_cable(&mut self.world, at))),
            DragPayload::Device(role) => self.place_device(role, at).map(DropOutcome::Placed),
        }
    }

    pub fn place_device(&mut self, role: DeviceRole, at: Point) -> Result<Placement, WorkspaceError> {
        place_device(&mut self.world, role, at)
    }

    pub fn drop_cable(&mut self, at: Point) -> CableDrop {
        drop_cable(&mut self.world, at)
    }

    /// Router whose configuration dialog is open, if any.
    pub fn pending_router(&self) -> Option<DeviceId> {
        pending_router(&self.world)
    }

    pub fn confirm_router_config(&mut self, ip: &str, mask: &str) -> Result<Notice, WorkspaceError> {
        confirm_router_config(&mut self.world, ip, mask)
    }

    pub fn cancel_router_config(&mut self) {
        cancel_router_config(&mut self.world);
    }

    /// Open the configuration dialog again for the placed router.
    pub fn reopen_router_config(&mut self) -> Result<DeviceId, WorkspaceError> {
        reopen_router_config(&mut self.world)
    }

    /// A fresh address in the current router's subnet.
    pub fn generate_address(&mut self) -> String {
        generate_address(&mut self.world)
    }

    pub fn start_simulation(&mut self) -> Result<usize, WorkspaceError> {
        start_simulation(&mut self.world)
    }

    pub fn stop_simulation(&mut self) -> Notice {
        stop_simulation(&mut self.world)
    }

    /// Remove every device, packet and drawn line.
    pub fn reset(&mut self) {
        let params = self.params().clone();
        self.world = World::new();
        build_workspace(&mut self.world, params);
        debug!("workspace reset");
    }

    /// Step one animation frame. Returns whether the loop should continue.
    pub fn advance_frame(&mut self) -> bool {
        run_frame(&mut self.world, &mut self.schedule)
    }

    pub fn is_running(&self) -> bool {
        self.world.resource::<SimulationStatus>().running
    }

    pub fn frame(&self) -> u64 {
        self.world.resource::<SimulationStatus>().frame
    }

    pub fn devices(&self) -> Vec<DeviceView> {
        device_views(&self.world)
    }

    pub fn packets(&self) -> Vec<PacketView> {
        packet_views(&self.world)
    }

    pub fn cable_lines(&self) -> &[CableLine] {
        &self.world.resource::<Canvas>().lines
    }

    /// Cable endpoints picked so far in the current gesture.
    pub fn selection_len(&self) -> usize {
        self.world.resource::<CableSelection>().0.len()
    }
}
