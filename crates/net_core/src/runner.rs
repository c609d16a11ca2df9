//! Frame driver: one call to [run_frame] is one repaint of the animation.
//!
//! The render loop calls [run_frame] once per frame and keeps scheduling
//! frames while it returns `true`. Stopping the simulation empties the packet
//! list, so the next frame observes nothing to animate and the chain ends.

use bevy_ecs::prelude::{Resource, Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::systems::frame_status::frame_status_system;
use crate::systems::packet_step::packet_step_system;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Resource)]
pub struct SimulationStatus {
    pub running: bool,
    /// Frames stepped since the last start.
    pub frame: u64,
}

pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((packet_step_system, frame_status_system).chain());
    schedule
}

/// Step one frame. Returns whether another frame should be scheduled.
pub fn run_frame(world: &mut World, schedule: &mut Schedule) -> bool {
    if !world.resource::<SimulationStatus>().running {
        return false;
    }
    schedule.run(world);
    world.resource::<SimulationStatus>().running
}

/// Step until the loop halts or `max_frames` is reached; returns frames run.
pub fn run_until_idle(world: &mut World, schedule: &mut Schedule, max_frames: usize) -> usize {
    let mut frames = 0;
    while frames < max_frames && world.resource::<SimulationStatus>().running {
        run_frame(world, schedule);
        frames += 1;
    }
    frames
}
