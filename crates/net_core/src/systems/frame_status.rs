use bevy_ecs::prelude::{Query, ResMut};
use tracing::info;

use crate::ecs::{Packet, PacketPhase};
use crate::runner::SimulationStatus;

/// Ends the frame loop once there is nothing left to animate.
pub fn frame_status_system(mut status: ResMut<SimulationStatus>, packets: Query<&Packet>) {
    if !status.running {
        return;
    }
    let idle = packets
        .iter()
        .all(|packet| packet.phase == PacketPhase::Delivered);
    if idle {
        status.running = false;
        info!(frames = status.frame, "frame loop halted, no packets in flight");
    }
}
