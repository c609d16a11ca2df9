//! Packet step system: advances every packet by one frame.
//!
//! Return targets are resolved by source address against the device registry,
//! first match in placement order. Addresses may collide, in which case the
//! packet heads to whichever device with that address was placed first.

use bevy_ecs::prelude::{Commands, Entity, Query, Res, ResMut};
use tracing::{debug, warn};

use crate::ecs::{Device, DeviceId, Packet, Position};
use crate::packets::{step_packet, StepOutcome};
use crate::params::WorkspaceParams;
use crate::runner::SimulationStatus;

pub fn packet_step_system(
    mut commands: Commands,
    params: Res<WorkspaceParams>,
    mut status: ResMut<SimulationStatus>,
    mut packets: Query<(Entity, &mut Packet)>,
    devices: Query<(&Device, &DeviceId, &Position)>,
) {
    if !status.running {
        return;
    }
    status.frame += 1;

    for (entity, mut packet) in packets.iter_mut() {
        let outcome = step_packet(&mut packet, &params, |source_ip| {
            devices
                .iter()
                .filter(|(device, _, _)| device.ip.as_deref() == Some(source_ip))
                .min_by_key(|(_, id, _)| **id)
                .map(|(_, _, position)| position.0)
        });
        match outcome {
            StepOutcome::TurnedAround => {
                debug!(packet = packet.seq, source = %packet.source_ip, "packet reached server");
            }
            StepOutcome::Delivered => {
                debug!(packet = packet.seq, source = %packet.source_ip, "packet delivered");
            }
            StepOutcome::OriginMissing => {
                warn!(
                    packet = packet.seq,
                    source = %packet.source_ip,
                    "no device owns the packet's source address, dropping packet"
                );
                commands.entity(entity).despawn();
            }
            StepOutcome::InFlight | StepOutcome::Idle => {}
        }
    }
}
