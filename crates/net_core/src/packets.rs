//! Packet state machine: Outbound -> Returning -> Delivered.
//!
//! Each frame a packet first moves, then checks arrival. Arrival means both
//! axis distances to the current target are strictly below the threshold. An
//! outbound packet that arrives is re-pointed at the device owning its source
//! address; a returning packet that arrives is delivered and never moves again.

use crate::ecs::{Packet, PacketPhase};
use crate::params::{StepPolicy, WorkspaceParams};
use crate::spatial::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still travelling (possibly not moving at all under the increasing-only rule).
    InFlight,
    /// Reached the server and turned around.
    TurnedAround,
    /// Reached its origin.
    Delivered,
    /// Reached the server but no device owns the source address any more.
    OriginMissing,
    /// Already delivered; nothing to do.
    Idle,
}

fn step_axis(current: f32, target: f32, step: f32, policy: StepPolicy) -> f32 {
    match policy {
        StepPolicy::IncreasingOnly => {
            if current < target {
                current + step
            } else {
                current
            }
        }
        StepPolicy::Toward => current + (target - current).clamp(-step, step),
    }
}

pub fn advance(position: Point, target: Point, params: &WorkspaceParams) -> Point {
    Point::new(
        step_axis(position.x, target.x, params.packet_step_px, params.step_policy),
        step_axis(position.y, target.y, params.packet_step_px, params.step_policy),
    )
}

pub fn has_arrived(position: Point, target: Point, threshold: f32) -> bool {
    (position.x - target.x).abs() < threshold && (position.y - target.y).abs() < threshold
}

/// Run one frame for `packet`.
///
/// `resolve_origin` maps the packet's source address to the position of the
/// device it should return to.
pub fn step_packet<F>(packet: &mut Packet, params: &WorkspaceParams, resolve_origin: F) -> StepOutcome
where
    F: FnOnce(&str) -> Option<Point>,
{
    if packet.phase == PacketPhase::Delivered {
        return StepOutcome::Idle;
    }

    packet.position = advance(packet.position, packet.target, params);
    if !has_arrived(packet.position, packet.target, params.arrival_threshold_px) {
        return StepOutcome::InFlight;
    }

    match packet.phase {
        PacketPhase::Outbound => match resolve_origin(&packet.source_ip) {
            Some(origin) => {
                packet.phase = PacketPhase::Returning;
                packet.target = origin;
                StepOutcome::TurnedAround
            }
            None => StepOutcome::OriginMissing,
        },
        PacketPhase::Returning => {
            packet.phase = PacketPhase::Delivered;
            StepOutcome::Delivered
        }
        PacketPhase::Delivered => StepOutcome::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::PacketColor;

    fn packet(position: Point, target: Point) -> Packet {
        Packet::outbound(0, position, target, "192.168.1.10".to_string())
    }

    fn no_origin(_: &str) -> Option<Point> {
        None
    }

    #[test]
    fn increasing_only_moves_two_pixels_per_axis() {
        let params = WorkspaceParams::default();
        let mut p = packet(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        assert_eq!(step_packet(&mut p, &params, no_origin), StepOutcome::InFlight);
        assert_eq!(p.position, Point::new(2.0, 2.0));
    }

    #[test]
    fn axis_at_or_past_target_does_not_move() {
        let params = WorkspaceParams::default();
        // x already past, y exactly at target.
        let mut p = packet(Point::new(150.0, 40.0), Point::new(100.0, 40.0));
        step_packet(&mut p, &params, no_origin);
        assert_eq!(p.position, Point::new(150.0, 40.0));
        assert_eq!(p.phase, PacketPhase::Outbound);
    }

    #[test]
    fn packet_northwest_bound_stays_put_under_default_policy() {
        let params = WorkspaceParams::default();
        let mut p = packet(Point::new(300.0, 300.0), Point::new(10.0, 10.0));
        for _ in 0..100 {
            step_packet(&mut p, &params, no_origin);
        }
        assert_eq!(p.position, Point::new(300.0, 300.0));
    }

    #[test]
    fn toward_policy_moves_in_both_directions_without_overshoot() {
        let params = WorkspaceParams::default().with_step_policy(StepPolicy::Toward);
        let mut p = packet(Point::new(10.0, 10.0), Point::new(9.0, 13.0));
        p.position = advance(p.position, p.target, &params);
        assert_eq!(p.position, Point::new(9.0, 12.0));
    }

    #[test]
    fn arrival_turns_packet_red_and_retargets_origin() {
        let params = WorkspaceParams::default();
        let mut p = packet(Point::new(96.0, 96.0), Point::new(100.0, 100.0));
        let outcome = step_packet(&mut p, &params, |ip| {
            assert_eq!(ip, "192.168.1.10");
            Some(Point::new(0.0, 0.0))
        });
        assert_eq!(outcome, StepOutcome::TurnedAround);
        assert_eq!(p.color(), PacketColor::Red);
        assert_eq!(p.target, Point::new(0.0, 0.0));
    }

    #[test]
    fn arrival_requires_both_axes_strictly_within_threshold() {
        assert!(has_arrived(Point::new(0.0, 0.0), Point::new(4.9, 4.9), 5.0));
        assert!(!has_arrived(Point::new(0.0, 0.0), Point::new(5.0, 0.0), 5.0));
        assert!(!has_arrived(Point::new(0.0, 0.0), Point::new(0.0, 7.0), 5.0));
    }

    #[test]
    fn returning_packet_is_delivered_and_stops() {
        let params = WorkspaceParams::default().with_step_policy(StepPolicy::Toward);
        let mut p = packet(Point::new(50.0, 50.0), Point::new(50.0, 50.0));
        p.phase = PacketPhase::Returning;
        p.target = Point::new(52.0, 52.0);

        assert_eq!(step_packet(&mut p, &params, no_origin), StepOutcome::Delivered);
        assert_eq!(p.color(), PacketColor::Green);
        let resting = p.position;
        assert_eq!(step_packet(&mut p, &params, no_origin), StepOutcome::Idle);
        assert_eq!(p.position, resting);
    }

    #[test]
    fn missing_origin_is_reported() {
        let params = WorkspaceParams::default();
        let mut p = packet(Point::new(100.0, 100.0), Point::new(100.0, 100.0));
        assert_eq!(step_packet(&mut p, &params, no_origin), StepOutcome::OriginMissing);
        assert_eq!(p.phase, PacketPhase::Outbound);
    }
}
