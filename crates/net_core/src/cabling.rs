//! Cable gesture: pick the nearest device on each drop, draw a line once two
//! distinct devices are selected.
//!
//! Drawn lines are canvas geometry only. They carry no device references, so
//! nothing can ask which devices a line connects or remove one line on its own.

use bevy_ecs::prelude::{Entity, Resource, World};
use tracing::{debug, info};

use crate::ecs::{DeviceId, Position};
use crate::params::WorkspaceParams;
use crate::spatial::{icon_center, nearest_index, Point};

/// Devices picked so far by cable drops, at most one between gestures.
#[derive(Debug, Default, Resource)]
pub struct CableSelection(pub Vec<Entity>);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableLine {
    pub from: Point,
    pub to: Point,
}

/// Everything painted on the canvas besides device icons and packets.
#[derive(Debug, Default, Resource)]
pub struct Canvas {
    pub lines: Vec<CableLine>,
}

impl Canvas {
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CableDrop {
    /// No device on the workspace.
    NoDevice,
    /// Nearest device is the one already selected.
    Repeated { device: DeviceId },
    /// First endpoint recorded.
    Selected { device: DeviceId },
    /// Second endpoint recorded and the line drawn.
    Drawn { line: CableLine },
}

/// Devices with their icon centres, in placement order.
fn device_centers(world: &mut World) -> Vec<(Entity, DeviceId, Point)> {
    let icon_size = world.resource::<WorkspaceParams>().icon_size;
    let mut query = world.query::<(Entity, &DeviceId, &Position)>();
    let mut devices: Vec<_> = query
        .iter(world)
        .map(|(entity, id, position)| (entity, *id, icon_center(position.0, icon_size)))
        .collect();
    devices.sort_by_key(|(_, id, _)| *id);
    devices
}

pub fn drop_cable(world: &mut World, at: Point) -> CableDrop {
    let devices = device_centers(world);
    let Some(index) = nearest_index(at, devices.iter().map(|(_, _, center)| *center)) else {
        return CableDrop::NoDevice;
    };
    let (entity, id, _) = devices[index];

    let mut selection = world.resource_mut::<CableSelection>();
    if selection.0.first() == Some(&entity) {
        debug!(device = %id, "cable endpoint repeated, ignoring");
        return CableDrop::Repeated { device: id };
    }
    selection.0.push(entity);
    if selection.0.len() < 2 {
        debug!(device = %id, "cable endpoint selected");
        return CableDrop::Selected { device: id };
    }

    let endpoints: Vec<Entity> = selection.0.drain(..).collect();
    let center_of = |target: Entity| {
        devices
            .iter()
            .find(|(entity, _, _)| *entity == target)
            .map(|(_, _, center)| *center)
    };
    let (Some(from), Some(to)) = (center_of(endpoints[0]), center_of(endpoints[1])) else {
        // Stale first endpoint; keep the new one as the first.
        world.resource_mut::<CableSelection>().0.push(entity);
        return CableDrop::Selected { device: id };
    };

    let line = CableLine { from, to };
    world.resource_mut::<Canvas>().lines.push(line);
    info!(
        from_x = from.x,
        from_y = from.y,
        to_x = to.x,
        to_y = to.y,
        "cable drawn"
    );
    CableDrop::Drawn { line }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::DeviceRole;
    use crate::placement::place_device;
    use crate::test_helpers::create_test_world;

    #[test]
    fn empty_workspace_selects_nothing() {
        let mut world = create_test_world();
        assert_eq!(drop_cable(&mut world, Point::new(1.0, 1.0)), CableDrop::NoDevice);
        assert!(world.resource::<CableSelection>().0.is_empty());
    }

    #[test]
    fn repeated_first_endpoint_never_completes() {
        let mut world = create_test_world();
        place_device(&mut world, DeviceRole::Host, Point::new(0.0, 0.0)).expect("a");
        place_device(&mut world, DeviceRole::Host, Point::new(400.0, 0.0)).expect("b");

        assert!(matches!(
            drop_cable(&mut world, Point::new(10.0, 10.0)),
            CableDrop::Selected { .. }
        ));
        for _ in 0..3 {
            assert!(matches!(
                drop_cable(&mut world, Point::new(5.0, 5.0)),
                CableDrop::Repeated { .. }
            ));
        }
        assert_eq!(world.resource::<CableSelection>().0.len(), 1);
        assert!(world.resource::<Canvas>().lines.is_empty());
    }

    #[test]
    fn two_distinct_devices_draw_between_centers() {
        let mut world = create_test_world();
        place_device(&mut world, DeviceRole::Host, Point::new(0.0, 0.0)).expect("a");
        place_device(&mut world, DeviceRole::Server, Point::new(200.0, 100.0)).expect("b");

        drop_cable(&mut world, Point::new(210.0, 110.0));
        let drawn = drop_cable(&mut world, Point::new(0.0, 0.0));

        let expected = CableLine {
            from: Point::new(224.0, 124.0),
            to: Point::new(24.0, 24.0),
        };
        assert_eq!(drawn, CableDrop::Drawn { line: expected });
        assert_eq!(world.resource::<Canvas>().lines, vec![expected]);
        assert!(world.resource::<CableSelection>().0.is_empty());
    }

    #[test]
    fn equidistant_drop_prefers_earlier_device() {
        let mut world = create_test_world();
        place_device(&mut world, DeviceRole::Host, Point::new(0.0, 0.0)).expect("a");
        place_device(&mut world, DeviceRole::Host, Point::new(100.0, 0.0)).expect("b");
        // Centres at (24, 24) and (124, 24); the midpoint is equidistant.
        assert_eq!(
            drop_cable(&mut world, Point::new(74.0, 24.0)),
            CableDrop::Selected {
                device: DeviceId(0)
            }
        );
    }
}
