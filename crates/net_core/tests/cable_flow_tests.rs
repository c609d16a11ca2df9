mod support;

use net_core::cabling::{CableDrop, CableLine};
use net_core::ecs::{DeviceRole, DragPayload};
use net_core::spatial::Point;
use net_core::workspace::DropOutcome;

use support::workspace::{place, seeded_workspace};

fn cable_at(workspace: &mut net_core::workspace::NetworkWorkspace, x: f32, y: f32) -> CableDrop {
    match workspace
        .handle_drop(DragPayload::Cable, Point::new(x, y))
        .expect("cable drop never fails")
    {
        DropOutcome::Cable(drop) => drop,
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn selecting_same_device_twice_does_not_connect() {
    let mut workspace = seeded_workspace();
    place(&mut workspace, DeviceRole::Host, 0.0, 0.0);
    place(&mut workspace, DeviceRole::Server, 500.0, 500.0);

    cable_at(&mut workspace, 20.0, 20.0);
    cable_at(&mut workspace, 30.0, 30.0);

    assert_eq!(workspace.selection_len(), 1);
    assert!(workspace.cable_lines().is_empty());
}

#[test]
fn either_selection_order_draws_one_line_and_resets() {
    for reversed in [false, true] {
        let mut workspace = seeded_workspace();
        place(&mut workspace, DeviceRole::Host, 0.0, 0.0);
        place(&mut workspace, DeviceRole::Server, 300.0, 100.0);
        let a = Point::new(24.0, 24.0);
        let b = Point::new(324.0, 124.0);

        let (first, second) = if reversed { (b, a) } else { (a, b) };
        assert!(matches!(
            cable_at(&mut workspace, first.x, first.y),
            CableDrop::Selected { .. }
        ));
        let drawn = cable_at(&mut workspace, second.x, second.y);

        let line = CableLine {
            from: first,
            to: second,
        };
        assert_eq!(drawn, CableDrop::Drawn { line });
        assert_eq!(workspace.cable_lines(), &[line]);
        assert_eq!(workspace.selection_len(), 0);
    }
}

#[test]
fn cable_on_empty_workspace_is_ignored() {
    let mut workspace = seeded_workspace();
    assert_eq!(cable_at(&mut workspace, 10.0, 10.0), CableDrop::NoDevice);
    assert_eq!(workspace.selection_len(), 0);
}

#[test]
fn lines_accumulate_across_gestures() {
    let mut workspace = seeded_workspace();
    place(&mut workspace, DeviceRole::Host, 0.0, 0.0);
    place(&mut workspace, DeviceRole::Host, 200.0, 0.0);
    place(&mut workspace, DeviceRole::Server, 100.0, 200.0);

    cable_at(&mut workspace, 0.0, 0.0);
    cable_at(&mut workspace, 120.0, 220.0);
    cable_at(&mut workspace, 210.0, 10.0);
    cable_at(&mut workspace, 120.0, 220.0);

    assert_eq!(workspace.cable_lines().len(), 2);
}

#[test]
fn stop_clears_drawn_cables() {
    let mut workspace = seeded_workspace();
    place(&mut workspace, DeviceRole::Host, 0.0, 0.0);
    place(&mut workspace, DeviceRole::Server, 200.0, 0.0);
    cable_at(&mut workspace, 0.0, 0.0);
    cable_at(&mut workspace, 200.0, 0.0);
    assert_eq!(workspace.cable_lines().len(), 1);

    workspace.stop_simulation();

    assert!(workspace.cable_lines().is_empty());
}
