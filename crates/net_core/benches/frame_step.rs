//! Frame step benchmarks for net_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use net_core::ecs::DeviceRole;
use net_core::params::{StepPolicy, WorkspaceParams};
use net_core::spatial::Point;
use net_core::workspace::NetworkWorkspace;

fn populated_workspace(hosts: usize, policy: StepPolicy) -> NetworkWorkspace {
    let params = WorkspaceParams::default()
        .with_seed(42)
        .with_step_policy(policy);
    let mut workspace = NetworkWorkspace::new(params);
    workspace
        .place_device(DeviceRole::Server, Point::new(800.0, 500.0))
        .expect("server");
    for i in 0..hosts {
        let x = (i % 40) as f32 * 20.0;
        let y = (i / 40) as f32 * 20.0;
        workspace
            .place_device(DeviceRole::Host, Point::new(x, y))
            .expect("host");
    }
    workspace
}

fn bench_frame_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_step");
    for hosts in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(hosts), &hosts, |b, &hosts| {
            b.iter(|| {
                let mut workspace = populated_workspace(hosts, StepPolicy::IncreasingOnly);
                workspace.start_simulation().expect("start");
                for _ in 0..100 {
                    black_box(workspace.advance_frame());
                }
            });
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_toward_100_hosts", |b| {
        b.iter(|| {
            let mut workspace = populated_workspace(100, StepPolicy::Toward);
            workspace.start_simulation().expect("start");
            let mut frames = 0usize;
            while workspace.advance_frame() && frames < 10_000 {
                frames += 1;
            }
            black_box(frames)
        });
    });
}

fn bench_cable_selection(c: &mut Criterion) {
    let mut workspace = populated_workspace(1_000, StepPolicy::IncreasingOnly);
    c.bench_function("cable_nearest_device_1000", |b| {
        b.iter(|| black_box(workspace.drop_cable(Point::new(401.0, 233.0))));
    });
}

criterion_group!(benches, bench_frame_step, bench_round_trip, bench_cable_selection);
criterion_main!(benches);
