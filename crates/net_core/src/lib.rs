pub mod addressing;
pub mod cabling;
pub mod ecs;
pub mod error;
pub mod notice;
pub mod packets;
pub mod params;
pub mod placement;
pub mod router_config;
pub mod runner;
pub mod spatial;
pub mod systems;
pub mod workspace;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
