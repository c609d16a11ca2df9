//! Host address generation inside the router's /24-style prefix.
//!
//! The prefix is the first three dot-separated segments of the router address,
//! copied verbatim. The router address is whatever the user typed, so the
//! prefix is not guaranteed to be a valid IPv4 prefix. Addresses are random and
//! may collide.

use bevy_ecs::prelude::{Resource, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::ecs::{Device, DeviceId, DeviceRole};
use crate::params::WorkspaceParams;

/// Last octet is drawn uniformly from this range.
pub const HOST_OCTET_MIN: u8 = 1;
pub const HOST_OCTET_MAX: u8 = 254;

#[derive(Debug, Resource)]
pub struct AddressRng(pub StdRng);

impl AddressRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// First three segments of `address`, or fewer if it has fewer.
pub fn subnet_prefix(address: &str) -> String {
    address.split('.').take(3).collect::<Vec<_>>().join(".")
}

pub fn host_address<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    let octet = rng.gen_range(HOST_OCTET_MIN..=HOST_OCTET_MAX);
    format!("{prefix}.{octet}")
}

/// Address of the configured router, if one exists (first by placement order).
pub fn router_address(world: &mut World) -> Option<String> {
    let mut routers = world.query::<(&Device, &DeviceId)>();
    routers
        .iter(world)
        .filter(|(device, _)| device.role == DeviceRole::Router)
        .min_by_key(|(_, id)| **id)
        .and_then(|(device, _)| device.ip.clone())
}

/// Generate an address inside the router's subnet, or the fallback subnet
/// when no configured router is on the workspace.
pub fn generate_address(world: &mut World) -> String {
    let prefix = match router_address(world) {
        Some(address) => subnet_prefix(&address),
        None => world.resource::<WorkspaceParams>().fallback_subnet.clone(),
    };
    let mut rng = world.resource_mut::<AddressRng>();
    let address = host_address(&mut rng.0, &prefix);
    debug!(%address, %prefix, "generated host address");
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_rng(seed: u64) -> World {
        let mut world = World::new();
        world.insert_resource(WorkspaceParams::default());
        world.insert_resource(AddressRng::new(Some(seed)));
        world
    }

    fn last_octet(address: &str) -> u8 {
        address
            .rsplit('.')
            .next()
            .and_then(|octet| octet.parse().ok())
            .expect("numeric last octet")
    }

    #[test]
    fn subnet_prefix_keeps_first_three_segments() {
        assert_eq!(subnet_prefix("10.20.30.40"), "10.20.30");
        assert_eq!(subnet_prefix("10.20"), "10.20");
        assert_eq!(subnet_prefix("not-an-ip"), "not-an-ip");
    }

    #[test]
    fn host_octet_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let octet = last_octet(&host_address(&mut rng, "10.0.0"));
            assert!((HOST_OCTET_MIN..=HOST_OCTET_MAX).contains(&octet));
        }
    }

    #[test]
    fn falls_back_without_router() {
        let mut world = world_with_rng(1);
        let address = generate_address(&mut world);
        assert!(address.starts_with("192.168.1."), "{address}");
    }

    #[test]
    fn unconfigured_router_uses_fallback() {
        let mut world = world_with_rng(2);
        world.spawn((Device::new(DeviceRole::Router), DeviceId(0)));
        let address = generate_address(&mut world);
        assert!(address.starts_with("192.168.1."), "{address}");
    }

    #[test]
    fn configured_router_defines_prefix() {
        let mut world = world_with_rng(3);
        let mut router = Device::new(DeviceRole::Router);
        router.ip = Some("10.1.2.1".to_string());
        world.spawn((router, DeviceId(0)));
        for _ in 0..50 {
            let address = generate_address(&mut world);
            assert!(address.starts_with("10.1.2."), "{address}");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut first = world_with_rng(99);
        let mut second = world_with_rng(99);
        let a: Vec<_> = (0..5).map(|_| generate_address(&mut first)).collect();
        let b: Vec<_> = (0..5).map(|_| generate_address(&mut second)).collect();
        assert_eq!(a, b);
    }
}
