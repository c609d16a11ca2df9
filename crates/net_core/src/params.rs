use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Subnet used for host addresses while no configured router is present.
pub const FALLBACK_SUBNET: &str = "192.168.1";

const DEFAULT_CANVAS_WIDTH: f32 = 960.0;
const DEFAULT_CANVAS_HEIGHT: f32 = 640.0;
const DEFAULT_ICON_SIZE: f32 = 48.0;
const DEFAULT_PACKET_STEP_PX: f32 = 2.0;
const DEFAULT_ARRIVAL_THRESHOLD_PX: f32 = 5.0;
const DEFAULT_PACKET_RADIUS_PX: f32 = 5.0;

/// How a packet advances toward its target each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPolicy {
    /// Each axis moves only while it is strictly below the target. Packets
    /// north-west of their target stay put on that axis.
    #[default]
    IncreasingOnly,
    /// Each axis moves toward the target in either direction, clamped so it
    /// never overshoots.
    Toward,
}

/// Workspace configuration, stored as a resource in the world.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceParams {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Edge length of the square device icon.
    pub icon_size: f32,
    /// Pixels per frame per axis.
    pub packet_step_px: f32,
    /// A packet has arrived once both axis distances are strictly below this.
    pub arrival_threshold_px: f32,
    pub packet_radius_px: f32,
    /// First three octets used when no configured router exists.
    pub fallback_subnet: String,
    pub step_policy: StepPolicy,
    /// Seed for address generation; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for WorkspaceParams {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            icon_size: DEFAULT_ICON_SIZE,
            packet_step_px: DEFAULT_PACKET_STEP_PX,
            arrival_threshold_px: DEFAULT_ARRIVAL_THRESHOLD_PX,
            packet_radius_px: DEFAULT_PACKET_RADIUS_PX,
            fallback_subnet: FALLBACK_SUBNET.to_string(),
            step_policy: StepPolicy::default(),
            seed: None,
        }
    }
}

impl WorkspaceParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_icon_size(mut self, icon_size: f32) -> Self {
        self.icon_size = icon_size;
        self
    }

    pub fn with_packet_step(mut self, step_px: f32) -> Self {
        self.packet_step_px = step_px;
        self
    }

    pub fn with_arrival_threshold(mut self, threshold_px: f32) -> Self {
        self.arrival_threshold_px = threshold_px;
        self
    }

    pub fn with_step_policy(mut self, policy: StepPolicy) -> Self {
        self.step_policy = policy;
        self
    }

    pub fn with_fallback_subnet(mut self, subnet: impl Into<String>) -> Self {
        self.fallback_subnet = subnet.into();
        self
    }

    /// Clamp values the frame loop cannot work with back into a usable range.
    pub fn normalized(mut self) -> Self {
        self.canvas_width = self.canvas_width.max(100.0);
        self.canvas_height = self.canvas_height.max(100.0);
        self.icon_size = self.icon_size.clamp(8.0, 256.0);
        self.packet_step_px = self.packet_step_px.clamp(0.1, 100.0);
        self.arrival_threshold_px = self.arrival_threshold_px.max(0.1);
        self.packet_radius_px = self.packet_radius_px.clamp(1.0, 50.0);
        if self.fallback_subnet.trim().is_empty() {
            self.fallback_subnet = FALLBACK_SUBNET.to_string();
        }
        self
    }
}
