//! Constants used throughout the UI.

/// Identities offered by the palette, in display order.
pub const PALETTE_IDENTITIES: [&str; 4] = ["router", "server", "host", "cable"];

/// Width of the stroke used for cables.
pub const CABLE_STROKE_WIDTH: f32 = 2.0;

/// Edge length of palette tiles.
pub const PALETTE_TILE_SIZE: f32 = 56.0;

pub const WORKSPACE_CORNER_RADIUS: f32 = 4.0;
