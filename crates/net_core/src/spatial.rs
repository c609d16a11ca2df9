//! Workspace geometry: points, icon bounding boxes and nearest-device search.

/// Workspace-relative pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Centre of an icon whose top-left corner sits at `top_left`.
pub fn icon_center(top_left: Point, icon_size: f32) -> Point {
    Point::new(top_left.x + icon_size / 2.0, top_left.y + icon_size / 2.0)
}

/// Index of the candidate closest to `point`.
///
/// Candidates must be in placement order: on equal distance the earlier one
/// wins because only a strictly smaller distance replaces the current best.
pub fn nearest_index<I>(point: Point, centers: I) -> Option<usize>
where
    I: IntoIterator<Item = Point>,
{
    let mut best: Option<(usize, f32)> = None;
    for (index, center) in centers.into_iter().enumerate() {
        let distance = center.distance(point);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
