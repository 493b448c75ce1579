//! Player location formatting.

use serde::{Deserialize, Serialize};

use crate::escape::{Escapes, NOT_AVAILABLE};

/// Edge length of an exterior cell in game units
pub const CELL_SIZE: f32 = 4096.0;

/// World position in game units, as reported by `player.getpos`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    /// Build from raw components; `None` if any is NaN or infinite
    pub fn from_raw([x, y, z]: [f32; 3]) -> Option<Self> {
        [x, y, z]
            .iter()
            .all(|c| c.is_finite())
            .then_some(Self { x, y, z })
    }

    /// Exterior grid cell containing this position
    pub fn cell(&self) -> (i32, i32) {
        (
            (self.x / CELL_SIZE).floor() as i32,
            (self.y / CELL_SIZE).floor() as i32,
        )
    }
}

/// Round a coordinate for display (`0` decimal places)
fn coordinate(value: f32) -> String {
    format!("{:.0}", value)
}

/// Render the player location through a user format.
///
/// A missing position replaces the whole output with `(n/a)`. Missing
/// names only blank their own escape.
pub fn format_player_location(
    format: &str,
    position: Option<Position>,
    world: Option<&str>,
    cell: Option<&str>,
) -> String {
    let Some(position) = position else {
        return NOT_AVAILABLE.to_string();
    };
    let (cell_x, cell_y) = position.cell();

    let mut escapes = Escapes::new();
    escapes
        .push("%x", coordinate(position.x))
        .push("%y", coordinate(position.y))
        .push("%z", coordinate(position.z))
        .push("%cx", cell_x.to_string())
        .push("%cy", cell_y.to_string())
        .push("%wn", world.unwrap_or_default())
        .push("%cn", cell.unwrap_or_default());
    escapes.apply(format)
}
