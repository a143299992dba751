//! Colors and proportions of the board canvas

use egui::Color32;

use crate::Stone;

pub const WOOD: Color32 = Color32::from_rgb(214, 176, 120);
pub const LINE: Color32 = Color32::from_rgb(70, 48, 24);
pub const LABEL: Color32 = Color32::from_rgb(90, 66, 40);

pub const BLACK_FILL: Color32 = Color32::from_rgb(30, 30, 34);
pub const WHITE_FILL: Color32 = Color32::from_rgb(244, 244, 240);
pub const STONE_EDGE: Color32 = Color32::from_rgb(40, 30, 20);

pub const LAST_MOVE: Color32 = Color32::from_rgb(214, 52, 44);
pub const HINT: Color32 = Color32::from_rgb(40, 130, 220);
pub const FIVE: Color32 = Color32::from_rgb(46, 180, 80);

/// Shade over the square the engine opens in
pub const OPENING: Color32 = Color32::from_rgba_premultiplied(60, 40, 15, 40);

/// Stone radius as a fraction of the grid step
pub const STONE_SCALE: f32 = 0.44;
/// Star point radius as a fraction of the grid step
pub const STAR_SCALE: f32 = 0.1;

/// Fill for a stone of `stone`'s color
pub fn stone_fill(stone: Stone) -> Color32 {
    match stone {
        Stone::White => WHITE_FILL,
        _ => BLACK_FILL,
    }
}

/// Star points (hoshi) for a board of side `size`.
///
/// Corners sit 3 lines in (2 below 13x13), plus the centre on odd sizes.
pub fn star_points(size: usize) -> Vec<(u8, u8)> {
    let edge = if size >= 13 { 3 } else { 2 };
    if size < 2 * edge + 2 {
        return Vec::new();
    }
    let far = (size - 1 - edge) as u8;
    let edge = edge as u8;
    let mut points = vec![(edge, edge), (edge, far), (far, edge), (far, far)];
    if size % 2 == 1 {
        let mid = (size / 2) as u8;
        points.push((mid, mid));
    }
    points
}
