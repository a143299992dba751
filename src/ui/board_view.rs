//! Board canvas
//!
//! Draws the grid, stones and markers into a square area and maps pointer
//! positions back to intersections.

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use super::theme::{self, star_points, stone_fill};
use crate::search::fallback_region;
use crate::{Board, Pos, Stone};

/// Markers drawn over the stones
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    pub last_move: Option<Pos>,
    pub hint: Option<Pos>,
    pub five: Option<[Pos; 5]>,
    /// Stone shown under the pointer; `None` while clicks are ignored
    pub preview: Option<Stone>,
}

/// Placement of a `lines` x `lines` grid on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    origin: Pos2,
    step: f32,
    lines: usize,
}

impl Grid {
    /// Centre the grid in `rect` with one step of border for the labels.
    pub fn fit(rect: Rect, lines: usize) -> Self {
        let side = rect.width().min(rect.height());
        let step = side / (lines as f32 + 1.0);
        let half_span = step * (lines as f32 - 1.0) / 2.0;
        Self {
            origin: rect.center() - Vec2::splat(half_span),
            step,
            lines,
        }
    }

    /// Screen point of an intersection
    pub fn point(&self, pos: Pos) -> Pos2 {
        self.origin + self.step * Vec2::new(pos.col as f32, pos.row as f32)
    }

    /// Intersection nearest to `p`, `None` off the grid
    pub fn cell_at(&self, p: Pos2) -> Option<Pos> {
        let rel = (p - self.origin) / self.step;
        let (row, col) = (rel.y.round(), rel.x.round());
        let last = (self.lines - 1) as f32;
        if (0.0..=last).contains(&row) && (0.0..=last).contains(&col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    fn at(&self, row: usize, col: usize) -> Pos2 {
        self.point(Pos::new(row as u8, col as u8))
    }
}

/// Draw `board` into the space left in `ui` and return the clicked point.
pub fn show(ui: &mut Ui, board: &Board, overlay: &Overlay) -> Option<Pos> {
    let side = ui.available_size().min_elem().max(120.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
    let grid = Grid::fit(response.rect, board.size());

    painter.rect_filled(response.rect, CornerRadius::same(6), theme::WOOD);
    if board.is_board_empty() {
        shade_opening(&painter, &grid);
    }
    draw_lines(&painter, &grid);
    draw_labels(&painter, &grid);
    for (pos, stone) in board.occupied() {
        draw_stone(&painter, &grid, pos, stone, 1.0);
    }
    draw_markers(&painter, &grid, overlay);

    let hovered = response
        .hover_pos()
        .and_then(|p| grid.cell_at(p))
        .filter(|&pos| board.is_empty(pos));
    if let (Some(pos), Some(stone)) = (hovered, overlay.preview) {
        draw_stone(&painter, &grid, pos, stone, 0.4);
    }

    if response.clicked() && overlay.preview.is_some() {
        response.interact_pointer_pos().and_then(|p| grid.cell_at(p))
    } else {
        None
    }
}

fn shade_opening(painter: &Painter, grid: &Grid) {
    let region = fallback_region(grid.lines);
    let pad = Vec2::splat(grid.step / 2.0);
    let rect = Rect::from_min_max(
        grid.at(*region.start(), *region.start()) - pad,
        grid.at(*region.end(), *region.end()) + pad,
    );
    painter.rect_filled(rect, CornerRadius::ZERO, theme::OPENING);
}

fn draw_lines(painter: &Painter, grid: &Grid) {
    let stroke = Stroke::new(1.0, theme::LINE);
    let last = grid.lines - 1;
    for i in 0..grid.lines {
        painter.line_segment([grid.at(i, 0), grid.at(i, last)], stroke);
        painter.line_segment([grid.at(0, i), grid.at(last, i)], stroke);
    }
    for (row, col) in star_points(grid.lines) {
        painter.circle_filled(
            grid.point(Pos::new(row, col)),
            grid.step * theme::STAR_SCALE,
            theme::LINE,
        );
    }
}

/// Column letters above the grid, row numbers to its left
fn draw_labels(painter: &Painter, grid: &Grid) {
    let font = FontId::proportional((grid.step * 0.4).clamp(9.0, 14.0));
    let gap = grid.step * 0.6;
    for i in 0..grid.lines {
        let letter = char::from(b'A' + i as u8).to_string();
        painter.text(
            grid.at(0, i) - Vec2::new(0.0, gap),
            Align2::CENTER_CENTER,
            letter,
            font.clone(),
            theme::LABEL,
        );
        painter.text(
            grid.at(i, 0) - Vec2::new(gap, 0.0),
            Align2::CENTER_CENTER,
            (i + 1).to_string(),
            font.clone(),
            theme::LABEL,
        );
    }
}

fn draw_stone(painter: &Painter, grid: &Grid, pos: Pos, stone: Stone, opacity: f32) {
    let center = grid.point(pos);
    let radius = grid.step * theme::STONE_SCALE;
    painter.circle_filled(center, radius, stone_fill(stone).gamma_multiply(opacity));
    painter.circle_stroke(
        center,
        radius,
        Stroke::new(1.0, theme::STONE_EDGE.gamma_multiply(opacity)),
    );
}

fn draw_markers(painter: &Painter, grid: &Grid, overlay: &Overlay) {
    if let Some(line) = overlay.five {
        painter.line_segment(
            [grid.point(line[0]), grid.point(line[4])],
            Stroke::new(grid.step * 0.15, theme::FIVE),
        );
    }
    if let Some(pos) = overlay.last_move {
        painter.circle_filled(grid.point(pos), grid.step * 0.12, theme::LAST_MOVE);
    }
    if let Some(pos) = overlay.hint {
        painter.circle_stroke(
            grid.point(pos),
            grid.step * theme::STONE_SCALE,
            Stroke::new(2.5, theme::HINT),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine_by_nine() -> Grid {
        // 200px square, 9 lines: step 20, first line at 20
        Grid::fit(Rect::from_min_size(Pos2::ZERO, Vec2::splat(200.0)), 9)
    }

    #[test]
    fn test_grid_fits_rect() {
        let grid = nine_by_nine();
        assert_eq!(grid.point(Pos::new(0, 0)), Pos2::new(20.0, 20.0));
        assert_eq!(grid.point(Pos::new(8, 8)), Pos2::new(180.0, 180.0));
        assert_eq!(grid.point(Pos::new(1, 3)), Pos2::new(80.0, 40.0));
    }

    #[test]
    fn test_cell_at_inverts_point() {
        let grid = nine_by_nine();
        for row in 0..9 {
            for col in 0..9 {
                let pos = Pos::new(row, col);
                assert_eq!(grid.cell_at(grid.point(pos)), Some(pos));
                let nudged = grid.point(pos) + Vec2::new(6.0, -6.0);
                assert_eq!(grid.cell_at(nudged), Some(pos));
            }
        }
    }

    #[test]
    fn test_cell_at_off_grid() {
        let grid = nine_by_nine();
        assert_eq!(grid.cell_at(Pos2::new(5.0, 100.0)), None);
        assert_eq!(grid.cell_at(Pos2::new(100.0, 195.0)), None);
        assert_eq!(grid.cell_at(Pos2::new(29.0, 41.0)), Some(Pos::new(1, 0)));
    }

    #[test]
    fn test_grid_centres_in_wide_rect() {
        let grid = Grid::fit(Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 200.0)), 9);
        assert_eq!(grid.point(Pos::new(0, 0)), Pos2::new(120.0, 20.0));
        assert_eq!(grid.point(Pos::new(8, 8)), Pos2::new(280.0, 180.0));
    }
}
