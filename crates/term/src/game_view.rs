//! GameView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Tiles are placed by their continuous pixel position, scaled from logical
//! field pixels to terminal cells, so snapshots taken mid-move render tiles
//! part-way between cells.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const PLAYFIELD: Rgb = Rgb::new(187, 173, 160);
const EMPTY_FIELD: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Terminal renderer for a 2048 board.
pub struct GameView {
    /// Terminal columns per grid field.
    field_w: u16,
    /// Terminal rows per grid field.
    field_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps four-digit values readable and roughly square on screen.
        Self {
            field_w: 7,
            field_h: 3,
        }
    }
}

impl GameView {
    pub fn new(field_w: u16, field_h: u16) -> Self {
        Self {
            field_w: field_w.max(1),
            field_h: field_h.max(1),
        }
    }

    /// Outer size of the bordered board for a snapshot, in terminal cells.
    pub fn frame_size(&self, snap: &BoardSnapshot) -> (u16, u16) {
        let w = (snap.columns as u16).saturating_mul(self.field_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_mul(self.field_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        }
        fb.fill(CellStyle::new(LIGHT_TEXT, BACKGROUND));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(DARK_TEXT, PLAYFIELD),
        );

        // Empty fields, inset by one column so neighbouring tiles stay apart.
        let empty = CellStyle::new(DARK_TEXT, EMPTY_FIELD);
        for row in 0..snap.rows as u16 {
            for col in 0..snap.columns as u16 {
                let px = start_x + 1 + col * self.field_w;
                let py = start_y + 1 + row * self.field_h;
                fb.fill_rect(px + 1, py, self.field_w.saturating_sub(1), self.field_h, ' ', empty);
            }
        }

        for tile in &snap.tiles {
            let px = start_x + 1 + self.scale(tile.x, snap.field_size, self.field_w);
            let py = start_y + 1 + self.scale(tile.y, snap.field_size, self.field_h);
            let style = tile_style(tile.value);
            let w = self.field_w.saturating_sub(1);
            fb.fill_rect(px + 1, py, w, self.field_h, ' ', style);
            fb.put_centered(px + 1, py + self.field_h / 2, w, &tile.value.to_string(), style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w, start_y);

        match snap.status {
            GameStatus::Continue => {}
            GameStatus::Won => self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WON!"),
            GameStatus::Lost => self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Logical pixels to terminal cells, rounded to nearest.
    fn scale(&self, px: i32, field_size: i32, cells_per_field: u16) -> u16 {
        if field_size <= 0 {
            return 0;
        }
        let scaled = (px.max(0) as i64 * cells_per_field as i64 + field_size as i64 / 2)
            / field_size as i64;
        scaled.min(u16::MAX as i64) as u16
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
        fb.set(x, y, '┌', style);
        fb.set(x + w - 1, y, '┐', style);
        fb.set(x, y + h - 1, '└', style);
        fb.set(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.set(x + dx, y, '─', style);
            fb.set(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, '│', style);
            fb.set(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle::new(LIGHT_TEXT, BACKGROUND).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

        let rows: [(&str, u32); 3] = [
            ("SCORE", snap.score),
            ("MOVES", snap.moves),
            ("BEST", snap.best_tile()),
        ];
        let mut y = start_y;
        for (name, n) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &n.to_string(), value);
            y = y.saturating_add(3);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle::new(LIGHT_TEXT, BACKGROUND).bold();
        let mid = y.saturating_add(h / 2);
        let box_w = w.saturating_sub(4);
        fb.fill_rect(x + 2, mid.saturating_sub(1), box_w, 4, ' ', style);
        fb.put_centered(x + 2, mid.saturating_sub(1), box_w, text, style);
        fb.put_centered(x + 2, mid.saturating_add(1), box_w, "r: try again", CellStyle { bold: false, ..style });
    }
}

/// Tile colors darken and warm up with each doubling.
fn tile_style(value: u32) -> CellStyle {
    let level = value.max(2).trailing_zeros().min(17) as u8; // 2 -> 1, 2048 -> 11
    let step = (level - 1).saturating_mul(16);
    let bg = Rgb::new(
        238u8.saturating_sub(step / 8),
        228u8.saturating_sub(step),
        218u8.saturating_sub(step.saturating_mul(2).min(218)),
    );
    let fg = if level <= 2 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, bg).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_rounds_to_nearest_cell() {
        let view = GameView::default();
        assert_eq!(view.scale(0, 100, 7), 0);
        assert_eq!(view.scale(100, 100, 7), 7);
        assert_eq!(view.scale(300, 100, 7), 21);
        // 280px of a 100px field is 19.6 terminal columns.
        assert_eq!(view.scale(280, 100, 7), 20);
    }

    #[test]
    fn tile_style_text_contrast() {
        assert_eq!(tile_style(2).fg, DARK_TEXT);
        assert_eq!(tile_style(4).fg, DARK_TEXT);
        assert_eq!(tile_style(8).fg, LIGHT_TEXT);
        assert_ne!(tile_style(2).bg, tile_style(2048).bg);
    }
}
