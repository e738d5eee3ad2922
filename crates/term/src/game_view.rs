//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::palette::color_for;
use crate::types::{ColorId, BOARD_HEIGHT, BOARD_WIDTH};

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Lays the board out centered in the viewport, inside a box border.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (row, col) = (row as u16, col as u16);
                match cell.color() {
                    Some(color) => self.draw_block(fb, origin_x, origin_y, row, col, color),
                    None => self.draw_empty(fb, origin_x, origin_y, row, col),
                }
            }
        }

        if let Some(active) = snap.active {
            for (row, col, color) in active.board_cells() {
                // Cells above the top edge are not drawn.
                if row >= 0 && col >= 0 && row < BOARD_HEIGHT as i8 && col < BOARD_WIDTH as i8 {
                    self.draw_block(fb, origin_x, origin_y, row as u16, col as u16, color);
                }
            }
        }

        if snap.game_over {
            let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            let mid_y = origin_y + frame_h / 2;
            self.put_centered(fb, origin_x, frame_w, mid_y, "GAME OVER", style);
            self.put_centered(fb, origin_x, frame_w, mid_y + 1, "r:new q:quit", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let (right, bottom) = (x + w - 1, y + h - 1);

        fb.put(x, y, '┌', style);
        fb.put(right, y, '┐', style);
        fb.put(x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
        for dx in x + 1..right {
            fb.put(dx, y, '─', style);
            fb.put(dx, bottom, '─', style);
        }
        for dy in y + 1..bottom {
            fb.put(x, dy, '│', style);
            fb.put(right, dy, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, row: u16, col: u16) {
        let style = Style::new(Rgb::new(90, 90, 100), FIELD_BG);
        self.fill_cell(fb, ox, oy, row, col, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, row: u16, col: u16, color: ColorId) {
        let style = Style::new(color_for(color), FIELD_BG).bold();
        self.fill_cell(fb, ox, oy, row, col, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        ox: u16,
        oy: u16,
        row: u16,
        col: u16,
        ch: char,
        style: Style,
    ) {
        let x = ox + 1 + col * self.cell_w;
        let y = oy + 1 + row * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, ox: u16, w: u16, y: u16, text: &str, style: Style) {
        let text_w = text.chars().count() as u16;
        fb.put_str(ox + w.saturating_sub(text_w) / 2, y, text, style);
    }
}
