//! Terminal rendering of panel images.
//!
//! One cell shows two vertically stacked pixels: the upper half block takes
//! the top pixel as foreground and the bottom pixel as background.

use crate::ui::theme::{DISABLED, PLACEHOLDER};
use image::RgbaImage;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Widget};

/// Panel images are 1024px squares shown at a third of that size; this is
/// the equivalent cell box.
pub const PANEL_IMAGE_WIDTH: u16 = 34;
pub const PANEL_IMAGE_HEIGHT: u16 = 17;

const UPPER_HALF: &str = "▀";

pub struct PanelImage<'a> {
    image: &'a RgbaImage,
}

impl<'a> PanelImage<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        Self { image }
    }

    /// Size in cells of the image fitted into `area`, aspect preserved.
    pub fn fitted_size(&self, area: Rect) -> (u16, u16) {
        let (iw, ih) = self.image.dimensions();
        if iw == 0 || ih == 0 || area.width == 0 || area.height == 0 {
            return (0, 0);
        }
        let max_w = f64::from(area.width);
        let max_h_px = f64::from(area.height) * 2.0;
        let scale = (max_w / f64::from(iw)).min(max_h_px / f64::from(ih));
        let cols = (f64::from(iw) * scale).round().max(1.0) as u16;
        let rows = ((f64::from(ih) * scale) / 2.0).ceil().max(1.0) as u16;
        (cols.min(area.width), rows.min(area.height))
    }

    fn pixel(&self, col: u16, px_row: u32, cols: u16, px_rows: u32) -> Option<Color> {
        if px_row >= px_rows {
            return None;
        }
        let (iw, ih) = self.image.dimensions();
        let x = (u32::from(col) * iw / u32::from(cols)).min(iw - 1);
        let y = (px_row * ih / px_rows).min(ih - 1);
        let [r, g, b, _] = self.image.get_pixel(x, y).0;
        Some(Color::Rgb(r, g, b))
    }
}

impl Widget for PanelImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.fitted_size(area);
        if cols == 0 || rows == 0 {
            return;
        }
        let px_rows = {
            let (iw, ih) = self.image.dimensions();
            ((u64::from(ih) * u64::from(cols) + u64::from(iw) / 2) / u64::from(iw)).max(1) as u32
        };
        let px_rows = px_rows.min(u32::from(rows) * 2);
        let x0 = area.x + (area.width - cols) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col, u32::from(row) * 2, cols, px_rows);
                let bottom = self.pixel(col, u32::from(row) * 2 + 1, cols, px_rows);
                if let Some(cell) = buf.cell_mut((x0 + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF);
                    if let Some(top) = top {
                        cell.set_fg(top);
                    }
                    if let Some(bottom) = bottom {
                        cell.set_bg(bottom);
                    }
                }
            }
        }
    }
}

/// Skeleton block shown while a slot has no image to draw.
pub struct Placeholder<'a> {
    caption: &'a str,
}

impl<'a> Placeholder<'a> {
    pub fn new() -> Self {
        Self { caption: "" }
    }

    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = caption;
        self
    }
}

impl Default for Placeholder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Placeholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = PANEL_IMAGE_WIDTH.min(area.width);
        let height = PANEL_IMAGE_HEIGHT.min(area.height);
        let block = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height,
        };

        for y in block.top()..block.bottom() {
            for x in block.left()..block.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("░").set_fg(PLACEHOLDER);
                }
            }
        }

        if !self.caption.is_empty() && height > 0 {
            let line = Rect {
                y: block.y + height / 2,
                height: 1,
                ..block
            };
            Paragraph::new(self.caption)
                .style(Style::default().fg(DISABLED))
                .alignment(Alignment::Center)
                .render(line, buf);
        }
    }
}
