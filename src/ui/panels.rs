//! Four-panel comic area.
//!
//! Everything here is derived from [`PageState`] plus the decoded images the
//! runtime has collected; the renderer owns no state of its own.

use crate::api::PANEL_COUNT;
use crate::ui::components::{Card, CardContent, Label};
use crate::ui::panel_image::{PanelImage, Placeholder, PANEL_IMAGE_HEIGHT, PANEL_IMAGE_WIDTH};
use crate::ui::page::PageState;
use crate::ui::theme::{MINEDIA_300, MINEDIA_700, TEXT};
use image::RgbaImage;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Widget, Wrap};

/// Narrowest a panel card may get before the grid drops a column.
const MIN_PANEL_WIDTH: u16 = PANEL_IMAGE_WIDTH + 4;

/// One slot of the comic, paired by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSlot<'a> {
    pub index: usize,
    pub image_url: Option<&'a str>,
    pub caption: &'a str,
}

impl PanelSlot<'_> {
    pub fn label(&self) -> String {
        format!("Panel {}", self.index + 1)
    }
}

/// Slots 0..4 with their image URL (if any) and caption (empty if absent).
pub fn panel_slots(state: &PageState) -> [PanelSlot<'_>; PANEL_COUNT] {
    std::array::from_fn(|index| PanelSlot {
        index,
        image_url: state
            .image_urls
            .get(index)
            .map(String::as_str)
            .filter(|url| !url.is_empty()),
        caption: state
            .panel_texts
            .get(index)
            .map(String::as_str)
            .unwrap_or(""),
    })
}

/// Decoded image state of one slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SlotImage {
    #[default]
    Missing,
    Loading,
    Ready(RgbaImage),
    Failed,
}

/// Images for the panels currently on screen.
///
/// Each successful submission starts a new generation; loads tagged with an
/// older generation are dropped.
#[derive(Debug, Default)]
pub struct PanelImages {
    generation: u64,
    slots: [SlotImage; PANEL_COUNT],
}

impl PanelImages {
    /// Starts a new generation for `urls` and returns its id.
    pub fn reset(&mut self, urls: &[String]) -> u64 {
        self.generation += 1;
        self.slots = std::array::from_fn(|index| match urls.get(index) {
            Some(url) if !url.is_empty() => SlotImage::Loading,
            _ => SlotImage::Missing,
        });
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, index: usize) -> &SlotImage {
        self.slots.get(index).unwrap_or(&SlotImage::Missing)
    }

    /// Stores a decoded image. Returns false for stale or out-of-range loads.
    pub fn loaded(&mut self, generation: u64, index: usize, image: RgbaImage) -> bool {
        self.set(generation, index, SlotImage::Ready(image))
    }

    pub fn failed(&mut self, generation: u64, index: usize) -> bool {
        self.set(generation, index, SlotImage::Failed)
    }

    fn set(&mut self, generation: u64, index: usize, image: SlotImage) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = image;
                true
            }
            None => false,
        }
    }
}

/// Grid of panel cards.
pub struct Panels<'a> {
    state: &'a PageState,
    images: &'a PanelImages,
}

impl<'a> Panels<'a> {
    pub fn new(state: &'a PageState, images: &'a PanelImages) -> Self {
        Self { state, images }
    }

    /// Columns used for `width`: as many as fit, between one and four.
    pub fn columns(width: u16) -> usize {
        usize::from(width / MIN_PANEL_WIDTH).clamp(1, PANEL_COUNT)
    }
}

impl Widget for Panels<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Self::columns(area.width);
        let rows = PANEL_COUNT.div_ceil(columns);
        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);

        for (slot_index, slot) in panel_slots(self.state).into_iter().enumerate() {
            let row = slot_index / columns;
            let col = slot_index % columns;
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(row_areas[row]);
            render_panel(slot, self.images.get(slot.index), cells[col], buf);
        }
    }
}

fn render_panel(slot: PanelSlot<'_>, image: &SlotImage, area: Rect, buf: &mut Buffer) {
    let card = Card::new().style(Style::default().fg(MINEDIA_300));
    let inner = card.inner(area);
    card.render(area, buf);

    let [image_area, label_area, caption_area] = Layout::vertical([
        Constraint::Max(PANEL_IMAGE_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    match (slot.image_url, image) {
        (Some(_), SlotImage::Ready(image)) => PanelImage::new(image).render(image_area, buf),
        (Some(_), SlotImage::Loading) => {
            Placeholder::new().caption("loading...").render(image_area, buf)
        }
        (Some(url), SlotImage::Failed) => Placeholder::new().caption(url).render(image_area, buf),
        _ => Placeholder::new().render(image_area, buf),
    }

    let label = slot.label();
    let label_width = label.chars().count() as u16;
    let centered = Rect {
        x: label_area.x + label_area.width.saturating_sub(label_width) / 2,
        width: label_width.min(label_area.width),
        ..label_area
    };
    Label::new(&label)
        .style(Style::default().fg(TEXT))
        .render(centered, buf);

    CardContent::new(
        Paragraph::new(slot.caption)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
    )
    .style(Style::default().fg(MINEDIA_700))
    .render(caption_area, buf);
}
