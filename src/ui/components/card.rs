use crate::ui::theme::GLOBAL_BORDER;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Padding, Widget};

/// Bordered container. Draw the frame with `render`, children into `inner`.
pub struct Card {
    style: Style,
}

impl Card {
    pub fn new() -> Self {
        Self {
            style: Style::default(),
        }
    }

    pub fn base_style() -> Style {
        Style::default().fg(GLOBAL_BORDER)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    fn block(&self) -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Self::base_style().patch(self.style))
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Card {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}

/// Padded body of a [`Card`].
pub struct CardContent<W> {
    child: W,
    padding: Padding,
    style: Style,
}

impl<W: Widget> CardContent<W> {
    pub fn new(child: W) -> Self {
        Self {
            child,
            padding: Padding::horizontal(1),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<W: Widget> Widget for CardContent<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
        let inner = Block::new().padding(self.padding).inner(area);
        self.child.render(inner, buf);
    }
}
