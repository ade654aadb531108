use crate::ui::theme::{GLOBAL_BORDER, MINEDIA_500};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

pub const BRAND: &str = "minedia manga";

/// Brand line shown in the top bar.
pub struct Logo;

impl Default for Logo {
    fn default() -> Self {
        Self::new()
    }
}

impl Logo {
    pub fn new() -> Self {
        Self
    }

    pub fn base_style() -> Style {
        Style::default().fg(MINEDIA_500).add_modifier(Modifier::BOLD)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::raw("   "),
            Span::styled(BRAND, Self::base_style()),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.widget().render(area, buf);
    }
}
