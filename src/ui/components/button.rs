use crate::ui::theme::DISABLED;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

pub struct Button<'a> {
    label: &'a str,
    style: Style,
    disabled: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
            disabled: false,
            focused: false,
        }
    }

    pub fn base_style() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn effective_style(&self) -> Style {
        let style = Self::base_style().patch(self.style);
        if self.disabled {
            style.fg(DISABLED).add_modifier(Modifier::DIM)
        } else if self.focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.effective_style();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style.remove_modifier(Modifier::REVERSED));
        Paragraph::new(self.label)
            .style(style)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn render(button: Button<'_>) -> Buffer {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);
        buf
    }

    #[test]
    fn caller_style_is_merged_over_base() {
        let buf = render(Button::new("Go").style(Style::default().fg(Color::White)));
        let cell = &buf[(9, 1)];
        assert_eq!(cell.symbol(), "G");
        assert_eq!(cell.fg, Color::White);
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let buf = render(
            Button::new("Go")
                .style(Style::default().fg(Color::White))
                .disabled(true),
        );
        let cell = &buf[(9, 1)];
        assert_eq!(cell.fg, DISABLED);
        assert!(cell.modifier.contains(Modifier::DIM));
    }
}
