use crate::ui::theme::{DISABLED, MINEDIA_400, MINEDIA_500};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

/// Single-line text field.
///
/// Shows `placeholder` while the value is empty. Long values scroll so the
/// end of the text stays visible.
pub struct Input<'a> {
    value: &'a str,
    placeholder: &'a str,
    style: Style,
    focused: bool,
    disabled: bool,
}

impl<'a> Input<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: "",
            style: Style::default(),
            focused: false,
            disabled: false,
        }
    }

    pub fn base_style() -> Style {
        Style::default()
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Where the terminal cursor belongs when this field has focus.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled {
            return None;
        }
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let width = Span::raw(self.value).width() as u16;
        let x = inner.x + width.min(inner.width.saturating_sub(1));
        Some(Position::new(x, inner.y))
    }

    fn block(&self) -> Block<'static> {
        let border = if self.disabled {
            Style::default().fg(DISABLED)
        } else if self.focused {
            Style::default().fg(MINEDIA_500)
        } else {
            Style::default().fg(MINEDIA_400)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .padding(Padding::horizontal(1))
    }
}

impl Widget for Input<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        let style = Self::base_style().patch(self.style);

        let paragraph = if self.value.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder,
                style.fg(MINEDIA_400).add_modifier(Modifier::ITALIC),
            ))
        } else {
            let width = Span::raw(self.value).width() as u16;
            let offset = width.saturating_sub(inner.width.saturating_sub(1));
            Paragraph::new(Span::styled(self.value, style)).scroll((0, offset))
        };

        let paragraph = if self.disabled {
            paragraph.style(Style::default().add_modifier(Modifier::DIM))
        } else {
            paragraph
        };

        paragraph.block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn render(input: Input<'_>, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);
        buf
    }

    #[test]
    fn placeholder_shown_when_empty() {
        let buf = render(Input::new("").placeholder("e.g. soap"), 20);
        assert_eq!(buf[(2, 1)].symbol(), "e");
        assert_eq!(buf[(2, 1)].fg, MINEDIA_400);
    }

    #[test]
    fn value_uses_caller_style() {
        let buf = render(
            Input::new("Soap").style(Style::default().fg(Color::Cyan)),
            20,
        );
        assert_eq!(buf[(2, 1)].symbol(), "S");
        assert_eq!(buf[(2, 1)].fg, Color::Cyan);
    }

    #[test]
    fn long_value_keeps_tail_visible() {
        // 10 wide: borders and padding leave 6 columns.
        let buf = render(Input::new("abcdefghij"), 10);
        assert_eq!(buf[(2, 1)].symbol(), "f");
        assert_eq!(buf[(6, 1)].symbol(), "j");
    }

    #[test]
    fn cursor_only_when_focused() {
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(Input::new("ab").cursor_position(area), None);
        assert_eq!(
            Input::new("ab").focused(true).cursor_position(area),
            Some(Position::new(4, 1))
        );
        assert_eq!(
            Input::new("ab").focused(true).disabled(true).cursor_position(area),
            None
        );
    }
}
