use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;

use crate::ui::page::PageState;

/// Widest the form column gets; panels use the full body width.
pub const FORM_MAX_WIDTH: u16 = 64;
/// Log lines shown at most; older entries scroll off the top.
pub const LOG_MAX_LINES: u16 = 6;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(2);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        height: header_height,
        ..area
    };
    let footer = Rect {
        y: area.y + area.height.saturating_sub(footer_height),
        height: footer_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: area.height.saturating_sub(header_height + footer_height),
        ..area
    };
    (header, body, footer)
}

/// Body areas, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyRegions {
    pub log: Rect,
    pub name_label: Rect,
    pub name_input: Rect,
    pub description_label: Rect,
    pub description_input: Rect,
    pub button: Rect,
    pub error: Rect,
    pub panels: Rect,
}

pub fn body_regions(body: Rect, page: &PageState) -> BodyRegions {
    let log_lines = (page.messages.len() as u16).clamp(1, LOG_MAX_LINES);
    let column_width = centered_column(body, FORM_MAX_WIDTH).width;
    let error_height = page
        .error
        .as_deref()
        .map_or(0, |error| wrapped_height(error, column_width));

    let [form, panels] = Layout::vertical([
        Constraint::Length(log_lines + 2 + 1 + 3 + 1 + 3 + 3 + error_height),
        Constraint::Min(0),
    ])
    .areas(body);

    let form = centered_column(form, FORM_MAX_WIDTH);
    let [log, name_label, name_input, description_label, description_input, button, error] =
        Layout::vertical([
            Constraint::Length(log_lines + 2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(error_height),
        ])
        .areas(form);

    BodyRegions {
        log,
        name_label,
        name_input,
        description_label,
        description_input,
        button,
        error,
        panels,
    }
}

/// Rows `text` needs when word-wrapped greedily at `width` columns.
///
/// Matches `Wrap { trim: true }`: words longer than the width are split.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let mut rows = 0usize;

    for line in text.split('\n') {
        rows += 1;
        let mut used = 0usize;
        for word in line.split_whitespace() {
            let word_width = Span::raw(word).width();
            if used > 0 && used + 1 + word_width <= width {
                used += 1 + word_width;
                continue;
            }
            if used > 0 {
                rows += 1;
            }
            let spill = word_width.saturating_sub(1) / width;
            rows += spill;
            used = word_width - spill * width;
        }
    }

    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
