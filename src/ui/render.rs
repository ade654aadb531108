use crate::ui::app::App;
use crate::ui::components::{Button, Card, CardContent, Input, Label, Logo};
use crate::ui::footer::Footer;
use crate::ui::layout::{body_regions, layout_regions, LOG_MAX_LINES};
use crate::ui::page::Field;
use crate::ui::panels::Panels;
use crate::ui::theme::{MINEDIA_300, MINEDIA_500, STATUS_ERROR, TEXT};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const NAME_PLACEHOLDER: &str = "e.g. Cherry blossom fabric softener";
const DESCRIPTION_PLACEHOLDER: &str = "e.g. A spring-only softener whose cherry scent lasts all day";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let page = app.page();
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Logo::new(), header);
    frame.render_widget(Footer::new().widget(footer), footer);

    let regions = body_regions(body, page);

    // Session log
    let skip = page.messages.len().saturating_sub(LOG_MAX_LINES as usize);
    let log: Vec<Line> = page
        .messages
        .iter()
        .skip(skip)
        .map(|msg| Line::from(msg.as_str()))
        .collect();
    let log_card = Card::new().style(Style::default().fg(MINEDIA_300));
    let log_inner = log_card.inner(regions.log);
    frame.render_widget(log_card, regions.log);
    frame.render_widget(
        CardContent::new(Paragraph::new(log)).style(Style::default().fg(TEXT)),
        log_inner,
    );

    // Form
    let label_style = Style::default().fg(TEXT);
    frame.render_widget(Label::new("Product name").style(label_style), regions.name_label);
    frame.render_widget(
        Label::new("Product description").style(label_style),
        regions.description_label,
    );

    let name = Input::new(&page.product_name)
        .placeholder(NAME_PLACEHOLDER)
        .style(Style::default().fg(TEXT))
        .focused(page.focus == Field::Name)
        .disabled(page.is_loading);
    let description = Input::new(&page.product_description)
        .placeholder(DESCRIPTION_PLACEHOLDER)
        .style(Style::default().fg(TEXT))
        .focused(page.focus == Field::Description)
        .disabled(page.is_loading);

    let cursor = name
        .cursor_position(regions.name_input)
        .or_else(|| description.cursor_position(regions.description_input));
    frame.render_widget(name, regions.name_input);
    frame.render_widget(description, regions.description_input);

    frame.render_widget(
        Button::new(page.button_label())
            .style(Style::default().fg(Color::White).bg(MINEDIA_500))
            .disabled(!page.can_submit())
            .focused(page.focus == Field::Submit),
        regions.button,
    );

    if let Some(error) = &page.error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(STATUS_ERROR))
                .wrap(Wrap { trim: true }),
            regions.error,
        );
    }

    if page.show_panels {
        frame.render_widget(Panels::new(page, app.images()), regions.panels);
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
