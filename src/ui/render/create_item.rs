use crate::state::{FormField, State};
use crate::ui::widgets::styling;
use crate::ui::{Frame, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SUBMIT_LABEL: &str = "Add Item";

/// Render the create form.
///
pub fn create_item(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.get_form();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled("Create", styling::active_block_title_style()));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    text_field(
        frame,
        chunks[0],
        theme,
        "Product Name",
        &form.name,
        "Enter product name",
        form.focus == FormField::Name,
    );
    text_field(
        frame,
        chunks[1],
        theme,
        "Stock",
        &form.stock,
        "Enter stock quantity",
        form.focus == FormField::Stock,
    );

    let unit_focused = form.focus == FormField::Unit;
    let unit = Paragraph::new(Line::from(vec![
        Span::styled(form.unit.as_str(), styling::normal_text_style(theme)),
        Span::styled("  (Enter to choose)", styling::muted_text_style(theme)),
    ]))
    .block(field_block(theme, "Unit", unit_focused));
    frame.render_widget(unit, chunks[2]);

    let submit_focused = form.focus == FormField::Submit;
    let submit_style = if submit_focused {
        styling::active_button_style(theme)
    } else {
        styling::tab_style(theme)
    };
    let submit = Paragraph::new(Line::from(Span::styled(SUBMIT_LABEL, submit_style)))
        .alignment(Alignment::Center)
        .block(field_block(theme, "", submit_focused));
    frame.render_widget(submit, centered_button(chunks[3]));
}

fn text_field(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let line = if value.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            styling::muted_text_style(theme),
        ))
    } else {
        Line::from(Span::styled(
            value.to_string(),
            styling::normal_text_style(theme),
        ))
    };
    let paragraph = Paragraph::new(line).block(field_block(theme, label, focused));
    frame.render_widget(paragraph, area);

    if focused {
        let offset = value.chars().count() as u16;
        let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
        frame.set_cursor(x, area.y + 1);
    }
}

fn field_block<'a>(theme: &Theme, label: &'a str, focused: bool) -> Block<'a> {
    let border_style = if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(label)
}

fn centered_button(area: Rect) -> Rect {
    let width = (SUBMIT_LABEL.len() as u16 + 6).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
