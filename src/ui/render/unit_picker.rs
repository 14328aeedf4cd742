use crate::inventory::Unit;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Render the unit selection modal over the create form.
///
pub fn unit_picker(frame: &mut Frame, size: Rect, state: &State) {
    let Some(picker) = state.get_unit_picker() else {
        return;
    };
    let theme = state.get_theme();

    let popup_area = styling::centered_rect(30, 40, size);
    frame.render_widget(Clear, popup_area);

    let rows: Vec<ListItem> = Unit::ALL
        .iter()
        .map(|unit| ListItem::new(unit.as_str()).style(styling::normal_text_style(theme)))
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme))
                .style(styling::surface_style(theme))
                .title(Span::styled("Unit", styling::active_block_title_style())),
        )
        .highlight_style(styling::active_button_style(theme))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(picker.index));
    frame.render_stateful_widget(list, popup_area, &mut list_state);
}
