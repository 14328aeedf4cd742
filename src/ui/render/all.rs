use super::{create_item, dialogs, footer, header, items, log, unit_picker};
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

const LOG_PANEL_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    frame.render_widget(
        Block::default().style(styling::base_style(state.get_theme())),
        size,
    );

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(5)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, chunks[0], state);
    if state.current_view().is_list() {
        items(frame, chunks[1], state);
    } else {
        create_item(frame, chunks[1], state);
    }
    if state.is_log_visible() {
        log(frame, chunks[2], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);

    // Modals go last so they draw over everything else
    if state.get_unit_picker().is_some() {
        unit_picker::unit_picker(frame, chunks[1], state);
    }
    if state.has_delete_confirmation() {
        dialogs::delete_confirmation(frame, size, state);
    }
    if state.get_alert().is_some() {
        dialogs::alert(frame, size, state);
    }
}
