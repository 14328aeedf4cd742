use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    // Only the newest lines that fit inside the borders
    let visible = size.height.saturating_sub(2) as usize;
    let entries = state.get_log_entries();
    let start = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.clone(),
                styling::muted_text_style(theme),
            )))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
