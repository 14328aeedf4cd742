use crate::state::{State, View};
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const EMPTY_TEXT: &str = "No items available";

/// Render the item list for the All items or Low Stock view.
///
pub fn items(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let threshold = state.low_stock_threshold();

    let title = match state.current_view() {
        View::LowStock => format!("{} (below {})", View::LowStock.title(), threshold),
        view => view.title().to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme))
        .title(Span::styled(title, styling::active_block_title_style()));

    let rows: Vec<ListItem> = state
        .visible_items()
        .iter()
        .map(|item| {
            let style = styling::item_row_style(&theme, item.is_low_stock(threshold));
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<28}", item.name)),
                Span::raw(item.quantity_label()),
            ]))
            .style(style)
        })
        .collect();

    if rows.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            EMPTY_TEXT,
            styling::muted_text_style(&theme),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let list = List::new(rows)
        .block(block)
        .highlight_style(
            styling::item_row_style(&theme, false)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, size, state.get_items_list_state());
}
