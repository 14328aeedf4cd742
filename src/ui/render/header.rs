use crate::state::{State, View};
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

const TITLE: &str = "Dashboard";

/// Render the header: title, view tabs and the theme toggle label.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(TITLE.len() as u16 + 2),
            Constraint::Min(10),
            Constraint::Length(14),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        styling::normal_text_style(theme).patch(styling::active_block_title_style()),
    )));
    frame.render_widget(title, chunks[0]);

    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.current_view().index())
        .style(styling::tab_style(theme))
        .highlight_style(styling::active_button_style(theme))
        .divider("|");
    frame.render_widget(tabs, chunks[1]);

    // Names the appearance the toggle switches to
    let toggle_label = if state.is_dark_mode() {
        "Light Mode"
    } else {
        "Dark Mode"
    };
    let toggle = Paragraph::new(Line::from(Span::styled(
        toggle_label,
        styling::tab_style(theme),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, chunks[2]);
}
