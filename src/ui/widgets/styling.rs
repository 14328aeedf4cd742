use crate::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the base style painted under every widget.
///
pub fn base_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .bg(theme.background.to_color())
}

/// Return the style for modal backgrounds.
///
pub fn surface_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .bg(theme.surface.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for muted text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for an item row, colored by stock level.
///
pub fn item_row_style(theme: &Theme, low_stock: bool) -> Style {
    let background = if low_stock {
        theme.low_stock_row
    } else {
        theme.in_stock_row
    };
    Style::default()
        .fg(theme.row_text.to_color())
        .bg(background.to_color())
}

/// Return the style for a selected button or tab.
///
pub fn active_button_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.on_primary.to_color())
        .bg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for an unselected tab.
///
pub fn tab_style(theme: &Theme) -> Style {
    Style::default().fg(theme.tab_text.to_color())
}

/// Return the style for the destructive button.
///
pub fn danger_button_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.on_primary.to_color())
        .bg(theme.danger.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return a rect of the given percentage size centered in `area`.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
