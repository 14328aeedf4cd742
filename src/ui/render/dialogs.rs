use crate::state::{DeleteButton, State};
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const DELETE_TITLE: &str = "Delete Item";
const DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Render the delete confirmation dialog with its Cancel and Delete buttons.
///
pub fn delete_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    let Some(confirmation) = state.get_delete_confirmation() else {
        return;
    };
    let theme = state.get_theme();

    let popup_area = styling::centered_rect(50, 30, size);
    frame.render_widget(Clear, popup_area);

    let item_name = state
        .store()
        .get(confirmation.item_id)
        .map(|item| item.name.clone())
        .unwrap_or_default();

    let button = |button: DeleteButton| {
        let style = match (button, confirmation.selected == button) {
            (DeleteButton::Delete, true) => styling::danger_button_style(theme),
            (DeleteButton::Cancel, true) => styling::active_button_style(theme),
            (_, false) => styling::normal_text_style(theme),
        };
        Span::styled(format!("[ {} ]", button.label()), style)
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            DELETE_MESSAGE,
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(item_name, styling::muted_text_style(theme))),
        Line::from(""),
        Line::from(vec![
            button(DeleteButton::Cancel),
            Span::raw("   "),
            button(DeleteButton::Delete),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    DELETE_TITLE,
                    styling::active_block_title_style().fg(theme.danger.to_color()),
                ))
                .border_style(styling::surface_style(theme).fg(theme.danger.to_color()))
                .style(styling::surface_style(theme)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Render the blocking alert dialog.
///
pub fn alert(frame: &mut Frame, size: Rect, state: &State) {
    let Some(alert) = state.get_alert() else {
        return;
    };
    let theme = state.get_theme();

    let popup_area = styling::centered_rect(50, 25, size);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            alert.message.clone(),
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", styling::active_button_style(theme))),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    alert.title.clone(),
                    styling::active_block_title_style().fg(theme.warning.to_color()),
                ))
                .border_style(styling::surface_style(theme).fg(theme.warning.to_color()))
                .style(styling::surface_style(theme)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}
