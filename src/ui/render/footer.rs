use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::config::InputMode;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Describe the hotkeys active in the given input mode.
///
fn footer_text(mode: InputMode, state: &State) -> String {
    let hotkeys = state.get_hotkeys().for_mode(mode);
    match mode {
        InputMode::ItemList => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (
                    HotkeyAction::NextView,
                    "switch view",
                    Some(HotkeyAction::PrevView),
                ),
                (HotkeyAction::DeleteItem, "delete", None),
                (HotkeyAction::ToggleDarkMode, "theme", None),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
        InputMode::CreateForm => {
            let keys = build_footer_text(
                hotkeys,
                &[
                    (
                        HotkeyAction::NextField,
                        "navigate fields",
                        Some(HotkeyAction::PrevField),
                    ),
                    (HotkeyAction::Select, "choose unit / add", None),
                    (HotkeyAction::SubmitForm, "add item", None),
                    (HotkeyAction::NextView, "switch view", None),
                    (HotkeyAction::Cancel, "cancel", None),
                ],
            );
            format!(" Type to edit,{}", keys)
        }
        InputMode::UnitPicker => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::Select, "select", None),
                (HotkeyAction::Cancel, "cancel", None),
            ],
        ),
        InputMode::DeleteConfirmation => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::PrevButton,
                    "switch button",
                    Some(HotkeyAction::NextButton),
                ),
                (HotkeyAction::Select, "press button", None),
                (HotkeyAction::Cancel, "cancel", None),
            ],
        ),
        InputMode::Alert => {
            build_footer_text(hotkeys, &[(HotkeyAction::DismissAlert, "dismiss", None)])
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let text = footer_text(state.input_mode(), state);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        styling::muted_text_style(state.get_theme()),
    )));
    frame.render_widget(paragraph, size);
}
