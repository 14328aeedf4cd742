use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::config::InputMode;
use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread. The
    /// thread stops once the receiving side is dropped or the terminal
    /// cannot be read.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => Ok(true),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    let mode = state.input_mode();
    let action = get_action_for_event(&key, mode, state.get_hotkeys());
    match mode {
        InputMode::Alert => {
            if action == Some(HotkeyAction::DismissAlert) {
                state.dismiss_alert();
            }
        }
        InputMode::DeleteConfirmation => match action {
            Some(HotkeyAction::NextButton) | Some(HotkeyAction::PrevButton) => {
                state.toggle_delete_button();
            }
            Some(HotkeyAction::Select) => {
                if let Err(e) = state.activate_delete_button() {
                    warn!("Failed to apply delete prompt: {}", e);
                }
            }
            Some(HotkeyAction::Cancel) => {
                state.cancel_delete();
            }
            _ => {}
        },
        InputMode::UnitPicker => match action {
            Some(HotkeyAction::NavigateNext) => {
                state.next_unit();
            }
            Some(HotkeyAction::NavigatePrev) => {
                state.previous_unit();
            }
            Some(HotkeyAction::Select) => {
                state.select_unit();
            }
            Some(HotkeyAction::Cancel) => {
                state.close_unit_picker();
            }
            _ => {}
        },
        InputMode::CreateForm => handle_form_key(state, key, action),
        InputMode::ItemList => return handle_list_key(state, action),
    }
    true
}

fn handle_list_key(state: &mut State, action: Option<HotkeyAction>) -> bool {
    match action {
        Some(HotkeyAction::Quit) => {
            debug!("Processing exit hotkey...");
            return false;
        }
        Some(HotkeyAction::NavigateNext) => {
            state.next_item();
        }
        Some(HotkeyAction::NavigatePrev) => {
            state.previous_item();
        }
        Some(HotkeyAction::NextView) => {
            state.next_view();
        }
        Some(HotkeyAction::PrevView) => {
            state.previous_view();
        }
        Some(HotkeyAction::ShowAllItems) => {
            state.select_view(View::AllItems);
        }
        Some(HotkeyAction::ShowLowStock) => {
            state.select_view(View::LowStock);
        }
        Some(HotkeyAction::ShowCreate) => {
            state.select_view(View::Create);
        }
        Some(HotkeyAction::DeleteItem) => {
            if let Err(e) = state.request_delete_selected() {
                debug!("Ignoring delete request: {}", e);
            }
        }
        Some(HotkeyAction::ToggleDarkMode) => {
            state.toggle_dark_mode();
        }
        Some(HotkeyAction::ToggleLog) => {
            state.toggle_log();
        }
        _ => {}
    }
    true
}

fn handle_form_key(state: &mut State, key: KeyEvent, action: Option<HotkeyAction>) {
    match action {
        Some(HotkeyAction::NextField) => {
            state.next_form_field();
        }
        Some(HotkeyAction::PrevField) => {
            state.previous_form_field();
        }
        Some(HotkeyAction::Select) => {
            // A rejected submit has already raised its alert
            if let Err(e) = state.activate_form_field() {
                debug!("Form field action failed: {}", e);
            }
        }
        Some(HotkeyAction::SubmitForm) => {
            if let Err(e) = state.submit_form() {
                debug!("Form submit failed: {}", e);
            }
        }
        Some(HotkeyAction::Cancel) => {
            state.cancel_form();
        }
        Some(HotkeyAction::NextView) => {
            state.next_view();
        }
        Some(HotkeyAction::PrevView) => {
            state.previous_view();
        }
        Some(_) => {}
        None => {
            if !state.get_form().focus.is_text() {
                return;
            }
            let typing = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
            match key.code {
                KeyCode::Char(c) if typing => {
                    state.add_form_char(c);
                }
                KeyCode::Backspace => {
                    state.remove_form_char();
                }
                _ => {}
            }
        }
    }
}
