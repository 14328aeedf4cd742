//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the dashboard, including action
//! types, hotkey bindings, and default configurations per mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Item list actions
    NavigateNext,
    NavigatePrev,
    NextView,
    PrevView,
    ShowAllItems,
    ShowLowStock,
    ShowCreate,
    DeleteItem,
    ToggleDarkMode,
    ToggleLog,
    Quit,

    // Create form actions
    NextField,
    PrevField,
    SubmitForm,

    // Modal actions
    Select,
    Cancel,
    NextButton,
    PrevButton,
    DismissAlert,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn char(c: char) -> Self {
        Hotkey::plain(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Binding table for one mode.
///
pub type HotkeyMap = HashMap<HotkeyAction, Hotkey>;

/// Maps hotkey actions to their key bindings for each input mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewHotkeys {
    pub item_list: HotkeyMap,
    pub create_form: HotkeyMap,
    pub unit_picker: HotkeyMap,
    pub delete_confirmation: HotkeyMap,
    pub alert: HotkeyMap,
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

/// Partial bindings read from the config file. Every map is optional and
/// entries replace the matching default binding.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyOverrides {
    #[serde(default)]
    pub item_list: HotkeyMap,
    #[serde(default)]
    pub create_form: HotkeyMap,
    #[serde(default)]
    pub unit_picker: HotkeyMap,
    #[serde(default)]
    pub delete_confirmation: HotkeyMap,
    #[serde(default)]
    pub alert: HotkeyMap,
}

impl ViewHotkeys {
    /// Apply overrides on top of these bindings.
    ///
    pub fn merged(mut self, overrides: HotkeyOverrides) -> Self {
        self.item_list.extend(overrides.item_list);
        self.create_form.extend(overrides.create_form);
        self.unit_picker.extend(overrides.unit_picker);
        self.delete_confirmation.extend(overrides.delete_confirmation);
        self.alert.extend(overrides.alert);
        self
    }

    pub fn for_mode(&self, mode: InputMode) -> &HotkeyMap {
        match mode {
            InputMode::ItemList => &self.item_list,
            InputMode::CreateForm => &self.create_form,
            InputMode::UnitPicker => &self.unit_picker,
            InputMode::DeleteConfirmation => &self.delete_confirmation,
            InputMode::Alert => &self.alert,
        }
    }
}

impl From<&ViewHotkeys> for HotkeyOverrides {
    fn from(hotkeys: &ViewHotkeys) -> Self {
        HotkeyOverrides {
            item_list: hotkeys.item_list.clone(),
            create_form: hotkeys.create_form.clone(),
            unit_picker: hotkeys.unit_picker.clone(),
            delete_confirmation: hotkeys.delete_confirmation.clone(),
            alert: hotkeys.alert.clone(),
        }
    }
}

/// Represents the input modes that have their own hotkey configurations.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    ItemList,
    CreateForm,
    UnitPicker,
    DeleteConfirmation,
    Alert,
}

/// Returns default hotkey mappings for all modes.
///
pub fn default_hotkeys() -> ViewHotkeys {
    let item_list = HashMap::from([
        (HotkeyAction::NavigateNext, Hotkey::char('j')),
        (HotkeyAction::NavigatePrev, Hotkey::char('k')),
        (HotkeyAction::NextView, Hotkey::plain(KeyCode::Tab)),
        (
            HotkeyAction::PrevView,
            Hotkey {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::SHIFT,
            },
        ),
        (HotkeyAction::ShowAllItems, Hotkey::char('1')),
        (HotkeyAction::ShowLowStock, Hotkey::char('2')),
        (HotkeyAction::ShowCreate, Hotkey::char('3')),
        (HotkeyAction::DeleteItem, Hotkey::char('d')),
        (HotkeyAction::ToggleDarkMode, Hotkey::char('t')),
        (HotkeyAction::ToggleLog, Hotkey::char('L')),
        (HotkeyAction::Quit, Hotkey::char('q')),
    ]);

    let create_form = HashMap::from([
        (HotkeyAction::NextField, Hotkey::plain(KeyCode::Down)),
        (HotkeyAction::PrevField, Hotkey::plain(KeyCode::Up)),
        (HotkeyAction::Select, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::SubmitForm, Hotkey::ctrl('s')),
        (HotkeyAction::Cancel, Hotkey::plain(KeyCode::Esc)),
        (HotkeyAction::NextView, Hotkey::plain(KeyCode::Tab)),
        (
            HotkeyAction::PrevView,
            Hotkey {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::SHIFT,
            },
        ),
    ]);

    let unit_picker = HashMap::from([
        (HotkeyAction::NavigateNext, Hotkey::char('j')),
        (HotkeyAction::NavigatePrev, Hotkey::char('k')),
        (HotkeyAction::Select, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::Cancel, Hotkey::plain(KeyCode::Esc)),
    ]);

    let delete_confirmation = HashMap::from([
        (HotkeyAction::NextButton, Hotkey::char('l')),
        (HotkeyAction::PrevButton, Hotkey::char('h')),
        (HotkeyAction::Select, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::Cancel, Hotkey::plain(KeyCode::Esc)),
    ]);

    let alert = HashMap::from([(HotkeyAction::DismissAlert, Hotkey::plain(KeyCode::Enter))]);

    ViewHotkeys {
        item_list,
        create_form,
        unit_picker,
        delete_confirmation,
        alert,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
/// Shift is ignored for character keys and back-tab, since the key code
/// already carries it.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    if event.code != hotkey.code {
        return false;
    }
    match event.code {
        KeyCode::Char(_) | KeyCode::BackTab => {
            event.modifiers.difference(KeyModifiers::SHIFT)
                == hotkey.modifiers.difference(KeyModifiers::SHIFT)
        }
        _ => event.modifiers == hotkey.modifiers,
    }
}

/// Gets the action for a KeyEvent in a specific mode.
///
/// Arrow keys act as aliases for list navigation so vim-style bindings can be
/// remapped without losing them.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    mode: InputMode,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    let found = hotkeys
        .for_mode(mode)
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action);
    if found.is_some() || !event.modifiers.is_empty() {
        return found;
    }
    match (mode, event.code) {
        (InputMode::ItemList | InputMode::UnitPicker, KeyCode::Down) => {
            Some(HotkeyAction::NavigateNext)
        }
        (InputMode::ItemList | InputMode::UnitPicker, KeyCode::Up) => {
            Some(HotkeyAction::NavigatePrev)
        }
        (InputMode::DeleteConfirmation, KeyCode::Right) => Some(HotkeyAction::NextButton),
        (InputMode::DeleteConfirmation, KeyCode::Left) => Some(HotkeyAction::PrevButton),
        (InputMode::Alert, KeyCode::Esc) => Some(HotkeyAction::DismissAlert),
        _ => None,
    }
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HotkeyMap,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        let Some(hotkey) = hotkeys.get(action) else {
            continue;
        };
        match paired_action.and_then(|paired| hotkeys.get(&paired)) {
            Some(paired_hotkey) => parts.push(format!(
                " {}/{}: {}",
                format_hotkey_display(hotkey),
                format_hotkey_display(paired_hotkey),
                description
            )),
            None => parts.push(format!(" {}: {}", format_hotkey_display(hotkey), description)),
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::char('j');
        assert!(matches_hotkey(&key(KeyCode::Char('j'), KeyModifiers::NONE), &hotkey));
        assert!(!matches_hotkey(&key(KeyCode::Char('k'), KeyModifiers::NONE), &hotkey));
        assert!(!matches_hotkey(
            &key(KeyCode::Char('j'), KeyModifiers::CONTROL),
            &hotkey
        ));
    }

    #[test]
    fn test_shifted_char_matches() {
        let hotkey = Hotkey::char('L');
        assert!(matches_hotkey(&key(KeyCode::Char('L'), KeyModifiers::SHIFT), &hotkey));

        let back_tab = default_hotkeys().item_list[&HotkeyAction::PrevView];
        assert!(matches_hotkey(&key(KeyCode::BackTab, KeyModifiers::NONE), &back_tab));
        assert!(matches_hotkey(&key(KeyCode::BackTab, KeyModifiers::SHIFT), &back_tab));
    }

    #[test]
    fn test_get_action_for_event() {
        let hotkeys = default_hotkeys();
        let event = key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(
            get_action_for_event(&event, InputMode::CreateForm, &hotkeys),
            Some(HotkeyAction::Select)
        );
        assert_eq!(
            get_action_for_event(&event, InputMode::Alert, &hotkeys),
            Some(HotkeyAction::DismissAlert)
        );
        assert_eq!(get_action_for_event(&event, InputMode::ItemList, &hotkeys), None);
    }

    #[test]
    fn test_arrow_aliases() {
        let hotkeys = default_hotkeys();
        assert_eq!(
            get_action_for_event(
                &key(KeyCode::Down, KeyModifiers::NONE),
                InputMode::ItemList,
                &hotkeys
            ),
            Some(HotkeyAction::NavigateNext)
        );
        assert_eq!(
            get_action_for_event(
                &key(KeyCode::Left, KeyModifiers::NONE),
                InputMode::DeleteConfirmation,
                &hotkeys
            ),
            Some(HotkeyAction::PrevButton)
        );
    }

    #[test]
    fn test_merged_overrides() {
        let mut overrides = HotkeyOverrides::default();
        overrides
            .item_list
            .insert(HotkeyAction::DeleteItem, Hotkey::char('x'));
        let hotkeys = default_hotkeys().merged(overrides);

        assert_eq!(hotkeys.item_list[&HotkeyAction::DeleteItem], Hotkey::char('x'));
        assert_eq!(hotkeys.item_list[&HotkeyAction::Quit], Hotkey::char('q'));
        assert_eq!(hotkeys.alert, default_hotkeys().alert);
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey::ctrl('s');
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("s"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);
    }

    #[test]
    fn test_char_hotkey_requires_char() {
        let result: Result<Hotkey, _> = serde_yaml::from_str("code: Char\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys.item_list,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::DeleteItem, "delete", None),
                (HotkeyAction::DismissAlert, "missing", None),
            ],
        );
        assert_eq!(text, " j/k: navigate, d: delete");
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::ctrl('s')), "Ctrl+s");
        assert_eq!(format_hotkey_display(&Hotkey::char(' ')), "Space");
        assert_eq!(format_hotkey_display(&Hotkey::plain(KeyCode::BackTab)), "Shift+Tab");
    }
}
