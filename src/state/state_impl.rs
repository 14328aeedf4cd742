use crate::config::{InputMode, ViewHotkeys};
use crate::inventory::{validate, Item, ItemId, ItemStore, DEFAULT_LOW_STOCK_THRESHOLD};
use crate::ui::Theme;
use log::*;
use ratatui::widgets::ListState;

use super::error::StateError;
use super::form::{Alert, CreateForm, DeleteConfirmation, FormField, UnitPicker};
use super::navigation::{DeleteButton, View};

/// Most recent log lines kept for the log panel.
///
const MAX_LOG_ENTRIES: usize = 500;

/// Houses data representative of dashboard state.
///
/// The item store is owned here; every mutation goes through a method so the
/// view selection and the list cursor stay consistent with the collection.
///
pub struct State {
    store: ItemStore,
    low_stock_threshold: f64,
    current_view: View,
    items_list_state: ListState,
    form: CreateForm,
    unit_picker: Option<UnitPicker>,
    delete_confirmation: Option<DeleteConfirmation>,
    alert: Option<Alert>,
    dark_mode: bool,
    theme: Theme,
    hotkeys: ViewHotkeys,
    log_visible: bool,
    log_entries: Vec<String>,
}

/// Defines default dashboard state.
///
impl Default for State {
    fn default() -> State {
        State {
            store: ItemStore::new(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            current_view: View::AllItems,
            items_list_state: ListState::default(),
            form: CreateForm::default(),
            unit_picker: None,
            delete_confirmation: None,
            alert: None,
            dark_mode: false,
            theme: Theme::light(),
            hotkeys: ViewHotkeys::default(),
            log_visible: false,
            log_entries: vec![],
        }
    }
}

impl State {
    pub fn new(
        store: ItemStore,
        low_stock_threshold: f64,
        dark_mode: bool,
        hotkeys: ViewHotkeys,
    ) -> Self {
        let mut state = State {
            store,
            low_stock_threshold,
            dark_mode,
            theme: Theme::for_mode(dark_mode),
            hotkeys,
            ..State::default()
        };
        state.clamp_selection();
        state
    }

    /// Return the item store for reading.
    ///
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn low_stock_threshold(&self) -> f64 {
        self.low_stock_threshold
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Switch to the given view.
    ///
    pub fn select_view(&mut self, view: View) -> &mut Self {
        if self.current_view != view {
            debug!("Switching to view '{}'", view.title());
        }
        self.current_view = view;
        self.clamp_selection();
        self
    }

    pub fn next_view(&mut self) -> &mut Self {
        self.select_view(self.current_view.next())
    }

    pub fn previous_view(&mut self) -> &mut Self {
        self.select_view(self.current_view.previous())
    }

    /// Return the items the current view presents, in store order.
    ///
    pub fn visible_items(&self) -> Vec<&Item> {
        match self.current_view {
            View::AllItems => self.store.list_all().iter().collect(),
            View::LowStock => self
                .store
                .list_low_stock(self.low_stock_threshold)
                .collect(),
            View::Create => vec![],
        }
    }

    pub fn get_items_list_state(&mut self) -> &mut ListState {
        &mut self.items_list_state
    }

    /// Return the item under the list cursor, if any.
    ///
    pub fn selected_item(&self) -> Option<&Item> {
        let index = self.items_list_state.selected()?;
        self.visible_items().get(index).copied()
    }

    /// Move the list cursor down, wrapping at the end.
    ///
    pub fn next_item(&mut self) -> &mut Self {
        let len = self.visible_items().len();
        if len > 0 {
            let next = match self.items_list_state.selected() {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            };
            self.items_list_state.select(Some(next));
        }
        self
    }

    /// Move the list cursor up, wrapping at the start.
    ///
    pub fn previous_item(&mut self) -> &mut Self {
        let len = self.visible_items().len();
        if len > 0 {
            let previous = match self.items_list_state.selected() {
                Some(i) if i > 0 && i < len => i - 1,
                _ => len - 1,
            };
            self.items_list_state.select(Some(previous));
        }
        self
    }

    /// Keep the list cursor on a visible row.
    ///
    fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            self.items_list_state.select(None);
        } else {
            let index = self.items_list_state.selected().unwrap_or(0).min(len - 1);
            self.items_list_state.select(Some(index));
        }
    }

    /// Ask for confirmation before deleting the selected item.
    ///
    pub fn request_delete_selected(&mut self) -> Result<(), StateError> {
        let id = self
            .selected_item()
            .map(|item| item.id)
            .ok_or(StateError::NoItemSelected)?;
        self.request_delete(id)
    }

    /// Ask for confirmation before deleting the given item. "Cancel" starts
    /// out selected. An id the store does not hold opens no prompt.
    ///
    pub fn request_delete(&mut self, id: ItemId) -> Result<(), StateError> {
        if self.store.get(id).is_none() {
            debug!("Ignoring delete request for absent item {}", id);
            return Ok(());
        }
        self.delete_confirmation = Some(DeleteConfirmation {
            item_id: id,
            selected: DeleteButton::default(),
        });
        Ok(())
    }

    pub fn get_delete_confirmation(&self) -> Option<&DeleteConfirmation> {
        self.delete_confirmation.as_ref()
    }

    pub fn has_delete_confirmation(&self) -> bool {
        self.delete_confirmation.is_some()
    }

    /// Move the prompt's highlight to the other button.
    ///
    pub fn toggle_delete_button(&mut self) -> &mut Self {
        if let Some(pending) = self.delete_confirmation.as_mut() {
            pending.selected = pending.selected.toggled();
        }
        self
    }

    /// Apply the pending deletion. Returns whether an item was removed.
    ///
    pub fn confirm_delete(&mut self) -> Result<bool, StateError> {
        let pending = self
            .delete_confirmation
            .take()
            .ok_or(StateError::NoPendingDeletion)?;
        let removed = self.store.delete_item(pending.item_id);
        if removed {
            info!("Deleted item {}", pending.item_id);
        }
        self.clamp_selection();
        Ok(removed)
    }

    /// Drop the pending deletion without touching the store.
    ///
    pub fn cancel_delete(&mut self) -> &mut Self {
        if let Some(pending) = self.delete_confirmation.take() {
            info!("Cancelled deletion of item {}", pending.item_id);
        }
        self
    }

    /// Act on the highlighted prompt button.
    ///
    pub fn activate_delete_button(&mut self) -> Result<bool, StateError> {
        let pending = self
            .delete_confirmation
            .as_ref()
            .ok_or(StateError::NoPendingDeletion)?;
        match pending.selected {
            DeleteButton::Delete => self.confirm_delete(),
            DeleteButton::Cancel => {
                self.cancel_delete();
                Ok(false)
            }
        }
    }

    pub fn get_form(&self) -> &CreateForm {
        &self.form
    }

    pub fn add_form_char(&mut self, c: char) -> &mut Self {
        self.form.push_char(c);
        self
    }

    pub fn remove_form_char(&mut self) -> &mut Self {
        self.form.pop_char();
        self
    }

    pub fn next_form_field(&mut self) -> &mut Self {
        self.form.focus = self.form.focus.next();
        self
    }

    pub fn previous_form_field(&mut self) -> &mut Self {
        self.form.focus = self.form.focus.previous();
        self
    }

    /// Act on the focused form field: text fields advance focus, the unit
    /// field opens the picker and the submit button submits.
    ///
    pub fn activate_form_field(&mut self) -> Result<(), StateError> {
        match self.form.focus {
            FormField::Name | FormField::Stock => {
                self.next_form_field();
            }
            FormField::Unit => {
                self.open_unit_picker();
            }
            FormField::Submit => {
                self.submit_form()?;
            }
        }
        Ok(())
    }

    /// Validate the form and add the item. A rejected form raises an error
    /// alert and leaves the store untouched.
    ///
    pub fn submit_form(&mut self) -> Result<ItemId, StateError> {
        let candidate = validate(&self.form.name, &self.form.stock, self.form.unit.as_str());
        match candidate {
            Ok(candidate) => {
                let id = self.store.add_item(candidate);
                self.on_item_added(id);
                Ok(id)
            }
            Err(e) => {
                warn!("Rejected new item: {}", e);
                self.show_alert(Alert::error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Runs after an item is admitted: clears the form and returns to the
    /// full list with the new item selected.
    ///
    pub fn on_item_added(&mut self, id: ItemId) -> &mut Self {
        if let Some(item) = self.store.get(id) {
            info!("Added item {} '{}' ({})", id, item.name, item.quantity_label());
        }
        self.form.reset();
        self.select_view(View::AllItems);
        let position = self.visible_items().iter().position(|item| item.id == id);
        if position.is_some() {
            self.items_list_state.select(position);
        }
        self
    }

    /// Abandon the form and go back to the full list.
    ///
    pub fn cancel_form(&mut self) -> &mut Self {
        self.form.reset();
        self.select_view(View::AllItems)
    }

    pub fn open_unit_picker(&mut self) -> &mut Self {
        self.unit_picker = Some(UnitPicker::new(self.form.unit));
        self
    }

    pub fn get_unit_picker(&self) -> Option<&UnitPicker> {
        self.unit_picker.as_ref()
    }

    pub fn next_unit(&mut self) -> &mut Self {
        if let Some(picker) = self.unit_picker.as_mut() {
            picker.next();
        }
        self
    }

    pub fn previous_unit(&mut self) -> &mut Self {
        if let Some(picker) = self.unit_picker.as_mut() {
            picker.previous();
        }
        self
    }

    /// Store the highlighted unit in the form and close the picker.
    ///
    pub fn select_unit(&mut self) -> &mut Self {
        if let Some(picker) = self.unit_picker.take() {
            self.form.unit = picker.highlighted();
            debug!("Selected unit '{}'", self.form.unit);
        }
        self
    }

    pub fn close_unit_picker(&mut self) -> &mut Self {
        self.unit_picker = None;
        self
    }

    pub fn get_alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn show_alert(&mut self, alert: Alert) -> &mut Self {
        self.alert = Some(alert);
        self
    }

    pub fn dismiss_alert(&mut self) -> &mut Self {
        self.alert = None;
        self
    }

    /// Return the input mode keys should be routed to. Modals take priority
    /// over the view underneath.
    ///
    pub fn input_mode(&self) -> InputMode {
        if self.alert.is_some() {
            InputMode::Alert
        } else if self.delete_confirmation.is_some() {
            InputMode::DeleteConfirmation
        } else if self.unit_picker.is_some() {
            InputMode::UnitPicker
        } else if self.current_view == View::Create {
            InputMode::CreateForm
        } else {
            InputMode::ItemList
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip between the light and dark appearance.
    ///
    pub fn toggle_dark_mode(&mut self) -> &mut Self {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::for_mode(self.dark_mode);
        info!("Switched to {} theme", self.theme.name);
        self
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    /// Append a formatted log line, dropping the oldest beyond the cap.
    ///
    pub fn add_log_entry(&mut self, entry: String) -> &mut Self {
        self.log_entries.push(entry);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            let excess = self.log_entries.len() - MAX_LOG_ENTRIES;
            self.log_entries.drain(..excess);
        }
        self
    }

    pub fn get_log_entries(&self) -> &[String] {
        &self.log_entries
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }
}
