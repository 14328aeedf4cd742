//! Create form state types.
//!
//! This module contains the fields of the item creation form and the state of
//! the unit picker, the delete prompt and the error alert.

use super::navigation::DeleteButton;
use crate::inventory::{ItemId, Unit};

/// Specifying the focused field of the create form.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    #[default]
    Name,
    Stock,
    Unit,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Name,
        FormField::Stock,
        FormField::Unit,
        FormField::Submit,
    ];

    fn position(&self) -> usize {
        FormField::ORDER
            .iter()
            .position(|field| field == self)
            .unwrap_or(0)
    }

    pub fn next(&self) -> FormField {
        FormField::ORDER[(self.position() + 1) % FormField::ORDER.len()]
    }

    pub fn previous(&self) -> FormField {
        let len = FormField::ORDER.len();
        FormField::ORDER[(self.position() + len - 1) % len]
    }

    /// Whether the field accepts typed characters.
    ///
    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::Stock)
    }
}

/// Raw input of the create form.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CreateForm {
    pub name: String,
    pub stock: String,
    pub unit: Unit,
    pub focus: FormField,
}

impl CreateForm {
    /// Append a character to the focused text field.
    ///
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Stock => self.stock.push(c),
            FormField::Unit | FormField::Submit => {}
        }
    }

    /// Remove the last character of the focused text field.
    ///
    pub fn pop_char(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Stock => {
                self.stock.pop();
            }
            FormField::Unit | FormField::Submit => {}
        }
    }

    pub fn reset(&mut self) {
        *self = CreateForm::default();
    }
}

/// Open unit picker with its highlighted row.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitPicker {
    pub index: usize,
}

impl UnitPicker {
    pub fn new(current: Unit) -> Self {
        UnitPicker {
            index: current.index(),
        }
    }

    pub fn highlighted(&self) -> Unit {
        Unit::ALL[self.index.min(Unit::ALL.len() - 1)]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % Unit::ALL.len();
    }

    pub fn previous(&mut self) {
        self.index = (self.index + Unit::ALL.len() - 1) % Unit::ALL.len();
    }
}

/// Pending deletion awaiting the user's answer.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub item_id: ItemId,
    pub selected: DeleteButton,
}

/// Blocking notification shown until dismissed.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Alert {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_cycle() {
        assert_eq!(FormField::Name.next(), FormField::Stock);
        assert_eq!(FormField::Submit.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Submit);
        assert!(FormField::Stock.is_text());
        assert!(!FormField::Unit.is_text());
    }

    #[test]
    fn test_form_typing_goes_to_focused_field() {
        let mut form = CreateForm::default();
        form.push_char('o');
        form.push_char('k');
        form.focus = FormField::Stock;
        form.push_char('7');
        form.focus = FormField::Unit;
        form.push_char('x');
        assert_eq!(form.name, "ok");
        assert_eq!(form.stock, "7");

        form.focus = FormField::Name;
        form.pop_char();
        assert_eq!(form.name, "o");
    }

    #[test]
    fn test_form_reset() {
        let mut form = CreateForm {
            name: "salt".to_string(),
            stock: "3".to_string(),
            unit: Unit::Packets,
            focus: FormField::Submit,
        };
        form.reset();
        assert_eq!(form, CreateForm::default());
        assert_eq!(form.unit, Unit::Kg);
    }

    #[test]
    fn test_unit_picker_wraps() {
        let mut picker = UnitPicker::new(Unit::Packets);
        assert_eq!(picker.highlighted(), Unit::Packets);
        picker.next();
        assert_eq!(picker.highlighted(), Unit::Kg);
        picker.previous();
        picker.previous();
        assert_eq!(picker.highlighted(), Unit::Litre);
    }

    #[test]
    fn test_error_alert_title() {
        let alert = Alert::error("Please fill all fields");
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "Please fill all fields");
    }
}
