//! Navigation-related state types.
//!
//! This module contains the view selector and the buttons of the delete prompt.

/// Specifying the different views.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum View {
    #[default]
    AllItems,
    LowStock,
    Create,
}

impl View {
    /// Every view, in selector order.
    ///
    pub const ALL: [View; 3] = [View::AllItems, View::LowStock, View::Create];

    pub fn title(&self) -> &'static str {
        match self {
            View::AllItems => "All items",
            View::LowStock => "Low Stock",
            View::Create => "Create",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            View::AllItems => 0,
            View::LowStock => 1,
            View::Create => 2,
        }
    }

    /// Whether the view shows a list of items.
    ///
    pub fn is_list(&self) -> bool {
        matches!(self, View::AllItems | View::LowStock)
    }

    pub fn next(&self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn previous(&self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Buttons of the delete confirmation prompt.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum DeleteButton {
    #[default]
    Cancel,
    Delete,
}

impl DeleteButton {
    pub fn label(&self) -> &'static str {
        match self {
            DeleteButton::Cancel => "Cancel",
            DeleteButton::Delete => "Delete",
        }
    }

    pub fn toggled(&self) -> DeleteButton {
        match self {
            DeleteButton::Cancel => DeleteButton::Delete,
            DeleteButton::Delete => DeleteButton::Cancel,
        }
    }
}
