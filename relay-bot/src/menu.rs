//! Menu presenter: the two-button inline menu and the replies to its buttons.

use std::fmt;
use std::str::FromStr;

use relay_core::{HandlerError, InlineButton};

use crate::texts;

/// A button of the main menu. Payloads on the wire are `instruction` and `check_gifts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Instruction,
    CheckGifts,
}

impl MenuSelection {
    /// Menu order, top to bottom.
    pub const ALL: [MenuSelection; 2] = [MenuSelection::Instruction, MenuSelection::CheckGifts];

    pub fn payload(self) -> &'static str {
        match self {
            MenuSelection::Instruction => "instruction",
            MenuSelection::CheckGifts => "check_gifts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuSelection::Instruction => texts::BUTTON_INSTRUCTION,
            MenuSelection::CheckGifts => texts::BUTTON_CHECK_GIFTS,
        }
    }

    /// Static text shown when the button is pressed.
    pub fn reply_text(self) -> &'static str {
        match self {
            MenuSelection::Instruction => texts::INSTRUCTION,
            MenuSelection::CheckGifts => texts::CHECK_GIFTS_UNAVAILABLE,
        }
    }

    pub fn button(self) -> InlineButton {
        InlineButton::new(self.label(), self.payload())
    }
}

impl FromStr for MenuSelection {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|selection| selection.payload() == s)
            .ok_or_else(|| HandlerError::InvalidPayload(s.to_string()))
    }
}

impl fmt::Display for MenuSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.payload())
    }
}

/// Text body plus keyboard, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub text: &'static str,
    pub buttons: Vec<InlineButton>,
}

fn menu_buttons() -> Vec<InlineButton> {
    MenuSelection::ALL.into_iter().map(MenuSelection::button).collect()
}

/// Reply to `/start`.
pub fn render_welcome() -> MenuView {
    MenuView {
        text: texts::WELCOME,
        buttons: menu_buttons(),
    }
}

/// Reply to free text.
pub fn render_menu() -> MenuView {
    MenuView {
        text: texts::MENU_PROMPT,
        buttons: menu_buttons(),
    }
}
