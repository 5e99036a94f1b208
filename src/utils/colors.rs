//! Terminal colors for actions and log operations.

use crate::models::Action;
use ansi_term::Colour;

/// Check-out in red, check-in in green.
pub fn action_colour(action: Action) -> Colour {
    match action {
        Action::CheckOut => Colour::Red,
        Action::CheckIn => Colour::Green,
    }
}

pub fn paint_action(action: Action, label: &str) -> String {
    action_colour(action).paint(label).to_string()
}

/// Colour for an operation name of the internal log.
pub fn colour_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

/// Positive balance (devices still out) in yellow.
pub fn paint_balance(balance: i64) -> String {
    if balance > 0 {
        Colour::Yellow.paint(format!("+{balance}")).to_string()
    } else {
        balance.to_string()
    }
}
