use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::errors::*;
use crate::radix::DisplayMode;
use crate::stack::Op;

/// One button or keyboard press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Decimal,
    Operator(Op),
    Enter,
    ToggleSign,
    Eex,
    Delete,
    Undo,
    Swap,
    Drop,
    Clear,
    Mode(DisplayMode),
    ToggleMode,
}

lazy_static! {
    // button values and keyboard key names, lowercase
    static ref KEY_NAMES: HashMap<&'static str, Key> = {
        let mut m = HashMap::new();
        m.insert(".", Key::Decimal);
        m.insert(",", Key::Decimal);
        m.insert("+", Key::Operator(Op::Add));
        m.insert("-", Key::Operator(Op::Subtract));
        m.insert("−", Key::Operator(Op::Subtract));
        m.insert("*", Key::Operator(Op::Multiply));
        m.insert("×", Key::Operator(Op::Multiply));
        m.insert("/", Key::Operator(Op::Divide));
        m.insert("÷", Key::Operator(Op::Divide));
        m.insert("enter", Key::Enter);
        m.insert("return", Key::Enter);
        m.insert("toggle-sign", Key::ToggleSign);
        m.insert("chs", Key::ToggleSign);
        m.insert("+/-", Key::ToggleSign);
        m.insert("eex", Key::Eex);
        m.insert("delete", Key::Delete);
        m.insert("del", Key::Delete);
        m.insert("backspace", Key::Delete);
        m.insert("undo", Key::Undo);
        m.insert("ctrl+u", Key::Undo);
        m.insert("control+u", Key::Undo);
        m.insert("meta+u", Key::Undo);
        m.insert("cmd+u", Key::Undo);
        m.insert("swap", Key::Swap);
        m.insert("drop", Key::Drop);
        m.insert("clear", Key::Clear);
        m.insert("escape", Key::Clear);
        m.insert("esc", Key::Clear);
        m.insert("dec", Key::Mode(DisplayMode::Decimal));
        m.insert("bin", Key::Mode(DisplayMode::Binary));
        m.insert("oct", Key::Mode(DisplayMode::Octal));
        m.insert("hex", Key::Mode(DisplayMode::Hexadecimal));
        m.insert("mode", Key::ToggleMode);
        m
    };
}

impl Key {
    /// Looks up a button value or a keyboard key name. Case-insensitive
    pub fn from_name(name: &str) -> Result<Key, CalcError> {
        let low = name.trim().to_lowercase();
        let mut chars = low.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Ok(Key::Digit(c));
            }
        }

        match KEY_NAMES.get(low.as_str()) {
            Some(key) => Ok(*key),
            None => Err(CalcError::InvalidKey(name.to_string())),
        }
    }

    /// Same as `from_name`, for keyboard handlers that ignore unknown keys
    pub fn from_keyboard(name: &str) -> Option<Key> {
        Key::from_name(name).ok()
    }
}
