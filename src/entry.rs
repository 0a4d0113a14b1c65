//! Text buffers of the number being typed.
//!
//! The mantissa buffer holds `-`, digits and at most one `.`. While an exponent
//! is being typed (EEX) a second buffer holds `-` and digits only. Every method
//! keeps `input_mode` equal to "the mantissa buffer is not empty".

use log::trace;

use crate::value::{self, NumResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    input: String,
    input_mode: bool,
    eex_mode: bool,
    exponent: String,
    eex_just_entered: bool,
}

impl Entry {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mode(&self) -> bool {
        self.input_mode
    }

    pub fn eex_mode(&self) -> bool {
        self.eex_mode
    }

    pub fn exponent(&self) -> &str {
        &self.exponent
    }

    pub fn eex_just_entered(&self) -> bool {
        self.eex_just_entered
    }

    /// A commit would push something
    pub fn is_composing(&self) -> bool {
        self.input_mode && !self.input.is_empty()
    }

    /// Starts a new number with its first digit
    pub fn start(&mut self, d: char) {
        self.input.clear();
        self.input.push(d);
        self.input_mode = true;
    }

    /// Appends a digit to whichever buffer is active. A lone `0` in the
    /// mantissa is replaced instead of getting a leading zero
    pub fn push_digit(&mut self, d: char) {
        if self.eex_mode {
            self.exponent.push(d);
            self.eex_just_entered = false;
        } else if self.input == "0" {
            self.input.clear();
            self.input.push(d);
        } else {
            self.input.push(d);
        }
    }

    /// Exponents are integers, so this does nothing in EEX mode
    pub fn push_decimal(&mut self) {
        if self.eex_mode {
            return;
        }
        if !self.input_mode {
            self.input = "0.".to_string();
            self.input_mode = true;
        } else if !self.input.contains('.') {
            self.input.push('.');
        }
    }

    pub fn toggle_sign(&mut self) {
        if self.eex_mode {
            self.exponent = value::toggle_sign(&self.exponent);
        } else if self.is_composing() {
            self.input = value::toggle_sign(&self.input);
            if self.input.is_empty() {
                self.input_mode = false;
            }
        }
    }

    /// Opens the exponent buffer. Without a mantissa the number becomes `1e...`
    pub fn begin_eex(&mut self) {
        if !self.is_composing() {
            self.input = "1".to_string();
            self.input_mode = true;
        }
        self.eex_mode = true;
        self.exponent.clear();
        self.eex_just_entered = true;
        trace!("eex: mantissa '{}'", self.input);
    }

    /// Backspace. An empty exponent closes EEX mode and leaves the mantissa alone
    pub fn delete(&mut self) {
        if self.eex_mode {
            if self.exponent.pop().is_none() {
                self.eex_mode = false;
                self.eex_just_entered = false;
            }
            return;
        }
        if self.is_composing() {
            self.input.pop();
            if self.input.is_empty() {
                self.input_mode = false;
            }
        }
    }

    /// The value a commit would push
    pub fn resolve(&self) -> NumResult {
        if self.eex_mode {
            value::resolve(&self.input, Some(&self.exponent))
        } else {
            value::resolve(&self.input, None)
        }
    }

    /// What the entry line shows: `1.23` or `1.23e4` (a bare `1.23e` right after EEX)
    pub fn text(&self) -> String {
        if self.eex_mode {
            format!("{}e{}", self.input, self.exponent)
        } else {
            self.input.clone()
        }
    }

    /// Puts back a mantissa taken from a snapshot. EEX state is not part of snapshots
    pub fn restore(&mut self, input: &str) {
        self.clear();
        self.input = input.to_string();
        self.input_mode = !self.input.is_empty();
    }

    pub fn clear(&mut self) {
        *self = Entry::new();
    }
}
