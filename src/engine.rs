use log::{debug, trace};

use crate::entry::Entry;
use crate::history::{History, HistoryKind};
use crate::key::Key;
use crate::radix::DisplayMode;
use crate::stack::{Op, Stack, STACK_DEPTH};
use crate::value::format_f64;

/// State of one calculator session.
///
/// Every operation runs to completion and never fails: input that makes no
/// sense in the current state is ignored. A presentation layer calls the
/// operations and re-reads `display_stack`, `current_display` and the flags
/// after each call. Callers sharing one engine must serialize the calls.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    stack: Stack,
    entry: Entry,
    history: History,
    display_mode: DisplayMode,
    last_operation_was_enter: bool,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            stack: Stack::new(),
            entry: Entry::new(),
            history: History::new(),
            display_mode: DisplayMode::default(),
            last_operation_was_enter: false,
        }
    }

    // ------------ STATE -----------------

    /// Registers from the oldest to X
    pub fn stack(&self) -> &[f64] {
        self.stack.values()
    }

    pub fn current_input(&self) -> &str {
        self.entry.input()
    }

    pub fn input_mode(&self) -> bool {
        self.entry.input_mode()
    }

    pub fn eex_mode(&self) -> bool {
        self.entry.eex_mode()
    }

    pub fn exponent(&self) -> &str {
        self.entry.exponent()
    }

    pub fn eex_just_entered(&self) -> bool {
        self.entry.eex_just_entered()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn last_operation_was_enter(&self) -> bool {
        self.last_operation_was_enter
    }

    // ------------ VIEWS -----------------

    /// Up to four values for the T, Z, Y, X rows. A number being typed takes
    /// the X row; text that does not resolve yet shows as zero
    pub fn display_stack(&self) -> Vec<f64> {
        let mut result = self.stack.values().to_vec();
        if self.entry.is_composing() {
            result.push(self.entry.resolve().unwrap_or(0.0));
        }
        let skip = result.len().saturating_sub(STACK_DEPTH);
        result.split_off(skip)
    }

    /// `display_stack` rendered in the current display mode
    pub fn rendered_stack(&self) -> Vec<String> {
        self.display_stack()
            .into_iter()
            .map(|v| self.display_mode.format(v))
            .collect()
    }

    /// Text of the active entry line
    pub fn current_display(&self) -> String {
        if self.entry.is_composing() {
            return self.entry.text();
        }
        match self.stack.x() {
            Some(x) => format_f64(x),
            None => "0".to_string(),
        }
    }

    // ------------ ENTRY -----------------

    pub fn input_digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            debug!("'{}' is not a digit, ignored", d);
            return;
        }

        if self.entry.eex_mode() || self.entry.input_mode() {
            self.entry.push_digit(d);
        } else {
            self.entry.start(d);
        }
        self.last_operation_was_enter = false;
    }

    pub fn input_decimal(&mut self) {
        self.entry.push_decimal();
        self.last_operation_was_enter = false;
    }

    pub fn toggle_sign(&mut self) {
        self.entry.toggle_sign();
    }

    /// Starts typing the exponent of a number in scientific notation
    pub fn input_eex(&mut self) {
        self.entry.begin_eex();
        self.last_operation_was_enter = false;
    }

    pub fn delete_last_digit(&mut self) {
        self.entry.delete();
    }

    // ------------ STACK -----------------

    fn save_to_history(&mut self, kind: HistoryKind, name: &str) {
        self.history
            .save(kind, name, self.stack.values(), self.entry.input());
    }

    /// Pushes the number being typed, or duplicates X when nothing is typed
    pub fn enter_number(&mut self) {
        if self.entry.is_composing() {
            let v = match self.entry.resolve() {
                Ok(v) => v,
                Err(e) => {
                    debug!("enter ignored: {}", e);
                    return;
                }
            };
            self.save_to_history(HistoryKind::StackOperation, "enter");
            self.stack.lift(v);
            self.entry.clear();
            self.last_operation_was_enter = true;
            return;
        }

        match self.stack.x() {
            Some(x) => {
                self.save_to_history(HistoryKind::StackOperation, "enter_duplicate");
                self.stack.lift(x);
                self.last_operation_was_enter = true;
            }
            None => debug!("enter on an empty stack ignored"),
        }
    }

    /// Pushes a number being typed first, then replaces Y and X with `Y op X`
    pub fn perform_operation(&mut self, op: Op) {
        if self.entry.is_composing() {
            self.enter_number();
        }

        let (a, b) = match self.stack.operands() {
            Some(operands) => operands,
            None => {
                debug!("'{}' needs two values, stack has {}", op, self.stack.len());
                return;
            }
        };
        // only finite values are allowed on the stack
        let v = op.apply(a, b);
        if !v.is_finite() {
            debug!("{} {} {} = {} ignored", a, op, b, v);
            return;
        }

        self.save_to_history(HistoryKind::Operation, op.symbol());
        self.stack.apply(op);
        self.last_operation_was_enter = false;
    }

    pub fn drop_stack(&mut self) {
        if self.stack.is_empty() {
            debug!("drop on an empty stack ignored");
            return;
        }

        self.save_to_history(HistoryKind::StackOperation, "drop");
        self.stack.pop();
        self.last_operation_was_enter = false;
    }

    pub fn swap_stack(&mut self) {
        if self.stack.len() < 2 {
            debug!("swap needs two values, stack has {}", self.stack.len());
            return;
        }

        self.save_to_history(HistoryKind::StackOperation, "swap");
        self.stack.swap();
        self.last_operation_was_enter = false;
    }

    // ------------ HISTORY -----------------

    /// Restores the stack and the typed mantissa saved by the latest action.
    /// An exponent being typed at that moment is not restored
    pub fn undo_last_operation(&mut self) {
        let snapshot = match self.history.pop() {
            Some(snapshot) => snapshot,
            None => {
                debug!("nothing to undo");
                return;
            }
        };

        trace!("undo {:?}", snapshot.operation);
        self.stack.restore(&snapshot.stack_before);
        self.entry.restore(&snapshot.input_before);
        self.last_operation_was_enter = false;
    }

    /// Resets the session. The display mode survives
    pub fn clear_all(&mut self) {
        self.stack.clear();
        self.entry.clear();
        self.history.clear();
        self.last_operation_was_enter = false;
    }

    // ------------ DISPLAY -----------------

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// decimal -> binary -> octal -> hexadecimal -> decimal
    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.next();
    }

    // ------------ KEYS -----------------

    pub fn press(&mut self, key: Key) {
        trace!("press {:?}", key);
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.perform_operation(op),
            Key::Enter => self.enter_number(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Eex => self.input_eex(),
            Key::Delete => self.delete_last_digit(),
            Key::Undo => self.undo_last_operation(),
            Key::Swap => self.swap_stack(),
            Key::Drop => self.drop_stack(),
            Key::Clear => self.clear_all(),
            Key::Mode(mode) => self.set_display_mode(mode),
            Key::ToggleMode => self.toggle_display_mode(),
        }
    }
}
