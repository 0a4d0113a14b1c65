//! # RPN calculator engine
//!
//! The state machine behind a classic four-register (T, Z, Y, X) RPN calculator:
//! digit-by-digit entry, scientific notation, stack lift, undo, and integer
//! display in binary, octal and hexadecimal. Buttons, keyboard wiring and
//! rendering belong to the caller: it calls the operations of [`Engine`] and
//! reads back the state after every call.
//!
//! ```
//! use rpn_engine::{Engine, Op};
//!
//! let mut engine = Engine::new();
//! engine.input_digit('1');
//! engine.input_digit('0');
//! engine.enter_number();
//! engine.input_digit('3');
//! engine.perform_operation(Op::Subtract);
//! assert_eq!(engine.stack(), &[7.0]);
//! ```
//!
//! Entry:
//! * digits build the mantissa, a lone `0` is replaced by the next digit
//! * `.` is accepted once per number; starting with `.` gives `0.`
//! * EEX opens an integer exponent, `1.23` EEX `4` is `1.23e4`. EEX with nothing
//!   typed starts from `1`
//! * the sign key toggles the exponent sign in EEX mode and the mantissa sign otherwise
//!
//! Stack:
//! * Enter pushes the typed number; with nothing typed it duplicates X
//! * pushing onto a full stack drops the oldest register
//! * `+`, `-`, `×`, `÷` push a typed number first and then replace Y and X
//!   with `Y op X`. Division by zero gives `0`
//! * drop and swap work on X and Y
//!
//! Every stack-changing action saves a snapshot first; undo restores the
//! latest one. At most 50 snapshots are kept.
//!
//! Operations never fail. Input that makes no sense in the current state
//! (an unfinished `-`, an operator with one value on the stack, undo with
//! no history) is ignored and logged at debug level through the `log` crate.
//!
//! Display modes never change stored values. Binary, octal and hexadecimal
//! show the integer part only, negative numbers as 32-bit two's complement:
//! `-1` is `0xFFFFFFFF`. Non-finite values show as `Error`.
//!
//! Key presses can be scripted: `parse::eval("1 2 enter 3 +", &mut engine)`.

#[macro_use]
extern crate pest_derive;

pub mod engine;
pub mod entry;
pub mod errors;
pub mod history;
pub mod key;
pub mod parse;
pub mod radix;
pub mod stack;
pub mod value;

mod property_tests;

pub use engine::Engine;
pub use errors::CalcError;
pub use history::{HistoryEntry, HistoryKind};
pub use key::Key;
pub use radix::{to_binary_string, to_hex_string, to_octal_string, DisplayMode};
pub use stack::Op;
