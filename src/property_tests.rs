//! Property-based tests for the engine invariants.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::engine::Engine;
    use crate::history::HISTORY_LIMIT;
    use crate::key::Key;
    use crate::radix::to_binary_string;
    use crate::stack::{Op, STACK_DEPTH};

    fn any_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Add),
            Just(Op::Subtract),
            Just(Op::Multiply),
            Just(Op::Divide),
        ]
    }

    fn any_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            (0u32..10).prop_map(|d| Key::Digit(char::from_digit(d, 10).unwrap_or('0'))),
            Just(Key::Decimal),
            any_op().prop_map(Key::Operator),
            Just(Key::Enter),
            Just(Key::ToggleSign),
            Just(Key::Eex),
            Just(Key::Delete),
            Just(Key::Undo),
            Just(Key::Swap),
            Just(Key::Drop),
            Just(Key::ToggleMode),
        ]
    }

    fn push_value(engine: &mut Engine, v: i32) {
        for c in v.unsigned_abs().to_string().chars() {
            engine.input_digit(c);
        }
        if v < 0 {
            engine.toggle_sign();
        }
        engine.enter_number();
    }

    proptest! {
        /// No key sequence breaks the register bound, the history cap or the flag invariants.
        #[test]
        fn prop_invariants_hold(keys in prop::collection::vec(any_key(), 0..200)) {
            let mut engine = Engine::new();
            for key in keys {
                engine.press(key);
                prop_assert!(engine.stack().len() <= STACK_DEPTH);
                prop_assert!(engine.history().len() <= HISTORY_LIMIT);
                prop_assert!(engine.stack().iter().all(|v| v.is_finite()));
                prop_assert_eq!(engine.input_mode(), !engine.current_input().is_empty());
                prop_assert!(!engine.eex_mode() || engine.input_mode());
                prop_assert!(engine.current_input().matches('.').count() <= 1);
                prop_assert!(engine.display_stack().len() <= STACK_DEPTH);
            }
        }

        /// Repeated enters fill the stack with copies of X, at most four.
        #[test]
        fn prop_enter_duplicates(v in -1000i32..1000, n in 0usize..8) {
            let mut engine = Engine::new();
            push_value(&mut engine, v);
            for _ in 0..n {
                engine.enter_number();
            }
            let expected = vec![v as f64; (n + 1).min(STACK_DEPTH)];
            prop_assert_eq!(engine.stack(), expected.as_slice());
        }

        /// Y op X, never X op Y.
        #[test]
        fn prop_operand_order(a in -1000i32..1000, b in -1000i32..1000, op in any_op()) {
            let mut engine = Engine::new();
            push_value(&mut engine, a);
            push_value(&mut engine, b);
            engine.perform_operation(op);
            prop_assert_eq!(engine.stack(), &[op.apply(a as f64, b as f64)][..]);
        }

        /// Any mutating call followed by undo restores the stack, the input and the history length.
        #[test]
        fn prop_undo_round_trip(
            values in prop::collection::vec(-100i32..100, 0..6),
            typed in prop::option::of(0u32..1000),
            action in 0usize..7,
        ) {
            let mut engine = Engine::new();
            for v in values {
                push_value(&mut engine, v);
            }
            if let Some(t) = typed {
                for c in t.to_string().chars() {
                    engine.input_digit(c);
                }
            }

            let stack = engine.stack().to_vec();
            let input = engine.current_input().to_string();
            let history = engine.history().len();

            match action {
                0 => engine.enter_number(),
                1 => engine.drop_stack(),
                2 => engine.swap_stack(),
                3 => engine.perform_operation(Op::Add),
                4 => engine.perform_operation(Op::Subtract),
                5 => engine.perform_operation(Op::Multiply),
                _ => engine.perform_operation(Op::Divide),
            }
            // a typed number is committed as its own step before the operation
            while engine.history().len() > history {
                engine.undo_last_operation();
            }

            prop_assert_eq!(engine.stack(), stack.as_slice());
            prop_assert_eq!(engine.current_input(), input.as_str());
            prop_assert_eq!(engine.history().len(), history);
        }

        /// Binary text read back as a 32-bit two's complement word gives the integer back.
        #[test]
        fn prop_binary_round_trip(n in -(1i64 << 31) + 1..(1i64 << 31)) {
            let text = to_binary_string(n as f64);
            prop_assert!(text.starts_with("0b"));
            let word = u32::from_str_radix(&text[2..], 2);
            prop_assert!(word.is_ok());
            if let Ok(word) = word {
                prop_assert_eq!(word as i32 as i64, n);
            }
        }
    }
}
