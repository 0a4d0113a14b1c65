use pest::Parser;

use crate::engine::Engine;
use crate::errors::*;
use crate::key::Key;

#[derive(Parser)]
#[grammar = "keys.pest"]
pub struct KeyParser;

/// Splits a key script into key presses. Adjacent digits are separate
/// presses: `12 enter` is `1`, `2`, `enter`
pub fn parse_keys(script: &str) -> Result<Vec<Key>, CalcError> {
    let pairs = match KeyParser::parse(Rule::script, script) {
        Ok(p) => p,
        Err(e) => {
            let (line, col) = match e.line_col {
                pest::error::LineColLocation::Pos(pos) => pos,
                pest::error::LineColLocation::Span(start, _) => start,
            };
            return Err(CalcError::ParseFailed(format!(
                "unexpected character at {}:{}",
                line, col
            )));
        }
    };

    let mut keys = Vec::new();
    for pair in pairs {
        match pair.as_rule() {
            Rule::digit | Rule::chord | Rule::sign | Rule::word | Rule::symbol => {
                keys.push(Key::from_name(pair.as_str())?);
            }
            Rule::EOI => {}
            _ => return Err(CalcError::ParseFailed(pair.as_str().to_string())),
        }
    }
    Ok(keys)
}

/// Presses every key of `script` in order. The whole script is parsed first,
/// so a bad key leaves the engine untouched
pub fn eval(script: &str, engine: &mut Engine) -> Result<(), CalcError> {
    let keys = parse_keys(script)?;
    for key in keys {
        engine.press(key);
    }
    Ok(())
}
