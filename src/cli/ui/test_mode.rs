//! Scripted answers for driving the explorer without a terminal.
//!
//! `BIKESHARE_TEST_INPUTS` holds `|`-separated answers. The markers
//! `<INTERRUPT>`, `<EOF>` and `<BLANK>` stand for Ctrl-C, end of input and an
//! empty line. The same markers are honoured line by line in script mode.

use std::{collections::VecDeque, env};

pub const TEST_INPUTS_ENV: &str = "BIKESHARE_TEST_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Line(String),
    Interrupt,
    Eof,
}

impl ScriptedInput {
    pub fn line(text: impl Into<String>) -> Self {
        ScriptedInput::Line(text.into())
    }
}

/// Interprets one scripted answer. Trailing whitespace is kept so scripts can
/// exercise normalization.
pub fn parse_input(token: &str) -> ScriptedInput {
    match token.trim().to_ascii_uppercase().as_str() {
        "<INTERRUPT>" | "<CTRL-C>" => ScriptedInput::Interrupt,
        "<EOF>" | "<CTRL-D>" => ScriptedInput::Eof,
        "<BLANK>" | "<EMPTY>" => ScriptedInput::Line(String::new()),
        _ => ScriptedInput::Line(token.to_string()),
    }
}

pub fn parse_sequence(raw: &str) -> VecDeque<ScriptedInput> {
    raw.split('|')
        .map(str::trim_start)
        .filter(|segment| !segment.is_empty())
        .map(parse_input)
        .collect()
}

/// Scripted answers from the environment, `None` when test mode is off.
pub fn inputs_from_env() -> Option<VecDeque<ScriptedInput>> {
    env::var(TEST_INPUTS_ENV)
        .ok()
        .map(|raw| parse_sequence(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_case_insensitive() {
        assert_eq!(parse_input("<interrupt>"), ScriptedInput::Interrupt);
        assert_eq!(parse_input("<Eof>"), ScriptedInput::Eof);
        assert_eq!(parse_input("<BLANK>"), ScriptedInput::line(""));
    }

    #[test]
    fn sequence_keeps_trailing_whitespace() {
        let parsed: Vec<_> = parse_sequence("chicago | y|june  |<INTERRUPT>|").into();
        assert_eq!(
            parsed,
            vec![
                ScriptedInput::line("chicago "),
                ScriptedInput::line("y"),
                ScriptedInput::line("june  "),
                ScriptedInput::Interrupt,
            ]
        );
    }
}
