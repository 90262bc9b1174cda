//! Prompt sources. Every question the explorer asks goes through a
//! [`Prompter`], so the dialogue logic is identical whether answers come from
//! a terminal, a piped script, or a test.

use std::{
    borrow::Cow,
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use once_cell::sync::Lazy;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Context as ReadlineContext, Editor, Helper,
};

use crate::cli::ui::test_mode::{self, ScriptedInput};
use crate::domain::FilterRequest;
use crate::errors::CliError;

/// What a single prompt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    Line(String),
    /// Ctrl-C while the prompt was waiting.
    Interrupted,
    /// Input stream ended (Ctrl-D or end of script).
    Closed,
}

pub trait Prompter {
    /// Shows `prompt` and blocks until the user answers.
    fn read_line(&mut self, prompt: &str) -> Result<PromptInput, CliError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<PromptInput, CliError> {
        (**self).read_line(prompt)
    }
}

/// Interactive terminal prompts backed by `rustyline`.
pub struct LinePrompter {
    editor: Editor<AnswerHelper, DefaultHistory>,
}

impl LinePrompter {
    pub fn new() -> Result<Self, CliError> {
        let mut editor = Editor::<AnswerHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(AnswerHelper));
        Ok(Self { editor })
    }
}

impl Prompter for LinePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<PromptInput, CliError> {
        // The line editor redraws only the last prompt line.
        let (preamble, last_line) = match prompt.rsplit_once('\n') {
            Some((head, tail)) => (Some(head), tail),
            None => (None, prompt),
        };
        if let Some(head) = preamble {
            println!("{head}");
        }

        match self.editor.readline(last_line) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(PromptInput::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(PromptInput::Interrupted),
            Err(ReadlineError::Eof) => Ok(PromptInput::Closed),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads one answer per line from a piped script, echoing the transcript.
///
/// Interrupts are only seen as `<INTERRUPT>` lines here. A real Ctrl-C keeps
/// the default signal behaviour and terminates the process.
pub struct ScriptPrompter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn read_line(&mut self, prompt: &str) -> Result<PromptInput, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            println!("{prompt}");
            return Ok(PromptInput::Closed);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        echo(prompt, answer)?;
        Ok(into_prompt_input(test_mode::parse_input(answer)))
    }
}

/// Answers from an in-memory queue. Running out of answers reads as closed
/// input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<ScriptedInput>,
    prompts: Vec<String>,
    echo: bool,
}

impl ScriptedPrompter {
    pub fn new(inputs: impl IntoIterator<Item = ScriptedInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            prompts: Vec::new(),
            echo: false,
        }
    }

    /// Queue of plain text answers.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(ScriptedInput::line))
    }

    /// Echo prompts and answers to stdout, as a terminal session would show.
    pub fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<PromptInput, CliError> {
        self.prompts.push(prompt.to_string());
        let input = self.inputs.pop_front().unwrap_or(ScriptedInput::Eof);
        if self.echo {
            match &input {
                ScriptedInput::Line(answer) => echo(prompt, answer)?,
                ScriptedInput::Interrupt => echo(prompt, "^C")?,
                ScriptedInput::Eof => echo(prompt, "")?,
            }
        }
        Ok(into_prompt_input(input))
    }
}

fn into_prompt_input(input: ScriptedInput) -> PromptInput {
    match input {
        ScriptedInput::Line(line) => PromptInput::Line(line),
        ScriptedInput::Interrupt => PromptInput::Interrupted,
        ScriptedInput::Eof => PromptInput::Closed,
    }
}

fn echo(prompt: &str, answer: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{prompt}{answer}")?;
    stdout.flush()
}

static COMPLETIONS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut words: Vec<String> = [
        FilterRequest::City,
        FilterRequest::Month,
        FilterRequest::DayOfWeek,
    ]
    .into_iter()
    .flat_map(FilterRequest::valid_values)
    .map(str::to_string)
    .collect();
    words.extend(["yes", "no"].map(String::from));
    words
});

/// Tab completion over every answer the explorer accepts.
struct AnswerHelper;

impl Helper for AnswerHelper {}

impl Completer for AnswerHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let needle = line[..pos].trim_start().to_lowercase();
        let start = pos - line[..pos].trim_start().len();
        let candidates = COMPLETIONS
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&needle))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for AnswerHelper {
    type Hint = String;
}

impl Highlighter for AnswerHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for AnswerHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
