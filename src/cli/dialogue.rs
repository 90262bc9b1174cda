//! Selection dialogue: the prompts that resolve a city and the month and
//! weekday filters.
//!
//! Invalid answers are never errors. Every prompt loops until it gets an
//! answer it understands, and the only way out without one is an interrupt
//! or closed input, reported as [`SelectionOutcome::Cancelled`].

use crate::cli::io::{PromptInput, Prompter};
use crate::cli::output;
use crate::cli::selectors::SelectionOutcome;
use crate::domain::{Choice, City, ContinuationFlag, FilterDimension};
use crate::errors::CliError;

/// Answer that leaves the choice stage and returns to the yes/no gate.
pub const BACK_TOKEN: &str = "B";

/// Result of one pass through the choice stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChoiceStep<T> {
    Value(T),
    Back,
    Cancelled,
}

/// Interprets a yes/no answer: case-insensitive, trailing whitespace ignored.
pub fn parse_yes_no(answer: &str) -> Option<ContinuationFlag> {
    match answer.trim_end().to_lowercase().as_str() {
        "yes" | "y" => Some(ContinuationFlag::Proceed),
        "no" | "n" => Some(ContinuationFlag::End),
        _ => None,
    }
}

/// Asks "Do you want to `request`? [y/n]" until the answer is yes or no.
pub fn ask_yes_no<P: Prompter + ?Sized>(
    prompter: &mut P,
    request: &str,
) -> Result<SelectionOutcome<ContinuationFlag>, CliError> {
    let prompt = format!("Do you want to {request}? [y/n] ");
    loop {
        let answer = match prompter.read_line(&prompt)? {
            PromptInput::Line(answer) => answer,
            PromptInput::Interrupted | PromptInput::Closed => {
                return Ok(SelectionOutcome::Cancelled)
            }
        };
        match parse_yes_no(&answer) {
            Some(flag) => return Ok(SelectionOutcome::Selected(flag)),
            None => tracing::debug!(request, answer = %answer.trim_end(), "unrecognized yes/no answer"),
        }
    }
}

/// Python-style title casing: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased.
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if word_start {
                titled.extend(ch.to_uppercase());
            } else {
                titled.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            titled.push(ch);
            word_start = true;
        }
    }
    titled
}

pub struct SelectionDialogue<'a, P: Prompter + ?Sized> {
    prompter: &'a mut P,
}

impl<'a, P: Prompter + ?Sized> SelectionDialogue<'a, P> {
    pub fn new(prompter: &'a mut P) -> Self {
        Self { prompter }
    }

    /// Prompts for a city until the lower-cased, right-trimmed answer names
    /// one of the supported cities.
    pub fn pick_city(&mut self) -> Result<SelectionOutcome<City>, CliError> {
        let names: Vec<&str> = City::ALL.iter().map(|city| city.title()).collect();
        let prompt = format!(
            "Let us explore the bikeshare data.\nChoose one of the three cities ({}): ",
            names.join(", ")
        );
        loop {
            let answer = match self.prompter.read_line(&prompt)? {
                PromptInput::Line(answer) => answer,
                PromptInput::Interrupted | PromptInput::Closed => {
                    return Ok(SelectionOutcome::Cancelled)
                }
            };
            let normalized = answer.trim_end().to_lowercase();
            if let Some(city) = City::from_name(&normalized) {
                output::success(format!(
                    "Great... we will explore the bikeshare data for {}.",
                    city.title()
                ));
                tracing::debug!(%city, "city selected");
                return Ok(SelectionOutcome::Selected(city));
            }
            tracing::debug!(answer = %normalized, "unknown city");
        }
    }

    /// Gate then choice: "no" at the gate yields [`Choice::All`], "yes" leads
    /// to the choice stage, where `b` goes back to the gate.
    pub fn pick_filter<T: FilterDimension>(
        &mut self,
    ) -> Result<SelectionOutcome<Choice<T>>, CliError> {
        let label = T::REQUEST.label();
        let request = format!("filter by {label}");
        loop {
            match ask_yes_no(&mut *self.prompter, &request)? {
                SelectionOutcome::Cancelled => return Ok(SelectionOutcome::Cancelled),
                SelectionOutcome::Selected(ContinuationFlag::End) => {
                    tracing::debug!(dimension = label, "no filter");
                    return Ok(SelectionOutcome::Selected(Choice::All));
                }
                SelectionOutcome::Selected(ContinuationFlag::Proceed) => {}
            }

            match self.choose::<T>()? {
                ChoiceStep::Value(value) => {
                    tracing::debug!(dimension = label, value = value.name(), "filter selected");
                    return Ok(SelectionOutcome::Selected(Choice::Only(value)));
                }
                ChoiceStep::Back => tracing::debug!(dimension = label, "back to filter gate"),
                ChoiceStep::Cancelled => return Ok(SelectionOutcome::Cancelled),
            }
        }
    }

    fn choose<T: FilterDimension>(&mut self) -> Result<ChoiceStep<T>, CliError> {
        let label = T::REQUEST.label();
        let prompt = format!(
            "Choose a {label} ({}) or enter b to go back: ",
            T::REQUEST.valid_values().join(", ")
        );
        loop {
            let answer = match self.prompter.read_line(&prompt)? {
                PromptInput::Line(answer) => answer,
                PromptInput::Interrupted | PromptInput::Closed => {
                    return Ok(ChoiceStep::Cancelled)
                }
            };
            let normalized = title_case(answer.trim_end());
            if normalized == BACK_TOKEN {
                return Ok(ChoiceStep::Back);
            }
            if let Some(value) = T::from_name(&normalized) {
                return Ok(ChoiceStep::Value(value));
            }
            tracing::debug!(dimension = label, answer = %normalized, "unknown filter value");
        }
    }
}
