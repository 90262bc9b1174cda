//! One explorer run: dialogue, load, paging, statistics, restart prompt.

use std::num::NonZeroUsize;

use crate::cli::dialogue::{parse_yes_no, SelectionDialogue};
use crate::cli::io::{PromptInput, Prompter};
use crate::cli::output;
use crate::cli::pager;
use crate::cli::reports;
use crate::cli::selectors::SelectionOutcome;
use crate::config::Config;
use crate::data::{TripLoader, TripTable};
use crate::domain::{Choice, City, ContinuationFlag, DayOfWeek, Month};
use crate::errors::{CliError, ExplorerError};
use crate::stats::ReportKind;

pub const FAREWELL: &str = "Good bye!";
pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Parameters resolved by the selection dialogue and handed to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFilters {
    pub city: City,
    pub month: Choice<Month>,
    pub day: Choice<DayOfWeek>,
}

/// How a single pass through the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Restart,
    Finished,
    Cancelled,
}

pub struct Explorer<'p, P: Prompter + ?Sized> {
    prompter: &'p mut P,
    loader: TripLoader,
    page_size: NonZeroUsize,
    pause_between_reports: bool,
}

impl<'p, P: Prompter + ?Sized> Explorer<'p, P> {
    pub fn new(
        prompter: &'p mut P,
        loader: TripLoader,
        config: &Config,
    ) -> Result<Self, ExplorerError> {
        let page_size = NonZeroUsize::new(config.page_size).ok_or_else(|| {
            ExplorerError::Config("page_size must be greater than zero".into())
        })?;
        Ok(Self {
            prompter,
            loader,
            page_size,
            pause_between_reports: config.pause_between_reports,
        })
    }

    /// Runs sessions until the user declines to restart or cancels.
    pub fn run(&mut self) -> Result<(), CliError> {
        let mut sessions = 0usize;
        loop {
            sessions += 1;
            tracing::info!(session = sessions, "session started");
            match self.run_once()? {
                SessionEnd::Restart => continue,
                SessionEnd::Finished => return Ok(()),
                SessionEnd::Cancelled => {
                    output::info(FAREWELL);
                    tracing::info!(session = sessions, "session cancelled");
                    return Ok(());
                }
            }
        }
    }

    pub fn run_once(&mut self) -> Result<SessionEnd, CliError> {
        let Some(filters) = self.select_filters()? else {
            return Ok(SessionEnd::Cancelled);
        };

        match self.loader.load(filters.city, filters.month, filters.day) {
            Ok(table) => {
                if self.explore(&table)?.is_cancelled() {
                    return Ok(SessionEnd::Cancelled);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, city = %filters.city, "trip data could not be loaded");
                output::error(&err);
            }
        }

        self.ask_restart()
    }

    /// City, then month, then weekday. `None` when any of them is cancelled.
    pub fn select_filters(&mut self) -> Result<Option<SessionFilters>, CliError> {
        let mut dialogue = SelectionDialogue::new(&mut *self.prompter);
        let Some(city) = dialogue.pick_city()?.selected() else {
            return Ok(None);
        };
        let Some(month) = dialogue.pick_filter::<Month>()?.selected() else {
            return Ok(None);
        };
        let Some(day) = dialogue.pick_filter::<DayOfWeek>()?.selected() else {
            return Ok(None);
        };
        Ok(Some(SessionFilters { city, month, day }))
    }

    fn explore(&mut self, table: &TripTable) -> Result<SelectionOutcome<()>, CliError> {
        output::info(format!(
            "{} trips match the selected filters.",
            table.len()
        ));

        let headers = table.headers();
        let pages = pager::stream(self.page_size, table.rows(), &mut *self.prompter, |page| {
            reports::print_page(headers, page)
        });
        for step in pages {
            match step? {
                SelectionOutcome::Selected(ContinuationFlag::Proceed) => {}
                SelectionOutcome::Selected(ContinuationFlag::End) => break,
                SelectionOutcome::Cancelled => return Ok(SelectionOutcome::Cancelled),
            }
        }

        if table.is_empty() {
            output::warning("No trips match the selected filters; skipping statistics.");
            return Ok(SelectionOutcome::Selected(()));
        }

        for kind in ReportKind::ORDER {
            if self.pause_between_reports {
                let prompt = format!("Press Enter to see some statistics about {}", kind.subject());
                if !matches!(self.prompter.read_line(&prompt)?, PromptInput::Line(_)) {
                    return Ok(SelectionOutcome::Cancelled);
                }
            }
            reports::print_report(kind, table)?;
        }
        Ok(SelectionOutcome::Selected(()))
    }

    /// Only "yes"/"y" restart; any other answer ends the program.
    fn ask_restart(&mut self) -> Result<SessionEnd, CliError> {
        Ok(match self.prompter.read_line(RESTART_PROMPT)? {
            PromptInput::Line(answer) => match parse_yes_no(&answer) {
                Some(ContinuationFlag::Proceed) => SessionEnd::Restart,
                _ => SessionEnd::Finished,
            },
            PromptInput::Interrupted | PromptInput::Closed => SessionEnd::Cancelled,
        })
    }
}
