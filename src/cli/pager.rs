//! Lazily reveals rows one page per confirmation.
//!
//! [`PageStream`] yields one [`ContinuationFlag`] per offered page. A page is
//! displayed only after the user says yes; the stream ends after a "no", an
//! interrupt, or once every row has been shown. Consumers pull one element
//! per loop iteration and stop on [`ContinuationFlag::End`].

use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::ops::Range;

use crate::cli::dialogue::ask_yes_no;
use crate::cli::io::Prompter;
use crate::cli::selectors::SelectionOutcome;
use crate::domain::ContinuationFlag;
use crate::errors::CliError;

pub const FIRST_PAGE_REQUEST: &str = "see some lines of the data";
pub const NEXT_PAGE_REQUEST: &str = "see more";

/// Window position over a collection, advanced by `size` per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    start: usize,
    size: NonZeroUsize,
}

impl PageCursor {
    pub fn new(size: NonZeroUsize) -> Self {
        Self { start: 0, size }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Active window `[start, min(start + size, len))`.
    pub fn window(&self, len: usize) -> Range<usize> {
        let end = self.start.saturating_add(self.size.get()).min(len);
        self.start.min(end)..end
    }

    pub fn advance(&mut self) {
        self.start = self.start.saturating_add(self.size.get());
    }
}

/// A page handed to the display callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'r, R> {
    /// Index of the first row of the page within the whole collection.
    pub start: usize,
    pub rows: &'r [R],
}

/// Iterator over page decisions. See the module docs for the contract.
pub struct PageStream<'a, 'r, R, P: ?Sized, F> {
    rows: &'r [R],
    cursor: PageCursor,
    offered: usize,
    finished: bool,
    prompter: &'a mut P,
    show: F,
}

/// Starts paging `rows` in windows of `size`, asking through `prompter` and
/// displaying accepted pages through `show`.
pub fn stream<'a, 'r, R, P, F>(
    size: NonZeroUsize,
    rows: &'r [R],
    prompter: &'a mut P,
    show: F,
) -> PageStream<'a, 'r, R, P, F>
where
    P: Prompter + ?Sized,
    F: FnMut(Page<'r, R>),
{
    PageStream {
        rows,
        cursor: PageCursor::new(size),
        offered: 0,
        finished: false,
        prompter,
        show,
    }
}

impl<R, P: ?Sized, F> PageStream<'_, '_, R, P, F> {
    /// Pages offered so far, accepted or not.
    pub fn offered(&self) -> usize {
        self.offered
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }
}

impl<'a, 'r, R, P, F> Iterator for PageStream<'a, 'r, R, P, F>
where
    P: Prompter + ?Sized,
    F: FnMut(Page<'r, R>),
{
    type Item = Result<SelectionOutcome<ContinuationFlag>, CliError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        // The first offer is unconditional, so an empty collection still
        // gets exactly one (empty) page. Later offers need at least one
        // unseen row: `>=` rather than `>` keeps an exact multiple of the
        // page size from ending on an empty offer.
        if self.offered > 0 && self.cursor.start() >= self.rows.len() {
            self.finished = true;
            return None;
        }

        let request = if self.offered == 0 {
            FIRST_PAGE_REQUEST
        } else {
            NEXT_PAGE_REQUEST
        };
        self.offered += 1;

        let answer = match ask_yes_no(&mut *self.prompter, request) {
            Ok(answer) => answer,
            Err(err) => {
                self.finished = true;
                return Some(Err(err));
            }
        };

        match answer {
            SelectionOutcome::Selected(ContinuationFlag::Proceed) => {
                let window = self.cursor.window(self.rows.len());
                let rows: &'r [R] = self.rows;
                (self.show)(Page {
                    start: window.start,
                    rows: &rows[window],
                });
                self.cursor.advance();
            }
            SelectionOutcome::Selected(ContinuationFlag::End) | SelectionOutcome::Cancelled => {
                self.finished = true;
            }
        }
        Some(Ok(answer))
    }
}

impl<'a, 'r, R, P, F> FusedIterator for PageStream<'a, 'r, R, P, F>
where
    P: Prompter + ?Sized,
    F: FnMut(Page<'r, R>),
{
}
