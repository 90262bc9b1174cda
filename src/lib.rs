#![doc(test(attr(deny(warnings))))]

//! Bikeshare Explorer loads city trip logs, narrows them by month and
//! weekday through an interactive dialogue, pages through the raw rows and
//! prints descriptive statistics about riding times, stations, durations and
//! riders.

pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod errors;
pub mod stats;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Bikeshare Explorer tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
